use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use precis_core::{Config, HfSummarizer, SummaryStore};
use precis_pdf_mupdf::MupdfBackend;
use precis_web::{AppState, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("precis_web=info,precis_core=info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(?config, "starting");

    if config.api_key.is_none() {
        tracing::warn!("PRECIS_API_KEY not set; summarization requests will be unauthenticated");
    }

    let store = SummaryStore::open(&config.db_path)?;
    let summarizer = HfSummarizer::new(config.api_url.clone(), config.api_key.clone());

    let state = Arc::new(AppState {
        store,
        summarizer: Arc::new(summarizer),
        extractor: Arc::new(MupdfBackend::new()),
    });

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
