use std::sync::Arc;

use precis_core::{PdfBackend, Summarizer, SummaryStore};

/// Shared application state accessible from all handlers.
///
/// The store and the two external collaborators are injected here rather
/// than held as module globals, so tests can substitute stubs.
pub struct AppState {
    pub store: SummaryStore,
    pub summarizer: Arc<dyn Summarizer>,
    pub extractor: Arc<dyn PdfBackend>,
}
