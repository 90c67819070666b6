pub mod config;
pub mod extract;
pub mod store;
pub mod summarize;

// Re-export for convenience
pub use config::Config;
pub use extract::{ExtractionError, PdfBackend};
pub use store::{StoreError, SummaryRecord, SummaryStore};
pub use summarize::{HfSummarizer, SummarizeError, Summarizer};
