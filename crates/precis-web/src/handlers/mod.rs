pub mod index;
pub mod summaries;
pub mod upload;
