mod prompts;
pub mod providers;
mod summarizer;
mod summary;
#[cfg(test)]
pub(crate) mod testing;

pub use summarizer::Summarizer;
pub use summary::{SummarizeOptions, Summary};
