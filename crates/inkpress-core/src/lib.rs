pub mod ai;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod publish;
pub mod retry;

pub use ai::{SummarizeOptions, Summarizer, Summary};
pub use config::{AppConfig, ClientSettings, ConfigStore, FileConfigStore, MemoryConfigStore};
pub use error::{Error, Result};
pub use pipeline::{ContentPipeline, PipelineOutput};
pub use publish::{Article, ContentPublisher, PublishOptions, PublishResult, PublishStatus};
pub use retry::{RetryMode, RetryPolicy};
