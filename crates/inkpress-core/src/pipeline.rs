use std::sync::Arc;

use chrono::Utc;

use crate::ai::{SummarizeOptions, Summarizer};
use crate::publish::{Article, ContentPublisher, PublishOptions, PublishResult, PublishStatus};
use crate::Result;

/// Result of running raw text through the pipeline
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub article: Article,
    /// One entry per registered publisher, in registration order
    pub results: Vec<PublishResult>,
}

/// Summarize raw text, then hand the article to every registered publisher
pub struct ContentPipeline {
    summarizer: Arc<Summarizer>,
    publishers: Vec<Arc<dyn ContentPublisher>>,
}

impl ContentPipeline {
    pub fn new(summarizer: Arc<Summarizer>) -> Self {
        Self {
            summarizer,
            publishers: Vec::new(),
        }
    }

    pub fn with_publisher(mut self, publisher: Arc<dyn ContentPublisher>) -> Self {
        self.publishers.push(publisher);
        self
    }

    /// Run the pipeline.
    ///
    /// A summarization error aborts before any publisher is called. A failing
    /// publisher yields a `Failed` result for its platform and the remaining
    /// publishers still run.
    pub async fn process(
        &self,
        raw: &str,
        options: &SummarizeOptions,
        publish_options: &PublishOptions,
    ) -> Result<PipelineOutput> {
        let summary = self.summarizer.summarize(raw, options).await?;
        let article = Article::from_summary(summary);

        let mut results = Vec::with_capacity(self.publishers.len());
        for publisher in &self.publishers {
            let platform = publisher.platform().to_string();
            let outcome = match publisher.validate_config() {
                Ok(()) => publisher.publish(&article, publish_options).await,
                Err(e) => Err(e),
            };

            match outcome {
                Ok(result) => {
                    tracing::info!(platform = %platform, status = ?result.status, "Article handed off");
                    results.push(result);
                }
                Err(e) => {
                    tracing::warn!(platform = %platform, error = %e, "Publishing failed");
                    results.push(PublishResult {
                        publish_id: String::new(),
                        url: None,
                        status: PublishStatus::Failed,
                        published_at: Utc::now(),
                        platform,
                    });
                }
            }
        }

        Ok(PipelineOutput { article, results })
    }
}
