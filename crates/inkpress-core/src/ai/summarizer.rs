use std::sync::Arc;

use tokio::sync::RwLock;

use super::prompts;
use super::providers::{ChatMessage, ChatProvider, ChatRequest, OpenAiFactory, ProviderFactory};
use super::summary::{SummarizeOptions, Summary};
use crate::config::{ClientSettings, ConfigStore, API_KEY};
use crate::{Error, Result};

/// Client that expands, titles and scores content with a remote model.
///
/// Built through [`Summarizer::connect`] or [`Summarizer::with_factory`],
/// which only return once configuration has been validated and the model
/// handle exists.
pub struct Summarizer {
    store: Arc<dyn ConfigStore>,
    settings: ClientSettings,
    factory: Arc<dyn ProviderFactory>,
    provider: RwLock<Arc<dyn ChatProvider>>,
}

impl Summarizer {
    /// Create a summarizer talking to an OpenAI-compatible endpoint
    pub async fn connect(store: Arc<dyn ConfigStore>, settings: ClientSettings) -> Result<Self> {
        Self::with_factory(store, settings, Arc::new(OpenAiFactory)).await
    }

    /// Create a summarizer whose model handles come from `factory`
    pub async fn with_factory(
        store: Arc<dyn ConfigStore>,
        settings: ClientSettings,
        factory: Arc<dyn ProviderFactory>,
    ) -> Result<Self> {
        let api_key = read_api_key(store.as_ref()).await?;
        let provider = factory.connect(&api_key, &settings)?;

        tracing::debug!(model = %settings.model, base_url = %settings.base_url, "Summarizer ready");

        Ok(Self {
            store,
            settings,
            factory,
            provider: RwLock::new(provider),
        })
    }

    /// Check that an API key is configured
    pub async fn validate_config(&self) -> Result<()> {
        read_api_key(self.store.as_ref()).await.map(|_| ())
    }

    /// Re-read the API key and rebuild the model handle.
    ///
    /// On failure the current handle stays in place. Calls already in
    /// flight keep the handle they started with.
    pub async fn refresh(&self) -> Result<()> {
        let api_key = read_api_key(self.store.as_ref()).await?;
        let provider = self.factory.connect(&api_key, &self.settings)?;
        *self.provider.write().await = provider;

        tracing::info!("Summarizer configuration refreshed");
        Ok(())
    }

    /// Expand `content` into a titled, keyworded and scored [`Summary`]
    pub async fn summarize(&self, content: &str, options: &SummarizeOptions) -> Result<Summary> {
        ensure_content(content)?;

        let request = ChatRequest {
            messages: vec![
                ChatMessage::system(prompts::SUMMARY_SYSTEM_PROMPT),
                ChatMessage::user(prompts::summary_user_prompt(content, options)),
            ],
            json_output: true,
        };

        let provider = self.current_provider().await;
        let summary = self
            .settings
            .retry
            .run(|| {
                let provider = Arc::clone(&provider);
                let request = request.clone();
                async move {
                    let text = non_empty_reply(provider.chat(request).await?)?;
                    Summary::parse(&text)
                }
            })
            .await?;

        tracing::debug!(title = %summary.title, score = summary.score, "Content summarized");
        Ok(summary)
    }

    /// Ask the model for one short title for `content`; the reply is returned verbatim
    pub async fn generate_title(&self, content: &str, options: &SummarizeOptions) -> Result<String> {
        ensure_content(content)?;

        let request = ChatRequest {
            messages: vec![
                ChatMessage::system(prompts::TITLE_SYSTEM_PROMPT),
                ChatMessage::user(prompts::title_user_prompt(content, options)),
            ],
            json_output: false,
        };

        let provider = self.current_provider().await;
        self.settings
            .retry
            .run(|| {
                let provider = Arc::clone(&provider);
                let request = request.clone();
                async move { non_empty_reply(provider.chat(request).await?) }
            })
            .await
    }

    async fn current_provider(&self) -> Arc<dyn ChatProvider> {
        Arc::clone(&*self.provider.read().await)
    }
}

async fn read_api_key(store: &dyn ConfigStore) -> Result<String> {
    match store.get(API_KEY).await? {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(Error::Config("API key is required".to_string())),
    }
}

fn ensure_content(content: &str) -> Result<()> {
    if content.is_empty() {
        return Err(Error::InvalidInput("content must not be empty".to_string()));
    }
    Ok(())
}

fn non_empty_reply(reply: Option<String>) -> Result<String> {
    match reply {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(Error::EmptyResponse),
    }
}
