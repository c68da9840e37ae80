use std::sync::Arc;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use reqwest::Proxy;

use super::{ChatMessage, ChatProvider, ChatRequest, ProviderFactory, Role};
use crate::config::ClientSettings;
use crate::{Error, Result};

/// OpenAI-compatible chat-completion provider
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_key: &str, settings: &ClientSettings) -> Result<Self> {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(&settings.base_url);
        let http_client = Self::build_http_client(settings)?;
        let client = Client::with_config(config).with_http_client(http_client);

        Ok(Self {
            client,
            model: settings.model.clone(),
        })
    }

    /// Build HTTP client with optional timeout and proxy
    fn build_http_client(settings: &ClientSettings) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(ref proxy) = settings.proxy_url {
            let proxy = Proxy::all(proxy)
                .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
            tracing::info!("Using HTTP proxy for model requests");
        }

        builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))
    }

    fn to_request_message(message: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
        let built: std::result::Result<ChatCompletionRequestMessage, OpenAIError> = match message.role {
            Role::System => ChatCompletionRequestSystemMessageArgs::default()
                .content(message.content.as_str())
                .build()
                .map(Into::into),
            Role::User => ChatCompletionRequestUserMessageArgs::default()
                .content(message.content.as_str())
                .build()
                .map(Into::into),
        };

        built.map_err(map_openai_error)
    }
}

fn map_openai_error(err: OpenAIError) -> Error {
    match err {
        OpenAIError::Reqwest(e) => Error::Transport(e.to_string()),
        OpenAIError::InvalidArgument(msg) => Error::InvalidInput(msg),
        other => Error::AiProvider(other.to_string()),
    }
}

#[async_trait::async_trait]
impl ChatProvider for OpenAiProvider {
    async fn chat(&self, request: ChatRequest) -> Result<Option<String>> {
        let messages = request
            .messages
            .iter()
            .map(Self::to_request_message)
            .collect::<Result<Vec<_>>>()?;

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(&self.model).messages(messages);
        if request.json_output {
            args.response_format(ResponseFormat::JsonObject);
        }
        let request = args.build().map_err(map_openai_error)?;

        tracing::debug!(model = %self.model, "Sending chat completion request");

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(map_openai_error)?;

        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content))
    }
}

/// Factory producing [`OpenAiProvider`] handles
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAiFactory;

impl ProviderFactory for OpenAiFactory {
    fn connect(&self, api_key: &str, settings: &ClientSettings) -> Result<Arc<dyn ChatProvider>> {
        Ok(Arc::new(OpenAiProvider::new(api_key, settings)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_with_defaults() {
        let settings = ClientSettings::default();
        assert!(OpenAiFactory.connect("sk-test", &settings).is_ok());
    }

    #[test]
    fn test_invalid_proxy_is_config_error() {
        let settings = ClientSettings {
            proxy_url: Some("http://exa mple.com".to_string()),
            ..ClientSettings::default()
        };

        let err = OpenAiProvider::new("sk-test", &settings).err().unwrap();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_message_conversion_keeps_role() {
        let system = OpenAiProvider::to_request_message(&ChatMessage::system("be brief")).unwrap();
        let user = OpenAiProvider::to_request_message(&ChatMessage::user("hello")).unwrap();

        assert!(matches!(system, ChatCompletionRequestMessage::System(_)));
        assert!(matches!(user, ChatCompletionRequestMessage::User(_)));
    }
}
