mod openai;

pub use openai::{OpenAiFactory, OpenAiProvider};

use std::sync::Arc;

use crate::config::ClientSettings;
use crate::Result;

/// Role of a prompt message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A single chat-completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    /// Ask the model for a JSON object instead of free text
    pub json_output: bool,
}

/// Handle to a remote chat-completion model
#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send the request and return the text of the first choice, if any
    async fn chat(&self, request: ChatRequest) -> Result<Option<String>>;
}

/// Builds a [`ChatProvider`] for a given API key
pub trait ProviderFactory: Send + Sync {
    fn connect(&self, api_key: &str, settings: &ClientSettings) -> Result<Arc<dyn ChatProvider>>;
}
