//! Scripted model fakes shared by unit tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::providers::{ChatProvider, ChatRequest, ProviderFactory};
use super::Summarizer;
use crate::config::{ClientSettings, MemoryConfigStore, API_KEY};
use crate::{Error, Result};

pub const VALID_REPLY: &str = r#"{"title":"新品发布","content":"公司今天正式发布了新产品。","keywords":["新品","发布","科技"],"score":72.5}"#;

/// Provider that replays canned replies and records what it was sent
#[derive(Default)]
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<Option<String>>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Result<Option<String>>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn always(reply: &str) -> Arc<Self> {
        Self::new((0..10).map(|_| Ok(Some(reply.to_string()))).collect())
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> ChatRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait::async_trait]
impl ChatProvider for ScriptedProvider {
    async fn chat(&self, request: ChatRequest) -> Result<Option<String>> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Transport("script exhausted".into())))
    }
}

/// Hands out queued providers and remembers the keys it was given
#[derive(Default)]
pub struct ScriptedFactory {
    providers: Mutex<VecDeque<Arc<ScriptedProvider>>>,
    pub keys: Mutex<Vec<String>>,
}

impl ScriptedFactory {
    pub fn with(providers: Vec<Arc<ScriptedProvider>>) -> Arc<Self> {
        Arc::new(Self {
            providers: Mutex::new(providers.into()),
            keys: Mutex::new(Vec::new()),
        })
    }
}

impl ProviderFactory for ScriptedFactory {
    fn connect(&self, api_key: &str, _settings: &ClientSettings) -> Result<Arc<dyn ChatProvider>> {
        self.keys.lock().unwrap().push(api_key.to_string());
        let provider = self
            .providers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default();
        Ok(provider)
    }
}

pub async fn store_with_key(key: &str) -> Arc<MemoryConfigStore> {
    let store = Arc::new(MemoryConfigStore::new());
    store.set(API_KEY, key).await;
    store
}

pub async fn summarizer_with(provider: Arc<ScriptedProvider>) -> Summarizer {
    let store = store_with_key("sk-test").await;
    Summarizer::with_factory(store, ClientSettings::default(), ScriptedFactory::with(vec![provider]))
        .await
        .unwrap()
}
