use crate::state::AppState;
use askgate::{
    assembler::MessageAssembler,
    errors::{ProviderError, ProviderResult},
    image::DefaultImage,
    models::message::Message,
    providers::base::Provider,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

pub const TEST_IMAGE_PAYLOAD: &str = "ZGVmYXVsdC1pbWFnZQ==";

/// A provider that records every call and answers with a fixed body
pub struct RecordingProvider {
    reply: Option<Value>,
    calls: Mutex<Vec<Vec<Message>>>,
}

impl RecordingProvider {
    pub fn replying(reply: Value) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// A provider whose upstream body never parses
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for RecordingProvider {
    fn name(&self) -> &str {
        "recording"
    }

    async fn complete(&self, messages: &[Message]) -> ProviderResult<Value> {
        self.calls.lock().unwrap().push(messages.to_vec());
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(ProviderError::InvalidResponse(
                serde_json::from_str::<Value>("<html>").unwrap_err(),
            )),
        }
    }
}

pub fn test_assembler() -> MessageAssembler {
    MessageAssembler::new(DefaultImage::from_payload(TEST_IMAGE_PAYLOAD))
}

/// State where both endpoints share the same provider
pub fn test_state(provider: Arc<RecordingProvider>) -> AppState {
    AppState::new(test_assembler(), provider.clone(), provider)
}
