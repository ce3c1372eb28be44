use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ProviderResult;
use crate::models::message::Message;

/// Base trait for upstream chat-completion providers
#[async_trait]
pub trait Provider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Send the assembled messages upstream and return the JSON body to relay
    async fn complete(&self, messages: &[Message]) -> ProviderResult<Value>;
}
