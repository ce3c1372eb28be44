use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::base::Provider;
use super::configs::AiProxyProviderConfig;
use super::utils::{build_client, endpoint, post, read_text, ChatCompletionRequest};
use crate::errors::ProviderResult;
use crate::models::message::Message;
use crate::tools::product_info_specs;

pub const AIPROXY_PATH: &str = "/openai/v1/chat/completions";

/// Secondary provider. The upstream body is relayed whatever the status code,
/// unlike [`super::openrouter::OpenRouterProvider`].
pub struct AiProxyProvider {
    client: Client,
    config: AiProxyProviderConfig,
}

impl AiProxyProvider {
    pub fn new(config: AiProxyProviderConfig) -> ProviderResult<Self> {
        let client = build_client(config.timeout)?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl Provider for AiProxyProvider {
    fn name(&self) -> &str {
        "aiproxy"
    }

    async fn complete(&self, messages: &[Message]) -> ProviderResult<Value> {
        let url = endpoint(&self.config.host, AIPROXY_PATH);
        let request = ChatCompletionRequest::new(&self.config.model, messages, product_info_specs());

        let response = post(&self.client, &url, &self.config.api_key, &request).await?;
        let status = response.status();
        let body = read_text(&url, response).await?;
        tracing::debug!(status = %status, "aiproxy responded");

        Ok(serde_json::from_str(&body)?)
    }
}
