use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use super::base::Provider;
use super::configs::OpenRouterProviderConfig;
use super::utils::{build_client, endpoint, post, read_text, ChatCompletionRequest};
use crate::errors::ProviderResult;
use crate::models::message::Message;
use crate::tools::answer_user_question_specs;

pub const OPENROUTER_PATH: &str = "/api/v1/chat/completions";
pub const UPSTREAM_FAILURE: &str = "Failed to get a response from the model";

/// Primary provider. A non-200 upstream status is turned into an
/// `{"error", "details"}` body instead of an error.
pub struct OpenRouterProvider {
    client: Client,
    config: OpenRouterProviderConfig,
}

impl OpenRouterProvider {
    pub fn new(config: OpenRouterProviderConfig) -> ProviderResult<Self> {
        let client = build_client(config.timeout)?;
        Ok(Self { client, config })
    }

    fn url(&self) -> String {
        endpoint(&self.config.host, OPENROUTER_PATH)
    }
}

#[async_trait]
impl Provider for OpenRouterProvider {
    fn name(&self) -> &str {
        "openrouter"
    }

    async fn complete(&self, messages: &[Message]) -> ProviderResult<Value> {
        let url = self.url();
        let request =
            ChatCompletionRequest::new(&self.config.model, messages, answer_user_question_specs());

        let response = post(&self.client, &url, &self.config.api_key, &request).await?;
        let status = response.status();
        let body = read_text(&url, response).await?;

        if status != StatusCode::OK {
            tracing::warn!(status = %status, body = %body, "openrouter request failed");
            return Ok(json!({
                "error": UPSTREAM_FAILURE,
                "details": body,
            }));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
