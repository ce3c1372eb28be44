use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::{ProviderError, ProviderResult};
use crate::models::message::Message;
use crate::models::tool::ToolSpec;

/// Body of a non-streaming chat-completions request that forces a tool call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub tools: Vec<ToolSpec>,
    pub tool_choice: String,
    pub stream: bool,
}

impl ChatCompletionRequest {
    pub fn new<S: Into<String>>(model: S, messages: &[Message], tools: Vec<ToolSpec>) -> Self {
        Self {
            model: model.into(),
            messages: messages.to_vec(),
            tools,
            tool_choice: "required".to_string(),
            stream: false,
        }
    }
}

pub fn build_client(timeout: Duration) -> ProviderResult<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(ProviderError::Client)
}

/// Join a configured host with an api path, tolerating a trailing slash on the host
pub fn endpoint(host: &str, path: &str) -> String {
    format!("{}{}", host.trim_end_matches('/'), path)
}

/// POST the request with bearer auth. The caller decides what to do with the status.
pub async fn post(
    client: &Client,
    url: &str,
    api_key: &str,
    request: &ChatCompletionRequest,
) -> ProviderResult<Response> {
    client
        .post(url)
        .header("Authorization", format!("Bearer {}", api_key))
        .json(request)
        .send()
        .await
        .map_err(|source| ProviderError::Request {
            url: url.to_string(),
            source,
        })
}

pub async fn read_text(url: &str, response: Response) -> ProviderResult<String> {
    response
        .text()
        .await
        .map_err(|source| ProviderError::Request {
            url: url.to_string(),
            source,
        })
}
