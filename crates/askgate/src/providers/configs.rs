use std::time::Duration;

pub const OPENROUTER_HOST: &str = "https://openrouter.ai";
pub const OPENROUTER_MODEL: &str = "mistralai/mistral-small-3.1-24b-instruct:free";
pub const AIPROXY_HOST: &str = "https://aiproxy.sanand.workers.dev";
pub const AIPROXY_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

// Unified enum to wrap different provider configurations
#[derive(Debug, Clone)]
pub enum ProviderConfig {
    OpenRouter(OpenRouterProviderConfig),
    AiProxy(AiProxyProviderConfig),
}

#[derive(Debug, Clone)]
pub struct OpenRouterProviderConfig {
    pub host: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl OpenRouterProviderConfig {
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            host: OPENROUTER_HOST.to_string(),
            api_key: api_key.into(),
            model: OPENROUTER_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiProxyProviderConfig {
    pub host: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl AiProxyProviderConfig {
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            host: AIPROXY_HOST.to_string(),
            api_key: api_key.into(),
            model: AIPROXY_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
