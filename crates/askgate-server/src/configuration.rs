use crate::error::ConfigError;
use askgate::{
    assembler::DEFAULT_QUESTION,
    providers::configs::{
        AiProxyProviderConfig, OpenRouterProviderConfig, ProviderConfig, AIPROXY_HOST,
        AIPROXY_MODEL, DEFAULT_TIMEOUT_SECS, OPENROUTER_HOST, OPENROUTER_MODEL,
    },
};
use config::{Config, Environment};
use serde::Deserialize;
use std::{net::SocketAddr, path::PathBuf, time::Duration};

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ConfigError::InvalidAddress { addr })
    }
}

#[derive(Debug, Deserialize)]
pub struct AssetSettings {
    pub image_path: PathBuf,
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamSettings {
    pub host: String,
    pub model: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl UpstreamSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub assets: AssetSettings,
    pub openrouter: UpstreamSettings,
    pub aiproxy: UpstreamSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_and_validate()
    }

    fn load_and_validate() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Server defaults
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            // Fallbacks for requests that omit the question or image
            .set_default("assets.image_path", default_image_path())?
            .set_default("assets.question", DEFAULT_QUESTION)?
            // Provider defaults
            .set_default("openrouter.host", OPENROUTER_HOST)?
            .set_default("openrouter.model", OPENROUTER_MODEL)?
            .set_default("openrouter.api_key", "")?
            .set_default("openrouter.timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("aiproxy.host", AIPROXY_HOST)?
            .set_default("aiproxy.model", AIPROXY_MODEL)?
            .set_default("aiproxy.api_key", "")?
            .set_default("aiproxy.timeout_secs", DEFAULT_TIMEOUT_SECS)?
            // Layer on the environment variables
            .add_source(
                Environment::with_prefix("ASKGATE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Credentials keep their conventional names
            .set_override_option("openrouter.api_key", std::env::var("OPENROUTER_API_KEY").ok())?
            .set_override_option("aiproxy.api_key", std::env::var("AIPROXY_TOKEN").ok())?
            .build()?;

        config.try_deserialize().map_err(|err| {
            tracing::debug!("Configuration error: {:?}", &err);
            ConfigError::Other(err)
        })
    }

    pub fn openrouter_config(&self) -> ProviderConfig {
        ProviderConfig::OpenRouter(OpenRouterProviderConfig {
            host: self.openrouter.host.clone(),
            api_key: self.openrouter.api_key.clone(),
            model: self.openrouter.model.clone(),
            timeout: self.openrouter.timeout(),
        })
    }

    pub fn aiproxy_config(&self) -> ProviderConfig {
        ProviderConfig::AiProxy(AiProxyProviderConfig {
            host: self.aiproxy.host.clone(),
            api_key: self.aiproxy.api_key.clone(),
            model: self.aiproxy.model.clone(),
            timeout: self.aiproxy.timeout(),
        })
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_image_path() -> String {
    "image2.jpg".to_string()
}
