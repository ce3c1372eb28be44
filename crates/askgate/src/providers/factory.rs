use super::{
    aiproxy::AiProxyProvider, base::Provider, configs::ProviderConfig,
    openrouter::OpenRouterProvider,
};
use crate::errors::ProviderResult;
use std::sync::Arc;

pub fn get_provider(config: ProviderConfig) -> ProviderResult<Arc<dyn Provider>> {
    match config {
        ProviderConfig::OpenRouter(openrouter_config) => {
            Ok(Arc::new(OpenRouterProvider::new(openrouter_config)?))
        }
        ProviderConfig::AiProxy(aiproxy_config) => {
            Ok(Arc::new(AiProxyProvider::new(aiproxy_config)?))
        }
    }
}
