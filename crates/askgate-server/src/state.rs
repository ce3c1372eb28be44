use crate::configuration::Settings;
use crate::error::StartupError;
use askgate::{
    assembler::MessageAssembler,
    image::DefaultImage,
    providers::{base::Provider, factory},
};
use std::sync::Arc;

/// Shared application state, built once at startup and never mutated
#[derive(Clone)]
pub struct AppState {
    pub assembler: Arc<MessageAssembler>,
    /// Serves `POST /ask`
    pub primary: Arc<dyn Provider>,
    /// Serves `POST /gpt-ask`
    pub secondary: Arc<dyn Provider>,
}

impl AppState {
    pub fn new(
        assembler: MessageAssembler,
        primary: Arc<dyn Provider>,
        secondary: Arc<dyn Provider>,
    ) -> Self {
        Self {
            assembler: Arc::new(assembler),
            primary,
            secondary,
        }
    }

    /// Loads the default image and creates both providers. A missing image is fatal.
    pub fn from_settings(settings: &Settings) -> Result<Self, StartupError> {
        let image = DefaultImage::load(&settings.assets.image_path)?;
        let assembler =
            MessageAssembler::new(image).with_default_question(settings.assets.question.as_str());

        let primary = factory::get_provider(settings.openrouter_config())?;
        let secondary = factory::get_provider(settings.aiproxy_config())?;

        Ok(Self::new(assembler, primary, secondary))
    }
}
