use crate::image::{self, DefaultImage};
use crate::models::message::Message;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant for the Tools in Data Science course at IIT Madras. Answer accurately and briefly, and include links if available.";

pub const DEFAULT_QUESTION: &str = "What is the value of e?";

/// Builds the fixed system + user message pair sent upstream.
#[derive(Debug, Clone)]
pub struct MessageAssembler {
    system_prompt: String,
    default_question: String,
    default_image: DefaultImage,
}

impl MessageAssembler {
    pub fn new(default_image: DefaultImage) -> Self {
        Self {
            system_prompt: SYSTEM_PROMPT.to_string(),
            default_question: DEFAULT_QUESTION.to_string(),
            default_image,
        }
    }

    pub fn with_default_question<S: Into<String>>(mut self, question: S) -> Self {
        self.default_question = question.into();
        self
    }

    pub fn default_question(&self) -> &str {
        &self.default_question
    }

    /// Returns exactly two messages: the system prompt, then a user message holding
    /// one text part and one image part. A missing question falls back to the default;
    /// an image that is missing, empty or not base64 falls back to the default image.
    pub fn prepare(&self, question: Option<&str>, image_data: Option<&str>) -> Vec<Message> {
        let question = question.unwrap_or(self.default_question.as_str());
        let payload = match image_data.map(image::payload_of) {
            Some(payload) if image::is_base64(payload) => payload,
            Some(_) => {
                tracing::debug!("supplied image is not base64, using the default image");
                self.default_image.payload()
            }
            None => self.default_image.payload(),
        };

        vec![
            Message::system(self.system_prompt.as_str()),
            Message::user()
                .with_text(question)
                .with_image_url(image::data_uri(payload)),
        ]
    }
}
