use super::content::ContentPart;
use super::role::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// Message content is either a bare string or a list of parts
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A message sent to an LLM
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

impl Message {
    /// Create a system message with plain text content
    pub fn system<S: Into<String>>(text: S) -> Self {
        Message {
            role: Role::System,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Create a new user message with no parts yet
    pub fn user() -> Self {
        Message {
            role: Role::User,
            content: MessageContent::Parts(Vec::new()),
        }
    }

    /// Add a part to the message, converting bare text content into a part first
    pub fn with_part(mut self, part: ContentPart) -> Self {
        match &mut self.content {
            MessageContent::Parts(parts) => parts.push(part),
            MessageContent::Text(text) => {
                let existing = ContentPart::text(std::mem::take(text));
                self.content = MessageContent::Parts(vec![existing, part]);
            }
        }
        self
    }

    /// Add a text part to the message
    pub fn with_text<S: Into<String>>(self, text: S) -> Self {
        self.with_part(ContentPart::text(text))
    }

    /// Add an image part to the message
    pub fn with_image_url<S: Into<String>>(self, url: S) -> Self {
        self.with_part(ContentPart::image_url(url))
    }

    pub fn parts(&self) -> &[ContentPart] {
        match &self.content {
            MessageContent::Parts(parts) => parts,
            MessageContent::Text(_) => &[],
        }
    }

    /// Concatenated text of the message, whichever form the content takes
    pub fn text(&self) -> String {
        match &self.content {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Parts(parts) => parts
                .iter()
                .filter_map(|part| part.as_text())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
