use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A function the model is asked to call instead of answering in free text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    /// The name of the tool
    pub name: String,
    /// A description of what the tool does
    pub description: String,
    /// Ask the provider to enforce the schema exactly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    /// JSON schema of the arguments the tool accepts
    pub parameters: Value,
}

impl Tool {
    /// Create a new tool with the given name and description
    pub fn new<N, D>(name: N, description: D, parameters: Value) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        Tool {
            name: name.into(),
            description: description.into(),
            strict: None,
            parameters,
        }
    }

    pub fn strict(mut self) -> Self {
        self.strict = Some(true);
        self
    }
}

/// The `{"type": "function", "function": {...}}` envelope providers expect
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: Tool,
}

impl From<Tool> for ToolSpec {
    fn from(function: Tool) -> Self {
        ToolSpec {
            kind: "function".to_string(),
            function,
        }
    }
}
