//! Function-call schemas sent with every upstream request.
//!
//! Each provider gets one fixed tool and is told to always call it, so the
//! answer comes back as structured arguments rather than free text.
use crate::models::tool::{Tool, ToolSpec};
use lazy_static::lazy_static;
use serde_json::json;

lazy_static! {
    /// Tool used with the primary provider: an answer plus supporting links.
    pub static ref ANSWER_USER_QUESTION: Tool = Tool::new(
        "answer_user_question",
        "Answer the user's question",
        json!({
            "type": "object",
            "properties": {
                "answer": {
                    "type": "string",
                    "description": "Answer to the user's question based on tools in data science course"
                },
                "links": {
                    "type": "array",
                    "items": {
                        "type": "string",
                        "description": "Links to relevant resources or information"
                    },
                    "description": "Links to relevant resources or information"
                }
            },
            "required": ["answer", "links"]
        }),
    );

    /// Tool used with the secondary provider.
    pub static ref PRODUCT_INFO: Tool = Tool::new(
        "product_info",
        "Generates product manufacturing date, expiry date and answers user's question",
        json!({
            "type": "object",
            "required": ["mfd", "expiry_date", "user_question", "name"],
            "properties": {
                "mfd": {
                    "type": "string",
                    "description": "Manufacturing date of the product in YYYY format"
                },
                "expiry_date": {
                    "type": "string",
                    "description": "Expiry date of the product in YYYY format"
                },
                "user_question": {
                    "type": "string",
                    "description": "The user's question regarding tools in data science course"
                },
                "name": {
                    "type": "string",
                    "description": "Name of the product"
                }
            },
            "additionalProperties": false
        }),
    )
    .strict();
}

pub fn answer_user_question_specs() -> Vec<ToolSpec> {
    vec![ANSWER_USER_QUESTION.clone().into()]
}

pub fn product_info_specs() -> Vec<ToolSpec> {
    vec![PRODUCT_INFO.clone().into()]
}
