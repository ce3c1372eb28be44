//! These models represent the objects sent from the gateway to an upstream provider.
//!
//! They follow the OpenAI chat-completions wire format, which both the primary
//! and the secondary provider accept. Only the parts of that format the gateway
//! actually produces are modelled here.
pub mod content;
pub mod message;
pub mod role;
pub mod tool;
