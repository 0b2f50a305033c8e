//! Proxy module
//!
//! Handles request forwarding to the upstream generative-text API.

pub mod gemini;
pub mod headers;
pub mod logging;
pub mod provider;
pub mod types;

pub use gemini::GeminiClient;
pub use provider::{GenerativeApi, UpstreamReply};
pub use types::GenerateContentRequest;
