//! Gemini generateContent wire types
//!
//! Only the request side is modeled. Responses are forwarded to the caller
//! verbatim and never deserialized into a typed structure.

use serde::{Deserialize, Serialize};

/// Body of a `models/{model}:generateContent` request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

/// One turn of content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// A text part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    /// Single-turn request holding one text part
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }

    /// Total characters of text carried by the request
    pub fn text_len(&self) -> usize {
        self.contents
            .iter()
            .flat_map(|content| content.parts.iter())
            .map(|part| part.text.chars().count())
            .sum()
    }
}
