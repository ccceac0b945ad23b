use serde::{Deserialize, Serialize};

/// Body accepted by `POST /chat`.
#[derive(Debug, Deserialize, Serialize)]
pub struct ChatReq {
    #[serde(default)]
    pub message: String,
}

/// Body returned by `POST /chat`.
#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResp {
    pub reply: String,
}

// Upstream `generateContent` envelope. The same content/part shape is used
// in both directions.

#[derive(Debug, Serialize)]
pub struct GenerateReq {
    pub contents: Vec<Content>,
}

impl GenerateReq {
    /// One content entry holding one text part.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResp {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

impl GenerateResp {
    /// Text of the first part of the first candidate, if there is one.
    pub fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
    }
}
