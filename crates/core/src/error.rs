use serde::{Deserialize, Serialize};

/// A parse or validation error in a parameter file.
///
/// Every failure the parser can produce is one of these: malformed values,
/// unknown references, duplicate keys, missing sections and trailing data
/// all carry the input label, the 1-based line and a readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{file}:{line}: {message}")]
pub struct ParseError {
    pub file: String,
    /// 1-based line number; 0 when the error is not tied to a line.
    pub line: u32,
    /// The literal text that caused the error, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub message: String,
}

impl ParseError {
    pub fn new(file: &str, line: u32, message: impl Into<String>) -> Self {
        ParseError {
            file: file.to_owned(),
            line,
            text: None,
            message: message.into(),
        }
    }

    /// Attach the offending literal.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Serialize to JSON. Always includes every field (null for missing).
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "file":    self.file,
            "line":    self.line,
            "message": self.message,
            "text":    self.text,
        })
    }
}
