use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Structured result of a summarization call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub title: String,
    pub content: String,
    /// 3-5 short keywords, as returned by the model
    pub keywords: Vec<String>,
    /// Importance score in [0, 100]; not range-checked
    pub score: f64,
}

/// Options that only shape the prompt text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeOptions {
    /// Output language
    #[serde(default = "default_language")]
    pub language: String,
    /// Target minimum length of the expanded content, in characters
    #[serde(default = "default_min_length")]
    pub min_length: u32,
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self {
            language: default_language(),
            min_length: default_min_length(),
        }
    }
}

fn default_language() -> String {
    "中文".to_string()
}

fn default_min_length() -> u32 {
    200
}

impl Summary {
    /// Parse the model's JSON reply.
    ///
    /// `title` and `content` must be non-empty strings and `keywords` must be
    /// an array. Keyword count, keyword length and score range are taken as
    /// given; a missing or non-numeric score becomes 0.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| Error::ResponseFormat(format!("invalid JSON: {}", e)))?;

        let title = non_empty_str(&value, "title")?;
        let content = non_empty_str(&value, "content")?;

        let keywords = match value.get("keywords") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Null => None,
                    other => Some(other.to_string()),
                })
                .collect(),
            _ => {
                return Err(Error::ResponseFormat(
                    "missing required field: keywords must be an array".to_string(),
                ))
            }
        };

        let score = match value.get("score") {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        };

        Ok(Self {
            title,
            content,
            keywords,
            score,
        })
    }
}

fn non_empty_str(value: &Value, field: &str) -> Result<String> {
    match value.get(field).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(Error::ResponseFormat(format!(
            "missing required field: {}",
            field
        ))),
    }
}
