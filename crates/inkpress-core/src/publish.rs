//! Contract for delivering finished articles to publishing platforms
//!
//! Each target platform supplies its own [`ContentPublisher`]. No platform
//! implementation lives in this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ai::Summary;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Pending,
    Published,
    Failed,
    Draft,
    Scheduled,
}

/// Outcome of one publish call on one platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResult {
    pub publish_id: String,
    pub url: Option<String>,
    pub status: PublishStatus,
    pub published_at: DateTime<Utc>,
    pub platform: String,
}

/// A summarized article ready for publication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub keywords: Vec<String>,
    pub score: f64,
    pub created_at: DateTime<Utc>,
}

impl Article {
    pub fn from_summary(summary: Summary) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: summary.title,
            content: summary.content,
            keywords: summary.keywords,
            score: summary.score,
            created_at: Utc::now(),
        }
    }
}

/// Per-call publishing options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublishOptions {
    /// Save as a draft instead of publishing
    #[serde(default)]
    pub draft: bool,
    /// Publish at a later time
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
}

/// A publishing platform
#[async_trait::async_trait]
pub trait ContentPublisher: Send + Sync {
    /// Platform name reported in [`PublishResult::platform`]
    fn platform(&self) -> &str;

    /// Check that the publisher has what it needs to publish
    fn validate_config(&self) -> Result<()>;

    /// Reload credentials or other configuration
    async fn refresh(&self) -> Result<()>;

    async fn publish(&self, article: &Article, options: &PublishOptions) -> Result<PublishResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_from_summary() {
        let summary = Summary {
            title: "新品发布".to_string(),
            content: "公司发布了新产品。".to_string(),
            keywords: vec!["新品".to_string(), "发布".to_string(), "公司".to_string()],
            score: 80.0,
        };

        let article = Article::from_summary(summary.clone());
        assert_eq!(article.title, summary.title);
        assert_eq!(article.content, summary.content);
        assert_eq!(article.keywords, summary.keywords);
        assert_eq!(article.score, 80.0);
        assert_ne!(Article::from_summary(summary).id, article.id);
    }

    #[test]
    fn test_publish_result_wire_names() {
        let result = PublishResult {
            publish_id: "42".to_string(),
            url: None,
            status: PublishStatus::Scheduled,
            published_at: Utc::now(),
            platform: "blog".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["publishId"], "42");
        assert_eq!(json["status"], "scheduled");
        assert!(json.get("publishedAt").is_some());
    }
}
