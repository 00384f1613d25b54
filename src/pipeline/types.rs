//! Inputs and outputs of a pipeline run

use crate::error::ValidationError;
use crate::parser::AgentBlock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Format of `submissionDate`
pub const SUBMISSION_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A piece of content submitted for tagging
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Submission {
    pub title: String,

    pub content: String,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub category: Option<String>,
}

impl Submission {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: None,
            email: None,
            category: None,
        }
    }

    /// Intake checks run before any model call
    pub fn validate(&self, min_content_chars: usize) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let actual = self.content.trim().chars().count();
        if actual <= min_content_chars {
            return Err(ValidationError::ContentTooShort {
                min: min_content_chars,
                actual,
            });
        }

        Ok(())
    }
}

/// One stage's contribution to the package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub role: String,
    pub content: String,
}

/// Final merged artifact of one run. Field order is the output key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishPackage {
    pub title: String,

    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    pub reviews: Vec<Review>,

    pub tags: Vec<String>,

    pub summary: String,

    pub issues: Vec<Value>,

    #[serde(rename = "submissionDate", serialize_with = "serialize_submission_date")]
    pub submission_date: DateTime<Utc>,
}

fn serialize_submission_date<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(SUBMISSION_DATE_FORMAT))
}

/// Result of one model call
#[derive(Debug, Clone, PartialEq)]
pub struct StageRun {
    pub block: AgentBlock,
    pub elapsed_ms: u64,
}
