use crate::model::{ConfigStatus, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub position: i64,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub status: ConfigStatus,
    #[serde(default)]
    pub config_effort: Option<ConfigEffort>,
    #[serde(default)]
    pub users: Vec<User>,
    /// Status-change events in stored order.
    #[serde(default)]
    pub statuses: Vec<StatusChange>,
}

impl Issue {
    pub fn new(
        id: u64,
        title: impl ToString,
        issue_type: IssueType,
        status: ConfigStatus,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            position: 0,
            issue_type,
            status,
            config_effort: None,
            users: vec![],
            statuses: vec![],
        }
    }

    /// Effort of the linked effort configuration, if any.
    pub fn effort(&self) -> Option<f64> {
        self.config_effort.as_ref().map(|config| config.effort)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueType {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub color: String,
}

impl IssueType {
    pub fn new(slug: impl ToString, title: impl ToString, color: impl ToString) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEffort {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub effort: f64,
}

/// A timestamped status change on an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    pub id: u64,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub status: Option<ConfigStatus>,
    pub created_at: DateTime<Utc>,
}
