use crate::analyze::{Activity, SprintAggregation};
use crate::i18n::Translate;
use crate::model::{IssueType, PullRequest, Sprint, User};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

pub type SprintsAnalyzed = Vec<SprintReport>;

/// Issue count for one issue type of a sprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueTypeSummary {
    pub sprint: String,
    pub slug: String,
    pub title: String,
    pub color: String,
    pub total: usize,
}

impl IssueTypeSummary {
    pub fn new(sprint: impl ToString, issue_type: &IssueType, total: usize) -> Self {
        Self {
            sprint: sprint.to_string(),
            slug: issue_type.slug.clone(),
            title: issue_type.title.clone(),
            color: issue_type.color.clone(),
            total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRecord {
    pub issue: String,
    pub status: Option<String>,
    pub user: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Activity<'_>> for ActivityRecord {
    fn from(activity: &Activity<'_>) -> Self {
        Self {
            issue: activity.issue.title.clone(),
            status: activity
                .change
                .status
                .as_ref()
                .map(|status| status.name.clone()),
            user: activity
                .change
                .user
                .as_ref()
                .map(|user| user.display_name().to_string()),
            created_at: activity.change.created_at,
        }
    }
}

/// Everything the presentation layer shows for one sprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SprintReport {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub state: i32,
    pub timebox: String,
    pub visibility: String,
    pub working_days: u32,
    pub weeks: i64,
    pub issues: usize,
    pub effort: f64,
    pub effort_avg: Option<f64>,
    pub total_additions: u64,
    pub total_pull_requests: usize,
    pub pull_requests: Vec<PullRequest>,
    pub issue_types: Vec<IssueTypeSummary>,
    /// Status slug to the titles of the issues in that status.
    pub issue_status: IndexMap<String, Vec<String>>,
    pub activities: Vec<ActivityRecord>,
    pub users: Vec<User>,
}

impl SprintReport {
    pub fn from_sprint<T: Translate + ?Sized>(sprint: &Sprint, translator: &T) -> Self {
        Self {
            id: sprint.id,
            slug: sprint.slug.clone(),
            title: sprint.title.clone(),
            state: sprint.state,
            timebox: sprint.timebox(translator),
            visibility: sprint.visibility(translator),
            working_days: sprint.working_days(None),
            weeks: sprint.weeks(None),
            issues: sprint.issues.len(),
            effort: sprint.effort(),
            effort_avg: sprint.effort_avg(),
            total_additions: sprint.total_additions(),
            total_pull_requests: sprint.total_pull_requests(),
            pull_requests: sprint.pull_requests().concat(),
            issue_types: sprint.issue_types(),
            issue_status: sprint
                .issue_status()
                .into_iter()
                .map(|(slug, issues)| {
                    (slug, issues.iter().map(|issue| issue.title.clone()).collect())
                })
                .collect(),
            activities: sprint.activities().iter().map(ActivityRecord::from).collect(),
            users: sprint.issue_users().into_iter().cloned().collect(),
        }
    }

    /// File name (without extension) the report is written under.
    pub fn file_stem(&self) -> String {
        if self.slug.is_empty() {
            format!("sprint-{}", self.id)
        } else {
            self.slug.clone()
        }
    }
}
