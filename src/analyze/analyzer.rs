use crate::analyze::{IssueTypeSummary, SprintReport, SprintsAnalyzed};
use crate::i18n::Translate;
use crate::model::{Issue, IssueType, PullRequest, Sprint, StatusChange, User};
use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;

/// Maximum number of entries in the activity feed.
pub const ACTIVITY_LIMIT: usize = 15;
/// Maximum number of users shown for a sprint.
pub const USERS_LIMIT: usize = 3;

/// A status change together with the issue it happened on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activity<'a> {
    pub issue: &'a Issue,
    pub change: &'a StatusChange,
}

/// Read-only projections over a hydrated sprint graph.
pub trait SprintAggregation {
    fn total_additions(&self) -> u64;
    fn total_pull_requests(&self) -> usize;
    /// Pull requests grouped per branch, skipping branches without any.
    fn pull_requests(&self) -> Vec<&[PullRequest]>;
    fn effort(&self) -> f64;
    /// Effort per issue rounded to two decimals, `None` for a sprint without issues.
    fn effort_avg(&self) -> Option<f64>;
    /// Most recent status changes first.
    fn activities(&self) -> Vec<Activity<'_>>;
    fn issue_types(&self) -> Vec<IssueTypeSummary>;
    fn issue_status(&self) -> IndexMap<String, Vec<&Issue>>;
    /// First distinct users assigned to the sprint's issues.
    fn issue_users(&self) -> Vec<&User>;
}

impl SprintAggregation for Sprint {
    fn total_additions(&self) -> u64 {
        self.branches
            .iter()
            .flat_map(|branch| &branch.commits)
            .flat_map(|commit| &commit.files)
            .map(|file| file.additions)
            .sum()
    }

    fn total_pull_requests(&self) -> usize {
        self.branches
            .iter()
            .map(|branch| branch.pull_requests.len())
            .sum()
    }

    fn pull_requests(&self) -> Vec<&[PullRequest]> {
        self.branches
            .iter()
            .filter(|branch| !branch.pull_requests.is_empty())
            .map(|branch| branch.pull_requests.as_slice())
            .collect()
    }

    fn effort(&self) -> f64 {
        self.issues.iter().filter_map(Issue::effort).sum()
    }

    fn effort_avg(&self) -> Option<f64> {
        if self.issues.is_empty() {
            return None;
        }
        // issues without an effort configuration count as zero
        let avg = self.effort() / self.issues.len() as f64;
        Some(round_to_hundredths(avg))
    }

    fn activities(&self) -> Vec<Activity<'_>> {
        let mut activities = self
            .issues
            .iter()
            .flat_map(|issue| {
                issue
                    .statuses
                    .iter()
                    .map(move |change| Activity { issue, change })
            })
            .collect::<Vec<_>>();
        // stable: equal timestamps keep issue/event order
        activities.sort_by(|a, b| b.change.created_at.cmp(&a.change.created_at));
        activities.truncate(ACTIVITY_LIMIT);
        activities
    }

    fn issue_types(&self) -> Vec<IssueTypeSummary> {
        let mut groups: IndexMap<&str, (&IssueType, usize)> = IndexMap::new();
        for issue in &self.issues {
            groups
                .entry(issue.issue_type.slug.as_str())
                .or_insert((&issue.issue_type, 0))
                .1 += 1;
        }
        let mut types = groups
            .into_values()
            .map(|(issue_type, total)| IssueTypeSummary::new(&self.slug, issue_type, total))
            .collect::<Vec<_>>();
        types.sort_by(|a, b| b.total.cmp(&a.total));
        types
    }

    fn issue_status(&self) -> IndexMap<String, Vec<&Issue>> {
        let mut status: IndexMap<String, Vec<&Issue>> = IndexMap::new();
        for issue in &self.issues {
            status
                .entry(issue.status.slug.clone())
                .or_default()
                .push(issue);
        }
        status
    }

    fn issue_users(&self) -> Vec<&User> {
        self.issues
            .iter()
            .flat_map(|issue| &issue.users)
            .unique_by(|user| user.id)
            .take(USERS_LIMIT)
            .collect()
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub trait Analyzer {
    fn analyze_sprints<T: Translate + ?Sized>(&self, translator: &T) -> SprintsAnalyzed;
}

impl Analyzer for [Sprint] {
    fn analyze_sprints<T: Translate + ?Sized>(&self, translator: &T) -> SprintsAnalyzed {
        self.iter()
            .map(|sprint| {
                debug!(
                    "Analyze sprint `{}` ({} issues, {} branches)",
                    sprint.title,
                    sprint.issues.len(),
                    sprint.branches.len()
                );
                SprintReport::from_sprint(sprint, translator)
            })
            .collect()
    }
}
