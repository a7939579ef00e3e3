//! Builders for sprint graphs used across the unit tests.

use crate::model::{
    Branch, Commit, CommitFile, ConfigEffort, ConfigStatus, Issue, IssueType, PullRequest, Sprint,
    StatusChange, User,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
}

pub fn issue_type(slug: &str) -> IssueType {
    let (title, color) = match slug {
        "bug" => ("Bug", "#d9534f"),
        "feature" => ("Feature", "#5cb85c"),
        _ => ("Task", "#777777"),
    };
    IssueType::new(slug, title, color)
}

pub fn status(slug: &str) -> ConfigStatus {
    let mut status = ConfigStatus::new(slug.len() as u64, slug, slug.to_uppercase());
    status.status_type = "issue".to_string();
    status
}

pub fn issue(id: u64, type_slug: &str, effort: Option<f64>) -> Issue {
    let mut issue = Issue::new(
        id,
        format!("Issue #{id}"),
        issue_type(type_slug),
        status("todo"),
    );
    issue.position = id as i64;
    issue.config_effort = effort.map(|effort| ConfigEffort {
        id: effort as u64,
        title: format!("{effort}"),
        effort,
    });
    issue
}

pub fn change(id: u64, created_at: DateTime<Utc>) -> StatusChange {
    StatusChange {
        id,
        user: None,
        status: Some(status("in-progress")),
        created_at,
    }
}

pub fn user(id: u64) -> User {
    User::new(id, format!("user{id}"))
}

pub fn commit(additions: &[u64]) -> Commit {
    let files = additions
        .iter()
        .enumerate()
        .map(|(index, additions)| CommitFile::new(format!("src/file{index}.php"), *additions, 1))
        .collect();
    Commit::new(format!("{:07x}", additions.iter().sum::<u64>()), "Update", files)
}

pub fn branch(id: u64, commits: Vec<Commit>, pull_requests: u64) -> Branch {
    let mut branch = Branch::new(id, format!("feature/{id}"));
    branch.commits = commits;
    branch.pull_requests = (1..=pull_requests)
        .map(|number| PullRequest::new(id * 100 + number, number, format!("PR {number}"), "open"))
        .collect();
    branch
}

pub fn sprint(issues: Vec<Issue>, branches: Vec<Branch>) -> Sprint {
    let mut sprint =
        Sprint::new(1, "sprint-1", "Sprint 1").with_dates(date(2024, 1, 1), date(2024, 1, 7));
    sprint.issues = issues;
    sprint.branches = branches;
    sprint
}
