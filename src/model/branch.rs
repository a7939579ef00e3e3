use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub commits: Vec<Commit>,
    #[serde(default, alias = "pullrequests")]
    pub pull_requests: Vec<PullRequest>,
}

impl Branch {
    pub fn new(id: u64, title: impl ToString) -> Self {
        Self {
            id,
            title: title.to_string(),
            commits: vec![],
            pull_requests: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub files: Vec<CommitFile>,
}

impl Commit {
    pub fn new(sha: impl ToString, message: impl ToString, files: Vec<CommitFile>) -> Self {
        Self {
            sha: sha.to_string(),
            message: message.to_string(),
            files,
        }
    }

    pub fn additions(&self) -> u64 {
        self.files.iter().map(|file| file.additions).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitFile {
    pub filename: String,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
}

impl CommitFile {
    pub fn new(filename: impl ToString, additions: u64, deletions: u64) -> Self {
        Self {
            filename: filename.to_string(),
            additions,
            deletions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    pub id: u64,
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl PullRequest {
    pub fn new(id: u64, number: u64, title: impl ToString, state: impl ToString) -> Self {
        Self {
            id,
            number,
            title: title.to_string(),
            state: state.to_string(),
            url: None,
        }
    }
}
