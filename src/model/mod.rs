mod branch;
mod config_status;
mod issue;
mod sprint;
mod user;

pub use branch::{Branch, Commit, CommitFile, PullRequest};
pub use config_status::ConfigStatus;
pub use issue::{ConfigEffort, Issue, IssueType, StatusChange};
pub use sprint::Sprint;
pub use user::User;
