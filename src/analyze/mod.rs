mod analyzer;
mod model;

pub use analyzer::{Activity, Analyzer, SprintAggregation, ACTIVITY_LIMIT, USERS_LIMIT};
pub use model::{ActivityRecord, IssueTypeSummary, SprintReport, SprintsAnalyzed};
