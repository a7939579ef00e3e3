use crate::analyze::SprintReport;
use crate::error::{MetricsError, Result};

pub trait JsonReport {
    fn render_json(&self) -> Result<String>;
}

impl JsonReport for SprintReport {
    fn render_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| MetricsError::Render {
            sprint: self.title.clone(),
            reason: err.to_string(),
        })
    }
}
