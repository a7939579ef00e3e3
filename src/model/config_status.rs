use serde::{Deserialize, Serialize};

/// Lookup entry for the workflow states an issue can be in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigStatus {
    pub id: u64,
    pub slug: String,
    #[serde(rename = "type", default)]
    pub status_type: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub color: Option<String>,
}

impl ConfigStatus {
    pub fn new(id: u64, slug: impl ToString, name: impl ToString) -> Self {
        Self {
            id,
            slug: slug.to_string(),
            status_type: String::new(),
            name: name.to_string(),
            description: None,
            position: 0,
            color: None,
        }
    }
}
