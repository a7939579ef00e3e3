use crate::calendar;
use crate::i18n::Translate;
use crate::model::{Branch, Issue};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A time-boxed iteration. Root of the graph the aggregations run over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprint {
    pub id: u64,
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub date_start: Option<NaiveDate>,
    #[serde(default)]
    pub date_finish: Option<NaiveDate>,
    #[serde(default)]
    pub state: i32,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub branches: Vec<Branch>,
}

// Create
impl Sprint {
    pub fn new(id: u64, slug: impl ToString, title: impl ToString) -> Self {
        Self {
            id,
            slug: slug.to_string(),
            title: title.to_string(),
            description: None,
            version: None,
            is_private: false,
            date_start: None,
            date_finish: None,
            state: 0,
            color: None,
            position: 0,
            closed_at: None,
            issues: vec![],
            branches: vec![],
        }
    }

    pub fn with_dates(mut self, start: NaiveDate, finish: NaiveDate) -> Self {
        self.date_start = Some(start);
        self.date_finish = Some(finish);
        self
    }
}

// Calendar
impl Sprint {
    /// Working days from `start` (the sprint start when `None`) up to the sprint finish.
    /// Unset dates count as no working days.
    pub fn working_days(&self, start: Option<NaiveDate>) -> u32 {
        let (Some(begin), Some(end)) = (start.or(self.date_start), self.date_finish) else {
            return 0;
        };
        calendar::working_days(begin, end)
    }

    pub fn weeks(&self, start: Option<NaiveDate>) -> i64 {
        let (Some(begin), Some(end)) = (start.or(self.date_start), self.date_finish) else {
            return 0;
        };
        calendar::weeks(begin, end)
    }
}

// Attributes
impl Sprint {
    pub fn visibility<T: Translate + ?Sized>(&self, translator: &T) -> String {
        if self.is_private {
            translator.translate("Private")
        } else {
            translator.translate("Public")
        }
    }

    pub fn timebox<T: Translate + ?Sized>(&self, translator: &T) -> String {
        let render = |date: Option<NaiveDate>| {
            date.map(|date| date.format(DATE_FORMAT).to_string())
                .unwrap_or_default()
        };
        format!(
            "{} {} {}",
            render(self.date_start),
            translator.translate("to"),
            render(self.date_finish)
        )
    }
}
