use crate::analyze::SprintReport;
use crate::error::{MetricsError, Result};
use itertools::Itertools;
use markdown_builder::Markdown;
use markdown_table::{Heading, HeadingAlignment, MarkdownTable};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub trait MarkdownReport {
    fn render_markdown(&self) -> Result<String>;
}

impl MarkdownReport for SprintReport {
    fn render_markdown(&self) -> Result<String> {
        let mut doc = Markdown::new();

        doc.heading(1, &self.title);
        doc.add_summary(self)?;
        doc.add_issue_types(self)?;
        doc.add_issue_status(self)?;
        doc.add_activities(self)?;

        Ok(doc.render())
    }
}

trait MarkdownExt {
    fn heading(&mut self, level: usize, text: &str);
    fn add_summary(&mut self, report: &SprintReport) -> Result<()>;
    fn add_issue_types(&mut self, report: &SprintReport) -> Result<()>;
    fn add_issue_status(&mut self, report: &SprintReport) -> Result<()>;
    fn add_activities(&mut self, report: &SprintReport) -> Result<()>;
}

impl MarkdownExt for Markdown {
    fn heading(&mut self, level: usize, text: &str) {
        self.paragraph(format!("{} {text}", "#".repeat(level)));
    }

    fn add_summary(&mut self, report: &SprintReport) -> Result<()> {
        self.heading(2, "Summary");

        let effort_avg = report
            .effort_avg
            .map(|avg| format!("{avg:.2}"))
            .unwrap_or_else(|| "-".to_string());
        let table = vec![
            vec!["Timebox".to_string(), report.timebox.clone()],
            vec!["Visibility".to_string(), report.visibility.clone()],
            vec!["Working days".to_string(), report.working_days.to_string()],
            vec!["Weeks".to_string(), report.weeks.to_string()],
            vec!["Issues".to_string(), report.issues.to_string()],
            vec!["Effort".to_string(), report.effort.to_string()],
            vec!["Effort average".to_string(), effort_avg],
            vec!["Additions".to_string(), format!("*+ {}*", report.total_additions)],
            vec![
                "Pull requests".to_string(),
                report.total_pull_requests.to_string(),
            ],
        ];
        let header = vec![
            Heading::new("Metric".to_string(), None),
            Heading::new("Value".to_string(), None),
        ];
        self.paragraph(render_table(report, header, table)?);

        if !report.users.is_empty() {
            let team = report
                .users
                .iter()
                .map(|user| format!("**{}**", user.display_name()))
                .join(", ");
            self.paragraph(format!("Team: {team}"));
        }
        Ok(())
    }

    fn add_issue_types(&mut self, report: &SprintReport) -> Result<()> {
        self.heading(2, "Issue types");
        if report.issue_types.is_empty() {
            self.paragraph("*No issues in this sprint.*".to_string());
            return Ok(());
        }

        let table = report
            .issue_types
            .iter()
            .map(|issue_type| {
                vec![
                    issue_type.title.clone(),
                    format!("`{}`", issue_type.color),
                    issue_type.total.to_string(),
                ]
            })
            .collect::<Vec<_>>();
        let header = vec![
            Heading::new("Type".to_string(), None),
            Heading::new("Color".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("Total".to_string(), Some(HeadingAlignment::Center)),
        ];
        self.paragraph(render_table(report, header, table)?);
        Ok(())
    }

    fn add_issue_status(&mut self, report: &SprintReport) -> Result<()> {
        if report.issue_status.is_empty() {
            return Ok(());
        }
        self.heading(2, "Issue status");

        let table = report
            .issue_status
            .iter()
            .map(|(slug, issues)| vec![slug.clone(), issues.len().to_string(), issues.join(", ")])
            .collect::<Vec<_>>();
        let header = vec![
            Heading::new("Status".to_string(), None),
            Heading::new("Total".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("Issues".to_string(), None),
        ];
        self.paragraph(render_table(report, header, table)?);
        Ok(())
    }

    fn add_activities(&mut self, report: &SprintReport) -> Result<()> {
        self.heading(2, "Recent activity");
        if report.activities.is_empty() {
            self.paragraph("*No activity yet.*".to_string());
            return Ok(());
        }

        let table = report
            .activities
            .iter()
            .map(|activity| {
                vec![
                    activity.created_at.format(TIMESTAMP_FORMAT).to_string(),
                    activity.issue.clone(),
                    activity.status.clone().unwrap_or_default(),
                    activity.user.clone().unwrap_or_default(),
                ]
            })
            .collect::<Vec<_>>();
        let header = vec![
            Heading::new("When".to_string(), None),
            Heading::new("Issue".to_string(), None),
            Heading::new("Status".to_string(), None),
            Heading::new("By".to_string(), None),
        ];
        self.paragraph(render_table(report, header, table)?);
        Ok(())
    }
}

fn render_table(
    report: &SprintReport,
    header: Vec<Heading>,
    table: Vec<Vec<String>>,
) -> Result<String> {
    let mut md_table = MarkdownTable::new(table);
    md_table.with_headings(header);
    md_table.as_markdown().map_err(|_| MetricsError::Render {
        sprint: report.title.clone(),
        reason: "malformed table".to_string(),
    })
}
