use serde::Deserialize;

/// Column header of the issues report
pub const ISSUES_CSV_HEADER: [&str; 9] = [
    "key",
    "severity",
    "component",
    "project",
    "message",
    "line",
    "status",
    "creationDate",
    "updateDate",
];

/// A single flagged code problem as returned by `issues/search`
///
/// Only the fields exported to the report are kept. Every field except
/// `line` is required; file-level issues carry no line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub key: String,
    pub severity: String,
    pub component: String,
    pub project: String,
    pub message: String,
    #[serde(default)]
    pub line: Option<u64>,
    pub status: String,
    pub creation_date: String,
    pub update_date: String,
}

impl Issue {
    /// Row for the issues report, in `ISSUES_CSV_HEADER` order
    pub fn to_record(&self) -> [String; 9] {
        [
            self.key.clone(),
            self.severity.clone(),
            self.component.clone(),
            self.project.clone(),
            self.message.clone(),
            self.line.map(|l| l.to_string()).unwrap_or_default(),
            self.status.clone(),
            self.creation_date.clone(),
            self.update_date.clone(),
        ]
    }
}

/// One page of `issues/search`
#[derive(Debug, Clone, Deserialize)]
pub struct IssuePage {
    pub total: u64,
    #[serde(default)]
    pub issues: Vec<Issue>,
}
