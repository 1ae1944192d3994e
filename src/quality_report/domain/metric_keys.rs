/// Letter-grade ratings printed as diagnostics
pub const RATING_METRIC_KEYS: [&str; 3] = ["reliability_rating", "security_rating", "sqale_rating"];

/// Measures exported to the metrics report
pub const REPORT_METRIC_KEYS: [&str; 7] = [
    "bugs",
    "vulnerabilities",
    "security_hotspots_reviewed",
    "code_smells",
    "coverage",
    "duplicated_lines_density",
    "ncloc",
];

/// Default page size of the issues search
pub const DEFAULT_ISSUE_PAGE_SIZE: u32 = 100;

/// Largest `ps` accepted by the issues search
pub const MAX_ISSUE_PAGE_SIZE: u32 = 500;

pub fn rating_metric_keys() -> Vec<String> {
    RATING_METRIC_KEYS.iter().map(|k| k.to_string()).collect()
}

pub fn report_metric_keys() -> Vec<String> {
    REPORT_METRIC_KEYS.iter().map(|k| k.to_string()).collect()
}
