/// Integration tests for the application layer writing real CSV reports
mod test_utilities;

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use test_utilities::mocks::*;
use sonar_export::prelude::*;

fn issue(key: &str, line: Option<u64>, message: &str) -> Issue {
    Issue {
        key: key.to_string(),
        severity: "MAJOR".to_string(),
        component: "demo:src/main.rs".to_string(),
        project: "demo".to_string(),
        message: message.to_string(),
        line,
        status: "OPEN".to_string(),
        creation_date: "2024-05-01T10:00:00+0000".to_string(),
        update_date: "2024-05-02T10:00:00+0000".to_string(),
    }
}

fn issues(prefix: &str, count: usize) -> Vec<Issue> {
    (0..count)
        .map(|i| issue(&format!("{}-{}", prefix, i), Some(i as u64 + 1), "Remove this unused import"))
        .collect()
}

fn config(dir: &Path) -> ExporterConfig {
    ExporterConfig::builder()
        .server_url("http://localhost:9000")
        .project_key("demo")
        .token("abc")
        .issues_path(dir.join("issues.csv"))
        .metrics_path(dir.join("metrics.csv"))
        .build()
        .unwrap()
}

fn read_csv(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
        .collect()
}

fn use_case(
    api: MockQualityServerApi,
) -> ReportExporterUseCase<MockQualityServerApi, CsvReportSink, MockPresenter, MockProgressReporter>
{
    ReportExporterUseCase::new(
        api,
        CsvReportSink::new(),
        MockPresenter::new(),
        MockProgressReporter::new(),
    )
}

#[test]
fn test_export_happy_path() {
    let dir = TempDir::new().unwrap();
    let api = MockQualityServerApi::new()
        .with_measure("reliability_rating", "1.0")
        .with_measure("security_rating", "2.0")
        .with_measure("sqale_rating", "1.0")
        .with_measure("bugs", "4")
        .with_measure("coverage", "78.3")
        .with_measure("ncloc", "1520")
        .with_issues(1, issues("a", 100))
        .with_issues(2, issues("b", 20));
    let presenter = MockPresenter::new();
    let use_case = ReportExporterUseCase::new(
        api.clone(),
        CsvReportSink::new(),
        presenter.clone(),
        MockProgressReporter::new(),
    );

    let summary = use_case.execute(&config(dir.path())).unwrap();

    assert_eq!(summary.analysis_id, "AX-latest");
    assert_eq!(summary.ratings.len(), 3);
    assert_eq!(summary.issues.rows_written, 120);
    assert_eq!(summary.issues.pages_fetched, 2);
    assert_eq!(summary.metrics_written, 3);

    let issue_rows = read_csv(&dir.path().join("issues.csv"));
    assert_eq!(issue_rows.len(), 121);
    assert_eq!(
        issue_rows[0],
        ISSUES_CSV_HEADER.iter().map(|s| s.to_string()).collect::<Vec<_>>()
    );
    assert_eq!(issue_rows[1][0], "a-0");
    assert_eq!(issue_rows[120][0], "b-19");

    let metric_rows = read_csv(&dir.path().join("metrics.csv"));
    assert_eq!(
        metric_rows,
        vec![
            vec!["metric", "value"],
            vec!["bugs", "4"],
            vec!["coverage", "78.3"],
            vec!["ncloc", "1520"],
        ]
    );

    assert_eq!(
        api.get_requests(),
        vec![
            "project_analyses/search?project=demo&ps=1",
            "qualitygates/project_status?analysisId=AX-latest",
            "measures/component?component=demo&metricKeys=reliability_rating,security_rating,sqale_rating",
            "issues/search?componentKeys=demo&p=1&ps=100",
            "issues/search?componentKeys=demo&p=2&ps=100",
            "measures/component?component=demo&metricKeys=bugs,vulnerabilities,security_hotspots_reviewed,code_smells,coverage,duplicated_lines_density,ncloc",
        ]
    );

    let blocks = presenter.get_blocks();
    assert_eq!(blocks[0], "Analysis ID: AX-latest");
    assert!(blocks[2].contains("\"metric\": \"security_rating\""));
}

#[test]
fn test_exactly_one_full_page_needs_a_second_request() {
    let dir = TempDir::new().unwrap();
    let api = MockQualityServerApi::new().with_issues(1, issues("a", 100));
    let use_case = use_case(api.clone());

    let summary = use_case.export_issues(&config(dir.path())).unwrap();

    assert_eq!(summary.pages_fetched, 2);
    let issue_requests = api
        .get_requests()
        .into_iter()
        .filter(|r| r.starts_with("issues/search"))
        .count();
    assert_eq!(issue_requests, 2);
    assert_eq!(read_csv(&dir.path().join("issues.csv")).len(), 101);
}

#[test]
fn test_short_first_page_needs_one_request() {
    let dir = TempDir::new().unwrap();
    let api = MockQualityServerApi::new().with_issues(1, issues("a", 37));
    let use_case = use_case(api.clone());

    let summary = use_case.export_issues(&config(dir.path())).unwrap();

    assert_eq!(summary.pages_fetched, 1);
    assert_eq!(summary.rows_written, 37);
    assert_eq!(api.get_requests().len(), 1);
    assert_eq!(read_csv(&dir.path().join("issues.csv")).len(), 38);
}

#[test]
fn test_issue_without_line_and_with_quotes() {
    let dir = TempDir::new().unwrap();
    let api = MockQualityServerApi::new().with_issues(
        1,
        vec![issue(
            "AYx",
            None,
            "Replace \"println!\", use a logger, instead",
        )],
    );
    let use_case = use_case(api);

    use_case.export_issues(&config(dir.path())).unwrap();

    let raw = fs::read_to_string(dir.path().join("issues.csv")).unwrap();
    assert!(raw.contains("\"Replace \"\"println!\"\", use a logger, instead\",,OPEN"));

    let rows = read_csv(&dir.path().join("issues.csv"));
    assert_eq!(rows[1].len(), 9);
    assert_eq!(rows[1][4], "Replace \"println!\", use a logger, instead");
    assert_eq!(rows[1][5], "");
}

#[test]
fn test_reported_total_differs_from_rows() {
    let dir = TempDir::new().unwrap();
    let api = MockQualityServerApi::new()
        .with_issues(1, issues("a", 10))
        .with_reported_total(12);
    let reporter = MockProgressReporter::new();
    let use_case = ReportExporterUseCase::new(
        api,
        CsvReportSink::new(),
        MockPresenter::new(),
        reporter.clone(),
    );

    let summary = use_case.export_issues(&config(dir.path())).unwrap();

    assert_eq!(summary.reported_total, 12);
    assert_eq!(summary.rows_written, 10);
    assert!(reporter
        .lines()
        .contains(&"done: Total issues fetched: 10".to_string()));
    assert_eq!(reporter.last_progress(), Some((10, 12)));
}

#[test]
fn test_no_analysis_aborts_before_any_report() {
    let dir = TempDir::new().unwrap();
    let api = MockQualityServerApi::new().without_analyses();
    let use_case = use_case(api.clone());

    let err = use_case.execute(&config(dir.path())).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ExportError>(),
        Some(ExportError::NoAnalysisFound { .. })
    ));
    assert_eq!(api.get_requests().len(), 1);
    assert!(!dir.path().join("issues.csv").exists());
    assert!(!dir.path().join("metrics.csv").exists());
}

#[test]
fn test_api_failure_aborts_run() {
    let dir = TempDir::new().unwrap();
    let api = MockQualityServerApi::new().with_failure(403);
    let use_case = use_case(api);

    let err = use_case.execute(&config(dir.path())).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ExportError>(),
        Some(ExportError::Api { status: 403, .. })
    ));
    assert!(!dir.path().join("issues.csv").exists());
}

#[test]
fn test_unwritable_issues_path_is_file_write_error() {
    let dir = TempDir::new().unwrap();
    let config = ExporterConfig::builder()
        .server_url("http://localhost:9000")
        .project_key("demo")
        .token("abc")
        .issues_path(dir.path().join("missing-dir").join("issues.csv"))
        .metrics_path(dir.path().join("metrics.csv"))
        .build()
        .unwrap();
    let use_case = use_case(MockQualityServerApi::new());

    let err = use_case.execute(&config).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ExportError>(),
        Some(ExportError::FileWrite { .. })
    ));
    assert!(!dir.path().join("metrics.csv").exists());
}
