use crate::application::dto::{ExportSummary, ExporterConfig, IssueExportSummary};
use crate::ports::outbound::{OutputPresenter, ProgressReporter, QualityServerApi, ReportSink};
use crate::quality_report::domain::{Measure, ISSUES_CSV_HEADER, METRICS_CSV_HEADER};
use crate::quality_report::services::IssuePager;
use crate::shared::error::ExportError;
use crate::shared::Result;
use anyhow::Context;
use serde_json::Value;


/// ReportExporterUseCase - Core use case for exporting a project's quality report
///
/// This use case runs the export steps strictly in order using generic
/// dependency injection for all infrastructure dependencies. The first
/// failing step aborts the run; nothing is retried.
///
/// # Type Parameters
/// * `API` - QualityServerApi implementation
/// * `SINK` - ReportSink implementation
/// * `OP` - OutputPresenter implementation
/// * `PR` - ProgressReporter implementation
pub struct ReportExporterUseCase<API, SINK, OP, PR> {
    api: API,
    report_sink: SINK,
    presenter: OP,
    progress_reporter: PR,
}

impl<API, SINK, OP, PR> ReportExporterUseCase<API, SINK, OP, PR>
where
    API: QualityServerApi,
    SINK: ReportSink,
    OP: OutputPresenter,
    PR: ProgressReporter,
{
    /// Creates a new ReportExporterUseCase with injected dependencies
    pub fn new(api: API, report_sink: SINK, presenter: OP, progress_reporter: PR) -> Self {
        Self {
            api,
            report_sink,
            presenter,
            progress_reporter,
        }
    }

    /// Executes the full export
    ///
    /// # Returns
    /// ExportSummary describing what was printed and written
    pub fn execute(&self, config: &ExporterConfig) -> Result<ExportSummary> {
        // Step 1: Resolve the latest analysis
        let analysis_id = self.resolve_latest_analysis(config)?;
        self.presenter
            .present(&format!("Analysis ID: {}", analysis_id))?;

        // Step 2: Quality gate status of that analysis
        let quality_gate = self.fetch_quality_gate_status(&analysis_id)?;
        self.present_json("Detailed Analysis:", &quality_gate)?;

        // Step 3: Letter-grade ratings
        let ratings = self.fetch_ratings(config)?;
        self.present_json("Component Measures (Letter Grades):", &ratings)?;

        // Step 4: Issues report
        let issues = self.export_issues(config)?;

        // Step 5: Metrics report
        let metrics_written = self.export_metrics(config)?;

        Ok(ExportSummary {
            analysis_id,
            quality_gate,
            ratings,
            issues,
            metrics_written,
        })
    }

    /// Returns the key of the most recent analysis of the project
    ///
    /// # Errors
    /// Returns `ExportError::NoAnalysisFound` when the project has never
    /// been analysed
    pub fn resolve_latest_analysis(&self, config: &ExporterConfig) -> Result<String> {
        self.progress_reporter.report(&format!(
            "🔍 Resolving latest analysis for project: {}",
            config.project_key
        ));

        let page = self.api.search_project_analyses(&config.project_key, 1)?;
        let analysis = page.latest().ok_or_else(|| ExportError::NoAnalysisFound {
            project_key: config.project_key.clone(),
        })?;

        log::debug!(
            "latest analysis {} (date: {})",
            analysis.key,
            analysis.date.as_deref().unwrap_or("unknown")
        );
        Ok(analysis.key.clone())
    }

    /// Returns the quality gate status document of an analysis, unmodified
    pub fn fetch_quality_gate_status(&self, analysis_id: &str) -> Result<Value> {
        self.progress_reporter
            .report("🚦 Fetching quality gate status...");
        self.api.quality_gate_status(analysis_id)
    }

    /// Returns the configured ratings of the project in server order
    pub fn fetch_ratings(&self, config: &ExporterConfig) -> Result<Vec<Measure>> {
        self.progress_reporter.report("📊 Fetching ratings...");
        self.api
            .component_measures(&config.project_key, &config.rating_metrics)
    }

    /// Pages through all issues of the project and writes them to the
    /// issues report
    ///
    /// A page shorter than the page size, or an empty page, ends the
    /// export. The server-reported total is taken from the first page and
    /// kept next to the number of rows actually written.
    pub fn export_issues(&self, config: &ExporterConfig) -> Result<IssueExportSummary> {
        self.progress_reporter.report("📥 Fetching issues...");

        let mut table = self
            .report_sink
            .create_table(&config.issues_path, &ISSUES_CSV_HEADER)?;
        let mut pager = IssuePager::new(config.page_size);
        let mut pages_fetched = 0u32;

        while let Some(page) = pager.next_page() {
            let result = self
                .api
                .search_issues(&config.project_key, page, pager.page_size())
                .with_context(|| format!("Failed to fetch issues page {}", page))?;
            pages_fetched += 1;

            for issue in &result.issues {
                let record = issue.to_record();
                let fields: Vec<&str> = record.iter().map(String::as_str).collect();
                table.write_row(&fields)?;
            }

            pager.record_page(result.issues.len(), result.total);
            log::info!(
                "issues page {}: {} issue(s), {}/{} fetched",
                page,
                result.issues.len(),
                pager.fetched(),
                pager.reported_total()
            );
            self.progress_reporter.report_progress(
                pager.fetched() as usize,
                pager.reported_total() as usize,
                Some("issues"),
            );
        }

        table.finish()?;

        let summary = IssueExportSummary {
            reported_total: pager.reported_total(),
            rows_written: pager.fetched(),
            pages_fetched,
        };

        if !summary.is_consistent() {
            log::warn!(
                "server reported {} issue(s) but {} row(s) were written",
                summary.reported_total,
                summary.rows_written
            );
        }

        self.progress_reporter.report_completion(&format!(
            "Total issues fetched: {}",
            summary.rows_written
        ));
        self.progress_reporter.report(&format!(
            "✅ Issues have been saved to {}",
            config.issues_path.display()
        ));

        Ok(summary)
    }

    /// Writes the configured metrics of the project to the metrics report
    ///
    /// # Returns
    /// Number of data rows written
    pub fn export_metrics(&self, config: &ExporterConfig) -> Result<usize> {
        self.progress_reporter.report("📏 Fetching metrics...");

        // Fetch first: an API failure must not leave an empty report behind.
        let measures = self
            .api
            .component_measures(&config.project_key, &config.report_metrics)?;

        let mut table = self
            .report_sink
            .create_table(&config.metrics_path, &METRICS_CSV_HEADER)?;
        for measure in &measures {
            table.write_row(&measure.to_record())?;
        }
        table.finish()?;

        self.progress_reporter.report(&format!(
            "✅ Metrics have been saved to {}",
            config.metrics_path.display()
        ));

        Ok(measures.len())
    }

    fn present_json<T: serde::Serialize + ?Sized>(&self, title: &str, value: &T) -> Result<()> {
        let pretty = serde_json::to_string_pretty(value)
            .context("Failed to serialize diagnostic output")?;
        self.presenter.present(&format!("{}\n{}", title, pretty))
    }
}
