mod cli;

use cli::Args;
use sonar_export::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
use sonar_export::adapters::outbound::filesystem::CsvReportSink;
use sonar_export::adapters::outbound::network::SonarHttpClient;
use sonar_export::application::dto::ExporterConfig;
use sonar_export::application::use_cases::ReportExporterUseCase;
use sonar_export::config::{discover_config, load_config_from_path};
use sonar_export::shared::error::{ExitCode, ExportError};
use sonar_export::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    let exit_code = match run() {
        Ok(()) => ExitCode::Success,
        Err(e) => report_failure(&e),
    };
    log::debug!("exiting with {}", exit_code);
    process::exit(exit_code.as_i32());
}

/// Prints the error and its cause chain, returning the exit code to use
fn report_failure(e: &anyhow::Error) -> ExitCode {
    let export_error = e.downcast_ref::<ExportError>();

    if let Some(usage @ ExportError::Usage { .. }) = export_error {
        eprintln!("{}", usage);
        return usage.exit_code();
    }

    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", e);

    // Display error chain
    for cause in e.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }

    eprintln!();
    export_error
        .map(ExportError::exit_code)
        .unwrap_or(ExitCode::ApplicationError)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args()?;
    init_logging(args.verbose);

    // Optional config file
    let file_config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };

    let mut builder = ExporterConfig::builder()
        .server_url(args.server_url)
        .project_key(args.project_key)
        .token(args.token)
        .issues_path(args.issues_file)
        .metrics_path(args.metrics_file);
    if let Some(file_config) = &file_config {
        builder = file_config.apply(builder);
    }
    let config = builder.build()?;

    // Create adapters (Dependency Injection)
    let api = SonarHttpClient::new(&config.server_url, &config.token)?;
    let use_case = ReportExporterUseCase::new(
        api,
        CsvReportSink::new(),
        StdoutPresenter::new(),
        StderrProgressReporter::new(),
    );

    use_case.execute(&config)?;
    Ok(())
}
