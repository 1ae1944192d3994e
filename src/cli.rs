use clap::error::ErrorKind;
use clap::Parser;
use sonar_export::shared::error::ExportError;
use sonar_export::shared::Result;
use std::ffi::OsString;
use std::path::PathBuf;

/// Export SonarQube issues and metrics for a project to CSV reports
#[derive(Parser, Debug)]
#[command(name = "sonar-export")]
#[command(version)]
#[command(about = "Export SonarQube issues and metrics for a project to CSV reports", long_about = None)]
pub struct Args {
    /// Base URL of the SonarQube server (e.g. http://localhost:9000)
    #[arg(value_name = "SERVER_URL")]
    pub server_url: String,

    /// Key of the project to export
    #[arg(value_name = "PROJECT_KEY")]
    pub project_key: String,

    /// User token used for authentication
    #[arg(value_name = "AUTH_TOKEN")]
    pub token: String,

    /// Output path of the issues report
    #[arg(value_name = "ISSUES_FILE")]
    pub issues_file: PathBuf,

    /// Output path of the metrics report
    #[arg(value_name = "METRICS_FILE")]
    pub metrics_file: PathBuf,

    /// Path to a config file (defaults to ./sonar-export.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parses the process arguments
    ///
    /// `--help` and `--version` print and exit here; any other parse
    /// failure is returned as `ExportError::Usage`.
    pub fn parse_args() -> Result<Self> {
        Self::parse_from_args(std::env::args_os())
    }

    pub fn parse_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(args) => Ok(args),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => Err(ExportError::Usage {
                message: e.to_string().trim_end().to_string(),
            }
            .into()),
        }
    }
}
