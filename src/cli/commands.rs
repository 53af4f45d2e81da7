use crate::checker::{check_openapi_json, Summary};
use crate::config::{CheckConfig, DEFAULT_DIRECTORY, DEFAULT_SPEC_FILE};
use crate::diagnostics::Diagnostics;
use crate::report::display_report;
use crate::terminal::{ControlCodes, NoColors, Palette, Tput};
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Command-line interface for the OpenAPI documentation checker
///
/// Checks that the OpenAPI JSON file, each of its operations, and every
/// parameter and response carry a non-empty description.
#[derive(Parser, Debug)]
#[command(name = "openapi-check", version)]
#[command(about = "Simple checker for OpenAPI specification files", long_about = None)]
pub struct Cli {
    /// Make it verbose
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable color output
    #[arg(short, long = "no-colors", default_value_t = false)]
    pub no_colors: bool,

    /// Directory with the OpenAPI JSON file to check
    #[arg(
        short,
        long,
        env = "OPENAPI_CHECK_DIRECTORY",
        default_value = DEFAULT_DIRECTORY
    )]
    pub directory: PathBuf,

    /// Name of the OpenAPI JSON file inside the directory
    #[arg(long, env = "OPENAPI_CHECK_FILE_NAME", default_value = DEFAULT_SPEC_FILE)]
    pub file_name: String,
}

impl From<Cli> for CheckConfig {
    fn from(cli: Cli) -> Self {
        CheckConfig {
            verbose: cli.verbose,
            colors: !cli.no_colors,
            directory: cli.directory,
            file_name: cli.file_name,
        }
    }
}

/// Check the configured file and print diagnostics and the report to `out`.
///
/// # Errors
///
/// Returns an error if the OpenAPI file cannot be read or `out` cannot be written.
pub fn execute<W: Write>(
    config: &CheckConfig,
    codes: &dyn ControlCodes,
    out: W,
) -> anyhow::Result<Summary> {
    let spec_path = config.spec_path();
    info!(file = %spec_path.display(), "checking OpenAPI file");

    let mut diag = Diagnostics::new(out, config.verbose);
    let summary = check_openapi_json(&spec_path, &mut diag)?;
    let mut out = diag.finish().context("failed to write diagnostics")?;

    let palette = if config.colors {
        Palette::from_codes(codes)
    } else {
        Palette::plain()
    };
    display_report(summary, &palette, &mut out).context("failed to write report")?;

    info!(
        passes = summary.passes,
        failures = summary.failures,
        "check finished"
    );
    Ok(summary)
}

/// Parse the command line, run the check on stdout and map the result to an exit code
///
/// # Errors
///
/// Returns an error if the OpenAPI file cannot be read or stdout cannot be written.
pub fn run_cli() -> anyhow::Result<ExitCode> {
    let config = CheckConfig::from(Cli::parse());
    let codes: &dyn ControlCodes = if config.colors { &Tput } else { &NoColors };
    let summary = execute(&config, codes, std::io::stdout().lock())?;
    Ok(summary.exit_code())
}
