use openapi_check::cli::run_cli;
use openapi_check::logging::{init_logging_with_config, LogConfig};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    init_logging_with_config(&LogConfig::from_env())?;
    run_cli()
}
