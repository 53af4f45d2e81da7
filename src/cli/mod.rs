//! # CLI Module
//!
//! Command-line entry point of the `openapi-check` binary.
//!
//! ## Usage
//!
//! ```bash
//! openapi-check [-v] [-n] [-d DIRECTORY]
//! ```
//!
//! Options:
//! - `-v, --verbose` - Print progress while walking the document
//! - `-n, --no-colors` - Plain-text report banner
//! - `-d, --directory <DIR>` - Directory holding `openapi.json` (default: `./`,
//!   env: `OPENAPI_CHECK_DIRECTORY`)
//! - `--file-name <NAME>` - File to check inside the directory (default: `openapi.json`,
//!   env: `OPENAPI_CHECK_FILE_NAME`)
//!
//! ## Exit Status
//!
//! - `0` - no failures
//! - `1` - at least one failure, or the file could not be read
//!
//! ## Examples
//!
//! ```bash
//! # Check ./openapi.json
//! openapi-check
//!
//! # Check docs/openapi.json with progress output and no colors (CI logs)
//! openapi-check -v -n -d docs
//! ```

mod commands;


pub use commands::{execute, run_cli, Cli};
