//! # openapi-check
//!
//! A CI gate that checks the documentation completeness of an OpenAPI specification
//! serialized as JSON.
//!
//! ## Overview
//!
//! The checker walks one `openapi.json` file depth-first and requires a non-blank
//! `description` on:
//!
//! - the document's `info` node
//! - every operation (`paths.<path>.<method>`)
//! - every operation parameter
//! - every operation response
//!
//! Each problem is printed as soon as it is found. A colored `[OK]` / `[FAIL]` / `[WARN]`
//! banner and the pass/failure counters follow at the end, and the process exit status
//! tells CI whether anything failed. This is not a schema validator: types, `$ref`s and
//! all fields other than `description` are ignored.
//!
//! ## Architecture
//!
//! - **[`checker`]** - attribute checks, node validators and the traversal driver
//! - **[`diagnostics`]** - output sink and typed findings
//! - **[`report`]** - outcome classification and the final banner
//! - **[`terminal`]** - pluggable terminal control codes for colors
//! - **[`config`]** - resolved run configuration
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - command-line entry point
//!
//! ## Example
//!
//! ```rust
//! use openapi_check::checker::check_content;
//! use openapi_check::diagnostics::Diagnostics;
//! use std::path::Path;
//!
//! let mut diag = Diagnostics::new(Vec::new(), false);
//! let summary = check_content(
//!     Path::new("openapi.json"),
//!     br#"{"info": {"description": "Pet store"}, "paths": {}}"#,
//!     &mut diag,
//! );
//! assert_eq!((summary.passes, summary.failures), (1, 0));
//! ```

pub mod checker;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod logging;
pub mod report;
pub mod terminal;

pub use checker::{check_openapi_json, Summary};
pub use config::CheckConfig;
pub use diagnostics::{Diagnostics, Finding, FindingKind, Location};
