//! # OpenAPI Documentation Checker
//!
//! Verifies that an OpenAPI JSON document is documented well enough to publish.
//!
//! ## Checks Performed
//!
//! 1. **File format** - the file must parse as JSON
//! 2. **Info description** - `info.description` must exist and not be blank
//! 3. **Operation description** - every `paths.<path>.<method>.description`
//! 4. **Parameter descriptions** - every entry of an operation's `parameters`
//! 5. **Response descriptions** - every entry of an operation's `responses`
//!
//! Nothing stops at the first problem: every violation in the file is reported in a
//! single run. Each validator prints its diagnostics through [`Diagnostics`] and returns
//! the number of failures it found, so counts are summed bottom-up.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use openapi_check::checker::check_openapi_json;
//! use openapi_check::diagnostics::Diagnostics;
//! use std::path::Path;
//!
//! let mut diag = Diagnostics::new(std::io::stdout().lock(), false);
//! let summary = check_openapi_json(&Path::new("./").join("openapi.json"), &mut diag)?;
//! println!("{} passes, {} failures", summary.passes, summary.failures);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::diagnostics::{Diagnostics, Finding, FindingKind, Location};
use anyhow::Context;
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, warn};

mod attribute;


pub use attribute::{attribute, is_blank, Attribute};

/// Path-item keys that are not HTTP methods
const PATH_ITEM_FIELDS: &[&str] = &["summary", "description", "servers", "parameters", "$ref"];

/// Label used in diagnostics for a parameter with neither `name` nor `$ref`
pub const UNNAMED_PARAMETER: &str = "<unnamed>";

/// Result of checking one file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Files that parsed and raised no failures
    pub passes: usize,
    /// Problems found
    pub failures: usize,
}

impl Summary {
    #[must_use]
    pub fn new(passes: usize, failures: usize) -> Self {
        Summary { passes, failures }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures == 0
    }

    /// Process exit status for CI: 0 when nothing failed, 1 otherwise
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        }
    }
}

/// Check the OpenAPI JSON file at `spec_path`.
///
/// # Errors
///
/// Returns an error only if the file cannot be read. Invalid JSON and every
/// documentation problem are reported through `diag` and counted in the summary.
pub fn check_openapi_json<W: Write>(
    spec_path: &Path,
    diag: &mut Diagnostics<W>,
) -> anyhow::Result<Summary> {
    let content = std::fs::read(spec_path)
        .with_context(|| format!("failed to read {}", spec_path.display()))?;
    Ok(check_content(spec_path, &content, diag))
}

/// Parse `content` as JSON and check it; `source` names the file in diagnostics.
///
/// Bytes that are not UTF-8 are a parse failure like any other malformed input.
pub fn check_content<W: Write>(
    source: &Path,
    content: &[u8],
    diag: &mut Diagnostics<W>,
) -> Summary {
    let document: Value = match serde_json::from_slice(content) {
        Ok(document) => document,
        Err(err) => {
            debug!(file = %source.display(), error = %err, "invalid JSON");
            let failures = diag.fail(Finding::new(
                FindingKind::InvalidJson,
                Location::File(source.to_path_buf()),
                format!("{} has invalid JSON format", source.display()),
            ));
            diag.note(format_args!("{}", err));
            return Summary::new(0, failures);
        }
    };

    diag.progress(format_args!("{} has valid JSON format", source.display()));

    let failures = check_document(&document, diag);
    let passes = usize::from(failures == 0);
    Summary::new(passes, failures)
}

/// Run every check against an already deserialized document.
pub fn check_document<W: Write>(document: &Value, diag: &mut Diagnostics<W>) -> usize {
    check_info_node(document, diag) + check_all_paths(document, diag)
}

/// Check the description in the `info` node.
///
/// Never contributes more than one failure.
pub fn check_info_node<W: Write>(document: &Value, diag: &mut Diagnostics<W>) -> usize {
    diag.progress(format_args!("    checking info node"));

    if document.is_null() {
        return diag.fail(Finding::new(
            FindingKind::EmptyDocument,
            Location::Document,
            "Empty object has been deserialized",
        ));
    }

    // Value::get yields None on arrays and scalars too, so they land here.
    let Some(info) = document.get("info") else {
        return diag.fail(Finding::new(
            FindingKind::MissingInfo,
            Location::Document,
            "Info node can't be found",
        ));
    };

    match description_problem(info) {
        Some(kind) => diag.fail(Finding::new(
            kind,
            Location::Document,
            format!("{} description provided for the whole file", kind.lead()),
        )),
        None => 0,
    }
}

/// Check every operation of every path.
pub fn check_all_paths<W: Write>(document: &Value, diag: &mut Diagnostics<W>) -> usize {
    // A non-mapping document has already been reported by the info check.
    let Some(root) = document.as_object() else {
        return 0;
    };

    diag.progress(format_args!("    checking all paths found in OpenAPI file"));

    let Some(paths) = root.get("paths") else {
        return diag.fail(Finding::new(
            FindingKind::MissingPaths,
            Location::Document,
            "Paths node can't be found",
        ));
    };

    let Some(paths) = paths.as_object() else {
        warn!("`paths` is not a mapping, skipping");
        return 0;
    };

    paths
        .iter()
        .map(|(path, path_item)| check_path(path, path_item, diag))
        .sum()
}

/// Check every operation declared under one path.
pub fn check_path<W: Write>(path: &str, path_item: &Value, diag: &mut Diagnostics<W>) -> usize {
    diag.progress(format_args!("    checking path {}", path));

    let Some(methods) = path_item.as_object() else {
        warn!(path, "path item is not a mapping, skipping");
        return 0;
    };

    methods
        .iter()
        .filter(|(method, _)| is_operation_key(method))
        .map(|(method, operation)| check_method(path, method, operation, diag))
        .sum()
}

/// Check one operation: its own description, its parameters and its responses.
pub fn check_method<W: Write>(
    path: &str,
    method: &str,
    operation: &Value,
    diag: &mut Diagnostics<W>,
) -> usize {
    diag.progress(format_args!("        checking method {}", method));
    debug!(path, method, "checking operation");

    check_description_for_method(path, method, operation, diag)
        + check_description_for_method_parameters(path, method, operation, diag)
        + check_description_for_method_responses(path, method, operation, diag)
}

/// Check that the operation itself is described; at most one failure.
pub fn check_description_for_method<W: Write>(
    path: &str,
    method: &str,
    operation: &Value,
    diag: &mut Diagnostics<W>,
) -> usize {
    match description_problem(operation) {
        Some(kind) => diag.fail(Finding::new(
            kind,
            Location::Operation {
                path: path.to_string(),
                method: method.to_string(),
            },
            format!(
                "{} description found for endpoint `{}` and method `{}`",
                kind.lead(),
                path,
                method
            ),
        )),
        None => 0,
    }
}

/// Check every parameter of an operation, in declaration order.
pub fn check_description_for_method_parameters<W: Write>(
    path: &str,
    method: &str,
    operation: &Value,
    diag: &mut Diagnostics<W>,
) -> usize {
    let Some(parameters) = operation.get("parameters") else {
        return 0;
    };
    let Some(parameters) = parameters.as_array() else {
        warn!(path, method, "`parameters` is not an array, skipping");
        return 0;
    };

    let mut failures = 0;
    for parameter in parameters {
        let Some(kind) = description_problem(parameter) else {
            continue;
        };
        let name = parameter_label(parameter);
        failures += diag.fail(Finding::new(
            kind,
            Location::Parameter {
                path: path.to_string(),
                method: method.to_string(),
                name: name.to_string(),
            },
            format!(
                "{} description found for endpoint `{}` method `{}` and parameter `{}`",
                kind.lead(),
                path,
                method,
                name
            ),
        ));
    }
    failures
}

/// Check every response of an operation.
pub fn check_description_for_method_responses<W: Write>(
    path: &str,
    method: &str,
    operation: &Value,
    diag: &mut Diagnostics<W>,
) -> usize {
    let Some(responses) = operation.get("responses") else {
        return 0;
    };
    let Some(responses) = responses.as_object() else {
        warn!(path, method, "`responses` is not a mapping, skipping");
        return 0;
    };

    let mut failures = 0;
    for (code, response) in responses {
        let Some(kind) = description_problem(response) else {
            continue;
        };
        failures += diag.fail(Finding::new(
            kind,
            Location::Response {
                path: path.to_string(),
                method: method.to_string(),
                code: code.clone(),
            },
            format!(
                "{} description found for endpoint `{}` method `{}` and response `{}`",
                kind.lead(),
                path,
                method,
                code
            ),
        ));
    }
    failures
}

/// The problem with a node's `description`, if any
fn description_problem(node: &Value) -> Option<FindingKind> {
    match attribute(node, "description") {
        Attribute::Missing => Some(FindingKind::MissingDescription),
        Attribute::Blank => Some(FindingKind::BlankDescription),
        Attribute::Text(_) => None,
    }
}

/// Name a parameter for diagnostics: `name`, else its `$ref`, else a placeholder
#[must_use]
pub(crate) fn parameter_label(parameter: &Value) -> &str {
    parameter
        .get("name")
        .and_then(Value::as_str)
        .or_else(|| parameter.get("$ref").and_then(Value::as_str))
        .unwrap_or(UNNAMED_PARAMETER)
}

/// Whether a path-item key names an operation rather than a shared field
#[must_use]
pub(crate) fn is_operation_key(key: &str) -> bool {
    !key.starts_with("x-") && !PATH_ITEM_FIELDS.contains(&key)
}
