//! # Diagnostics Module
//!
//! Every problem the checker finds is reported twice: as a human-readable line written
//! immediately to the output stream, and as a typed [`Finding`] kept for callers that
//! want to inspect results programmatically.
//!
//! Progress lines (`checking path /pets`, ...) are written only when the sink is
//! verbose. Write errors never interrupt a traversal; the first one is latched and
//! returned from [`Diagnostics::finish`].

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

/// Indentation used for operation-level diagnostics
const OPERATION_INDENT: &str = "            ";

/// Category of a reported problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    /// File content is not valid JSON
    InvalidJson,
    /// Document deserialized to `null`
    EmptyDocument,
    /// Document has no `info` node
    MissingInfo,
    /// Document has no `paths` node
    MissingPaths,
    /// `description` key is absent
    MissingDescription,
    /// `description` key holds only whitespace
    BlankDescription,
}

impl FindingKind {
    /// Leading word of the diagnostic line for description problems
    pub(crate) fn lead(self) -> &'static str {
        match self {
            FindingKind::BlankDescription => "Empty",
            _ => "No",
        }
    }

    /// Stable identifier, e.g. for filtering
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FindingKind::InvalidJson => "invalid_json",
            FindingKind::EmptyDocument => "empty_document",
            FindingKind::MissingInfo => "missing_info",
            FindingKind::MissingPaths => "missing_paths",
            FindingKind::MissingDescription => "missing_description",
            FindingKind::BlankDescription => "blank_description",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where in the checked file a problem was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// The file as a whole (e.g. it does not parse)
    File(PathBuf),
    /// The document root or its `info` node
    Document,
    /// An operation (path + HTTP method)
    Operation { path: String, method: String },
    /// A parameter of an operation
    Parameter {
        path: String,
        method: String,
        name: String,
    },
    /// A response of an operation
    Response {
        path: String,
        method: String,
        code: String,
    },
}

impl Location {
    fn indent(&self) -> &'static str {
        match self {
            Location::File(_) | Location::Document => "",
            _ => OPERATION_INDENT,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::File(path) => write!(f, "{}", path.display()),
            Location::Document => f.write_str("info"),
            Location::Operation { path, method } => write!(f, "{} {}", path, method),
            Location::Parameter { path, method, name } => {
                write!(f, "{} {} parameter {}", path, method, name)
            }
            Location::Response { path, method, code } => {
                write!(f, "{} {} response {}", path, method, code)
            }
        }
    }
}

/// A single documentation-completeness problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub kind: FindingKind,
    pub location: Location,
    /// The diagnostic line, without indentation
    pub message: String,
}

impl Finding {
    #[must_use]
    pub fn new(kind: FindingKind, location: Location, message: impl Into<String>) -> Self {
        Finding {
            kind,
            location,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.location.indent(), self.message)
    }
}

/// Output sink shared by all validators during one run
pub struct Diagnostics<W: Write> {
    out: W,
    verbose: bool,
    findings: Vec<Finding>,
    error: Option<io::Error>,
}

impl<W: Write> Diagnostics<W> {
    #[must_use]
    pub fn new(out: W, verbose: bool) -> Self {
        Diagnostics {
            out,
            verbose,
            findings: Vec::new(),
            error: None,
        }
    }

    /// Write a progress line; dropped unless verbose
    pub fn progress(&mut self, args: fmt::Arguments<'_>) {
        if self.verbose {
            self.write_line(args);
        }
    }

    /// Write a line unconditionally
    pub fn note(&mut self, args: fmt::Arguments<'_>) {
        self.write_line(args);
    }

    /// Report a finding and return the number of failures it contributes (always 1),
    /// so validators can sum the result directly.
    pub fn fail(&mut self, finding: Finding) -> usize {
        tracing::debug!(
            kind = %finding.kind,
            location = %finding.location,
            "documentation problem"
        );
        self.write_line(format_args!("{}", finding));
        self.findings.push(finding);
        1
    }

    /// All findings reported so far, in report order
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Flush the sink and hand back the writer, or the first write error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_line(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}", args) {
            tracing::warn!(error = %err, "failed to write diagnostic line");
            self.error = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn operation_finding() -> Finding {
        Finding::new(
            FindingKind::MissingDescription,
            Location::Operation {
                path: "/pets".to_string(),
                method: "get".to_string(),
            },
            "No description found for endpoint `/pets` and method `get`",
        )
    }

    #[test]
    fn test_progress_respects_verbosity() {
        let mut quiet = Diagnostics::new(Vec::new(), false);
        quiet.progress(format_args!("    checking info node"));
        quiet.note(format_args!("always"));
        assert_eq!(String::from_utf8(quiet.finish().unwrap()).unwrap(), "always\n");

        let mut loud = Diagnostics::new(Vec::new(), true);
        loud.progress(format_args!("    checking info node"));
        assert_eq!(
            String::from_utf8(loud.finish().unwrap()).unwrap(),
            "    checking info node\n"
        );
    }

    #[test]
    fn test_fail_indents_operation_findings() {
        let mut diag = Diagnostics::new(Vec::new(), false);
        assert_eq!(diag.fail(operation_finding()), 1);
        assert_eq!(
            diag.fail(Finding::new(
                FindingKind::MissingInfo,
                Location::Document,
                "Info node can't be found"
            )),
            1
        );
        assert_eq!(diag.findings().len(), 2);

        let out = String::from_utf8(diag.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            "            No description found for endpoint `/pets` and method `get`\n\
             Info node can't be found\n"
        );
    }

    #[test]
    fn test_write_error_is_latched() {
        let mut diag = Diagnostics::new(BrokenPipe, false);
        assert_eq!(diag.fail(operation_finding()), 1);
        assert_eq!(diag.fail(operation_finding()), 1);
        assert_eq!(diag.findings().len(), 2);

        let err = diag.finish().err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_location_display() {
        let location = Location::Parameter {
            path: "/pets/{id}".to_string(),
            method: "delete".to_string(),
            name: "id".to_string(),
        };
        assert_eq!(location.to_string(), "/pets/{id} delete parameter id");
        assert_eq!(Location::Document.to_string(), "info");
    }
}
