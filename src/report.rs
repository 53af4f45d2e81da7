//! Final pass/fail banner and counters.

use crate::checker::Summary;
use crate::terminal::Palette;
use std::io::{self, Write};

/// Overall result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was checked and nothing failed
    NothingChecked,
    /// At least one file passed and nothing failed
    Valid,
    /// At least one failure was recorded
    Invalid,
}

impl Outcome {
    #[must_use]
    pub fn classify(summary: Summary) -> Self {
        match (summary.passes, summary.failures) {
            (0, 0) => Outcome::NothingChecked,
            (_, 0) => Outcome::Valid,
            _ => Outcome::Invalid,
        }
    }

    /// Banner tag without color codes
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Outcome::NothingChecked => "[WARN]",
            Outcome::Valid => "[OK]",
            Outcome::Invalid => "[FAIL]",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Outcome::NothingChecked => "no JSON files with OpenAPI detected",
            Outcome::Valid => "OpenAPI file seems to have proper format and content",
            Outcome::Invalid => "file with invalid format and/or content detected",
        }
    }

    fn color(self, palette: &Palette) -> &str {
        match self {
            Outcome::NothingChecked => &palette.magenta,
            Outcome::Valid => &palette.green,
            Outcome::Invalid => &palette.red,
        }
    }
}

/// Write the banner followed by the pass and failure counters.
///
/// The two counter lines are stable and meant to be grepped by CI.
pub fn display_report<W: Write>(summary: Summary, palette: &Palette, out: &mut W) -> io::Result<()> {
    let outcome = Outcome::classify(summary);
    writeln!(
        out,
        "{}{}{}: {}",
        outcome.color(palette),
        outcome.tag(),
        palette.reset,
        outcome.description()
    )?;
    writeln!(out, "{} passes", summary.passes)?;
    writeln!(out, "{} failures", summary.failures)?;
    out.flush()
}
