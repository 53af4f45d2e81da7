//! Terminal control codes used to color the final report.
//!
//! Codes are looked up by terminfo operation name (`setab 1`, `sgr0`, ...) through a
//! [`ControlCodes`] backend. A failed lookup yields an empty string, so a missing
//! `tput` binary or an unknown `TERM` degrades to plain text.

use std::process::{Command, Stdio};
use tracing::debug;

/// Source of raw terminal control sequences
pub trait ControlCodes {
    /// Return the control sequence for `operation`, or an empty string if unavailable
    fn lookup(&self, operation: &str) -> String;
}

/// Asks the system `tput` utility for control codes
#[derive(Debug, Clone, Copy, Default)]
pub struct Tput;

impl ControlCodes for Tput {
    fn lookup(&self, operation: &str) -> String {
        let mut args = operation.split_whitespace();
        let Some(capability) = args.next() else {
            return String::new();
        };

        let output = Command::new("tput")
            .arg(capability)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        match output {
            Ok(output) if output.status.success() => {
                let text = String::from_utf8_lossy(&output.stdout);
                text.lines().next().unwrap_or_default().to_string()
            }
            Ok(output) => {
                debug!(operation, status = %output.status, "tput lookup failed");
                String::new()
            }
            Err(err) => {
                debug!(operation, error = %err, "tput not available");
                String::new()
            }
        }
    }
}

/// Backend used when colors are disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoColors;

impl ControlCodes for NoColors {
    fn lookup(&self, _operation: &str) -> String {
        String::new()
    }
}

/// Color tags for the three report banners plus the reset sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    pub red: String,
    pub green: String,
    pub magenta: String,
    pub reset: String,
}

impl Palette {
    /// Resolve all tags through `codes`
    #[must_use]
    pub fn from_codes(codes: &dyn ControlCodes) -> Self {
        Palette {
            red: codes.lookup("setab 1"),
            green: codes.lookup("setab 2"),
            magenta: codes.lookup("setab 5"),
            reset: codes.lookup("sgr0"),
        }
    }

    /// A palette with every tag empty
    #[must_use]
    pub fn plain() -> Self {
        Palette::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Fixed(HashMap<&'static str, &'static str>);

    impl ControlCodes for Fixed {
        fn lookup(&self, operation: &str) -> String {
            self.0.get(operation).copied().unwrap_or_default().to_string()
        }
    }

    #[test]
    fn test_palette_uses_background_codes() {
        let codes = Fixed(HashMap::from([
            ("setab 1", "<red>"),
            ("setab 2", "<green>"),
            ("setab 5", "<magenta>"),
            ("sgr0", "<reset>"),
        ]));

        let palette = Palette::from_codes(&codes);
        assert_eq!(palette.red, "<red>");
        assert_eq!(palette.green, "<green>");
        assert_eq!(palette.magenta, "<magenta>");
        assert_eq!(palette.reset, "<reset>");
    }

    #[test]
    fn test_unknown_operations_are_empty() {
        let palette = Palette::from_codes(&Fixed(HashMap::new()));
        assert_eq!(palette, Palette::plain());
    }

    #[test]
    fn test_no_colors_is_plain() {
        assert_eq!(Palette::from_codes(&NoColors), Palette::plain());
    }

    #[test]
    fn test_tput_empty_operation() {
        assert_eq!(Tput.lookup("   "), "");
    }
}
