//! Human-readable validation report.

use std::fmt::Write;
use std::path::Path;

use crate::validator::ValidationResult;

const BANNER_WIDTH: usize = 60;
const TITLE: &str = "Pre-flight Configuration Validation Report";

/// Overall verdict printed at the bottom of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    Valid,
    ValidWithWarnings,
    Failed,
}

impl Summary {
    /// First match wins: errors, then warnings, then clean.
    pub fn of(result: &ValidationResult) -> Self {
        match (result.errors.is_empty(), result.warnings.is_empty()) {
            (true, true) => Summary::Valid,
            (true, false) => Summary::ValidWithWarnings,
            (false, _) => Summary::Failed,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Summary::Valid => "✅ Configuration is valid!",
            Summary::ValidWithWarnings => "✅ Configuration is valid (with warnings)",
            Summary::Failed => "❌ Configuration validation failed!",
        }
    }
}

/// Render the report for `path`.
pub fn render_report(path: &Path, result: &ValidationResult) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", banner);
    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "{}", banner);
    let _ = writeln!(out, "File: {}", path.display());
    out.push('\n');

    render_block(&mut out, "❌ ERRORS:", &result.errors);
    render_block(&mut out, "⚠️  WARNINGS:", &result.warnings);

    let _ = writeln!(out, "{}", Summary::of(result).message());
    let _ = writeln!(out, "{}", banner);
    out
}

fn render_block(out: &mut String, heading: &str, messages: &[String]) {
    if messages.is_empty() {
        return;
    }
    let _ = writeln!(out, "{}", heading);
    for message in messages {
        let _ = writeln!(out, "  • {}", message);
    }
    out.push('\n');
}
