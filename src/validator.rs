//! One validation run over one configuration file.
//!
//! # Data Flow
//! ```text
//! path
//!     → existence check        (fail fast)
//!     → format dispatch        (fail fast)
//!     → parse into Document    (fail fast)
//!     → schema rules           (cumulative)
//!     → ValidationResult
//! ```

use std::path::{Path, PathBuf};

use crate::config::loader::load_document;
use crate::config::validation::validate_document;
use crate::report::{render_report, Summary};

/// Errors and warnings collected during one pass, in the order found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Valid iff no errors were recorded. Warnings never count.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "Validation error");
        self.errors.push(message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "Validation warning");
        self.warnings.push(message);
    }

    pub fn summary(&self) -> Summary {
        Summary::of(self)
    }
}

/// Validates the configuration file at a fixed path.
#[derive(Debug)]
pub struct ConfigValidator {
    path: PathBuf,
    result: ValidationResult,
}

impl ConfigValidator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            result: ValidationResult::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Findings of the most recent [`validate`](Self::validate) call.
    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    /// Run a fresh pass over the file. Returns true when no errors were found.
    ///
    /// Previous findings are discarded first, so repeated calls on an
    /// unchanged file produce identical results.
    pub fn validate(&mut self) -> bool {
        self.result = validate_file(&self.path);
        self.result.is_valid()
    }

    /// Render the report for the current findings.
    pub fn report(&self) -> String {
        render_report(&self.path, &self.result)
    }
}

/// Run one validation pass over `path`.
pub fn validate_file(path: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();

    match load_document(path) {
        Ok(document) => validate_document(&document, &mut result),
        Err(e) => result.error(e.to_string()),
    }

    tracing::info!(
        path = %path.display(),
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "Validation finished"
    );
    result
}
