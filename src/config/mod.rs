//! Configuration parsing and schema checks.
//!
//! # Data Flow
//! ```text
//! config file (JSON/YAML, chosen by extension)
//!     → loader.rs (read & parse)
//!     → document.rs (format-agnostic Document tree)
//!     → validation.rs (presence/shape rules)
//!     → ValidationResult (errors + warnings)
//! ```
//!
//! # Design Decisions
//! - Loader failures end the run; schema findings accumulate
//! - No typed config struct: the tool reports on shape, it never applies values
//! - Only presence and container types are checked, never value ranges

pub mod document;
pub mod loader;
pub mod validation;

pub use document::{Document, Field, Kind};
pub use loader::{load_document, ConfigFormat, LoadError};
pub use validation::validate_document;
