//! Observability subsystem.
//!
//! # Design Decisions
//! - Diagnostics use `tracing`; the validation report itself is plain
//!   stdout text and never goes through the subscriber

pub mod logging;

pub use logging::init_logging;
