//! Pre-flight validation for load balancer configuration files.
//!
//! Checks a JSON or YAML file describing a frontend, backend pools and
//! health checks before an orchestration tool applies it.

pub mod config;
pub mod observability;
pub mod report;
pub mod validator;

pub use report::Summary;
pub use validator::{validate_file, ConfigValidator, ValidationResult};
