//! Configuration schema validation.
//!
//! # Responsibilities
//! - Check that required top-level sections exist
//! - Check required keys inside `frontend` and each backend pool
//! - Check that list-typed fields really are lists
//! - Flag defaultable health check omissions as warnings
//!
//! # Design Decisions
//! - Returns all findings, not just the first
//! - One rule set for every format: rules run on [`Document`]
//! - A section with the wrong shape gets one error and its inner checks are skipped

use crate::config::document::{Document, Field, Kind};
use crate::validator::ValidationResult;

/// Top-level sections every configuration must define.
pub const REQUIRED_KEYS: [&str; 3] = ["frontend", "backend_pools", "health_checks"];

/// Run every schema rule against a parsed document.
pub fn validate_document(doc: &Document, result: &mut ValidationResult) {
    for key in REQUIRED_KEYS {
        if !doc.contains_key(key) {
            result.error(format!("Missing required key: {}", key));
        }
    }

    validate_frontend(doc, result);
    validate_backend_pools(doc, result);
    validate_health_checks(doc, result);
}

fn validate_frontend(doc: &Document, result: &mut ValidationResult) {
    let frontend = match doc.field("frontend", Kind::Mapping) {
        Field::Absent => return,
        Field::WrongType(_) => {
            result.error("'frontend' must be a mapping");
            return;
        }
        Field::Present(frontend) => frontend,
    };

    if !frontend.contains_key("port") {
        result.error("Frontend missing 'port' configuration");
    }
    if !frontend.contains_key("protocol") {
        result.error("Frontend missing 'protocol' configuration");
    }
}

fn validate_backend_pools(doc: &Document, result: &mut ValidationResult) {
    let pools = match doc.field("backend_pools", Kind::Sequence) {
        Field::Absent => return,
        Field::WrongType(_) => {
            result.error("'backend_pools' must be a list");
            return;
        }
        Field::Present(pools) => pools.as_sequence().unwrap_or_default(),
    };

    for (i, pool) in pools.iter().enumerate() {
        validate_backend_pool(i, pool, result);
    }
}

fn validate_backend_pool(index: usize, pool: &Document, result: &mut ValidationResult) {
    if pool.kind() != Kind::Mapping {
        result.error(format!("Backend pool {} must be a mapping", index));
        return;
    }

    if !pool.contains_key("name") {
        result.error(format!("Backend pool {} missing 'name'", index));
    }

    match pool.field("servers", Kind::Sequence) {
        Field::Absent => result.error(format!("Backend pool {} missing 'servers'", index)),
        Field::WrongType(_) => {
            result.error(format!("Backend pool {} 'servers' must be a list", index))
        }
        Field::Present(_) => {}
    }
}

fn validate_health_checks(doc: &Document, result: &mut ValidationResult) {
    let health_checks = match doc.field("health_checks", Kind::Mapping) {
        Field::Absent => return,
        Field::WrongType(_) => {
            result.error("'health_checks' must be a mapping");
            return;
        }
        Field::Present(health_checks) => health_checks,
    };

    for key in ["interval", "timeout"] {
        if !health_checks.contains_key(key) {
            result.warning(format!("Health checks missing '{}', using default", key));
        }
    }
}
