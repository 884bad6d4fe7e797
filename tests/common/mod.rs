//! Shared fixtures for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Minimal valid configuration, as JSON.
#[allow(dead_code)]
pub const VALID_JSON: &str = r#"{"frontend":{"port":80,"protocol":"http"},"backend_pools":[{"name":"p1","servers":["10.0.0.1"]}],"health_checks":{"interval":5,"timeout":2}}"#;

/// Minimal valid configuration, as YAML.
#[allow(dead_code)]
pub const VALID_YAML: &str = "\
frontend:
  port: 80
  protocol: http
backend_pools:
  - name: p1
    servers:
      - 10.0.0.1
health_checks:
  interval: 5
  timeout: 2
";

/// A config file living in its own temporary directory.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

/// Write `content` to a file called `name` inside a fresh temp dir.
pub fn write_config(name: &str, content: &str) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    Fixture { _dir: dir, path }
}
