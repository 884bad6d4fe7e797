//! Configuration loading from disk.
//!
//! The format is chosen by file extension alone; contents are never
//! sniffed. Every failure is a [`LoadError`] whose `Display` text is the
//! line that ends up in the validation report.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::config::document::{Document, Kind};

/// Supported serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Json => f.write_str("JSON"),
            ConfigFormat::Yaml => f.write_str("YAML"),
        }
    }
}

impl ConfigFormat {
    /// Pick a format from the path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .filter(|e| !e.is_empty())
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_default();

        match ext.as_str() {
            ".json" => Ok(ConfigFormat::Json),
            ".yaml" | ".yml" => Ok(ConfigFormat::Yaml),
            _ => Err(LoadError::UnsupportedType(ext)),
        }
    }
}

/// Errors that stop a validation run before any schema rule executes.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported file type: {0}. Use .json, .yaml, or .yml")]
    UnsupportedType(String),

    /// The parser rejected the content.
    #[error("{format} syntax error: {detail}")]
    Syntax { format: ConfigFormat, detail: String },

    /// The file could not be read, or parsed into something other than a
    /// mapping.
    #[error("Error reading {format} file: {detail}")]
    Read { format: ConfigFormat, detail: String },

    #[error("YAML file is empty or invalid")]
    EmptyYaml,
}

/// Check existence, dispatch on extension, read and parse `path`.
pub fn load_document(path: &Path) -> Result<Document, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let format = ConfigFormat::from_path(path)?;
    tracing::debug!(path = %path.display(), %format, "Parsing configuration");

    let content = fs::read_to_string(path).map_err(|e| LoadError::Read {
        format,
        detail: e.to_string(),
    })?;

    parse_document(&content, format)
}

/// Parse `content` and require a mapping at the top level.
pub fn parse_document(content: &str, format: ConfigFormat) -> Result<Document, LoadError> {
    let document = match format {
        ConfigFormat::Json => parse_json(content)?,
        ConfigFormat::Yaml => parse_yaml(content)?,
    };

    match document.kind() {
        Kind::Mapping => Ok(document),
        Kind::Null if format == ConfigFormat::Yaml => Err(LoadError::EmptyYaml),
        found => Err(LoadError::Read {
            format,
            detail: format!("top-level value must be a mapping, found {}", found),
        }),
    }
}

fn parse_json(content: &str) -> Result<Document, LoadError> {
    use serde_json::error::Category;

    serde_json::from_str::<serde_json::Value>(content)
        .map(Document::from)
        .map_err(|e| match e.classify() {
            Category::Syntax | Category::Eof => LoadError::Syntax {
                format: ConfigFormat::Json,
                detail: e.to_string(),
            },
            Category::Io | Category::Data => LoadError::Read {
                format: ConfigFormat::Json,
                detail: e.to_string(),
            },
        })
}

fn parse_yaml(content: &str) -> Result<Document, LoadError> {
    let syntax = |e: serde_yaml::Error| LoadError::Syntax {
        format: ConfigFormat::Yaml,
        detail: e.to_string(),
    };

    let mut documents = serde_yaml::Deserializer::from_str(content);

    // An empty or comment-only stream yields no document at all.
    let Some(first) = documents.next() else {
        return Err(LoadError::EmptyYaml);
    };
    let mut value = serde_yaml::Value::deserialize(first).map_err(syntax)?;

    if let Some(extra) = documents.next() {
        serde_yaml::Value::deserialize(extra).map_err(syntax)?;
        return Err(LoadError::Syntax {
            format: ConfigFormat::Yaml,
            detail: "expected a single document in the stream".to_string(),
        });
    }

    // Resolve `<<: *anchor` merge keys the way a safe loader does.
    value.apply_merge().map_err(syntax)?;

    Ok(value.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("lb.json")).unwrap(), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("lb.YAML")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("lb.Yml")).unwrap(), ConfigFormat::Yaml);
    }

    #[test]
    fn test_unsupported_extension_message() {
        let err = ConfigFormat::from_path(Path::new("config.TXT")).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported file type: .txt. Use .json, .yaml, or .yml");

        let err = ConfigFormat::from_path(Path::new("config")).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported file type: . Use .json, .yaml, or .yml");
    }

    #[test]
    fn test_trailing_dot_has_no_extension() {
        let err = ConfigFormat::from_path(Path::new("lb.")).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported file type: . Use .json, .yaml, or .yml");
    }

    #[test]
    fn test_json_syntax_error() {
        let err = parse_document("{\"frontend\": ", ConfigFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::Syntax { format: ConfigFormat::Json, .. }));
        assert!(err.to_string().starts_with("JSON syntax error: "));
    }

    #[test]
    fn test_json_non_mapping_root_is_read_error() {
        let err = parse_document("[1, 2]", ConfigFormat::Json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error reading JSON file: top-level value must be a mapping, found list"
        );

        let err = parse_document("null", ConfigFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn test_yaml_empty_and_comment_only() {
        for content in ["", "   \n", "# nothing here\n# at all\n", "---\n", "~\n"] {
            let err = parse_document(content, ConfigFormat::Yaml).unwrap_err();
            assert!(matches!(err, LoadError::EmptyYaml), "content {:?}", content);
        }
    }

    #[test]
    fn test_yaml_syntax_error() {
        let err = parse_document("frontend: [port: 80\n", ConfigFormat::Yaml).unwrap_err();
        assert!(err.to_string().starts_with("YAML syntax error: "));
    }

    #[test]
    fn test_yaml_multiple_documents_rejected() {
        let err = parse_document("a: 1\n---\nb: 2\n", ConfigFormat::Yaml).unwrap_err();
        assert_eq!(err.to_string(), "YAML syntax error: expected a single document in the stream");
    }

    #[test]
    fn test_yaml_mapping_parses() {
        let doc = parse_document("frontend:\n  port: 80\n", ConfigFormat::Yaml).unwrap();
        assert!(doc.contains_key("frontend"));
    }

    #[test]
    fn test_yaml_merge_keys_resolved() {
        let content = "\
defaults: &defaults
  port: 80
  protocol: http
frontend:
  <<: *defaults
  protocol: https
";
        let doc = parse_document(content, ConfigFormat::Yaml).unwrap();
        let frontend = doc.get("frontend").unwrap();
        assert_eq!(frontend.get("port"), Some(&Document::Number("80".into())));
        assert_eq!(frontend.get("protocol"), Some(&Document::String("https".into())));
        assert!(!frontend.contains_key("<<"));
    }

    #[test]
    fn test_yaml_invalid_merge_is_syntax_error() {
        let err = parse_document("frontend:\n  <<: 5\n", ConfigFormat::Yaml).unwrap_err();
        assert!(err.to_string().starts_with("YAML syntax error: "));
    }
}
