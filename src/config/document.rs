//! Typed document model.
//!
//! Both JSON and YAML parse into [`Document`], so the validation rules
//! never see format-specific value types. Field lookups return explicit
//! states instead of coercing: a string is never searched like a mapping,
//! and only string keys match a key lookup.

use std::fmt;

/// A parsed configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Null,
    Bool(bool),
    Number(String),
    String(String),
    Sequence(Vec<Document>),
    /// Entries in source order. Keys are documents because YAML allows
    /// non-string keys.
    Mapping(Vec<(Document, Document)>),
}

/// Coarse shape of a document node, used in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Sequence,
    Mapping,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Sequence => "list",
            Kind::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

/// Result of looking up a field and checking its shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    Absent,
    WrongType(Kind),
    Present(&'a Document),
}

impl<'a> Field<'a> {
    /// Wrap a raw lookup, checking the value against `expected`.
    pub fn expect_kind(value: Option<&'a Document>, expected: Kind) -> Self {
        match value {
            None => Field::Absent,
            Some(doc) if doc.kind() == expected => Field::Present(doc),
            Some(doc) => Field::WrongType(doc.kind()),
        }
    }
}

impl Document {
    pub fn kind(&self) -> Kind {
        match self {
            Document::Null => Kind::Null,
            Document::Bool(_) => Kind::Bool,
            Document::Number(_) => Kind::Number,
            Document::String(_) => Kind::String,
            Document::Sequence(_) => Kind::Sequence,
            Document::Mapping(_) => Kind::Mapping,
        }
    }

    pub fn as_mapping(&self) -> Option<&[(Document, Document)]> {
        match self {
            Document::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Document]> {
        match self {
            Document::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a string key. Returns `None` for non-mappings as well as
    /// missing keys; callers that care about the difference check
    /// [`Document::kind`] first.
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| matches!(k, Document::String(s) if s == key))
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Look up `key` and check that its value has the `expected` shape.
    pub fn field(&self, key: &str, expected: Kind) -> Field<'_> {
        Field::expect_kind(self.get(key), expected)
    }
}

impl From<serde_json::Value> for Document {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Document::Null,
            Value::Bool(b) => Document::Bool(b),
            Value::Number(n) => Document::Number(n.to_string()),
            Value::String(s) => Document::String(s),
            Value::Array(items) => Document::Sequence(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => Document::Mapping(
                map.into_iter()
                    .map(|(k, v)| (Document::String(k), v.into()))
                    .collect(),
            ),
        }
    }
}

impl From<serde_yaml::Value> for Document {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;
        match value {
            Value::Null => Document::Null,
            Value::Bool(b) => Document::Bool(b),
            Value::Number(n) => Document::Number(n.to_string()),
            Value::String(s) => Document::String(s),
            Value::Sequence(items) => {
                Document::Sequence(items.into_iter().map(Into::into).collect())
            }
            Value::Mapping(map) => {
                Document::Mapping(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
            }
            // Tags are never resolved to constructors; validate the content.
            Value::Tagged(tagged) => tagged.value.into(),
        }
    }
}
