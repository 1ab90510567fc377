use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::value::MetadataValue;

/// Suffix appended to the record name to form the artifact file name.
pub const ARTIFACT_SUFFIX: &str = ".component.json";

/// Metadata of one class, ready for validation and emission.
///
/// Serializes as `name`, then every extracted field in source order, then
/// `env: { context }`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRecord {
    fields: IndexMap<String, MetadataValue>,
    context: String,
}

impl MetadataRecord {
    /// Build the record for `class_name` from the extracted decorator argument.
    ///
    /// Only object arguments contribute fields. An extracted `name` replaces the class
    /// name but stays first; an extracted `env` is dropped in favour of the context.
    pub fn new(class_name: &str, extracted: MetadataValue, context: impl Into<String>) -> Self {
        let mut fields = IndexMap::new();
        fields.insert("name".to_string(), MetadataValue::from(class_name));
        if let MetadataValue::Object(map) = extracted {
            for (key, value) in map {
                if key == "env" {
                    continue;
                }
                fields.insert(key, value);
            }
        }
        MetadataRecord {
            fields,
            context: context.into(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.fields.get(key)
    }

    /// The `name` field when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(MetadataValue::as_str)
    }

    pub fn thumbnail(&self) -> Option<&MetadataValue> {
        self.get("thumbnail")
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// Field names in output order, `env` excluded.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// `<name>.component.json`
    pub fn artifact_name(&self) -> String {
        format!("{}{}", self.name().unwrap_or_default(), ARTIFACT_SUFFIX)
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

struct Env<'r> {
    context: &'r str,
}

impl Serialize for Env<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("context", self.context)?;
        map.end()
    }
}

impl Serialize for MetadataRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(
            "env",
            &Env {
                context: &self.context,
            },
        )?;
        map.end()
    }
}
