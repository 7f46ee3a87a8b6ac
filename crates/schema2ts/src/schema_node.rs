use std::fmt::Display;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::render::get_enum_type;

pub type Properties = IndexMap<String, SchemaNode>;

/// One fragment of an input schema.
///
/// Only the keywords that influence generation are kept, everything else
/// (`$schema`, `required`, `format`, ...) is dropped while parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "deserialize_type_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub type_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_entries: Option<Vec<EnumEntry>>,
}

impl SchemaNode {
    pub fn kind(&self) -> NodeKind {
        NodeKind::from(self)
    }

    /// Properties in insertion order, empty when the node declares none.
    pub fn properties(&self) -> impl Iterator<Item = (&String, &SchemaNode)> {
        self.properties.iter().flatten()
    }

    pub fn has_properties(&self) -> bool {
        self.properties.is_some()
    }

    /// Array nodes are recognised by their tag or by carrying `items`.
    pub fn is_array(&self) -> bool {
        self.items.is_some() || matches!(self.kind(), NodeKind::Array)
    }
}

// `type` may legally be a list of tags; those nodes fall back to `any`
fn deserialize_type_tag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_str().map(String::from)))
}

/// A labelled enum option. Entries without a value keep their position but
/// are never rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEnumEntry")]
pub struct EnumEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl EnumEntry {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            value: Some(value.into()),
        }
    }

    pub fn untitled(value: impl Into<String>) -> Self {
        Self {
            title: None,
            value: Some(value.into()),
        }
    }

    pub fn without_value(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            value: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEnumEntry {
    Bare(String),
    Labeled {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        value: Option<String>,
    },
}

impl From<RawEnumEntry> for EnumEntry {
    fn from(raw: RawEnumEntry) -> Self {
        match raw {
            RawEnumEntry::Bare(value) => EnumEntry::untitled(value),
            RawEnumEntry::Labeled { title, value } => EnumEntry { title, value },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    String,
    Number,
    Boolean,
    Integer,
    Null,
    Undefined,
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let typ = match self {
            PrimitiveType::String => "string",
            PrimitiveType::Number => "number",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Null => "null",
            PrimitiveType::Undefined => "undefined",
        };

        write!(f, "{typ}")
    }
}

/// Classification of a [`SchemaNode`] driving both type resolution and the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Primitive(PrimitiveType),
    /// Primitive restricted to a set of literals; `body` is the rendered union.
    Enum { body: String },
    Object,
    Array,
    Unknown,
}

impl NodeKind {
    pub fn is_obj(&self) -> bool {
        matches!(self, NodeKind::Object)
    }
}

impl From<&SchemaNode> for NodeKind {
    fn from(node: &SchemaNode) -> Self {
        let Some(tag) = node.type_tag.as_deref() else {
            return NodeKind::Unknown;
        };

        let primitive = match tag.to_ascii_lowercase().as_str() {
            "string" => PrimitiveType::String,
            "number" => PrimitiveType::Number,
            "boolean" => PrimitiveType::Boolean,
            "integer" => PrimitiveType::Integer,
            "null" => PrimitiveType::Null,
            "undefined" => PrimitiveType::Undefined,
            "object" => return NodeKind::Object,
            "array" => return NodeKind::Array,
            _ => return NodeKind::Unknown,
        };

        // an enum whose entries all lack values renders nothing, keep the primitive
        if let Some(entries) = &node.enum_entries {
            let body = get_enum_type(entries);
            if !body.is_empty() {
                return NodeKind::Enum { body };
            }
        }

        NodeKind::Primitive(primitive)
    }
}
