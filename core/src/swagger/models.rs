#![deny(missing_docs)]

//! # Swagger Models
//!
//! Typed output tree for an OpenAPI 2.0 ("Swagger") document.
//!
//! Empty optional fields are omitted on serialization, except where a Swagger
//! consumer expects the key (`Parameter::required`, `streamDefinitions`).

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Root Swagger 2.0 document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    /// Schema version, always `"2.0"`.
    pub swagger: String,
    /// API metadata.
    pub info: Info,
    /// Transfer protocols.
    pub schemes: Vec<String>,
    /// Request MIME types.
    pub consumes: Vec<String>,
    /// Response MIME types.
    pub produces: Vec<String>,
    /// Path items keyed by (rewritten) path template, in route discovery order.
    pub paths: IndexMap<String, PathItem>,
    /// One schema per struct type, keyed by type name.
    pub definitions: BTreeMap<String, SchemaObject>,
    /// Streaming definitions. Always present, currently never populated.
    #[serde(rename = "streamDefinitions")]
    pub stream_definitions: BTreeMap<String, SchemaObject>,
    /// Security schemes keyed by name.
    #[serde(rename = "securityDefinitions")]
    pub security_definitions: BTreeMap<String, SecurityScheme>,
}

/// The `info` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Info {
    /// API title.
    pub title: String,
    /// API version.
    pub version: String,
    /// API description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A security scheme definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SecurityScheme {
    /// Scheme type, e.g. `apiKey`.
    #[serde(rename = "type")]
    pub type_: String,
    /// Human readable description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Header or query parameter name.
    pub name: String,
    /// Location of the key (`header` or `query`).
    #[serde(rename = "in")]
    pub in_: String,
}

/// Operations available on one path template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathItem {
    /// GET operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    /// POST operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    /// PUT operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    /// DELETE operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
}

impl PathItem {
    /// True when no method slot is populated.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.get.is_none() && self.post.is_none() && self.put.is_none() && self.delete.is_none()
    }
}

/// One method's behaviour at a path.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Operation {
    /// Short summary (joined route docs).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    /// Long description from the route's `@doc` block.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Handler name.
    #[serde(rename = "operationId", skip_serializing_if = "String::is_empty")]
    pub operation_id: String,
    /// Responses keyed by status code.
    pub responses: BTreeMap<String, Response>,
    /// Parameters in emission order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Grouping tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A response entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Response {
    /// Response description.
    pub description: String,
    /// Response schema; an empty schema when the route has no response type.
    pub schema: SchemaObject,
}

/// Where a parameter is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// URL path segment.
    Path,
    /// Query string.
    Query,
    /// Request header.
    Header,
    /// Request body.
    Body,
}

/// A parameter object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Description from the member comment.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Location.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Whether the parameter must be supplied.
    pub required: bool,
    /// Primitive type (non-body parameters).
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,
    /// Primitive format.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub format: String,
    /// Default value, carried as the raw tag text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Body schema (body parameters only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaObject>,
}

impl Parameter {
    /// Creates a parameter with no type information.
    pub fn new(name: impl Into<String>, location: ParameterLocation) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            location,
            required: false,
            type_: String::new(),
            format: String::new(),
            default: None,
            schema: None,
        }
    }
}

/// A JSON-schema fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchemaObject {
    /// Reference to a named definition.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,
    /// Schema type.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,
    /// Schema format.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub format: String,
    /// Title (definitions carry their type name).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Default value, carried as the raw tag text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Element schema of an array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaObject>>,
    /// Object properties in member order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
    /// Names of required properties.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl SchemaObject {
    /// A bare `$ref` schema.
    pub fn reference(ref_path: impl Into<String>) -> Self {
        Self {
            ref_path: Some(ref_path.into()),
            ..Default::default()
        }
    }

    /// A primitive `(type, format)` schema.
    pub fn primitive(type_: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            type_: type_.into(),
            format: format.into(),
            ..Default::default()
        }
    }

    /// An array whose elements follow `items`.
    pub fn array(items: SchemaObject) -> Self {
        Self {
            type_: "array".to_string(),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }
}

/// Ordered property list.
///
/// Serialized as a JSON object whose key order follows insertion order. Keys
/// are not de-duplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(Vec<(String, SchemaObject)>);

impl Properties {
    /// Appends a property.
    pub fn push(&mut self, key: impl Into<String>, schema: SchemaObject) {
        self.0.push((key.into(), schema));
    }

    /// Property keys in order.
    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no properties.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Properties {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
