//! # IR Models
//!
//! definition of the already-parsed API description consumed by the converter.
//!
//! All types are read-only views handed over by the upstream parser; they are
//! deserialized once and never mutated during conversion.

use crate::error::AppResult;
use crate::ir::tags::{Tag, JSON_KEY};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The complete API description: metadata, service and every declared type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDescription {
    /// Global `info` block (raw quoted literals).
    #[serde(default)]
    pub info: Info,
    /// The single service with its route groups.
    pub service: ServiceDescription,
    /// Every struct type declared in the API, in declaration order.
    #[serde(default)]
    pub types: Vec<StructType>,
}

impl ApiDescription {
    /// Decodes an IR document from JSON.
    pub fn from_json(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// The `info` block of the API file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    /// Property values exactly as written, quotes included (e.g. `"\"v1\""`).
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

/// A named service and its route groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescription {
    /// Service name, used as the default operation tag.
    pub name: String,
    /// Route groups in declaration order.
    #[serde(default)]
    pub groups: Vec<RouteGroup>,
}

/// A group of routes sharing one server annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteGroup {
    /// Group-level annotation (`@server(...)`).
    #[serde(default)]
    pub annotation: Annotation,
    /// Routes in declaration order.
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// Key/value annotation block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Annotation properties.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl Annotation {
    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// A single HTTP route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Path template with `:name` segments.
    pub path: String,
    /// HTTP method as written.
    pub method: String,
    /// Handler name, used as the operation id.
    #[serde(default)]
    pub handler: String,
    /// Request type, if declared.
    #[serde(default)]
    pub request_type: Option<TypeRef>,
    /// Response type, if declared.
    #[serde(default)]
    pub response_type: Option<TypeRef>,
    /// Documentation comment lines.
    #[serde(default)]
    pub docs: Vec<String>,
    /// The `@doc(...)` block.
    #[serde(default)]
    pub at_doc: AtDoc,
}

impl Route {
    /// Joined documentation: the `@doc` text if set, else the comment lines.
    pub fn joined_doc(&self) -> String {
        let doc = if self.at_doc.text.is_empty() {
            self.docs.join(" ")
        } else {
            self.at_doc.text.clone()
        };
        doc.trim().to_string()
    }

    /// The request struct, when the request type is a struct.
    pub fn request_struct(&self) -> Option<&StructType> {
        self.request_type.as_ref().and_then(TypeRef::as_struct)
    }
}

/// The `@doc` block of a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtDoc {
    /// Free text form: `@doc "..."`.
    #[serde(default)]
    pub text: String,
    /// Key/value form: `@doc(summary: "...", description: "...")`.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

/// A reference to a request or response type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    /// A struct type with its members inlined.
    Struct(StructType),
    /// Any other type (primitive, array, map, ...), carried by name only.
    Named {
        /// Type name as written.
        name: String,
    },
}

impl TypeRef {
    /// The type name.
    pub fn name(&self) -> &str {
        match self {
            TypeRef::Struct(s) => &s.name,
            TypeRef::Named { name } => name,
        }
    }

    /// The struct definition, if this is a struct.
    pub fn as_struct(&self) -> Option<&StructType> {
        match self {
            TypeRef::Struct(s) => Some(s),
            TypeRef::Named { .. } => None,
        }
    }
}

/// A struct type: unique name plus ordered members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructType {
    /// Type name, unique across the API.
    pub name: String,
    /// Members in declaration order.
    #[serde(default)]
    pub members: Vec<Member>,
}

/// A struct member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Field name.
    pub name: String,
    /// Declared type name, possibly decorated (`[]T`, `*T`, `[]*T`).
    #[serde(rename = "type")]
    pub type_name: String,
    /// Raw tag string, e.g. `json:"id,optional"`.
    #[serde(default)]
    pub tag: String,
    /// Trailing comment, `//` included.
    #[serde(default)]
    pub comment: String,
}

impl Member {
    /// Parses every tag of the member.
    pub fn tags(&self) -> Vec<Tag> {
        Tag::parse_all(&self.tag)
    }

    /// The tag stored under `key`, if present.
    pub fn tag(&self, key: &str) -> Option<Tag> {
        self.tags().into_iter().find(|t| t.key == key)
    }

    /// True when a tag with `key` is present.
    pub fn has_tag(&self, key: &str) -> bool {
        self.tags().iter().any(|t| t.key == key)
    }

    /// The JSON property name: the `json` tag name, else the field name.
    pub fn property_name(&self) -> String {
        match self.tag(JSON_KEY) {
            Some(tag) if !tag.name.is_empty() => tag.name,
            _ => self.name.clone(),
        }
    }

    /// The comment with its leading slashes removed.
    pub fn description(&self) -> &str {
        self.comment.trim_start_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(tag: &str) -> Member {
        Member {
            name: "Age".into(),
            type_name: "int".into(),
            tag: tag.into(),
            comment: "// user age".into(),
        }
    }

    #[test]
    fn test_property_name_prefers_json_tag() {
        assert_eq!(member(r#"json:"age""#).property_name(), "age");
        assert_eq!(member(r#"form:"age""#).property_name(), "Age");
        assert_eq!(member(r#"json:",optional""#).property_name(), "Age");
    }

    #[test]
    fn test_description_strips_slashes_only() {
        assert_eq!(member("").description(), " user age");
    }

    #[test]
    fn test_joined_doc() {
        let mut route = Route {
            docs: vec!["get".into(), "user ".into()],
            ..Default::default()
        };
        assert_eq!(route.joined_doc(), "get user");

        route.at_doc.text = "  fetch a user ".into();
        assert_eq!(route.joined_doc(), "fetch a user");
    }

    #[test]
    fn test_decode_ir_json() {
        let raw = r#"{
            "info": { "properties": { "title": "\"demo\"" } },
            "service": {
                "name": "user-api",
                "groups": [{
                    "annotation": { "properties": { "group": "user" } },
                    "routes": [{
                        "path": "/user/:id",
                        "method": "get",
                        "handler": "GetUser",
                        "request_type": {
                            "kind": "struct",
                            "name": "UserReq",
                            "members": [{ "name": "ID", "type": "string", "tag": "path:\"id\"" }]
                        },
                        "response_type": { "kind": "named", "name": "UserResp" }
                    }]
                }]
            },
            "types": [{ "name": "UserResp", "members": [] }]
        }"#;

        let api = ApiDescription::from_json(raw).unwrap();
        let route = &api.service.groups[0].routes[0];
        assert_eq!(api.service.groups[0].annotation.get("group"), Some("user"));
        assert_eq!(route.request_struct().map(|s| s.name.as_str()), Some("UserReq"));
        assert_eq!(route.response_type.as_ref().map(TypeRef::name), Some("UserResp"));
        assert!(route.request_struct().unwrap().members[0].has_tag("path"));
    }

    #[test]
    fn test_decode_rejects_missing_service() {
        assert!(ApiDescription::from_json("{}").is_err());
    }
}
