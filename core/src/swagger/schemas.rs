//! # Field Schemas
//!
//! Converts one struct member into a schema fragment: a primitive, an array,
//! or a `$ref` to another definition.

use crate::ir::tags::JSON_KEY;
use crate::ir::Member;
use crate::swagger::models::SchemaObject;
use crate::type_mapping::{kind_of, primitive_schema, FieldKind};

const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Builds the `#/definitions/<name>` reference for a type name.
pub fn definition_ref(type_name: &str) -> String {
    format!("{}{}", DEFINITIONS_PREFIX, type_name)
}

/// Removes one layer of `[`, `]` and `*` from a decorated type name.
///
/// `[]*User` becomes `User`; `*User` becomes `User`.
pub fn strip_decorations(type_name: &str) -> String {
    type_name
        .replacen('[', "", 1)
        .replacen(']', "", 1)
        .replacen('*', "", 1)
}

/// Builds the schema of a single member.
pub fn schema_of_field(member: &Member) -> SchemaObject {
    let type_name = member.type_name.as_str();
    let kind = kind_of(type_name);

    let mut schema = match kind {
        FieldKind::Unresolved => {
            let reference = SchemaObject::reference(definition_ref(&strip_decorations(type_name)));
            if type_name.starts_with("[]") {
                SchemaObject::array(reference)
            } else {
                reference
            }
        }
        FieldKind::Sequence => {
            let element_kind = kind_of(&type_name.replace("[]", ""));
            let (type_, format) = primitive_schema(element_kind, type_name).or_unknown(kind);
            SchemaObject::array(SchemaObject::primitive(type_, format))
        }
        _ => {
            let (type_, format) = primitive_schema(kind, type_name).or_unknown(kind);
            SchemaObject::primitive(type_, format)
        }
    };

    schema.description = member.description().to_string();
    if let Some(tag) = member.tag(JSON_KEY) {
        // `options=` is recognised by the tag parser but not projected here.
        if let Some(default) = tag.default_value() {
            schema.default = Some(default.to_string());
        }
    }

    schema
}
