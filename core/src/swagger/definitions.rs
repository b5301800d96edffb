//! # Definition Rendering
//!
//! Produces one object schema per struct type. Every type is emitted whether
//! or not a route references it.

use crate::ir::tags::JSON_KEY;
use crate::ir::StructType;
use crate::swagger::models::{Properties, SchemaObject};
use crate::swagger::schemas::schema_of_field;
use std::collections::BTreeMap;
use tracing::debug;

/// Renders every struct type into `definitions`, keyed by type name.
pub fn render_definitions(types: &[StructType], definitions: &mut BTreeMap<String, SchemaObject>) {
    for ty in types {
        let schema = render_definition(ty);
        debug!(
            definition = %ty.name,
            properties = schema.properties.as_ref().map_or(0, Properties::len),
            "rendered definition"
        );
        definitions.insert(ty.name.clone(), schema);
    }
}

/// Builds the object schema of one struct type from its json-tagged members.
pub fn render_definition(ty: &StructType) -> SchemaObject {
    let mut schema = SchemaObject {
        type_: "object".to_string(),
        title: ty.name.clone(),
        ..Default::default()
    };

    for member in &ty.members {
        let Some(tag) = member.tag(JSON_KEY) else {
            continue;
        };

        schema
            .properties
            .get_or_insert_with(Properties::default)
            .push(member.property_name(), schema_of_field(member));

        if !tag.has_options() {
            // No options at all: always required, duplicates included.
            schema.required.push(tag.name);
        } else if !tag.is_optional() && !schema.required.contains(&tag.name) {
            schema.required.push(tag.name);
        }
    }

    schema
}
