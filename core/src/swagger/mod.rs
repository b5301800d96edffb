#![deny(missing_docs)]

//! # Swagger Module
//!
//! The mapping engine: routes become path items and operations, struct types
//! become JSON-schema definitions.

pub mod definitions;
pub mod document;
pub mod models;
pub mod params;
pub mod paths;
pub mod routes;
pub mod schemas;

pub use document::{build_document, unquote};
pub use models::{
    Document, Info, Operation, Parameter, ParameterLocation, PathItem, Properties, Response,
    SchemaObject, SecurityScheme,
};
pub use routes::HttpMethod;
