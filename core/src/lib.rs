#![deny(missing_docs)]

//! # apiswag Core
//!
//! Converts an already-parsed HTTP API description into a Swagger 2.0
//! document model.

/// Shared error types.
pub mod error;

/// The input API description and its tag grammar.
pub mod ir;

/// Type mapping logic (declared type name -> Swagger primitive).
pub mod type_mapping;

/// Swagger document model and the conversion engine.
pub mod swagger;

pub use error::{AppError, AppResult};
pub use ir::{ApiDescription, Member, Route, RouteGroup, ServiceDescription, StructType, Tag};
pub use swagger::{build_document, Document};
pub use type_mapping::{kind_of, primitive_schema, FieldKind, PrimitiveSchema};
