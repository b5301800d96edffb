#![deny(missing_docs)]

//! # IR Module
//!
//! The in-memory API description handed over by the upstream parser, plus the
//! parser for the struct field tag micro-grammar.

pub mod models;
pub mod tags;

pub use models::{
    ApiDescription, Annotation, AtDoc, Info, Member, Route, RouteGroup, ServiceDescription,
    StructType, TypeRef,
};
pub use tags::{Tag, TagOption};
