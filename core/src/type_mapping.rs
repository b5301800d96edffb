#![deny(missing_docs)]

//! # Type Mapping
//!
//! Classifies declared field type names into a closed set of kinds and maps
//! primitive kinds onto Swagger `(type, format)` pairs.

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::OnceLock;

/// Format emitted when a kind has no primitive mapping.
pub const UNKNOWN_FORMAT: &str = "UNKNOWN";

/// Canonical classification of a declared field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// 32-bit (or narrower) integer.
    Integer,
    /// 64-bit integer.
    Integer64,
    /// Boolean.
    Boolean,
    /// String.
    String,
    /// 32-bit float.
    Float32,
    /// 64-bit float.
    Float64,
    /// A slice of a primitive element, e.g. `[]string`.
    Sequence,
    /// Anything not in the table: structs, pointers to structs, slices of structs.
    Unresolved,
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldKind::Integer => "int",
            FieldKind::Integer64 => "int64",
            FieldKind::Boolean => "bool",
            FieldKind::String => "string",
            FieldKind::Float32 => "float32",
            FieldKind::Float64 => "float64",
            FieldKind::Sequence => "slice",
            FieldKind::Unresolved => "invalid",
        };
        write!(f, "{}", name)
    }
}

fn kind_table() -> &'static HashMap<String, FieldKind> {
    static TABLE: OnceLock<HashMap<String, FieldKind>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let scalars = [
            ("string", FieldKind::String),
            ("int", FieldKind::Integer),
            ("int8", FieldKind::Integer),
            ("int16", FieldKind::Integer),
            ("int32", FieldKind::Integer),
            ("uint", FieldKind::Integer),
            ("uint8", FieldKind::Integer),
            ("byte", FieldKind::Integer),
            ("rune", FieldKind::Integer),
            ("uint16", FieldKind::Integer),
            ("uint32", FieldKind::Integer),
            ("int64", FieldKind::Integer64),
            ("uint64", FieldKind::Integer64),
            ("bool", FieldKind::Boolean),
            ("float32", FieldKind::Float32),
            ("float64", FieldKind::Float64),
        ];

        // Each scalar also resolves through a pointer, and its slice is a sequence.
        let mut table = HashMap::new();
        for (name, kind) in scalars {
            table.insert(name.to_string(), kind);
            table.insert(format!("*{}", name), kind);
            table.insert(format!("[]{}", name), FieldKind::Sequence);
        }
        table
    })
}

/// Looks up the kind of a declared type name. Unknown names are [`FieldKind::Unresolved`].
pub fn kind_of(type_name: &str) -> FieldKind {
    kind_table()
        .get(type_name)
        .copied()
        .unwrap_or(FieldKind::Unresolved)
}

/// Result of mapping a kind onto a Swagger primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveSchema {
    /// A known `(type, format)` pair. `format` may be empty.
    Resolved {
        /// Swagger type.
        type_: String,
        /// Swagger format.
        format: String,
    },
    /// The kind is not a primitive (struct-like).
    Unknown,
}

impl PrimitiveSchema {
    /// Returns the pair, degrading to `(<kind name>, "UNKNOWN")` when unresolved.
    pub fn or_unknown(self, kind: FieldKind) -> (String, String) {
        match self {
            PrimitiveSchema::Resolved { type_, format } => (type_, format),
            PrimitiveSchema::Unknown => (kind.to_string(), UNKNOWN_FORMAT.to_string()),
        }
    }
}

/// Maps a kind (and the declared type name, for sequences) onto a Swagger primitive.
pub fn primitive_schema(kind: FieldKind, type_name: &str) -> PrimitiveSchema {
    let (type_, format) = match kind {
        FieldKind::Integer => ("integer", "int32"),
        FieldKind::Integer64 => ("integer", "int64"),
        FieldKind::Boolean => ("boolean", "boolean"),
        FieldKind::String => ("string", ""),
        FieldKind::Float32 => ("number", "float"),
        FieldKind::Float64 => ("number", "double"),
        FieldKind::Sequence => {
            return PrimitiveSchema::Resolved {
                type_: type_name.replace("[]", ""),
                format: String::new(),
            }
        }
        FieldKind::Unresolved => return PrimitiveSchema::Unknown,
    };
    PrimitiveSchema::Resolved {
        type_: type_.to_string(),
        format: format.to_string(),
    }
}
