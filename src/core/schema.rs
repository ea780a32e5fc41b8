//! core::schema
//!
//! Index descriptors as the generator sees them after schema introspection.
//!
//! Descriptors are plain data. Nothing here is validated; the naming rules
//! check what they need when they run.

use serde::{Deserialize, Serialize};

/// A column participating in an index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Field {
    /// Column name.
    pub name: String,
}

impl Field {
    /// Create a field descriptor.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A table index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Index {
    /// Index name as reported by the database.
    pub name: String,
    /// Whether the index enforces uniqueness.
    #[serde(default)]
    pub is_unique: bool,
    /// Whether this is the table's primary key.
    #[serde(default)]
    pub is_primary: bool,
    /// Indexed columns, in index order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Index {
    /// Create a primary key descriptor. Primary keys are always unique.
    pub fn primary_key(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            is_unique: true,
            is_primary: true,
            fields,
        }
    }

    /// Create a unique, non-primary index descriptor.
    pub fn unique(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            is_unique: true,
            is_primary: false,
            fields,
        }
    }

    /// Create a plain, non-unique index descriptor.
    pub fn plain(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            is_unique: false,
            is_primary: false,
            fields,
        }
    }
}
