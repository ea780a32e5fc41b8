//! core
//!
//! Core domain types and rules.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Identifier
//! - [`schema`] - Index and field descriptors
//! - [`naming`] - Index lookup function naming
//! - [`fixture`] - The sample indexes behind the duplicate function bug
//!
//! # Design Principles
//!
//! - Identifiers are validated before they reach the naming rules
//! - Naming is deterministic and preserves input order

pub mod fixture;
pub mod naming;
pub mod schema;
pub mod types;
