//! dbtpl-fixcheck - Verification stub for the dbtpl duplicate function fix
//!
//! dbtpl generates one lookup function per table index. When a primary key and
//! a unique index cover the same columns, both used to receive the same
//! function name. The fix keeps the primary key's name and suffixes the other.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, runs the check)
//! - [`check`] - The fixed six-line verification report
//! - [`core`] - Index descriptors, identifiers, and function naming rules
//! - [`ui`] - Output helpers
//!
//! The binary only prints the report. The naming behavior the report talks
//! about is implemented in [`core::naming`] and checked by the test suite.

pub mod check;
pub mod cli;
pub mod core;
pub mod ui;
