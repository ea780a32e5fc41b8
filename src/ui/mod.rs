//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! All console writes go through this module so quiet handling and error
//! formatting stay consistent.

pub mod output;
