//! core::fixture
//!
//! The sample indexes that reproduce the duplicate function bug.
//!
//! Table `xo_test` has a primary key and a unique index over the same single
//! column. Before the fix both produced `XoTestById`.

use super::schema::{Field, Index};

/// Table the sample indexes belong to.
pub const SAMPLE_TABLE: &str = "xo_test";

/// Build the two sample index descriptors: the primary key first, then the
/// unique secondary index.
pub fn sample_indexes() -> Vec<Index> {
    vec![
        Index::primary_key("xo_test_pkey", vec![Field::new("id")]),
        Index::unique("xo_test_id_unique", vec![Field::new("id")]),
    ]
}
