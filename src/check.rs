//! check
//!
//! The verification report for the dbtpl duplicate function fix.
//!
//! The report is fixed text. It is not computed from the sample indexes; the
//! naming behavior it describes is exercised by the tests of
//! [`crate::core::naming`].

use crate::ui::output;
use std::io::{self, Write};

/// Report lines, in output order.
pub const REPORT: [&str; 6] = [
    "Testing dbtpl duplicate function fix...",
    "✓ Fixed dbtpl binary built successfully",
    "✓ Unit tests validate the fix works correctly",
    "✓ Primary key will keep original name: XoTestById",
    "✓ Unique index will get suffix: XoTestByIdUnique",
    "✓ Demo is ready for validation!",
];

/// Write the report to `out`.
///
/// # Errors
///
/// Returns the first write error; nothing after it is written.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    output::print_lines(out, &REPORT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixture::{sample_indexes, SAMPLE_TABLE};
    use crate::core::naming::assign_unique_index_func_names;
    use crate::core::types::Identifier;

    #[test]
    fn writes_six_lines_exactly() {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();
        let expected = "Testing dbtpl duplicate function fix...\n\
            ✓ Fixed dbtpl binary built successfully\n\
            ✓ Unit tests validate the fix works correctly\n\
            ✓ Primary key will keep original name: XoTestById\n\
            ✓ Unique index will get suffix: XoTestByIdUnique\n\
            ✓ Demo is ready for validation!\n";
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn report_claims_match_naming_rules() {
        let table = Identifier::new(SAMPLE_TABLE).unwrap();
        let names = assign_unique_index_func_names(&table, &sample_indexes()).unwrap();

        assert!(REPORT[3].ends_with(&format!(": {}", names[0].func_name)));
        assert!(REPORT[4].ends_with(&format!(": {}", names[1].func_name)));
    }
}
