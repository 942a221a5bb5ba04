use crate::config::{NOT_AVAILABLE, STACK_OUTPUT_FIELDS};
use crate::core::{Entry, Row};

/// Projects a row onto exactly `output_cols`, in that order. Absent columns
/// become "N/A"; present but empty cells stay empty.
pub fn project_domain(row: &Row, output_cols: &[&str]) -> Entry {
    let mut entry = Entry::new();
    for col in output_cols {
        entry.insert(*col, row.get(col).unwrap_or(NOT_AVAILABLE));
    }
    entry
}

/// Projects a stack row onto the shared Category/Pattern/Code/Rule/Explanation
/// shape, whatever columns the stack file carries.
pub fn project_stack(row: &Row) -> Entry {
    let mut entry = Entry::new();
    for (field, column, fallback) in STACK_OUTPUT_FIELDS {
        entry.insert(field, row.get(column).unwrap_or(fallback));
    }
    entry
}
