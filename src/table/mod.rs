//! CSV table layout used by the command line tool.
//!
//! Input: the first row holds an arbitrary corner cell followed by one
//! `<group name>=<group size>` token per group. Every further row holds a
//! participant name followed by that participant's preference per group
//! (0 is best); cells may be left empty.
//!
//! Output: the same corner cell followed by `<group name>=<assigned count>`,
//! then one row per participant with empty cells up to the assigned group's
//! column and the realized cost in that column.

mod reader;
mod writer;

pub use reader::AssignmentTable;
pub use writer::{output_path_for, TableWriter};
