//! Assignment table writer.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::decoder::AssignmentOutcome;
use crate::{Error, Result};

/// Default output location: `<stem>_assigned<.ext>` next to the input file.
pub fn output_path_for<P: AsRef<Path>>(input_path: P) -> PathBuf {
    let input_path = input_path.as_ref();
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = input_path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    input_path.with_file_name(format!("{}_assigned{}", stem, suffix))
}

/// Writer for assignment results.
///
/// Rows have different lengths: each participant row ends in its group's column.
pub struct TableWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl TableWriter<File> {
    /// Create (or truncate) the output file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref()).map_err(|e| {
            Error::IoError(std::io::Error::new(
                e.kind(),
                format!(
                    "failed to create output file '{}': {}",
                    path.as_ref().display(),
                    e
                ),
            ))
        })?;
        Ok(Self::new(file))
    }
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().flexible(true).from_writer(writer),
        }
    }

    /// Write the header and one row per participant, in participant order.
    ///
    /// # Arguments
    /// * `corner` - Top-left header cell, usually copied from the input
    /// * `outcome` - Decoded assignment
    pub fn write_outcome(&mut self, corner: &str, outcome: &AssignmentOutcome) -> Result<()> {
        let mut header = Vec::with_capacity(outcome.groups.len() + 1);
        header.push(corner.to_string());
        header.extend(outcome.groups.iter().map(|g| g.label()));
        self.writer.write_record(&header)?;

        for assignment in &outcome.participants {
            let mut row = Vec::with_capacity(assignment.group + 2);
            row.push(assignment.name.clone());
            row.extend(std::iter::repeat(String::new()).take(assignment.group));
            row.push(assignment.cost.to_string());
            self.writer.write_record(&row)?;
        }

        self.writer.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| Error::IoError(e.into_error()))
    }
}
