//! Input table parser.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::groups::Group;
use crate::preferences::Participant;
use crate::{Error, Result};

/// Parsed input table: groups from the header row, one participant per further row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentTable {
    /// Top-left header cell, echoed back in the output.
    pub corner: String,
    pub groups: Vec<Group>,
    pub participants: Vec<Participant>,
}

impl AssignmentTable {
    /// Read and validate the table at `file_path`.
    ///
    /// # Errors
    /// * [`Error::MissingInput`] if the file cannot be opened
    /// * [`Error::InvalidGroupFormat`] listing every malformed group token
    /// * [`Error::InvalidPreference`] / [`Error::TooManyColumns`] for bad participant rows
    pub fn from_path<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let path = file_path.as_ref();
        let file = File::open(path).map_err(|e| {
            debug!("failed to open {}: {}", path.display(), e);
            Error::MissingInput(path.to_path_buf())
        })?;
        Self::from_reader(file)
    }

    /// Read and validate a table from any byte source.
    ///
    /// A leading UTF-8 byte order mark is ignored, as are empty cells at the end
    /// of the header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut records = csv_reader.records();

        let header = records.next().ok_or(Error::EmptyInput)??;
        let mut cells: Vec<&str> = header.iter().collect();
        if cells.is_empty() {
            return Err(Error::EmptyInput);
        }
        let corner = cells.remove(0).trim_start_matches('\u{feff}').to_string();
        while cells.last().is_some_and(|c| c.trim().is_empty()) {
            cells.pop();
        }
        let groups = Group::parse_all(&cells)?;

        let mut participants = Vec::new();
        for record in records {
            let record = record?;
            let name = record.get(0).unwrap_or_default();
            let preferences: Vec<&str> = record.iter().skip(1).collect();
            participants.push(Participant::from_cells(name, &preferences, groups.len())?);
        }

        Ok(Self {
            corner,
            groups,
            participants,
        })
    }
}
