//! CSV output backend.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;

use crate::row::COLUMNS;
use crate::writer::OutputWriter;
use crate::{DatasetRow, OutputError, OutputResult};

/// Writes the dataset to one CSV file, header first.
pub struct CsvWriter {
    inner:    Writer<File>,
    path:     PathBuf,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let mut inner = Writer::from_path(path)?;
        inner.write_record(COLUMNS)?;
        inner.flush()?;
        Ok(Self { inner, path: path.to_path_buf(), finished: false })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for CsvWriter {
    fn append(&mut self, row: &DatasetRow) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        self.inner.write_record(row.fields())?;
        self.inner.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
