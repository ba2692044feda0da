//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DatasetRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// `append` must leave the row durable before it returns: a run that is
/// killed afterwards still has every row appended so far.
pub trait OutputWriter {
    /// Write one row.
    fn append(&mut self, row: &DatasetRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn append(&mut self, row: &DatasetRow) -> OutputResult<()> {
        (**self).append(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

/// Writes every row to each inner writer in turn.  Stops at the first error.
#[derive(Default)]
pub struct Fanout {
    writers: Vec<Box<dyn OutputWriter>>,
}

impl Fanout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, writer: impl OutputWriter + 'static) {
        self.writers.push(Box::new(writer));
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

impl OutputWriter for Fanout {
    fn append(&mut self, row: &DatasetRow) -> OutputResult<()> {
        self.writers.iter_mut().try_for_each(|w| w.append(row))
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.writers.iter_mut().try_for_each(|w| w.finish())
    }
}
