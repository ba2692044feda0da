//! `DatasetObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use uw_core::SimTime;
use uw_sim::{ReceptionRecord, SimObserver, SimStats};
use tracing::info;

use crate::row::DatasetRow;
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that appends one row per sink reception to any
/// [`OutputWriter`] backend.
///
/// A write error is returned from `on_reception`, which stops the run:
/// rows are never silently lost.
pub struct DatasetObserver<W: OutputWriter> {
    writer:    W,
    rows:      u64,
    anomalous: u64,
}

impl<W: OutputWriter> DatasetObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, anomalous: 0 }
    }

    /// Rows written so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Rows written so far with the anomaly flag set.
    pub fn anomalous(&self) -> u64 {
        self.anomalous
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: OutputWriter> SimObserver for DatasetObserver<W> {
    type Error = OutputError;

    fn on_reception(&mut self, record: &ReceptionRecord) -> Result<(), OutputError> {
        self.writer.append(&DatasetRow::from(record))?;
        self.rows += 1;
        if record.anomaly {
            self.anomalous += 1;
        }
        Ok(())
    }

    fn on_sim_end(&mut self, at: SimTime, stats: &SimStats) -> Result<(), OutputError> {
        self.writer.finish()?;
        info!(
            at = %at,
            rows = self.rows,
            anomalous = self.anomalous,
            sent = stats.sent,
            "dataset closed"
        );
        Ok(())
    }
}
