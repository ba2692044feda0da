//! SQLite output backend (feature `sqlite`).
//!
//! One table, `dataset`, with the same columns as the CSV backend.  Each
//! append is its own autocommitted insert.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{DatasetRow, OutputError, OutputResult};

/// Writes the dataset to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) the database at `path` and start an empty `dataset`
    /// table, dropping any previous one.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = FULL;
             DROP TABLE IF EXISTS dataset;
             CREATE TABLE dataset (
                 receive_time      REAL    NOT NULL,
                 node_id           INTEGER NOT NULL,
                 send_time         REAL    NOT NULL,
                 propagation_delay REAL    NOT NULL,
                 signal_strength   REAL    NOT NULL,
                 true_x            REAL    NOT NULL,
                 true_y            REAL    NOT NULL,
                 true_z            REAL    NOT NULL,
                 reported_x        REAL    NOT NULL,
                 reported_y        REAL    NOT NULL,
                 reported_z        REAL    NOT NULL,
                 is_anomaly        INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn append(&mut self, row: &DatasetRow) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO dataset \
             (receive_time, node_id, send_time, propagation_delay, signal_strength, \
              true_x, true_y, true_z, reported_x, reported_y, reported_z, is_anomaly) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        )?;
        stmt.execute(rusqlite::params![
            row.receive_time,
            row.node_id,
            row.send_time,
            row.propagation_delay,
            row.signal_strength,
            row.true_x,
            row.true_y,
            row.true_z,
            row.reported_x,
            row.reported_y,
            row.reported_z,
            row.is_anomaly,
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
