//! `uw-output`: the dataset sink for uwsn-ids.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend     | Destination                                  |
//! |-----------|-------------|----------------------------------------------|
//! | *(none)*  | CSV         | any path, header + one row per reception     |
//! | `sqlite`  | SQLite      | any path, table `dataset`                    |
//!
//! Both implement [`OutputWriter`] and are driven by [`DatasetObserver`],
//! which implements `uw_sim::SimObserver`.  Every append is flushed before
//! it returns.
//!
//! # Columns
//!
//! ```text
//! receive_time, node_id, send_time, propagation_delay, signal_strength,
//! true_x, true_y, true_z, reported_x, reported_y, reported_z, is_anomaly
//! ```
//!
//! Times are seconds, positions metres, signal strength dB re 1 W.
//!
//! # Usage
//!
//! ```rust,ignore
//! use uw_output::{CsvWriter, DatasetObserver};
//!
//! let writer = CsvWriter::create(Path::new("uwsn_data_default.csv"))?;
//! let mut obs = DatasetObserver::new(writer);
//! sim.run(&mut obs)?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::DatasetObserver;
pub use row::{COLUMNS, DatasetRow};
pub use writer::{Fanout, OutputWriter};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
