//! The flat row written by every backend.

use uw_sim::ReceptionRecord;

/// Column names, in write order.
pub const COLUMNS: [&str; 12] = [
    "receive_time",
    "node_id",
    "send_time",
    "propagation_delay",
    "signal_strength",
    "true_x",
    "true_y",
    "true_z",
    "reported_x",
    "reported_y",
    "reported_z",
    "is_anomaly",
];

/// One reception at the sink, flattened.  Times are seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetRow {
    pub receive_time:      f64,
    pub node_id:           u32,
    pub send_time:         f64,
    pub propagation_delay: f64,
    pub signal_strength:   f64,
    pub true_x:            f64,
    pub true_y:            f64,
    pub true_z:            f64,
    pub reported_x:        f64,
    pub reported_y:        f64,
    pub reported_z:        f64,
    pub is_anomaly:        i32,
}

impl From<&ReceptionRecord> for DatasetRow {
    fn from(r: &ReceptionRecord) -> Self {
        Self {
            receive_time:      r.receive_time.as_secs_f64(),
            node_id:           r.node_id.0,
            send_time:         r.send_time.as_secs_f64(),
            propagation_delay: r.propagation_delay.as_secs_f64(),
            signal_strength:   r.signal_strength,
            true_x:            r.true_position.x,
            true_y:            r.true_position.y,
            true_z:            r.true_position.z,
            reported_x:        r.reported_position.x,
            reported_y:        r.reported_position.y,
            reported_z:        r.reported_position.z,
            is_anomaly:        r.anomaly as i32,
        }
    }
}

impl DatasetRow {
    /// Text fields in [`COLUMNS`] order.  `f64` uses Rust's shortest
    /// round-trip decimal form, which does not depend on locale.
    pub fn fields(&self) -> [String; 12] {
        [
            self.receive_time.to_string(),
            self.node_id.to_string(),
            self.send_time.to_string(),
            self.propagation_delay.to_string(),
            self.signal_strength.to_string(),
            self.true_x.to_string(),
            self.true_y.to_string(),
            self.true_z.to_string(),
            self.reported_x.to_string(),
            self.reported_y.to_string(),
            self.reported_z.to_string(),
            self.is_anomaly.to_string(),
        ]
    }
}
