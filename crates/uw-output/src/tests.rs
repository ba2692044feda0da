//! Integration tests for uw-output.

use std::path::Path;
use std::time::Duration;

use tempfile::TempDir;
use uw_attack::AttackKind;
use uw_channel::{ChannelConfig, RangeMedium};
use uw_core::{NodeId, Position, SimRng, SimTime};
use uw_mobility::MobilityEngine;
use uw_sim::{ScenarioConfig, SimBuilder, SimError, SimStats};

use crate::{CsvWriter, DatasetObserver, DatasetRow, OutputError, OutputResult, OutputWriter};

// ── Helpers ───────────────────────────────────────────────────────────────────

const SINK:   Position = Position::new(500.0, 500.0, 950.0);
const SENSOR: Position = Position::new(500.0, 500.0, 850.0);

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn secs(s: u64) -> SimTime {
    SimTime::from_secs(s)
}

fn sample_row(node_id: u32, anomaly: bool) -> DatasetRow {
    DatasetRow {
        receive_time:      12.25,
        node_id,
        send_time:         11.5,
        propagation_delay: 0.5,
        signal_strength:   -27.75,
        true_x:            1.0,
        true_y:            2.0,
        true_z:            3.0,
        reported_x:        501.0,
        reported_y:        502.0,
        reported_z:        3.0,
        is_anomaly:        anomaly as i32,
    }
}

/// One record as read back from the CSV.
#[derive(Debug)]
struct Parsed {
    node_id:    u32,
    send_time:  f64,
    receive:    f64,
    delay:      f64,
    rssi:       f64,
    truth:      [f64; 3],
    reported:   [f64; 3],
    is_anomaly: i32,
}

fn read_back(path: &Path) -> Vec<Parsed> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.records()
        .map(|r| {
            let r = r.unwrap();
            let f = |i: usize| r[i].parse::<f64>().unwrap();
            Parsed {
                receive:    f(0),
                node_id:    r[1].parse().unwrap(),
                send_time:  f(2),
                delay:      f(3),
                rssi:       f(4),
                truth:      [f(5), f(6), f(7)],
                reported:   [f(8), f(9), f(10)],
                is_anomaly: r[11].parse().unwrap(),
            }
        })
        .collect()
}

/// Zero-backoff channel with every node attached.
fn medium(channel: ChannelConfig, nodes: u32) -> RangeMedium {
    let mut m = RangeMedium::new(channel, SimRng::new(9)).unwrap();
    for i in 0..=nodes {
        m.attach(NodeId(i));
    }
    m
}

fn quiet_channel() -> ChannelConfig {
    ChannelConfig { max_backoff: Duration::ZERO, ..ChannelConfig::default() }
}

/// Run a one-sensor scenario into a CSV in `dir`.
fn run_to_csv(
    dir:     &TempDir,
    config:  ScenarioConfig,
    channel: ChannelConfig,
    jitter:  bool,
) -> (Vec<Parsed>, SimStats) {
    let path = dir.path().join("uwsn_data.csv");
    let oracle = MobilityEngine::fixed([SINK, SENSOR]);
    let mut builder = SimBuilder::new(config, medium(channel, 1), oracle);
    if !jitter {
        builder = builder.without_jitter();
    }
    let mut sim = builder.build().unwrap();
    let mut obs = DatasetObserver::new(CsvWriter::create(&path).unwrap());
    let stats = sim.run(&mut obs).unwrap();
    assert_eq!(obs.rows(), stats.delivered);
    (read_back(&path), stats)
}

fn one_sensor(kind: AttackKind, start: u64, stop: u64) -> ScenarioConfig {
    ScenarioConfig {
        sensor_count:   1,
        app_start:      secs(start),
        app_stop:       secs(stop),
        attack_kind:    kind,
        attacker_count: if kind == AttackKind::None { 0 } else { 1 },
        attack_start:   secs(500),
        ..ScenarioConfig::default()
    }
}

/// Accepts `limit` rows, then fails every append.
struct FailAfter {
    limit:   usize,
    written: usize,
}

impl OutputWriter for FailAfter {
    fn append(&mut self, _row: &DatasetRow) -> OutputResult<()> {
        if self.written == self.limit {
            return Err(OutputError::Io(std::io::Error::other("no space left on device")));
        }
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}

// ── CSV writer ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;

    #[test]
    fn header_written_on_create() {
        let dir = tmp();
        let path = dir.path().join("out.csv");
        let mut w = CsvWriter::create(&path).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "receive_time", "node_id", "send_time", "propagation_delay", "signal_strength",
                "true_x", "true_y", "true_z", "reported_x", "reported_y", "reported_z",
                "is_anomaly",
            ]
        );
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn create_truncates_existing_file() {
        let dir = tmp();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale,data\n1,2\n3,4\n").unwrap();
        let mut w = CsvWriter::create(&path).unwrap();
        w.finish().unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("receive_time,"));
    }

    #[test]
    fn append_is_visible_before_finish() {
        let dir = tmp();
        let path = dir.path().join("out.csv");
        let mut w = CsvWriter::create(&path).unwrap();
        w.append(&sample_row(4, true)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "12.25,4,11.5,0.5,-27.75,1,2,3,501,502,3,1");
    }

    #[test]
    fn rows_keep_append_order() {
        let dir = tmp();
        let path = dir.path().join("out.csv");
        let mut w = CsvWriter::create(&path).unwrap();
        for id in [7, 3, 5] {
            w.append(&sample_row(id, false)).unwrap();
        }
        w.finish().unwrap();
        let ids: Vec<_> = read_back(&path).iter().map(|p| p.node_id).collect();
        assert_eq!(ids, [7, 3, 5]);
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::create(&dir.path().join("out.csv")).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn append_after_finish_errors() {
        let dir = tmp();
        let mut w = CsvWriter::create(&dir.path().join("out.csv")).unwrap();
        w.finish().unwrap();
        assert!(matches!(w.append(&sample_row(1, false)), Err(OutputError::Finished)));
    }

    #[test]
    fn unopenable_destination_errors() {
        let dir = tmp();
        let result = CsvWriter::create(&dir.path().join("missing").join("out.csv"));
        assert!(matches!(result, Err(OutputError::Csv(_))));
    }

    #[test]
    fn fanout_writes_every_backend() {
        let dir = tmp();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        let mut fan = crate::Fanout::new();
        fan.push(CsvWriter::create(&a).unwrap());
        fan.push(CsvWriter::create(&b).unwrap());
        assert_eq!(fan.len(), 2);
        fan.append(&sample_row(2, false)).unwrap();
        fan.finish().unwrap();
        assert_eq!(read_back(&a).len(), 1);
        assert_eq!(read_back(&b).len(), 1);
    }
}

// ── End-to-end scenarios ──────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    fn row_sent_at(rows: &[Parsed], send: f64) -> &Parsed {
        rows.iter().find(|p| p.send_time == send).unwrap()
    }

    #[test]
    fn honest_run_reports_truth() {
        let dir = tmp();
        let (rows, stats) =
            run_to_csv(&dir, one_sensor(AttackKind::None, 1, 100), quiet_channel(), true);
        assert!(rows.len() >= 3);
        assert_eq!(rows.len() as u64, stats.sent);
        for p in &rows {
            assert_eq!(p.node_id, 1);
            assert_eq!(p.reported, p.truth);
            assert_eq!(p.truth, [SENSOR.x, SENSOR.y, SENSOR.z]);
            assert_eq!(p.is_anomaly, 0);
            assert!((p.delay - 100.0 / 1500.0).abs() < 1e-6);
            assert!(p.receive > p.send_time + p.delay);
            assert!(p.rssi.is_finite());
        }
    }

    #[test]
    fn jump_run_offsets_x_and_y() {
        let dir = tmp();
        let (rows, _) =
            run_to_csv(&dir, one_sensor(AttackKind::Jump, 480, 600), quiet_channel(), false);

        let before = row_sent_at(&rows, 480.0);
        assert_eq!(before.is_anomaly, 0);
        assert_eq!(before.reported, before.truth);

        let p = row_sent_at(&rows, 510.0);
        assert_eq!(p.is_anomaly, 1);
        assert_eq!(p.reported[0], p.truth[0] + 500.0);
        assert_eq!(p.reported[1], p.truth[1] + 500.0);
        assert_eq!(p.reported[2], p.truth[2]);
    }

    #[test]
    fn drift_run_offsets_x_only() {
        let dir = tmp();
        let (rows, _) =
            run_to_csv(&dir, one_sensor(AttackKind::Drift, 490, 600), quiet_channel(), false);

        assert_eq!(row_sent_at(&rows, 490.0).is_anomaly, 0);

        let p = row_sent_at(&rows, 520.0);
        assert_eq!(p.is_anomaly, 1);
        assert!((p.reported[0] - (p.truth[0] + 200.0)).abs() < 1e-9);
        assert_eq!(p.reported[1], p.truth[1]);
        assert_eq!(p.reported[2], p.truth[2]);

        let later = row_sent_at(&rows, 550.0);
        assert!(later.reported[0] - later.truth[0] > p.reported[0] - p.truth[0]);
    }

    #[test]
    fn lossy_channel_rows_match_deliveries() {
        let dir = tmp();
        let channel = ChannelConfig { loss_probability: 0.5, ..quiet_channel() };
        let (rows, stats) =
            run_to_csv(&dir, one_sensor(AttackKind::None, 1, 2000), channel, false);

        assert!(stats.lost > 0);
        assert_eq!(rows.len() as u64, stats.sent - stats.lost);

        let mut sends: Vec<f64> = rows.iter().map(|p| p.send_time).collect();
        sends.dedup();
        assert_eq!(sends.len(), rows.len(), "no duplicated rows");
        for s in &sends {
            // Every surviving row belongs to a real send on the 30 s grid.
            assert_eq!((s - 1.0) % 30.0, 0.0);
        }
    }

    #[test]
    fn write_failure_aborts_run() {
        let config = one_sensor(AttackKind::None, 1, 200);
        let oracle = MobilityEngine::fixed([SINK, SENSOR]);
        let mut sim = SimBuilder::new(config, medium(quiet_channel(), 1), oracle)
            .build()
            .unwrap();
        let mut obs = DatasetObserver::new(FailAfter { limit: 2, written: 0 });
        let err = sim.run(&mut obs).unwrap_err();
        assert!(matches!(err, SimError::Observer(_)));
        assert_eq!(obs.rows(), 2);
        assert_eq!(obs.into_writer().written, 2);
    }

    #[test]
    fn observer_counts_anomalous_rows() {
        let dir = tmp();
        let path = dir.path().join("d.csv");
        let config = one_sensor(AttackKind::Jump, 480, 600);
        let oracle = MobilityEngine::fixed([SINK, SENSOR]);
        let mut sim = SimBuilder::new(config, medium(quiet_channel(), 1), oracle)
            .without_jitter()
            .build()
            .unwrap();
        let mut obs = DatasetObserver::new(CsvWriter::create(&path).unwrap());
        sim.run(&mut obs).unwrap();
        // Sends at 480, 510, 540, 570; all but the first are attacked.
        assert_eq!(obs.rows(), 4);
        assert_eq!(obs.anomalous(), 3);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::sqlite::SqliteWriter;

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let path = dir.path().join("out.db");
        let _w = SqliteWriter::create(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn sqlite_rows_visible_without_finish() {
        let dir = tmp();
        let path = dir.path().join("out.db");
        let mut w = SqliteWriter::create(&path).unwrap();
        w.append(&sample_row(1, false)).unwrap();
        w.append(&sample_row(2, true)).unwrap();

        let conn = rusqlite::Connection::open(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM dataset", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn sqlite_columns_round_trip() {
        let dir = tmp();
        let path = dir.path().join("out.db");
        let mut w = SqliteWriter::create(&path).unwrap();
        w.append(&sample_row(9, true)).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(&path).unwrap();
        let (node, reported_x, flag): (i64, f64, i64) = conn
            .query_row(
                "SELECT node_id, reported_x, is_anomaly FROM dataset",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(node, 9);
        assert_eq!(reported_x, 501.0);
        assert_eq!(flag, 1);
    }

    #[test]
    fn sqlite_create_starts_empty() {
        let dir = tmp();
        let path = dir.path().join("out.db");
        {
            let mut w = SqliteWriter::create(&path).unwrap();
            w.append(&sample_row(1, false)).unwrap();
            w.finish().unwrap();
        }
        let mut w = SqliteWriter::create(&path).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM dataset", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
