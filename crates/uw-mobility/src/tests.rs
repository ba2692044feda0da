//! Unit tests for uw-mobility.

use std::time::Duration;

use uw_core::{NodeId, NodeRng, Position, SimTime};

use crate::{Bounds, Leg, MobilityEngine, MobilityError, PositionOracle, WaypointConfig};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn secs(s: u64) -> SimTime {
    SimTime::from_secs(s)
}

/// 100 m along x at 2 m/s: 50 s of travel, then a 5 s pause.
fn straight_leg() -> Leg {
    Leg::walk(
        Position::ORIGIN,
        Position::new(100.0, 0.0, 0.0),
        secs(10),
        2.0,
        Duration::from_secs(5),
    )
}

fn waypoint_engine() -> MobilityEngine {
    MobilityEngine::new(WaypointConfig::default(), 4).unwrap()
}

// ── Leg ───────────────────────────────────────────────────────────────────────

#[test]
fn leg_timing() {
    let leg = straight_leg();
    assert_eq!(leg.arrive, secs(60));
    assert_eq!(leg.resume, secs(65));
}

#[test]
fn leg_interpolates_linearly() {
    let leg = straight_leg();
    assert_eq!(leg.position(secs(10)), Position::ORIGIN);
    assert_eq!(leg.position(secs(35)), Position::new(50.0, 0.0, 0.0));
    assert_eq!(leg.position(secs(60)), Position::new(100.0, 0.0, 0.0));
    assert_eq!(leg.position(secs(63)), Position::new(100.0, 0.0, 0.0));
}

#[test]
fn leg_before_departure_is_at_origin() {
    let leg = straight_leg();
    assert_eq!(leg.progress(secs(0)), 0.0);
}

#[test]
fn leg_pause_window() {
    let leg = straight_leg();
    assert!(!leg.is_paused(secs(59)));
    assert!(leg.is_paused(secs(60)));
    assert!(leg.is_paused(secs(64)));
    assert!(!leg.is_paused(secs(65)));
}

// ── Fixed placement ───────────────────────────────────────────────────────────

#[test]
fn fixed_nodes_never_move() {
    let sink = Position::new(500.0, 500.0, 950.0);
    let mut engine = MobilityEngine::fixed([sink, Position::new(1.0, 2.0, 3.0)]);
    assert_eq!(engine.position(NodeId(0), secs(0)).unwrap(), sink);
    assert_eq!(engine.position(NodeId(0), secs(10_000)).unwrap(), sink);
    assert_eq!(engine.position(NodeId(1), secs(5)).unwrap(), Position::new(1.0, 2.0, 3.0));
}

#[test]
fn unplaced_node_is_an_error() {
    let mut engine = MobilityEngine::fixed([Position::ORIGIN]);
    assert_eq!(engine.position(NodeId(9), secs(0)), Err(MobilityError::NotPlaced(NodeId(9))));
}

// ── Random waypoint ───────────────────────────────────────────────────────────

#[test]
fn waypoint_starts_at_returned_origin() {
    let mut engine = waypoint_engine();
    let origin = engine.place_waypoint(NodeId(1), NodeRng::new(1, NodeId(1)), secs(0));
    assert_eq!(engine.position(NodeId(1), secs(0)).unwrap(), origin);
    assert!(engine.store.is_mobile(NodeId(1)));
}

#[test]
fn waypoint_stays_inside_bounds() {
    let mut engine = waypoint_engine();
    engine.place_waypoint(NodeId(2), NodeRng::new(42, NodeId(2)), secs(0));
    let bounds = engine.config.bounds;
    for t in (0..20_000).step_by(7) {
        let p = engine.position(NodeId(2), secs(t)).unwrap();
        assert!(bounds.contains(p), "{p} escaped the box at t={t}");
    }
}

#[test]
fn waypoint_speed_is_bounded() {
    let mut engine = waypoint_engine();
    engine.place_waypoint(NodeId(1), NodeRng::new(3, NodeId(1)), secs(0));
    let mut last = engine.position(NodeId(1), secs(0)).unwrap();
    for t in 1..3_000 {
        let p = engine.position(NodeId(1), secs(t)).unwrap();
        // Max speed 2 m/s, with a small tolerance for float rounding.
        assert!(last.distance(p) <= 2.0 + 1e-6, "moved {} m in 1 s", last.distance(p));
        last = p;
    }
}

#[test]
fn waypoint_is_reproducible() {
    let run = |seed| {
        let mut engine = waypoint_engine();
        engine.place_waypoint(NodeId(1), NodeRng::new(seed, NodeId(1)), secs(0));
        (0..50).map(|i| engine.position(NodeId(1), secs(i * 97)).unwrap()).collect::<Vec<_>>()
    };
    assert_eq!(run(5), run(5));
    assert_ne!(run(5), run(6));
}

#[test]
fn waypoint_advances_legs_lazily() {
    let mut engine = waypoint_engine();
    engine.place_waypoint(NodeId(1), NodeRng::new(8, NodeId(1)), secs(0));
    let first = *engine.leg(NodeId(1)).unwrap();
    engine.position(NodeId(1), first.resume).unwrap();
    let second = *engine.leg(NodeId(1)).unwrap();
    assert_eq!(second.from, first.to);
    assert_eq!(second.depart, first.resume);
}

// ── Config validation ─────────────────────────────────────────────────────────

#[test]
fn rejects_bad_speed_range() {
    let cfg = WaypointConfig { speed_min: 2.0, speed_max: 1.0, ..WaypointConfig::default() };
    assert!(matches!(MobilityEngine::new(cfg, 1), Err(MobilityError::Config(_))));
    let cfg = WaypointConfig { speed_min: 0.0, ..WaypointConfig::default() };
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_inverted_bounds() {
    let cfg = WaypointConfig {
        bounds: Bounds::new(Position::new(10.0, 0.0, 0.0), Position::ORIGIN),
        ..WaypointConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_frozen_walk() {
    let cfg = WaypointConfig {
        bounds: Bounds::new(Position::ORIGIN, Position::ORIGIN),
        pause:  Duration::ZERO,
        ..WaypointConfig::default()
    };
    assert!(cfg.validate().is_err());
}
