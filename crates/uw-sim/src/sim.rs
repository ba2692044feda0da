//! The `Sim` struct and its event loop.

use std::time::Duration;

use uw_attack::AttackPolicy;
use uw_channel::{Arrival, LinkOutcome, Medium, Receiver, Transmission};
use uw_core::{FrameId, NodeId, SimTime};
use uw_envelope::{ENVELOPE_LEN, Envelope};
use uw_mobility::PositionOracle;
use uw_schedule::{EventQueue, ScheduleError};
use tracing::{debug, info, warn};

use crate::correlator::correlate;
use crate::node::{Event, Frame, Node, sensor_mut};
use crate::{ScenarioConfig, SimError, SimObserver, SimResult};

// ── Stats ─────────────────────────────────────────────────────────────────────

/// Counters accumulated over a run.  Every frame handed to the channel ends
/// up in exactly one of `out_of_range`, `lost`, `collided`,
/// `decode_failures`, `delivered`, or is still in flight at halt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    pub ticks:           u64,
    pub sent:            u64,
    pub out_of_range:    u64,
    pub lost:            u64,
    pub collided:        u64,
    pub decode_failures: u64,
    pub delivered:       u64,
}

impl SimStats {
    /// Frames that left a sender but never produced a record.
    pub fn dropped(&self) -> u64 {
        self.out_of_range + self.lost + self.collided + self.decode_failures
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<M, P>` owns the event queue and the node arena and dispatches:
///
/// | Event      | Effect                                                        |
/// |------------|---------------------------------------------------------------|
/// | `Start`    | arm the sensor's timer with jitter in `[0, interval)`         |
/// | `Tick`     | re-arm, query true position, apply attack, encode, send       |
/// | `Stop`     | disarm; the pending tick never fires                          |
/// | `TxStart`  | resolve the link; schedule reception at the sink              |
/// | `RxStart`  | register with the sink receiver (collision marking)           |
/// | `RxEnd`    | intact frames are correlated and handed to the observer       |
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<M: Medium, P: PositionOracle> {
    pub config: ScenarioConfig,

    /// Pending events plus the simulation clock.
    pub queue: EventQueue<Event>,

    /// Indexed by `NodeId`.  Node 0 is the sink.
    pub nodes: Vec<Node>,

    pub medium: M,

    /// Ground truth for every node's position.
    pub oracle: P,

    pub policy: AttackPolicy,

    /// Collision arbitration at the sink.
    pub receiver: Receiver,

    pub stats: SimStats,

    /// `false` sends every sensor's first frame exactly at `app_start`.
    jitter: bool,

    next_frame: u64,
}

impl<M: Medium, P: PositionOracle> Sim<M, P> {
    pub(crate) fn from_parts(
        config: ScenarioConfig,
        queue:  EventQueue<Event>,
        nodes:  Vec<Node>,
        medium: M,
        oracle: P,
        policy: AttackPolicy,
        jitter: bool,
    ) -> Self {
        Self {
            config,
            queue,
            nodes,
            medium,
            oracle,
            policy,
            receiver: Receiver::new(),
            stats: SimStats::default(),
            jitter,
            next_frame: 0,
        }
    }

    /// The sink's id.
    #[inline]
    pub fn sink(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.queue.now()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Run to the halt time (`app_stop + drain`) and notify the observer
    /// that the run is over.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimStats> {
        let halt = self.config.halt_time();
        info!(
            sensors = self.config.sensor_count,
            attackers = self.config.attacker_count,
            attack = %self.config.attack_kind,
            halt = %halt,
            "simulation starting"
        );
        self.run_until(halt, observer)?;
        observer
            .on_sim_end(halt, &self.stats)
            .map_err(|e| SimError::Observer(Box::new(e)))?;
        info!(
            sent = self.stats.sent,
            delivered = self.stats.delivered,
            dropped = self.stats.dropped(),
            "simulation finished"
        );
        Ok(self.stats)
    }

    /// Dispatch every event due at or before `until`.  Events after `until`
    /// stay queued, so the run can be resumed.
    pub fn run_until<O: SimObserver>(&mut self, until: SimTime, observer: &mut O) -> SimResult<()> {
        while let Some(at) = self.queue.peek_time() {
            if at > until {
                break;
            }
            let Some((now, event)) = self.queue.pop() else { break };
            self.dispatch(now, event, observer)?;
        }
        Ok(())
    }

    /// Stop `node` immediately: its pending tick is cancelled and it sends
    /// nothing more, even if its start has not fired yet.  Frames already
    /// handed to the channel still travel.
    ///
    /// Returns `true` if a pending tick was cancelled.
    pub fn stop_node(&mut self, node: NodeId) -> SimResult<bool> {
        let sensor = sensor_mut(&mut self.nodes, node).ok_or(SimError::NotASensor(node))?;
        sensor.stopped = true;
        let cancelled = sensor.timer.disarm(&mut self.queue);
        debug!(%node, cancelled, "sensor stopped");
        Ok(cancelled)
    }

    fn dispatch<O: SimObserver>(
        &mut self,
        now:      SimTime,
        event:    Event,
        observer: &mut O,
    ) -> SimResult<()> {
        match event {
            Event::Start(node)   => self.on_start(node),
            Event::Tick(node)    => self.on_tick(node, now, observer),
            Event::Stop(node)    => self.stop_node(node).map(|_| ()),
            Event::TxStart(f)    => self.on_tx_start(f, now),
            Event::RxStart { frame, end } => {
                self.receiver.begin(frame, now, end);
                Ok(())
            }
            Event::RxEnd(a)      => self.on_rx_end(a, now, observer),
        }
    }

    // ── Sensor application ───────────────────────────────────────────────────

    fn on_start(&mut self, node: NodeId) -> SimResult<()> {
        if !self.medium.has_device(node) {
            return Err(SimError::ChannelUnavailable(node));
        }
        let sensor = sensor_mut(&mut self.nodes, node).ok_or(SimError::NotASensor(node))?;
        if sensor.stopped {
            debug!(%node, "start ignored, sensor already stopped");
            return Ok(());
        }
        let jitter = if self.jitter {
            sensor.timer.jitter(sensor.rng.unit())
        } else {
            Duration::ZERO
        };
        sensor.timer.arm(&mut self.queue, jitter, Event::Tick(node))?;
        debug!(%node, jitter = ?jitter, "sensor armed");
        Ok(())
    }

    fn on_tick<O: SimObserver>(
        &mut self,
        node:     NodeId,
        now:      SimTime,
        observer: &mut O,
    ) -> SimResult<()> {
        let sensor = sensor_mut(&mut self.nodes, node).ok_or(SimError::NotASensor(node))?;
        match sensor.timer.rearm(&mut self.queue, Event::Tick(node)) {
            Ok(_) => {}
            // A tick that outlived its timer.  Disarm removes the pending
            // tick, so this only happens if a caller queued one by hand.
            Err(ScheduleError::NotArmed) => return Ok(()),
            Err(e) => return Err(e.into()),
        }
        sensor.sent += 1;
        let attack = sensor.attack;
        self.stats.ticks += 1;

        let truth = self.oracle.position(node, now)?;
        let report = self.policy.report(truth, now, attack.as_ref());
        let envelope = Envelope::new(node, now, report.position, report.anomaly);
        observer.on_transmit(node, &envelope);

        let frame = Frame {
            id:          self.next_frame_id(),
            sender:      node,
            payload:     envelope.encode(),
            frame_bytes: self.config.app_payload + ENVELOPE_LEN,
        };
        let backoff = self.medium.backoff();
        self.queue.schedule_in(backoff, Event::TxStart(frame));
        self.stats.sent += 1;
        debug!(
            %node,
            true_pos = %truth,
            reported = %report.position,
            anomaly = report.anomaly,
            "send"
        );
        Ok(())
    }

    // ── Channel ──────────────────────────────────────────────────────────────

    fn on_tx_start(&mut self, frame: Frame, now: SimTime) -> SimResult<()> {
        let sink = self.sink();
        let tx = Transmission {
            frame:        frame.id,
            sender:       frame.sender,
            payload:      frame.payload,
            frame_bytes:  frame.frame_bytes,
            sender_pos:   self.oracle.position(frame.sender, now)?,
            receiver_pos: self.oracle.position(sink, now)?,
        };
        match self.medium.propagate(tx) {
            LinkOutcome::Arrives(arrival) => {
                let rx_start = now + arrival.delay;
                let rx_end = rx_start + arrival.airtime;
                self.queue.schedule(rx_start, Event::RxStart { frame: frame.id, end: rx_end })?;
                self.queue.schedule(rx_end, Event::RxEnd(arrival))?;
            }
            LinkOutcome::OutOfRange { distance } => {
                self.stats.out_of_range += 1;
                debug!(node = %frame.sender, distance, "frame out of range");
            }
            LinkOutcome::Lost => {
                self.stats.lost += 1;
                debug!(node = %frame.sender, "frame lost");
            }
        }
        Ok(())
    }

    fn on_rx_end<O: SimObserver>(
        &mut self,
        arrival:  Arrival,
        now:      SimTime,
        observer: &mut O,
    ) -> SimResult<()> {
        if self.receiver.finish(arrival.frame) != Some(true) {
            self.stats.collided += 1;
            debug!(node = %arrival.sender, frame = %arrival.frame, "frame collided at sink");
            return Ok(());
        }
        let record = match correlate(
            &arrival.payload,
            arrival.signal_db,
            arrival.sender_pos,
            arrival.delay,
            now,
        ) {
            Ok(r) => r,
            Err(e) => {
                self.stats.decode_failures += 1;
                warn!(node = %arrival.sender, error = %e, "dropping undecodable frame");
                return Ok(());
            }
        };
        self.stats.delivered += 1;
        debug!(
            node = %record.node_id,
            rssi = record.signal_strength,
            delay = ?record.propagation_delay,
            "received"
        );
        observer
            .on_reception(&record)
            .map_err(|e| SimError::Observer(Box::new(e)))
    }

    fn next_frame_id(&mut self) -> FrameId {
        let id = FrameId(self.next_frame);
        self.next_frame += 1;
        id
    }
}

