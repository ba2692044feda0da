//! Fluent builder for constructing a [`Sim`].

use uw_attack::{AttackConfig, AttackKind, AttackPolicy};
use uw_channel::{ChannelConfig, Medium, RangeMedium};
use uw_core::{NodeId, NodeRng, SimRng, SimTime, stream_seed};
use uw_mobility::{MobilityEngine, PositionOracle, WaypointConfig};
use uw_schedule::{EventQueue, TxTimer};
use tracing::info;

use crate::node::{Event, Node, Role, SensorState};
use crate::{ScenarioConfig, Sim, SimError, SimResult};

/// Substream numbers under the run's stream seed.
const JITTER_STREAM:   u64 = 1;
const MOBILITY_STREAM: u64 = 2;
const CHANNEL_STREAM:  u64 = 3;

/// Fluent builder for [`Sim<M, P>`].
///
/// # Required inputs
///
/// - [`ScenarioConfig`]: node counts, timing, attack selection, seed
/// - `M: Medium`: the delivery channel (e.g. [`RangeMedium`])
/// - `P: PositionOracle`: ground-truth positions (e.g. [`MobilityEngine`])
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                      |
/// |-------------------------|----------------------------------------------|
/// | `.policy(p)`            | `AttackPolicy::default()`                    |
/// | `.attack(node, cfg)`    | first `attacker_count` sensors get the attack |
/// | `.without_jitter()`     | first send jittered in `[0, interval)`       |
///
/// # Example
///
/// ```rust,ignore
/// let (medium, oracle) = reference_world(&config, ChannelConfig::default(), WaypointConfig::default())?;
/// let mut sim = SimBuilder::new(config, medium, oracle).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<M: Medium, P: PositionOracle> {
    config:    ScenarioConfig,
    medium:    M,
    oracle:    P,
    policy:    AttackPolicy,
    overrides: Vec<(NodeId, Option<AttackConfig>)>,
    jitter:    bool,
}

impl<M: Medium, P: PositionOracle> SimBuilder<M, P> {
    pub fn new(config: ScenarioConfig, medium: M, oracle: P) -> Self {
        Self {
            config,
            medium,
            oracle,
            policy:    AttackPolicy::default(),
            overrides: Vec::new(),
            jitter:    true,
        }
    }

    /// Replace the jump offset / drift speed constants.
    pub fn policy(mut self, policy: AttackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Give `node` a specific attack (or none), overriding the
    /// `attacker_count` selection for that node.
    pub fn attack(mut self, node: NodeId, attack: Option<AttackConfig>) -> Self {
        self.overrides.push((node, attack));
        self
    }

    /// Every sensor sends its first frame exactly at `app_start`.
    pub fn without_jitter(mut self) -> Self {
        self.jitter = false;
        self
    }

    /// Validate inputs, build the node arena, queue every sensor's start and
    /// stop, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<M, P>> {
        let cfg = &self.config;
        cfg.validate()?;

        let base = stream_seed(cfg.seed, cfg.run);
        let jitter_seed = stream_seed(base, JITTER_STREAM);

        // ── Node arena ───────────────────────────────────────────────────────
        let mut nodes = Vec::with_capacity(cfg.node_count());
        nodes.push(Node { id: NodeId(0), role: Role::Sink });
        for i in 1..=cfg.sensor_count {
            let id = NodeId(i);
            let attack = (cfg.attack_kind != AttackKind::None && i <= cfg.attacker_count)
                .then(|| AttackConfig::new(cfg.attack_kind, cfg.attack_start));
            nodes.push(Node {
                id,
                role: Role::Sensor(SensorState {
                    timer: TxTimer::new(cfg.interval)?,
                    attack,
                    rng: NodeRng::new(jitter_seed, id),
                    sent: 0,
                    stopped: false,
                }),
            });
        }

        for &(node, attack) in &self.overrides {
            match nodes.get_mut(node.index()).map(|n| &mut n.role) {
                Some(Role::Sensor(s)) => s.attack = attack,
                _ => return Err(SimError::NotASensor(node)),
            }
        }

        // ── Application start / stop ─────────────────────────────────────────
        let mut queue = EventQueue::new();
        for node in nodes.iter().filter(|n| !n.is_sink()) {
            queue.schedule(cfg.app_start, Event::Start(node.id))?;
        }
        for node in nodes.iter().filter(|n| !n.is_sink()) {
            queue.schedule(cfg.app_stop, Event::Stop(node.id))?;
        }

        let attackers: Vec<NodeId> = nodes
            .iter()
            .filter(|n| n.sensor().is_some_and(|s| s.attack.is_some()))
            .map(|n| n.id)
            .collect();
        info!(
            sensors = cfg.sensor_count,
            attackers = ?attackers,
            attack = %cfg.attack_kind,
            activation = %cfg.attack_start,
            "scenario built"
        );

        Ok(Sim::from_parts(
            self.config,
            queue,
            nodes,
            self.medium,
            self.oracle,
            self.policy,
            self.jitter,
        ))
    }
}

/// The reference deployment's channel and mobility: every node attached to a
/// [`RangeMedium`], the sink moored at `config.sink_position`, and every
/// sensor on an independent random-waypoint walk from t = 0.
pub fn reference_world(
    config:   &ScenarioConfig,
    channel:  ChannelConfig,
    waypoint: WaypointConfig,
) -> SimResult<(RangeMedium, MobilityEngine)> {
    let base = stream_seed(config.seed, config.run);

    let mut medium = RangeMedium::new(channel, SimRng::new(stream_seed(base, CHANNEL_STREAM)))?;
    let mut mobility = MobilityEngine::new(waypoint, config.node_count())?;

    let sink = NodeId(0);
    medium.attach(sink);
    mobility.place_fixed(sink, config.sink_position);

    let mobility_seed = stream_seed(base, MOBILITY_STREAM);
    for i in 1..=config.sensor_count {
        let id = NodeId(i);
        medium.attach(id);
        mobility.place_waypoint(id, NodeRng::new(mobility_seed, id), SimTime::ZERO);
    }
    Ok((medium, mobility))
}
