//! Collision arbitration at a single receiver.
//!
//! Pure ALOHA without capture: if two frames are on air at the receiver at
//! the same time, neither can be decoded.  A reception is registered when its
//! first bit arrives (`begin`) and resolved when its last bit arrives
//! (`finish`).

use rustc_hash::FxHashMap;
use uw_core::{FrameId, SimTime};

#[derive(Debug, Clone, Copy)]
struct Reception {
    end:      SimTime,
    collided: bool,
}

/// In-flight receptions at one receiver.
#[derive(Debug, Default)]
pub struct Receiver {
    active:     FxHashMap<FrameId, Reception>,
    collisions: u64,
}

impl Receiver {
    pub fn new() -> Self {
        Self::default()
    }

    /// First bit of `frame` arrives at `now`; the last bit will arrive at
    /// `end`.  Marks `frame` and every reception still on air as collided.
    pub fn begin(&mut self, frame: FrameId, now: SimTime, end: SimTime) {
        let mut collided = false;
        for rx in self.active.values_mut() {
            if rx.end > now {
                rx.collided = true;
                collided = true;
            }
        }
        if collided {
            self.collisions += 1;
        }
        self.active.insert(frame, Reception { end, collided });
    }

    /// Last bit of `frame` has arrived.  Returns `Some(true)` if the frame
    /// was received intact, `Some(false)` if it collided, and `None` for a
    /// frame that was never begun.
    pub fn finish(&mut self, frame: FrameId) -> Option<bool> {
        self.active.remove(&frame).map(|rx| !rx.collided)
    }

    /// Number of frames currently on air at this receiver.
    pub fn in_flight(&self) -> usize {
        self.active.len()
    }

    /// Number of overlap events seen so far.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }
}
