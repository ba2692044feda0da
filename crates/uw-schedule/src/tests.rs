//! Unit tests for uw-schedule.

use std::time::Duration;

use uw_core::SimTime;

use crate::{EventQueue, ScheduleError, TimerState, TxTimer};

// ── EventQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event_queue {
    use super::*;

    #[test]
    fn pops_in_time_order() {
        let mut q = EventQueue::new();
        q.schedule(SimTime::from_secs(30), "c").unwrap();
        q.schedule(SimTime::from_secs(10), "a").unwrap();
        q.schedule(SimTime::from_secs(20), "b").unwrap();

        let order: Vec<_> = std::iter::from_fn(|| q.pop()).collect();
        assert_eq!(
            order,
            vec![
                (SimTime::from_secs(10), "a"),
                (SimTime::from_secs(20), "b"),
                (SimTime::from_secs(30), "c"),
            ]
        );
        assert!(q.is_empty());
    }

    #[test]
    fn ties_dispatch_in_insertion_order() {
        let mut q = EventQueue::new();
        let t = SimTime::from_secs(5);
        for i in 0..4 {
            q.schedule(t, i).unwrap();
        }
        let order: Vec<i32> = std::iter::from_fn(|| q.pop()).map(|(_, e)| e).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn pop_advances_clock() {
        let mut q = EventQueue::new();
        q.schedule(SimTime::from_secs(7), ()).unwrap();
        assert_eq!(q.now(), SimTime::ZERO);
        q.pop();
        assert_eq!(q.now(), SimTime::from_secs(7));
    }

    #[test]
    fn schedule_in_is_relative_to_now() {
        let mut q = EventQueue::new();
        q.schedule(SimTime::from_secs(100), 0).unwrap();
        q.pop();
        let id = q.schedule_in(Duration::from_secs(30), 1);
        assert_eq!(id.at(), SimTime::from_secs(130));
    }

    #[test]
    fn scheduling_in_the_past_is_rejected() {
        let mut q = EventQueue::new();
        q.schedule(SimTime::from_secs(10), ()).unwrap();
        q.pop();
        assert_eq!(
            q.schedule(SimTime::from_secs(9), ()),
            Err(ScheduleError::InPast { at: SimTime::from_secs(9), now: SimTime::from_secs(10) }),
        );
        // Same instant is fine.
        assert!(q.schedule(SimTime::from_secs(10), ()).is_ok());
    }

    #[test]
    fn cancelled_event_never_dispatches() {
        let mut q = EventQueue::new();
        let t = SimTime::from_secs(1);
        let a = q.schedule(t, "a").unwrap();
        q.schedule(t, "b").unwrap();
        assert_eq!(q.cancel(a), Some("a"));
        assert_eq!(q.cancel(a), None, "second cancel is a no-op");
        assert!(!q.is_pending(a));
        assert_eq!(q.pop(), Some((t, "b")));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn peek_time_and_len() {
        let mut q = EventQueue::new();
        assert_eq!(q.peek_time(), None);
        q.schedule(SimTime::from_secs(4), ()).unwrap();
        q.schedule(SimTime::from_secs(2), ()).unwrap();
        assert_eq!(q.peek_time(), Some(SimTime::from_secs(2)));
        assert_eq!(q.len(), 2);
        q.clear();
        assert!(q.is_empty());
    }
}

// ── TxTimer ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tx_timer {
    use super::*;

    const INTERVAL: Duration = Duration::from_secs(30);

    #[test]
    fn zero_interval_rejected() {
        assert_eq!(TxTimer::new(Duration::ZERO).unwrap_err(), ScheduleError::ZeroInterval);
    }

    #[test]
    fn jitter_within_interval() {
        let timer = TxTimer::new(INTERVAL).unwrap();
        assert_eq!(timer.jitter(0.0), Duration::ZERO);
        assert_eq!(timer.jitter(0.5), Duration::from_secs(15));
        assert!(timer.jitter(0.999_999) < INTERVAL);
    }

    #[test]
    fn arm_schedules_first_tick_after_jitter() {
        let mut q = EventQueue::new();
        let mut timer = TxTimer::new(INTERVAL).unwrap();
        assert_eq!(timer.state(), TimerState::Idle);

        let id = timer.arm(&mut q, Duration::from_secs(7), "tick").unwrap();
        assert_eq!(id.at(), SimTime::from_secs(7));
        assert_eq!(timer.state(), TimerState::Armed { pending: id });
        assert_eq!(timer.arm(&mut q, Duration::ZERO, "tick"), Err(ScheduleError::AlreadyArmed));
    }

    #[test]
    fn rearm_uses_fixed_period() {
        let mut q = EventQueue::new();
        let mut timer = TxTimer::new(INTERVAL).unwrap();
        timer.arm(&mut q, Duration::from_secs(7), ()).unwrap();

        let mut fired = Vec::new();
        while let Some((t, ())) = q.pop() {
            fired.push(t);
            if fired.len() == 4 {
                break;
            }
            timer.rearm(&mut q, ()).unwrap();
        }
        let secs: Vec<u64> = fired.iter().map(|t| t.as_nanos() / 1_000_000_000).collect();
        assert_eq!(secs, vec![7, 37, 67, 97]);
    }

    #[test]
    fn disarm_cancels_pending_tick() {
        let mut q = EventQueue::new();
        let mut timer = TxTimer::new(INTERVAL).unwrap();
        let id = timer.arm(&mut q, Duration::from_secs(3), ()).unwrap();

        assert!(timer.disarm(&mut q));
        assert_eq!(timer.state(), TimerState::Idle);
        assert!(!q.is_pending(id));
        assert!(q.pop().is_none());
        assert!(!timer.disarm(&mut q), "disarming an idle timer is a no-op");
    }

    #[test]
    fn rearm_after_disarm_is_rejected() {
        let mut q: EventQueue<()> = EventQueue::new();
        let mut timer = TxTimer::new(INTERVAL).unwrap();
        timer.arm(&mut q, Duration::ZERO, ()).unwrap();
        timer.disarm(&mut q);
        assert_eq!(timer.rearm(&mut q, ()), Err(ScheduleError::NotArmed));
        assert!(q.is_empty());
    }
}
