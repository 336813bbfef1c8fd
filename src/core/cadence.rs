//! The two periodic round timers.
//!
//! Update and decay are separate intervals but are only ever created and dropped
//! together: [`RoundTimers`] holds them as one `Option<Cadences>`.

use std::future;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::core::game::Schedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beat {
    Update,
    Decay,
}

pub struct Cadences {
    update: Interval,
    decay: Interval,
}

impl Cadences {
    /// First beats land one period after `start`, not immediately.
    pub fn start(schedule: Schedule) -> Self {
        let now = Instant::now();
        Self {
            update: periodic(now, schedule.update),
            decay: periodic(now, schedule.decay),
        }
    }

    /// Waits for whichever cadence is due next. Update wins ties.
    pub async fn next(&mut self) -> Beat {
        tokio::select! {
            biased;
            _ = self.update.tick() => Beat::Update,
            _ = self.decay.tick() => Beat::Decay,
        }
    }
}

fn periodic(now: Instant, period: std::time::Duration) -> Interval {
    let mut interval = interval_at(now + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

#[derive(Default)]
pub struct RoundTimers {
    running: Option<Cadences>,
}

impl RoundTimers {
    /// Starts both cadences, dropping any pair already running.
    pub fn start(&mut self, schedule: Schedule) {
        self.running = Some(Cadences::start(schedule));
    }

    pub fn stop(&mut self) {
        self.running = None;
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Resolves on the next beat; never resolves while stopped.
    pub async fn next(&mut self) -> Beat {
        match self.running.as_mut() {
            Some(cadences) => cadences.next().await,
            None => future::pending().await,
        }
    }
}
