//! Round engine: speed accumulation, decay, scoring and the round clock.
//!
//! Pure state, no I/O. Time is passed in by the caller so that the engine can be
//! driven deterministically from tests.

use std::time::{Duration, Instant};

use tracing::{debug, info, trace, warn};

use super::catalog::{Difficulty, DifficultyProfile, Planet, PlanetSpec};

/// Default round length.
pub const ROUND_DURATION: Duration = Duration::from_secs(30);

/// Speed gained per input before click power and planet scaling.
const SPEED_PER_INPUT: f64 = 10.0;

/// Fraction of the current speed lost per decay step at decay rate 1.0.
const DECAY_FRACTION: f64 = 0.05;

/// Sun position when the player matches the target speed exactly.
const SUN_CENTER: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    pub current_speed: f64,
    pub target_speed: f64,
    /// Percent across the sky, 0..=100.
    pub sun_position: f64,
    pub score: u32,
    /// Seconds left in the round.
    pub time_remaining: f64,
    pub active: bool,
    pub pending_inputs: u32,
}

impl RoundState {
    fn idle(target_speed: f64, round_secs: f64) -> Self {
        Self {
            current_speed: 0.0,
            target_speed,
            sun_position: SUN_CENTER,
            score: 0,
            time_remaining: round_secs,
            active: false,
            pending_inputs: 0,
        }
    }
}

/// Why a round stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    TimeUp,
    Stopped,
}

pub struct GameEngine {
    planet: Planet,
    difficulty: Difficulty,
    round_duration: Duration,
    state: RoundState,
    last_update: Option<Instant>,
}

impl GameEngine {
    pub fn new(planet: Planet, difficulty: Difficulty, round_duration: Duration) -> Self {
        Self {
            planet,
            difficulty,
            round_duration,
            state: RoundState::idle(planet.spec().target_mph, round_duration.as_secs_f64()),
            last_update: None,
        }
    }

    pub fn planet(&self) -> Planet {
        self.planet
    }

    pub fn planet_spec(&self) -> &'static PlanetSpec {
        self.planet.spec()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.difficulty.profile()
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Current speed divided by target speed.
    pub fn speed_ratio(&self) -> f64 {
        self.state.current_speed / self.state.target_speed
    }

    /// Whether the current speed is within the difficulty's tolerance of the target.
    pub fn on_target(&self) -> bool {
        (self.speed_ratio() - 1.0).abs() <= self.profile().tolerance
    }

    /// Returns false (and changes nothing) while a round is running.
    pub fn select_planet(&mut self, planet: Planet) -> bool {
        if self.state.active {
            warn!(%planet, "planet change ignored during an active round");
            return false;
        }
        self.planet = planet;
        self.state.target_speed = planet.spec().target_mph;
        info!(%planet, target_mph = self.state.target_speed, "planet selected");
        true
    }

    /// Returns false (and changes nothing) while a round is running.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.state.active {
            warn!(%difficulty, "difficulty change ignored during an active round");
            return false;
        }
        self.difficulty = difficulty;
        info!(%difficulty, "difficulty selected");
        true
    }

    /// Resets the round and starts the clock at `now`. Restarts if already active.
    pub fn start(&mut self, now: Instant) {
        self.state = RoundState::idle(self.planet.spec().target_mph, self.round_duration.as_secs_f64());
        self.state.active = true;
        self.last_update = Some(now);
        info!(
            planet = %self.planet,
            difficulty = %self.difficulty,
            secs = self.state.time_remaining,
            "round started"
        );
    }

    /// Records one player action. Ignored while idle.
    pub fn register_input(&mut self) {
        if !self.state.active {
            return;
        }
        self.state.pending_inputs += 1;
        trace!(pending = self.state.pending_inputs, "input");
    }

    /// Advances the round to `now`. Returns `Some` when this tick ran the clock out.
    pub fn tick(&mut self, now: Instant) -> Option<RoundEnd> {
        if !self.state.active {
            return None;
        }
        let elapsed = self
            .last_update
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last_update = Some(now);

        let profile = self.profile();
        let spec = self.planet.spec();

        let inputs = std::mem::take(&mut self.state.pending_inputs);
        self.state.current_speed +=
            f64::from(inputs) * SPEED_PER_INPUT * profile.click_power / spec.relative_difficulty;

        let ratio = self.speed_ratio();
        self.state.sun_position = (SUN_CENTER + SUN_CENTER * (ratio - 1.0)).clamp(0.0, 100.0);
        if (ratio - 1.0).abs() <= profile.tolerance {
            self.state.score += 1;
        }

        self.state.time_remaining -= elapsed.as_secs_f64();
        debug!(
            inputs,
            speed = self.state.current_speed,
            sun = self.state.sun_position,
            score = self.state.score,
            remaining = self.state.time_remaining,
            "tick"
        );

        if self.state.time_remaining <= 0.0 {
            self.state.time_remaining = 0.0;
            self.finish(RoundEnd::TimeUp);
            return Some(RoundEnd::TimeUp);
        }
        None
    }

    /// One decay step. No effect while idle.
    pub fn decay(&mut self) {
        if !self.state.active {
            return;
        }
        let rate = self.profile().speed_decay;
        let speed = self.state.current_speed;
        self.state.current_speed = (speed - speed * DECAY_FRACTION * rate).max(0.0);
    }

    /// Stops the round, leaving the final numbers in place. Returns false if no
    /// round was running.
    pub fn end(&mut self) -> bool {
        if !self.state.active {
            return false;
        }
        self.finish(RoundEnd::Stopped);
        true
    }

    fn finish(&mut self, reason: RoundEnd) {
        self.state.active = false;
        self.state.pending_inputs = 0;
        self.last_update = None;
        info!(?reason, score = self.state.score, planet = %self.planet, "round over");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Planet::default(), Difficulty::default(), ROUND_DURATION)
    }
}
