/// Core game interface: what a game implements and how it talks back to the engine.
use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, MouseEvent};
use tokio::sync::mpsc::UnboundedSender;

/// Periods of the two round cadences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub update: Duration,
    pub decay: Duration,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            update: Duration::from_millis(100),
            decay: Duration::from_millis(200),
        }
    }
}

/// Requests a game sends to the engine loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    StartCadences(Schedule),
    StopCadences,
    Quit,
}

/// Handle passed into every game callback.
#[derive(Clone)]
pub struct Context {
    pub tx: UnboundedSender<EngineCommand>,
}

impl Context {
    /// Installs both cadences, replacing any running pair.
    pub fn start_cadences(&self, schedule: Schedule) {
        let _ = self.tx.send(EngineCommand::StartCadences(schedule));
    }

    /// Cancels both cadences.
    pub fn stop_cadences(&self) {
        let _ = self.tx.send(EngineCommand::StopCadences);
    }

    pub fn quit(&self) {
        let _ = self.tx.send(EngineCommand::Quit);
    }
}

/// Main game trait driven by [`crate::core::engine::Engine`].
pub trait Game {
    fn handle_key(&mut self, event: KeyEvent, ctx: &Context);

    fn handle_mouse(&mut self, _event: MouseEvent, _ctx: &Context) {}

    /// Update cadence fired.
    fn on_update(&mut self, now: Instant, ctx: &Context);

    /// Decay cadence fired.
    fn on_decay(&mut self, ctx: &Context);

    /// Draw the current state. Takes `&mut self` so games can remember where
    /// their clickable regions landed.
    fn render(&mut self, frame: &mut ratatui::Frame);
}
