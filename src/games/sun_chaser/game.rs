use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tracing::info;

use crate::core::game::{Context, Game, Schedule};

use super::catalog::Difficulty;
use super::renderer::{self, Control, HitRegions, View};
use super::round::GameEngine;

/// Everything the player can ask for, whichever device it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PrevPlanet,
    NextPlanet,
    CycleDifficulty,
    SetDifficulty(Difficulty),
    ToggleInfo,
    Start,
    Run,
    EndRound,
    Quit,
}

/// Keyboard mapping. Arrows select planets while idle and run while active.
pub fn action_for_key(code: KeyCode, active: bool) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('i') => Some(Action::ToggleInfo),
        KeyCode::Left | KeyCode::Right if active => Some(Action::Run),
        KeyCode::Esc if active => Some(Action::EndRound),
        _ if active => None,
        KeyCode::Left => Some(Action::PrevPlanet),
        KeyCode::Right => Some(Action::NextPlanet),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Start),
        KeyCode::Char('d') => Some(Action::CycleDifficulty),
        KeyCode::Char('1') => Some(Action::SetDifficulty(Difficulty::Easy)),
        KeyCode::Char('2') => Some(Action::SetDifficulty(Difficulty::Normal)),
        KeyCode::Char('3') => Some(Action::SetDifficulty(Difficulty::Hard)),
        KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

impl From<Control> for Action {
    fn from(control: Control) -> Self {
        match control {
            Control::PrevPlanet => Action::PrevPlanet,
            Control::NextPlanet => Action::NextPlanet,
            Control::Difficulty(level) => Action::SetDifficulty(level),
            Control::Info => Action::ToggleInfo,
            Control::Start => Action::Start,
            Control::Run => Action::Run,
        }
    }
}

pub struct SunChaserGame {
    engine: GameEngine,
    schedule: Schedule,
    view: View,
    hits: HitRegions,
}

impl SunChaserGame {
    pub fn new(engine: GameEngine, schedule: Schedule) -> Self {
        Self {
            engine,
            schedule,
            view: View::default(),
            hits: HitRegions::default(),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn perform(&mut self, action: Action, ctx: &Context) {
        match action {
            Action::PrevPlanet => {
                self.engine.select_planet(self.engine.planet().prev());
            }
            Action::NextPlanet => {
                self.engine.select_planet(self.engine.planet().next());
            }
            Action::CycleDifficulty => {
                self.engine.set_difficulty(self.engine.difficulty().cycle());
            }
            Action::SetDifficulty(level) => {
                self.engine.set_difficulty(level);
            }
            Action::ToggleInfo => self.view.show_info = !self.view.show_info,
            Action::Start => {
                // a click can land on last frame's start button after the round began
                if self.engine.is_active() {
                    return;
                }
                self.engine.start(Instant::now());
                self.hits = HitRegions::default();
                ctx.start_cadences(self.schedule);
            }
            Action::Run => self.engine.register_input(),
            Action::EndRound => {
                if self.engine.end() {
                    self.hits = HitRegions::default();
                    ctx.stop_cadences();
                }
            }
            Action::Quit => {
                info!(score = self.engine.state().score, "quit requested");
                if self.engine.end() {
                    ctx.stop_cadences();
                }
                ctx.quit();
            }
        }
    }
}

impl Game for SunChaserGame {
    fn handle_key(&mut self, event: KeyEvent, ctx: &Context) {
        if let Some(action) = action_for_key(event.code, self.engine.is_active()) {
            self.perform(action, ctx);
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent, ctx: &Context) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(control) = self.hits.control_at(event.column, event.row) {
            self.perform(control.into(), ctx);
        }
    }

    fn on_update(&mut self, now: Instant, ctx: &Context) {
        if self.engine.tick(now).is_some() {
            self.hits = HitRegions::default();
            ctx.stop_cadences();
        }
    }

    fn on_decay(&mut self, _ctx: &Context) {
        self.engine.decay();
    }

    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.hits = renderer::draw(frame, &self.engine, self.view);
    }
}
