use std::ops::ControlFlow;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::core::cadence::{Beat, RoundTimers};
use crate::core::game::{Context, EngineCommand, Game};

pub struct Engine<G: Game> {
    game: G,
    frame_interval: Duration,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G, frame_interval: Duration) -> Self {
        Self { game, frame_interval }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        // commands the game sends back to us (cadence start/stop, quit)
        let (outbox_tx, mut outbox_rx) = mpsc::unbounded_channel::<EngineCommand>();
        let ctx = Context { tx: outbox_tx };

        let mut events = EventStream::new();
        let mut timers = RoundTimers::default();
        let mut redraw = tokio::time::interval(self.frame_interval);
        redraw.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!("engine loop started");
        loop {
            tokio::select! {
                Some(cmd) = outbox_rx.recv() => {
                    if apply_command(&mut timers, cmd).is_break() {
                        break;
                    }
                }

                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.dispatch(event, &ctx).is_break() {
                                break;
                            }
                        }
                        Some(Err(err)) => return Err(err.into()),
                        None => break,
                    }
                }

                beat = timers.next() => {
                    match beat {
                        Beat::Update => self.game.on_update(std::time::Instant::now(), &ctx),
                        Beat::Decay => self.game.on_decay(&ctx),
                    }
                }

                _ = redraw.tick() => {
                    terminal.draw(|f| self.game.render(f))?;
                }
            }
        }

        timers.stop();
        info!("engine loop finished");
        Ok(())
    }

    fn dispatch(&mut self, event: Event, ctx: &Context) -> ControlFlow<()> {
        match event {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    return ControlFlow::Continue(());
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return ControlFlow::Break(());
                }
                self.game.handle_key(key, ctx);
            }
            Event::Mouse(mouse) => self.game.handle_mouse(mouse, ctx),
            _ => {}
        }
        ControlFlow::Continue(())
    }
}

fn apply_command(timers: &mut RoundTimers, cmd: EngineCommand) -> ControlFlow<()> {
    debug!(?cmd, "engine command");
    match cmd {
        EngineCommand::StartCadences(schedule) => timers.start(schedule),
        EngineCommand::StopCadences => timers.stop(),
        EngineCommand::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::Schedule;
    use crate::games::sun_chaser::game::Action;
    use crate::games::sun_chaser::{GameEngine, SunChaserGame};
    use crossterm::event::KeyEvent;

    fn running_engine() -> (Engine<SunChaserGame>, Context, mpsc::UnboundedReceiver<EngineCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let ctx = Context { tx };
        let game = SunChaserGame::new(GameEngine::default(), Schedule::default());
        let mut engine = Engine::new(game, Duration::from_millis(33));
        engine.game.perform(Action::Start, &ctx);
        (engine, ctx, rx)
    }

    fn arrow(kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent::new_with_kind(KeyCode::Right, KeyModifiers::NONE, kind))
    }

    fn pending(engine: &Engine<SunChaserGame>) -> u32 {
        engine.game.engine().state().pending_inputs
    }

    #[test]
    fn test_key_release_is_not_a_press() {
        let (mut engine, ctx, _rx) = running_engine();
        assert!(engine.dispatch(arrow(KeyEventKind::Release), &ctx).is_continue());
        assert_eq!(pending(&engine), 0);
    }

    #[test]
    fn test_press_and_repeat_each_count() {
        let (mut engine, ctx, _rx) = running_engine();
        assert!(engine.dispatch(arrow(KeyEventKind::Press), &ctx).is_continue());
        assert_eq!(pending(&engine), 1);
        assert!(engine.dispatch(arrow(KeyEventKind::Repeat), &ctx).is_continue());
        assert_eq!(pending(&engine), 2);
        engine.dispatch(arrow(KeyEventKind::Release), &ctx);
        assert_eq!(pending(&engine), 2);
    }

    #[test]
    fn test_ctrl_c_breaks_in_any_state() {
        let (mut engine, ctx, _rx) = running_engine();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(engine.dispatch(ctrl_c.clone(), &ctx).is_break());

        engine.game.perform(Action::EndRound, &ctx);
        assert!(engine.dispatch(ctrl_c, &ctx).is_break());

        // plain 'c' is not a quit
        let plain = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(engine.dispatch(plain, &ctx).is_continue());
    }

    #[tokio::test]
    async fn test_commands_pair_cadences() {
        let mut timers = RoundTimers::default();

        let flow = apply_command(&mut timers, EngineCommand::StartCadences(Schedule::default()));
        assert!(flow.is_continue());
        assert!(timers.is_running());

        let flow = apply_command(&mut timers, EngineCommand::StopCadences);
        assert!(flow.is_continue());
        assert!(!timers.is_running());
    }

    #[tokio::test]
    async fn test_quit_breaks_loop() {
        let mut timers = RoundTimers::default();
        assert!(apply_command(&mut timers, EngineCommand::Quit).is_break());
    }

    #[tokio::test]
    async fn test_context_forwards_commands() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ctx = Context { tx };
        ctx.start_cadences(Schedule::default());
        ctx.stop_cadences();
        ctx.quit();

        assert_eq!(rx.recv().await, Some(EngineCommand::StartCadences(Schedule::default())));
        assert_eq!(rx.recv().await, Some(EngineCommand::StopCadences));
        assert_eq!(rx.recv().await, Some(EngineCommand::Quit));
    }
}
