/// Sun Chaser screen layout. Pure drawing: reads the round engine, returns where
/// the clickable controls ended up.
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use super::catalog::{Difficulty, Planet};
use super::round::GameEngine;

const TITLE: &str = "Sun Chaser: The Planetary Speed Challenge";
const SUN: &str = "☀";
const ON_TARGET: Color = Color::Rgb(0x22, 0xC5, 0x5E);
const OFF_TARGET: Color = Color::Rgb(0x3B, 0x82, 0xF6);

/// Screen-level things a click can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    PrevPlanet,
    NextPlanet,
    Difficulty(Difficulty),
    Info,
    Start,
    Run,
}

/// Where each control was drawn last frame. Zero-sized rects never match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitRegions {
    pub prev_planet: Rect,
    pub next_planet: Rect,
    /// One rect per level, in `Difficulty::ALL` order.
    pub difficulty: [Rect; 3],
    pub info: Rect,
    pub start: Rect,
    pub run_left: Rect,
    pub run_right: Rect,
}

impl HitRegions {
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let pos = Position::new(column, row);
        let levels = Difficulty::ALL
            .into_iter()
            .zip(self.difficulty)
            .map(|(level, rect)| (rect, Control::Difficulty(level)));
        [
            (self.prev_planet, Control::PrevPlanet),
            (self.next_planet, Control::NextPlanet),
            (self.info, Control::Info),
            (self.start, Control::Start),
            (self.run_left, Control::Run),
            (self.run_right, Control::Run),
        ]
        .into_iter()
        .chain(levels)
        .find(|(rect, _)| rect.contains(pos))
        .map(|(_, control)| control)
    }
}

/// UI-only flags that live outside the round engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct View {
    pub show_info: bool,
}

pub fn draw(frame: &mut Frame, engine: &GameEngine, view: View) -> HitRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Length(4), // planet selector
            Constraint::Length(7), // sky
            Constraint::Length(1), // speed readout
            Constraint::Length(1), // speed bar
            Constraint::Length(3), // score / difficulty / info
            Constraint::Length(3), // start or run controls
            Constraint::Min(0),    // info / education panel
            Constraint::Length(1), // key hints
        ])
        .split(frame.area());

    let mut hits = HitRegions::default();

    frame.render_widget(
        Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    draw_selector(frame, chunks[1], engine, &mut hits);
    draw_sky(frame, chunks[2], engine);
    draw_speed(frame, chunks[3], chunks[4], engine);
    draw_stats(frame, chunks[5], engine, &mut hits);
    draw_controls(frame, chunks[6], engine, &mut hits);

    if view.show_info {
        draw_info(frame, chunks[7]);
    } else if !engine.is_active() {
        draw_did_you_know(frame, chunks[7]);
    }

    let hints = if engine.is_active() {
        "[←/→] Run  [i] Info  [Esc] End round  [q] Quit"
    } else {
        "[←/→] Planet  [d/1-3] Difficulty  [Enter] Start  [i] Info  [q] Quit"
    };
    frame.render_widget(
        Paragraph::new(hints)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        chunks[8],
    );

    hits
}

fn draw_selector(frame: &mut Frame, area: Rect, engine: &GameEngine, hits: &mut HitRegions) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(5), Constraint::Min(0), Constraint::Length(5)])
        .split(area);

    let locked = engine.is_active();
    let arrow_style = if locked {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    frame.render_widget(
        Paragraph::new("\n<")
            .alignment(Alignment::Center)
            .style(arrow_style)
            .block(Block::default().borders(Borders::ALL)),
        cols[0],
    );
    frame.render_widget(
        Paragraph::new("\n>")
            .alignment(Alignment::Center)
            .style(arrow_style)
            .block(Block::default().borders(Borders::ALL)),
        cols[2],
    );
    if !locked {
        hits.prev_planet = cols[0];
        hits.next_planet = cols[2];
    }

    let spec = engine.planet_spec();
    let text = vec![
        Line::from(Span::styled(
            spec.name,
            Style::default().fg(spec.color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Target: {} mph", format_mph(spec.target_mph)),
            Style::default().fg(Color::Yellow),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP | Borders::BOTTOM)),
        cols[1],
    );
}

fn draw_sky(frame: &mut Frame, area: Rect, engine: &GameEngine) {
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Rgb(0x1E, 0x1B, 0x4B)));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height < 3 {
        return;
    }

    let sun_x = sun_column(inner, engine.state().sun_position);
    frame.render_widget(
        Paragraph::new(SUN).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Rect::new(sun_x, inner.y + 1, 1, 1),
    );

    let horizon_y = inner.y + inner.height - 2;
    frame.render_widget(
        Paragraph::new("─".repeat(inner.width as usize)).style(Style::default().fg(Color::White)),
        Rect::new(inner.x, horizon_y, inner.width, 1),
    );
    frame.render_widget(
        Block::default().style(Style::default().bg(engine.planet_spec().color)),
        Rect::new(inner.x, horizon_y + 1, inner.width, 1),
    );
}

/// Column for a sun at `position` percent across `inner`.
pub(crate) fn sun_column(inner: Rect, position: f64) -> u16 {
    let span = f64::from(inner.width.saturating_sub(1));
    let offset = (position.clamp(0.0, 100.0) / 100.0 * span).round() as u16;
    inner.x + offset
}

fn draw_speed(frame: &mut Frame, readout: Rect, bar: Rect, engine: &GameEngine) {
    let on_target = engine.on_target();
    let speed_style = if on_target {
        Style::default().fg(ON_TARGET).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" Current Speed: "),
            Span::styled(format!("{} mph", format_mph(engine.state().current_speed)), speed_style),
        ])),
        readout,
    );

    let fill = engine.speed_ratio().clamp(0.0, 1.0);
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(if on_target { ON_TARGET } else { OFF_TARGET }))
            .ratio(fill)
            .label(""),
        bar,
    );
}

fn draw_stats(frame: &mut Frame, area: Rect, engine: &GameEngine, hits: &mut HitRegions) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(32), Constraint::Length(10)])
        .split(area);

    let state = engine.state();
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("Score: "),
            Span::styled(state.score.to_string(), Style::default().fg(Color::LightMagenta)),
            Span::raw("   Time: "),
            Span::styled(
                format!("{}s", state.time_remaining.round() as u64),
                Style::default().fg(Color::LightMagenta),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL)),
        cols[0],
    );

    let locked = engine.is_active();
    let block = Block::default().borders(Borders::ALL).title(" Difficulty ");
    let inner = block.inner(cols[1]);
    frame.render_widget(block, cols[1]);
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(inner);
    for (i, level) in Difficulty::ALL.into_iter().enumerate() {
        let style = if level == engine.difficulty() {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        frame.render_widget(
            Paragraph::new(Span::styled(level.label(), style)).alignment(Alignment::Center),
            slots[i],
        );
        if !locked {
            hits.difficulty[i] = slots[i];
        }
    }

    frame.render_widget(
        Paragraph::new("Info")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        cols[2],
    );
    hits.info = cols[2];
}

fn draw_controls(frame: &mut Frame, area: Rect, engine: &GameEngine, hits: &mut HitRegions) {
    if !engine.is_active() {
        frame.render_widget(
            Paragraph::new("CHASE THE SUN!")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White).bg(Color::Green).add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
        hits.start = area;
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let style = Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new("< RUN!")
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL)),
        halves[0],
    );
    frame.render_widget(
        Paragraph::new("RUN! >")
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL)),
        halves[1],
    );
    hits.run_left = halves[0];
    hits.run_right = halves[1];
}

fn draw_info(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from("Click RUN or press the arrow keys rapidly to run faster and keep the sun fixed in the sky!"),
        Line::from("Each planet requires a different speed to chase the sun:"),
    ];
    lines.extend(Planet::ALL.into_iter().map(|planet| {
        let spec = planet.spec();
        Line::from(Span::styled(
            format!("  {:<8} {:>7} mph", format!("{}:", spec.name), format_mph(spec.target_mph)),
            Style::default().fg(spec.color),
        ))
    }));
    lines.push(Line::from(Span::styled(
        "Score points by maintaining the exact speed needed for your chosen planet!",
        Style::default().fg(ON_TARGET).add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" How to Play ")),
        area,
    );
}

fn draw_did_you_know(frame: &mut Frame, area: Rect) {
    let retrograde: Vec<&str> = Planet::ALL
        .into_iter()
        .filter(|p| p.spec().retrograde)
        .map(Planet::name)
        .collect();
    let text = vec![
        Line::from(
            "To keep the sun fixed in the sky (called \"chasing the terminator\"), you need to match the planet's rotation speed at the equator.",
        ),
        Line::from(format!(
            "On Earth, you'd need to run at {} mph, while on Mars it's only {} mph!",
            format_mph(Planet::Earth.spec().target_mph),
            format_mph(Planet::Mars.spec().target_mph),
        )),
        Line::from(format!(
            "{} rotate in the opposite direction (retrograde rotation), so you'd run west to east instead of east to west.",
            retrograde.join(" and "),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Did You Know? ")),
        area,
    );
}

/// Rounds to the nearest mph and groups thousands: `27501.4` -> `"27,501"`.
pub fn format_mph(value: f64) -> String {
    let whole = value.max(0.0).round() as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
