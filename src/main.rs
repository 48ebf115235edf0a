//! A drag-navigable, fanned stack of panels.
//!
//! Run the binary to open the interactive preview: drag horizontally (or use
//! the arrow keys) to rotate which panel is centered.
//! Run with `--dump` to print the per-item transform table and exit.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr, Write};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{ActiveView, AppState},
};
use crate::core::{gesture::GesturePhase, stack::RotationStack, transform::SIDE_EDGE};
use crate::ui::{
    layout::AppLayout,
    popup::SettingsPopup,
    stack_widget::{Panel, StackWidget},
    theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Drag-navigable rotation stack preview")]
struct Cli {
    /// Number of panels (overrides the config file).
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    count: Option<u16>,

    /// Ease speed, the fraction of the remaining distance closed per frame.
    #[arg(long, value_parser = parse_speed)]
    speed: Option<f64>,

    /// Print the transform of every item and exit.
    #[arg(long)]
    dump: bool,

    /// Center position used by `--dump`.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    center: f64,

    /// Container width used by `--dump`.
    #[arg(long, default_value_t = 375.0)]
    width: f64,
}

/// Finite ease speed; clamped into range later.
fn parse_speed(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|err| format!("{err}"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("`{s}` is not a finite number"))
    }
}

// ───────────────────────────────────────── dump ──────────────

/// Write the transform table for `item_count` items around `center`.
fn dump_layout(out: &mut impl Write, item_count: usize, center: f64, container_width: f64) -> io::Result<()> {
    let mut stack = RotationStack::new(item_count, |i| i);
    stack.resize(container_width);
    writeln!(
        out,
        "# items={item_count} center={center} view_width={} side_edge={SIDE_EDGE}",
        stack.view_width()
    )?;
    writeln!(out, "{:>5} {:>8} {:>8} {:>10} {:>10} {:>7}", "index", "distance", "scale", "offset_x", "offset_y", "z")?;

    let mut placed = stack.placed(center);
    placed.sort_by_key(|p| p.index);
    for p in placed {
        let t = p.transform;
        writeln!(
            out,
            "{:>5} {:>8.3} {:>8.4} {:>10.3} {:>10.3} {:>7.3}",
            p.content, t.distance, t.scale, t.offset_x, t.offset_y, t.stack_order
        )?;
    }
    Ok(())
}

// ───────────────────────────────────────── draw ──────────────

fn draw(frame: &mut Frame, state: &AppState) {
    let layout = AppLayout::from_area(frame.area(), state.config.show_readout);

    let block = Block::default()
        .title(format!(
            " {} / {} ",
            state.focused_index() + 1,
            state.stack.item_count()
        ))
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style());

    let items = state.stack.placed(state.displayed_center());
    let widget = StackWidget::new(&items, state.stack.view_width())
        .focused(state.focused_index())
        .block(block);
    frame.render_widget(widget, layout.stack_area);

    if state.config.show_readout {
        let gesture = state.stack.gesture();
        let phase = match gesture.phase() {
            GesturePhase::Idle => "idle".to_string(),
            GesturePhase::Dragging { translation } => format!("dragging Δx={translation:+.0}"),
        };
        let readout = format!(
            " live {:+.3}  committed {}  shown {:+.3}  view {}  {phase}",
            gesture.live(),
            gesture.committed_index(),
            state.displayed_center(),
            state.stack.view_width(),
        );
        frame.render_widget(
            Paragraph::new(readout).style(Theme::readout_style()),
            layout.readout_area,
        );
    }

    let hint = state.config.status_bar_hint();
    let status_text = match state.active_view {
        ActiveView::Stack => state.status_message.as_deref().unwrap_or(&hint),
        ActiveView::SettingsMenu => "",
    };
    frame.render_widget(
        Paragraph::new(status_text).style(Theme::status_bar_style()),
        layout.status_area,
    );

    if state.active_view == ActiveView::SettingsMenu {
        frame.render_widget(SettingsPopup { state }, frame.area());
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only emits when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    let mut config = config::AppConfig::load();
    if let Some(count) = cli.count {
        config.item_count = usize::from(count);
    }
    if let Some(speed) = cli.speed {
        config.ease_speed = speed.clamp(0.05, 0.95);
    }

    // ── headless dump mode ────────────────────────────────────
    if cli.dump {
        dump_layout(&mut io::stdout().lock(), config.item_count, cli.center, cli.width)?;
        return Ok(());
    }

    let frame_interval = Duration::from_millis(config.frame_ms);
    let mut state = AppState::new(config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(
        stderr_handle,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;
    let size = terminal.size()?;
    state.resize(ratatui::layout::Rect::new(0, 0, size.width, size.height));

    let mut events = spawn_event_reader(frame_interval);

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| draw(frame, &state))?;

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => handler::handle_key(&mut state, k),
            AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
            AppEvent::Resize(w, h) => state.resize(ratatui::layout::Rect::new(0, 0, w, h)),
            AppEvent::FocusLost => handler::handle_focus_lost(&mut state),
            AppEvent::Tick => handler::handle_tick(&mut state),
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    Ok(())
}
