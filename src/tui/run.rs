//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Everything runs on the calling thread: read one event, apply it,
//! redraw. Each recompute finishes before the next key is read.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use super::state::{Action, App, AppEvent, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::ClearBill),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Submit),

        // Field navigation
        KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),

        // Steppers
        KeyCode::Left => Some(Action::Decrease),
        KeyCode::Right => Some(Action::Increase),

        // Text
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) => Some(Action::Char(c)),

        _ => None,
    }
}

/// Translate a raw terminal event. Key releases and repeats are dropped.
fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Resize(..) => Some(AppEvent::Resize),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    or_rollback(io::stdout().execute(EnterAlternateScreen), disable_raw_mode)?;
    let backend = CrosstermBackend::new(io::stdout());
    or_rollback(Terminal::new(backend), restore_terminal)
}

/// Pass `step` through; on error run `rollback` first. The original error wins.
fn or_rollback<T>(step: io::Result<T>, rollback: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    step.or_else(|e| {
        let _ = rollback();
        Err(e)
    })
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the form until the user quits.
///
/// Returns the final app so the caller can report the last breakdown.
pub fn run(mut app: App) -> io::Result<App> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, &mut app);

    restore_terminal()?;
    result.map(|()| app)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        let Some(app_event) = to_app_event(event::read()?) else {
            continue;
        };

        match app_event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    debug!(?action, focus = ?app.focus, "key");
                    apply(app, &action);
                }
            }
            AppEvent::Resize => {}
        }
    }
}

/// Apply one action and fold the transition back into the app.
fn apply(app: &mut App, action: &Action) {
    match update(app.focus, action, &mut app.session) {
        Transition::Focus(focus) => app.focus = focus,
        Transition::Quit => app.should_quit = true,
    }
}

// ============================================================================
// TESTS
// ============================================================================
