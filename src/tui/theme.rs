//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Magenta: the headline total (the lavender header card)
//! - Cyan: interactive elements (focused field, keybinding hints)
//! - Dim: labels and hints
//! - Bold: amounts

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Headline total per person.
pub const STYLE_TOTAL: Style = Style::new()
    .fg(Color::LightMagenta)
    .add_modifier(Modifier::BOLD);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized labels — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Amounts and counts — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Border of the focused field.
pub const STYLE_FOCUSED: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Border of an unfocused field.
pub const STYLE_UNFOCUSED: Style = Style::new().fg(Color::Gray);

/// Slider fill.
pub const STYLE_SLIDER: Style = Style::new().fg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
