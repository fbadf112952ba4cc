//! TUI state algebra: pure types, zero effects.
//!
//! The screen is a single form. Its only per-screen state is which field
//! has focus; the numbers live in the [`BillSession`] the app owns.

use crossterm::event::KeyEvent;

use crate::session::BillSession;
use crate::types::CalculatorConfig;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event.
    Key(KeyEvent),
    /// Terminal resized; redraw only.
    Resize,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Inputs and derived amounts.
    pub session: BillSession,

    /// Field receiving keyboard input.
    pub focus: Focus,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

/// Form fields, in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Free-text bill amount.
    #[default]
    Bill,
    /// Split stepper (-/+).
    Split,
    /// Tip slider.
    Tip,
}

impl Focus {
    /// Next field, wrapping. Detail fields are skipped while hidden.
    pub fn next(self, detail_visible: bool) -> Self {
        if !detail_visible {
            return Focus::Bill;
        }
        match self {
            Focus::Bill => Focus::Split,
            Focus::Split => Focus::Tip,
            Focus::Tip => Focus::Bill,
        }
    }

    /// Previous field, wrapping.
    pub fn prev(self, detail_visible: bool) -> Self {
        if !detail_visible {
            return Focus::Bill;
        }
        match self {
            Focus::Bill => Focus::Tip,
            Focus::Split => Focus::Bill,
            Focus::Tip => Focus::Split,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A printable character.
    Char(char),
    /// Delete the last bill character.
    Backspace,
    /// Clear the bill field.
    ClearBill,
    /// Focus the next field.
    NextField,
    /// Focus the previous field.
    PrevField,
    /// Step the focused control down.
    Decrease,
    /// Step the focused control up.
    Increase,
    /// Submit the bill ("done" on the keyboard).
    Submit,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a state transition.
#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    /// Keep running with this field focused.
    Focus(Focus),
    /// Quit the application.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Fresh form with the bill field focused.
    pub fn new(config: CalculatorConfig) -> Self {
        App {
            session: BillSession::new(config),
            focus: Focus::Bill,
            should_quit: false,
        }
    }

    /// Form pre-filled with a bill.
    pub fn with_bill(config: CalculatorConfig, bill_text: &str) -> Self {
        let mut app = App::new(config);
        app.session.set_bill_text(bill_text);
        app
    }
}

// ============================================================================
// TESTS
// ============================================================================
