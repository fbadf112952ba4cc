//! State transitions: (Focus, Action, session) → Transition.
//!
//! No terminal involved. The session is the only thing mutated, and it
//! recomputes its outputs on every edit. Actions a field does not handle
//! leave everything unchanged.

use crate::session::BillSession;

use super::state::{Action, Focus, Transition};

/// Apply one action to the form.
pub fn update(focus: Focus, action: &Action, session: &mut BillSession) -> Transition {
    let transition = match action {
        Action::Quit => Transition::Quit,
        Action::NextField => Transition::Focus(focus.next(session.detail_visible())),
        Action::PrevField => Transition::Focus(focus.prev(session.detail_visible())),
        _ => match focus {
            Focus::Bill => update_bill(action, session),
            Focus::Split => update_split(action, session),
            Focus::Tip => update_tip(action, session),
        },
    };

    // Emptying the bill hides the detail rows; focus cannot stay on them
    match transition {
        Transition::Focus(_) if !session.detail_visible() => Transition::Focus(Focus::Bill),
        other => other,
    }
}

// ============================================================================
// PER-FIELD HANDLERS
// ============================================================================

/// Bill: text editing, submit moves on when the text is usable.
fn update_bill(action: &Action, session: &mut BillSession) -> Transition {
    match action {
        Action::Char(c) => {
            session.push_bill_char(*c);
            Transition::Focus(Focus::Bill)
        }
        Action::Backspace => {
            session.pop_bill_char();
            Transition::Focus(Focus::Bill)
        }
        Action::ClearBill => {
            session.clear_bill();
            Transition::Focus(Focus::Bill)
        }
        Action::Submit => {
            if session.bill_submittable() {
                Transition::Focus(Focus::Split)
            } else {
                Transition::Focus(Focus::Bill)
            }
        }
        _ => Transition::Focus(Focus::Bill),
    }
}

/// Split: -/+ stepper.
fn update_split(action: &Action, session: &mut BillSession) -> Transition {
    match action {
        Action::Decrease | Action::Char('-') => session.decrement_split(),
        Action::Increase | Action::Char('+') | Action::Char('=') => session.increment_split(),
        Action::Char('q') => return Transition::Quit,
        Action::ClearBill => session.clear_bill(),
        _ => {}
    }
    Transition::Focus(Focus::Split)
}

/// Tip: slider nudged one step at a time.
fn update_tip(action: &Action, session: &mut BillSession) -> Transition {
    match action {
        Action::Decrease | Action::Char('-') => session.nudge_slider(-1),
        Action::Increase | Action::Char('+') | Action::Char('=') => session.nudge_slider(1),
        Action::Char('q') => return Transition::Quit,
        Action::ClearBill => session.clear_bill(),
        _ => {}
    }
    Transition::Focus(Focus::Tip)
}

// ============================================================================
// TESTS
// ============================================================================
