//! Interactive terminal form.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Focus, Action, Transition)
//! - `update`: Transitions applied to the session
//! - `view`: Pure rendering
//! - `theme`: Style constants
//! - `run`: Effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
