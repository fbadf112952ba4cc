//! tip-split: split a bill and tip between several people.

pub mod calc;
pub mod config;
pub mod report;
pub mod session;
pub mod tui;
pub mod types;
