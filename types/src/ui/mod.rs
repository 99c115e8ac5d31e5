//! UI value types shared by the engine and the TUI.
//!
//! Pure data types with no IO, no async, no ratatui dependency.

mod line_input;
mod options;

pub use line_input::LineInput;
pub use options::UiOptions;
