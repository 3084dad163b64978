//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and its options
//! - `input`: Key event handling
//! - `refresh`: Producing and washing a pass
//! - `render`: UI rendering
//! - `print`: Plain-text output for non-interactive use

mod input;
mod print;
mod refresh;
mod render;
mod state;

pub use print::render_plain;
pub use refresh::produce;
pub use state::{App, AppOptions, Source};
