//! View components
//!
//! Each view represents a screen in the application.

mod log;

pub use log::{LogAction, LogView};
