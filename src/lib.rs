//! logwash - washes git log output into structured, paginated history
//!
//! This library provides:
//! - [`wash`]: The parsing and rendering engine
//! - [`model`]: Domain models
//! - [`git`]: git command execution
//! - [`config`]: TOML configuration
//! - [`cli`]: Command line options
//! - [`app`]: Application state and logic
//! - [`keys`]: Key binding definitions
//! - [`ui`]: User interface components

pub mod app;
pub mod cli;
pub mod config;
pub mod git;
pub mod keys;
pub mod logging;
pub mod model;
pub mod ui;
pub mod wash;
