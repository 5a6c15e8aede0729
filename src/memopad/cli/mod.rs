//! # CLI Layer
//!
//! This module is **one possible UI client** for memopad; it is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (raw mode, stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `commands`: `run()` dispatch and per-command `handle_*()` functions
//! - `setup`: clap argument definitions
//! - `app`: interactive session state and key handling
//! - `keys`: key bindings
//! - `render`: drawing the interactive screen
//! - `terminal`: raw mode and alternate screen lifecycle
//! - `print`: output for one-shot commands
//! - `styles`: markers and colors

mod app;
mod commands;
mod keys;
mod print;
mod render;
mod setup;
mod styles;
mod terminal;

pub use commands::run;
