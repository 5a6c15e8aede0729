//! # Memopad Architecture
//!
//! Memopad is a keyboard-driven memo pad for the terminal. Like most small
//! tools it is a library that happens to have a UI: the terminal interface in
//! the binary is one client of the API below.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the terminal UI, prints output    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the NotePad and its store                           │
//! │  - Tracks unsaved changes, optional autosave                │
//! │  - Returns structured Result<CmdResult> values              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model.rs) + Commands (commands/*.rs)                │
//! │  - Note ordering, pinning, indent and zoom rules            │
//! │  - doctor and config commands                               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Pinned Prefix
//!
//! The pad is one ordered list. Pinned notes always sit at the front of it,
//! and every operation keeps it that way. See [`model`] for the rules.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - Performs file I/O only inside a [`store::DataStore`]
//!
//! ## Errors
//!
//! - Bad indexes are caller bugs and panic inside the model.
//! - An unreadable pad file is [`error::MemoPadError::Corrupt`]; nothing is
//!   overwritten until the user runs `memopad doctor`.
//! - A failed `save` is returned as-is and the in-memory pad is kept. A failed
//!   autosave is reported as an error message on the operation's result.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`model`]: `Note` and `NotePad` with the ordering rules
//! - [`commands`]: `doctor`, `config`, and the shared `CmdResult` types
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the terminal UI and printing (binary only)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
