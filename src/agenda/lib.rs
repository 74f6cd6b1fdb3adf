//! # Agenda Architecture
//!
//! Agenda is a **UI-agnostic phone book library**; the interactive binary is a
//! thin client over it. Layers, outermost first:
//!
//! ```text
//! main.rs + args.rs    argument parsing, wiring, exit codes
//! session              the menu loop; the only code touching the console
//! api                  thin facade, dispatches to commands
//! commands/*           pure business logic, returns structured results
//! store/               ContactStore trait; file-backed and in-memory impls
//! ```
//!
//! From [`api`] inward no code writes to stdout/stderr, calls
//! `std::process::exit`, or assumes a terminal: commands take plain arguments
//! (confirmation decisions included, as closures) and return
//! `Result<CmdResult>`. That is what lets every command carry unit tests
//! against the in-memory store, with the console only exercised end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: the API facade—entry point for all operations
//! - [`commands`]: business logic for each menu operation
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: the `Contact` type and phone number validation
//! - [`session`]: the interactive menu loop
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
