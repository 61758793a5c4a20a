//! # Roster Architecture
//!
//! Roster is an in-memory student record library with a small CLI on top.
//! The layering keeps everything below the CLI free of terminal I/O:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, loads roster files, prints results     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade owning the store and config                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns `CmdResult`          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/)                                             │
//! │  - `RecordStore`: owned records, newest-first traversal     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`format`] renders records as `"<id> <first> <last> <gpa:.2> <major>"`
//! lines to any writer, and [`normalize`] fixes the casing of names and
//! majors.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: The record collection
//! - [`model`]: The `Record` type and its line format
//! - [`normalize`]: Name and major casing
//! - [`format`]: Text output and sinks
//! - [`config`]: Configuration management
//! - [`logging`]: Subscriber setup for the binary
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod store;
