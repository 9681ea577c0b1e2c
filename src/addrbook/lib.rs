//! # Addrbook Architecture
//!
//! Addrbook is a small contact manager: names, phone numbers and birthdays,
//! kept in one JSON file and queried from an interactive prompt.
//!
//! It is a library with a CLI client, not the other way around.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and prompt lines, prints output         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the loaded AddressBook and its store                │
//! │  - Thin dispatch to commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user command, returns CmdResult           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model/)                                             │
//! │  - Name, Phone, Birthday: validated on construction         │
//! │  - Record and AddressBook: the only stateful types          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage ([`store`]) sits beside the stack: the API reads the book from a
//! [`store::BookStore`] when it opens and hands it back when the session ends.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code returns `Result<_, AddrError>`, never prints,
//! never exits. Every failure is either `InvalidFormat` (bad input) or
//! `NotFound` (a contact or phone that was required is missing), plus the
//! store's I/O and serialization errors.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`model`]: Fields, `Record`, `AddressBook`
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
