//! # Billz Architecture
//!
//! Billz keeps a list of billing items (name, price, date), persists it as JSON and turns
//! it into a one-page PDF invoice. It is a **UI-agnostic library** with a thin CLI client;
//! nothing below the CLI knows about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (billz crate)                                          │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (selectors, today's date, settings)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ItemStore: the ordered sequence, sorting, persistence    │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The invoice export ([`invoice`]) sits beside the command layer and only reads a
//! snapshot of the items.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: The item store and its storage backends
//! - [`model`]: `Item` and input validation
//! - [`index`]: Display indexes and selectors
//! - [`invoice`]: Invoice layout and PDF rendering
//! - [`stats`]: Summary figures
//! - [`config`]: Settings
//! - [`init`]: Data directory resolution and startup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod invoice;
pub mod model;
pub mod stats;
pub mod store;
