//! # CLI Behavior
//!
//! This is **one possible UI client** for billz, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ### Naked Execution (`billz`)
//!
//! Running `billz` with no arguments defaults to `billz list`.
//!
//! ### Referring to Items
//!
//! Items are addressed by the index shown in the listing (`billz rm 2`), by ranges
//! (`billz view 1-3`), by their full id (`billz list --ids` shows them), or by a
//! name that matches exactly one item (`billz edit tea --price 3.20`).
//!
//! ### Data Location
//!
//! `--data DIR` points billz at another data directory. Without it the platform data
//! directory is used (see `billz path`).
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers that call the API and print
//! - `render`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod render;
pub mod setup;

pub use commands::run;
