//! # Billz CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/billzapp/`: Core library with UI-agnostic business logic
//! - `crates/billz/`: This CLI tool, depends on the `billzapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/billz/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Logging setup (logging.rs)                               │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/billzapp/src/api.rs)                     │
//! │  - Parses selectors, dispatches to command modules          │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer is responsible for
//! **all** user-facing concerns: argument parsing, context initialization, dispatch,
//! error handling, and rendering.
//!
//! ## Testing Approach
//!
//! - **Rendering (`src/cli/render.rs`)**: canned items and results in, strings out.
//! - **Argument parsing (`src/cli/setup.rs`)**: `Cli::try_parse_from` on crafted argv.
//! - **End to end (`tests/`)**: the real binary against a temporary `--data` directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
