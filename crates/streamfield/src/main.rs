//! # Streamfield CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination. Everything
//! that edits the document lives in the `streamfieldapp` library, which knows
//! nothing about terminals.
//!
//! ## Workspace Structure
//!
//! - `crates/streamfieldapp/`: UI-agnostic core (tree operations, view models,
//!   drag results, storage, configuration)
//! - `crates/streamfield/`: this CLI, one client of the core
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/streamfield/src/cli/)                    │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering via minijinja templates (render.rs)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/streamfieldapp/src/api.rs)               │
//! │  - Parses paths and droppable ids                           │
//! │  - Routes UI events and drag results                        │
//! │  - Returns structured `CmdResult` values and views          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command + Tree Layers (crates/streamfieldapp/src/...)      │
//! │  - Pure forest transformations + storage                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendering
//!
//! Templates live in `src/cli/templates/` and are embedded at compile time
//! via `include_str!()`. Layout math (indentation, truncation, column
//! padding) happens in `render.rs`; templates only pick styles.
//!
//! ## Testing Approach
//!
//! - **Library**: tree operations and commands are unit tested against the
//!   in-memory store.
//! - **CLI**: argument parsing and rendering are unit tested with canned
//!   values; `tests/cli_e2e.rs` drives the built binary against a temporary
//!   data directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
