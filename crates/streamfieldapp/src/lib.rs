//! # Streamfield Architecture
//!
//! Streamfield edits an ordered, nested document of **blocks**: each block has
//! a title, a type label, a collapse flag and its own ordered list of child
//! blocks. Blocks can be moved up and down, duplicated, deleted, collapsed,
//! and dragged into any list at any depth.
//!
//! This crate is the UI-agnostic core. The `streamfield` binary is one client
//! of it; a browser front end would be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (CLI, web, ...)                                     │
//! │  - Draws view models, turns input into UiEvent/DragResult   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + View Models (view.rs)                 │
//! │  - One shared facade for every operation and event          │
//! │  - Rebuilds views from the current document                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load, apply one tree operation, save, report             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Tree (tree.rs)              Storage (store/)               │
//! │  - Pure Forest → Forest      - ForestStore trait            │
//! │    functions                 - FileStore, InMemoryStore     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Whole-Value Updates
//!
//! The document is never edited in place. Every operation builds a new
//! [`model::Forest`] from the old one and the store swaps it in. Paths are
//! positional ([`path::BlockPath`]) and are recomputed from the new forest
//! each time a view is built, so a stale path can only ever fail to resolve,
//! not silently hit the wrong block within a single operation.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, the entry point for all operations
//! - [`commands`]: Load/apply/save for each operation
//! - [`tree`]: Pure tree operations
//! - [`view`]: Block and children-list view models, UI events
//! - [`droppable`]: Drop target ids and drag results
//! - [`model`]: `Block` and `Forest`
//! - [`path`]: Positional block addressing
//! - [`store`]: Storage abstraction and implementations
//! - [`sample`]: The seed document
//! - [`config`]: Configuration
//! - [`init`]: Locating the document and wiring the API
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod droppable;
pub mod error;
pub mod init;
pub mod model;
pub mod path;
pub mod sample;
pub mod store;
pub mod tree;
pub mod view;
