//! # CLI Behavior
//!
//! This is **one possible UI client** for streamfield, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes and output formatting.
//!
//! ## Naked Execution (`streamfield`)
//!
//! Running `streamfield` with no arguments defaults to `streamfield list`.
//!
//! ## Addressing Blocks
//!
//! Blocks are addressed by position. The listing prints each block's path
//! (`3.0.1` is the second grandchild under the first child of the fourth
//! root block). Every command that takes a path also accepts the droppable
//! form (`root-3-0-1`), so ids copied from `show` or `--output json` work
//! as is. Paths shift after each edit: always re-read the listing.
//!
//! ## Pointer Events
//!
//! `click <path> <target>` replays what a pointer would do: `header`
//! toggles, `up`/`down`/`duplicate`/`delete` press a header button (and do
//! not toggle), `add` presses the "add after" button, and `list-add`
//! presses the add control of the children list at `<path>`.
//!
//! `drop '<json>'` applies a drag-end result, for example
//! `{"source":{"droppableId":"root-","index":0},"destination":{"droppableId":"root-2","index":1},"reason":"DROP"}`.
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring and per-command dispatch
//! - `render`: Output formatting (tree listing, block detail, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
