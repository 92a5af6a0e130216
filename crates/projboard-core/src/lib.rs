//! Project Board Core Library
//!
//! Project store, validation, and the views that render the board.
//! Everything here is single-threaded: share state with `Rc`.

pub mod board;
pub mod dnd;
pub mod error;
pub mod project;
pub mod render;
pub mod validation;
pub mod view;

pub use board::Board;
pub use error::{BoardError, BoardResult, INVALID_INPUT_MESSAGE};
pub use project::{Project, ProjectId, ProjectStatus, ProjectStore, Snapshot};
