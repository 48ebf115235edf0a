//! Core model: index-to-transform geometry and the drag gesture machine.
//!
//! Nothing in this module depends on any TUI or rendering crate, so every
//! mapping can be exercised without a terminal.

pub mod gesture;
pub mod stack;
pub mod transform;
