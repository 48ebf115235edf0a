//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer takes the transforms produced by the core and turns them into
//! cells on the terminal.  No gesture logic happens here.

pub mod layout;
pub mod popup;
pub mod smooth_center;
pub mod stack_widget;
pub mod theme;
