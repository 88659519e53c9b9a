//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the engine and scene mirror
//! and renders to a terminal frame.

pub mod footer;
pub mod header;
pub mod messages;
pub mod rack;
pub mod stage;
