//! Terminal presentation components used by the CLI client.
pub mod event_loop;
pub mod narrate;
pub mod scene;
pub mod terminal;
pub mod ui;
pub mod viewport;
pub mod widgets;

pub use event_loop::EventLoop;
