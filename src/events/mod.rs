//! Event queue between the core and the presentation layer.
//!
//! Events are fired as the core mutates state; the presentation layer
//! drains them and decides how (and how slowly) to show them.

mod event;

pub use event::{EventQueue, GameEvent};
