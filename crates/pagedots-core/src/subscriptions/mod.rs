//! Built-in subscription sources.
//!
//! - [`terminal_events`] -- keyboard, mouse, and resize events.
//! - [`Every`] -- a repeating timer, used to drive animations.

mod terminal;
mod timer;

pub use terminal::*;
pub use timer::*;
