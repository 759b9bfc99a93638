//! **pagedots** -- page indicator dots for [`ratatui`].
//!
//! Umbrella crate re-exporting everything needed to embed a
//! [`PageIndicator`](widgets::PageIndicator) in an application:
//!
//! * The runtime from [`pagedots_core`] at the crate root ([`Model`],
//!   [`Component`], [`Command`], [`Program`], [`run_with`], ...).
//! * The widgets from [`pagedots_widgets`] under [`widgets`].
//! * [`showcase::Showcase`], a complete model wiring a pager to an indicator.
//! * [`ratatui`], [`crossterm`] and [`tokio`], so downstream crates need no
//!   direct dependency on them.
//!
//! # Following a pager
//!
//! ```ignore
//! use pagedots::widgets::{PageIndicator, Pager, IndicatorConfig};
//!
//! let mut pager = Pager::new("pages", 4);
//! let mut indicator = PageIndicator::new(&IndicatorConfig::default()).with_total_pages(4);
//!
//! for event in pager.select(2) {
//!     event.dispatch(&mut indicator);
//! }
//! assert_eq!(indicator.displayed_position(), 2);
//! ```

pub mod showcase;

pub use pagedots_core::*;
pub mod widgets {
    pub use pagedots_widgets::*;
}

pub use crossterm;
pub use ratatui;
pub use tokio;
