//! Page indicator widgets for **pagedots**.
//!
//! Every widget implements [`pagedots_core::Component`], so it can be embedded
//! in any [`pagedots_core::Model`] and placed with ordinary [`ratatui`]
//! layouts.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`indicator`] | Row of dots highlighting the current page, optionally sliding with the drag |
//! | [`pager`] | Paged container with drag, swipe and settle animation |
//! | [`listener`] | [`PageChangeListener`](listener::PageChangeListener) capability and [`PageEvent`](listener::PageEvent) values |
//! | [`style`] | [`IndicatorConfig`](style::IndicatorConfig) and TOML style files |
//! | [`dot`] | Filled circle shape for ratatui's canvas |

pub mod dot;
pub mod indicator;
pub mod listener;
pub mod pager;
pub mod style;

pub use indicator::PageIndicator;
pub use listener::{PageChangeListener, PageEvent, ScrollState};
pub use pager::Pager;
pub use style::{ConfigError, IndicatorConfig};
