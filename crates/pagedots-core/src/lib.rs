//! Runtime for the **pagedots** widgets.
//!
//! `pagedots-core` is a small Elm-style terminal runtime built on [`ratatui`]
//! and [`crossterm`]. A program is an **init -> update -> view** cycle with
//! side effects pushed to the edges through [`Command`]s and
//! [`Subscription`]s.
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Follow-up message or quit request returned from `update` |
//! | [`Subscription`] | Long-lived event source (terminal input, timers) |
//! | [`Program`] | Drives a [`Model`] against a real terminal |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit tests |
//!
//! Redraws are requests, not immediate draws: after each update the runtime
//! asks [`Model::take_redraw_request`] and, if anything is pending, draws on
//! the next frame tick.

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{log_to_file, Program, ProgramError, ProgramOptions};
pub use subscription::{subscribe, Subscription, SubscriptionId, SubscriptionSource};
pub use subscriptions::{terminal_events, Every};

/// Run a model with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
