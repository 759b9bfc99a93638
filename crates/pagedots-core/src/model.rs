use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// The top-level application trait.
///
/// The runtime drives an **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) builds the initial state.
/// 2. [`view`](Model::view) draws it.
/// 3. Messages arrive from [`Subscription`]s or [`Command::message`].
/// 4. [`update`](Model::update) mutates state and may return more work.
/// 5. If [`take_redraw_request`](Model::take_redraw_request) reports a pending
///    redraw, the next frame tick calls `view` again.
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Startup data handed to [`Model::init`]. Use `()` when none is needed.
    type Flags: Send + 'static;

    /// Create the initial model and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state. Must be a pure function of `&self`.
    fn view(&self, frame: &mut Frame);

    /// Declare active subscriptions. Called after every update; the runtime
    /// starts new ones and cancels the ones that disappeared.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Consume the model's pending redraw request.
    ///
    /// Called once after every update. Requests are coalesced: however many
    /// updates asked for a redraw, the runtime renders once per frame tick.
    /// The default always asks for a redraw.
    fn take_redraw_request(&mut self) -> bool {
        true
    }
}
