use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::layout::Rect;
use ratatui::Frame;

/// A reusable piece of UI that owns its state and renders into a given area.
///
/// Components follow the same update/view cycle as [`Model`](crate::Model),
/// but they do not own the terminal. A parent model holds each component,
/// wraps the component's messages in one of its own variants, and decides
/// where on screen the component is drawn.
///
/// ```rust,ignore
/// struct App { indicator: PageIndicator }
///
/// enum AppMsg { Page(PageEvent) }
///
/// impl Model for App {
///     // ...
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Page(ev) => self.indicator.update(ev).map(AppMsg::Page),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         self.indicator.view(frame, frame.area());
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's own message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`].
    ///
    /// Parents lift the returned command with [`Command::map`].
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area`. Implementations must not draw outside it.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Subscriptions this component needs right now.
    ///
    /// The parent collects these and returns them from
    /// [`Model::subscriptions`](crate::Model::subscriptions), mapped into its
    /// own message type.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
