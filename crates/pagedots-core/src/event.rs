use crossterm::event::{KeyEvent, MouseEvent};

/// Terminal input delivered through the
/// [`terminal_events`](crate::subscriptions::terminal_events) subscription.
///
/// Focus and paste events are dropped; the widgets in this workspace never
/// react to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event. Only delivered when mouse capture is enabled in
    /// [`ProgramOptions`](crate::ProgramOptions).
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
}

impl TerminalEvent {
    /// Convert a raw crossterm event, discarding kinds we do not forward.
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        match event {
            crossterm::event::Event::Key(k) => Some(TerminalEvent::Key(k)),
            crossterm::event::Event::Mouse(m) => Some(TerminalEvent::Mouse(m)),
            crossterm::event::Event::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
            _ => None,
        }
    }
}
