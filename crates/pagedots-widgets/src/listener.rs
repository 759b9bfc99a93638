//! Page-change notifications delivered by a pager to its observers.

/// What the pager's scroll position is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    /// Resting on a page.
    #[default]
    Idle,
    /// Following the user's drag.
    Dragging,
    /// Animating toward a target page after a release or programmatic jump.
    Settling,
}

/// Capability set for anything that follows a pager.
///
/// A pager calls these in the order the underlying scroll produces them. All
/// calls happen on the thread that owns both the pager and the listener.
pub trait PageChangeListener {
    /// The scroll position moved. `position` is the index of the leftmost
    /// visible page and `offset` is how far (in `[0, 1)`) the next page has
    /// slid into view.
    fn on_page_scrolled(&mut self, position: i32, offset: f32);

    /// A new page became the selected one.
    fn on_page_selected(&mut self, position: i32);

    /// The pager switched between idle, dragging and settling.
    fn on_page_scroll_state_changed(&mut self, state: ScrollState);
}

/// A single page-change notification, as a value.
///
/// Used as the message type of [`PageIndicator`](crate::indicator::PageIndicator)
/// and returned in bulk by [`Pager`](crate::pager::Pager) operations so the
/// host can route them without the pager holding a reference to its
/// listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// See [`PageChangeListener::on_page_scrolled`].
    Scrolled {
        /// Leftmost visible page.
        position: i32,
        /// Fractional progress toward the next page.
        offset: f32,
    },
    /// See [`PageChangeListener::on_page_selected`].
    Selected(i32),
    /// See [`PageChangeListener::on_page_scroll_state_changed`].
    ScrollStateChanged(ScrollState),
}

impl PageEvent {
    /// Deliver this event to `listener`.
    pub fn dispatch(self, listener: &mut dyn PageChangeListener) {
        match self {
            PageEvent::Scrolled { position, offset } => listener.on_page_scrolled(position, offset),
            PageEvent::Selected(position) => listener.on_page_selected(position),
            PageEvent::ScrollStateChanged(state) => listener.on_page_scroll_state_changed(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl PageChangeListener for Recorder {
        fn on_page_scrolled(&mut self, position: i32, offset: f32) {
            self.calls.push(format!("scrolled {position} {offset}"));
        }

        fn on_page_selected(&mut self, position: i32) {
            self.calls.push(format!("selected {position}"));
        }

        fn on_page_scroll_state_changed(&mut self, state: ScrollState) {
            self.calls.push(format!("state {state:?}"));
        }
    }

    #[test]
    fn dispatch_routes_each_variant() {
        let mut recorder = Recorder::default();
        PageEvent::ScrollStateChanged(ScrollState::Dragging).dispatch(&mut recorder);
        PageEvent::Scrolled {
            position: 1,
            offset: 0.5,
        }
        .dispatch(&mut recorder);
        PageEvent::Selected(2).dispatch(&mut recorder);

        assert_eq!(
            recorder.calls,
            vec!["state Dragging", "scrolled 1 0.5", "selected 2"]
        );
    }
}
