//! A horizontally paged container that reports its scroll position.
//!
//! The pager does not know who is listening. Every operation returns the
//! [`PageEvent`]s it produced; inside the runtime they come back out of
//! [`Component::update`] as [`Message::PageChanged`] commands, which the
//! parent routes to a [`PageIndicator`](crate::indicator::PageIndicator) or
//! any other [`PageChangeListener`](crate::listener::PageChangeListener).
//!
//! Scroll events follow the usual pager convention: `position` is the
//! leftmost visible page and `offset` is how far the next page has slid in.

use crate::listener::{PageEvent, ScrollState};
use pagedots_core::command::Command;
use pagedots_core::component::Component;
use pagedots_core::subscription::{subscribe, Subscription};
use pagedots_core::subscriptions::Every;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Which neighbour a swipe goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward page 0.
    Backward,
    /// Toward the last page.
    Forward,
}

/// Messages for the pager component.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Advance the settle animation by one frame.
    Tick,
    /// The user grabbed the pages.
    BeginDrag,
    /// The user dragged by this many pages (positive moves forward).
    DragBy(f32),
    /// The user let go; settle on the nearest page.
    Release,
    /// Settle on the neighbouring page.
    Swipe(Direction),
    /// Settle on a specific page.
    Select(i32),
    /// Outgoing notification produced by one of the messages above. The
    /// pager itself ignores it.
    PageChanged(PageEvent),
}

/// Style configuration for the pager.
#[derive(Debug, Clone)]
pub struct PagerStyle {
    /// Frame around the pages.
    pub border: Style,
    /// Page titles.
    pub title: Style,
}

impl Default for PagerStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::DarkGray),
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// A paged container with drag, fling-to-neighbour and settle animation.
pub struct Pager {
    titles: Vec<String>,
    scroll: f32,
    selected: i32,
    target: i32,
    state: ScrollState,
    settle_step: f32,
    tick_interval: Duration,
    style: PagerStyle,
    id: &'static str,
    redraw_requested: bool,
}

impl Pager {
    /// Create a pager with `page_count` pages titled "Page 1", "Page 2", ...
    pub fn new(id: &'static str, page_count: usize) -> Self {
        Self::with_titles(id, (1..=page_count).map(|n| format!("Page {n}")))
    }

    /// Create a pager with one page per title.
    pub fn with_titles(id: &'static str, titles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            scroll: 0.0,
            selected: 0,
            target: 0,
            state: ScrollState::Idle,
            settle_step: 0.125,
            tick_interval: Duration::from_millis(16),
            style: PagerStyle::default(),
            id,
            redraw_requested: true,
        }
    }

    /// Pages moved per animation frame while settling.
    pub fn with_settle_step(mut self, step: f32) -> Self {
        self.settle_step = step.max(f32::EPSILON);
        self
    }

    /// Time between animation frames, at least one millisecond.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval.max(MIN_TICK_INTERVAL);
        self
    }

    /// Set the pager style.
    pub fn with_style(mut self, style: PagerStyle) -> Self {
        self.style = style;
        self
    }

    /// Number of pages.
    pub fn page_count(&self) -> i32 {
        i32::try_from(self.titles.len()).unwrap_or(i32::MAX)
    }

    /// The selected page.
    pub fn selected(&self) -> i32 {
        self.selected
    }

    /// Current scroll position in pages.
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Time between animation frames.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// What the scroll position is doing.
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Return and clear the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn last_page(&self) -> i32 {
        (self.page_count() - 1).max(0)
    }

    // --- operations ---

    /// Start following a drag. Interrupts any settle in progress.
    pub fn begin_drag(&mut self) -> Vec<PageEvent> {
        let mut events = Vec::new();
        self.set_state(ScrollState::Dragging, &mut events);
        events
    }

    /// Move by `delta` pages, clamped to the first and last page.
    pub fn drag_by(&mut self, delta: f32) -> Vec<PageEvent> {
        let mut events = Vec::new();
        self.set_state(ScrollState::Dragging, &mut events);
        self.scroll_to(self.scroll + delta, &mut events);
        events
    }

    /// End a drag and settle on the nearest page.
    pub fn release(&mut self) -> Vec<PageEvent> {
        let mut events = Vec::new();
        if self.state == ScrollState::Dragging {
            self.settle_to(self.scroll.round() as i32, &mut events);
        }
        events
    }

    /// Settle on the neighbouring page in `direction`.
    pub fn swipe(&mut self, direction: Direction) -> Vec<PageEvent> {
        let base = if self.state == ScrollState::Settling {
            self.target
        } else {
            self.scroll.round() as i32
        };
        let target = match direction {
            Direction::Backward => base - 1,
            Direction::Forward => base + 1,
        };
        let mut events = Vec::new();
        self.settle_to(target, &mut events);
        events
    }

    /// Settle on `page`, clamped to the valid range.
    pub fn select(&mut self, page: i32) -> Vec<PageEvent> {
        let mut events = Vec::new();
        self.settle_to(page, &mut events);
        events
    }

    /// Advance a settle by one frame. Does nothing unless settling.
    pub fn tick(&mut self) -> Vec<PageEvent> {
        let mut events = Vec::new();
        if self.state != ScrollState::Settling {
            return events;
        }

        let target = self.target as f32;
        let remaining = target - self.scroll;
        if remaining.abs() <= self.settle_step {
            self.scroll_to(target, &mut events);
            self.set_state(ScrollState::Idle, &mut events);
        } else {
            self.scroll_to(self.scroll + self.settle_step.copysign(remaining), &mut events);
        }
        events
    }

    fn settle_to(&mut self, page: i32, events: &mut Vec<PageEvent>) {
        let page = page.clamp(0, self.last_page());
        self.target = page;

        if self.scroll == page as f32 {
            self.set_state(ScrollState::Idle, events);
        } else {
            self.set_state(ScrollState::Settling, events);
        }
        if page != self.selected {
            self.selected = page;
            tracing::debug!(page, "page selected");
            events.push(PageEvent::Selected(page));
        }
    }

    fn scroll_to(&mut self, scroll: f32, events: &mut Vec<PageEvent>) {
        let scroll = scroll.clamp(0.0, self.last_page() as f32);
        if scroll == self.scroll {
            return;
        }
        self.scroll = scroll;
        self.redraw_requested = true;

        let position = scroll.floor();
        events.push(PageEvent::Scrolled {
            position: position as i32,
            offset: scroll - position,
        });
    }

    fn set_state(&mut self, state: ScrollState, events: &mut Vec<PageEvent>) {
        if state == self.state {
            return;
        }
        tracing::trace!(from = ?self.state, to = ?state, "pager scroll state");
        self.state = state;
        self.redraw_requested = true;
        events.push(PageEvent::ScrollStateChanged(state));
    }
}

fn notify(events: Vec<PageEvent>) -> Command<Message> {
    Command::batch(
        events
            .into_iter()
            .map(|event| Command::message(Message::PageChanged(event))),
    )
}

impl Component for Pager {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        let events = match msg {
            Message::Tick => self.tick(),
            Message::BeginDrag => self.begin_drag(),
            Message::DragBy(delta) => self.drag_by(delta),
            Message::Release => self.release(),
            Message::Swipe(direction) => self.swipe(direction),
            Message::Select(page) => self.select(page),
            Message::PageChanged(_) => return Command::none(),
        };
        notify(events)
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style.border);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let page_width = f32::from(inner.width);
        let row = inner.y + inner.height / 2;
        let first_visible = self.scroll.floor() as i32;
        let buf = frame.buffer_mut();

        for page in first_visible..=first_visible + 1 {
            let Some(title) = usize::try_from(page).ok().and_then(|i| self.titles.get(i)) else {
                continue;
            };
            let page_left = (page as f32 - self.scroll) * page_width;
            let title_width = title.width() as f32;
            let mut col = (page_left + (page_width - title_width) / 2.0).round() as i32;

            for ch in title.chars() {
                let ch_width = ch.width().unwrap_or(0) as i32;
                if col >= 0 && col + ch_width <= i32::from(inner.width) {
                    let x = inner.x + col as u16;
                    buf[(x, row)].set_char(ch).set_style(self.style.title);
                }
                col += ch_width;
            }
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        if self.state == ScrollState::Settling {
            vec![subscribe(Every::new(self.tick_interval, self.id)).map(|_| Message::Tick)]
        } else {
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagedots_core::testing::buffer_to_string;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn scrolled(position: i32, offset: f32) -> PageEvent {
        PageEvent::Scrolled { position, offset }
    }

    fn settle(pager: &mut Pager) -> Vec<PageEvent> {
        let mut events = Vec::new();
        while pager.state() == ScrollState::Settling {
            events.extend(pager.tick());
        }
        events
    }

    #[test]
    fn new_pager_rests_on_first_page() {
        let pager = Pager::new("pages", 3);
        assert_eq!(pager.page_count(), 3);
        assert_eq!(pager.selected(), 0);
        assert_eq!(pager.state(), ScrollState::Idle);
    }

    #[test]
    fn zero_tick_interval_is_raised_to_a_millisecond() {
        let pager = Pager::new("pages", 3).with_tick_interval(Duration::ZERO);
        assert_eq!(pager.tick_interval(), Duration::from_millis(1));

        let pager = Pager::new("pages", 3).with_tick_interval(Duration::from_millis(40));
        assert_eq!(pager.tick_interval(), Duration::from_millis(40));
    }

    #[test]
    fn drag_reports_state_then_scroll() {
        let mut pager = Pager::new("pages", 3);
        let events = pager.drag_by(0.25);
        assert_eq!(
            events,
            vec![
                PageEvent::ScrollStateChanged(ScrollState::Dragging),
                scrolled(0, 0.25),
            ]
        );

        assert_eq!(pager.drag_by(1.0), vec![scrolled(1, 0.25)]);
    }

    #[test]
    fn drag_is_clamped_to_the_page_range() {
        let mut pager = Pager::new("pages", 3);
        pager.drag_by(-1.0);
        assert_eq!(pager.scroll(), 0.0);
        pager.drag_by(10.0);
        assert_eq!(pager.scroll(), 2.0);
        assert_eq!(pager.drag_by(1.0), vec![]);
    }

    #[test]
    fn release_settles_on_nearest_page() {
        let mut pager = Pager::new("pages", 3);
        pager.drag_by(0.75);

        let events = pager.release();
        assert_eq!(
            events,
            vec![
                PageEvent::ScrollStateChanged(ScrollState::Settling),
                PageEvent::Selected(1),
            ]
        );

        let events = settle(&mut pager);
        assert_eq!(
            events,
            vec![
                scrolled(0, 0.875),
                scrolled(1, 0.0),
                PageEvent::ScrollStateChanged(ScrollState::Idle),
            ]
        );
        assert_eq!(pager.scroll(), 1.0);
    }

    #[test]
    fn release_back_to_same_page_does_not_select() {
        let mut pager = Pager::new("pages", 3);
        pager.drag_by(0.25);
        let events = pager.release();
        assert_eq!(events, vec![PageEvent::ScrollStateChanged(ScrollState::Settling)]);
        settle(&mut pager);
        assert_eq!(pager.scroll(), 0.0);
        assert_eq!(pager.selected(), 0);
    }

    #[test]
    fn release_without_drag_is_ignored() {
        let mut pager = Pager::new("pages", 3);
        assert!(pager.release().is_empty());
    }

    #[test]
    fn swipe_walks_neighbours_and_stops_at_edges() {
        let mut pager = Pager::new("pages", 2);
        assert!(pager.swipe(Direction::Backward).is_empty());

        pager.swipe(Direction::Forward);
        settle(&mut pager);
        assert_eq!(pager.selected(), 1);

        assert!(pager.swipe(Direction::Forward).is_empty());
        assert_eq!(pager.state(), ScrollState::Idle);
    }

    #[test]
    fn swipe_while_settling_extends_target() {
        let mut pager = Pager::new("pages", 4);
        pager.swipe(Direction::Forward);
        pager.tick();
        let events = pager.swipe(Direction::Forward);
        assert_eq!(events, vec![PageEvent::Selected(2)]);
        settle(&mut pager);
        assert_eq!(pager.scroll(), 2.0);
    }

    #[test]
    fn select_is_clamped() {
        let mut pager = Pager::new("pages", 3);
        pager.select(9);
        assert_eq!(pager.selected(), 2);
        settle(&mut pager);
        assert_eq!(pager.scroll(), 2.0);
    }

    #[test]
    fn tick_when_idle_does_nothing() {
        let mut pager = Pager::new("pages", 3);
        assert!(pager.tick().is_empty());
    }

    #[test]
    fn update_emits_page_changed_messages() {
        let mut pager = Pager::new("pages", 3);
        let cmd = pager.update(Message::Select(1));
        assert!(!cmd.is_none());
        assert!(pager.update(Message::PageChanged(PageEvent::Selected(0))).is_none());
    }

    #[test]
    fn timer_runs_only_while_settling() {
        let mut pager = Pager::new("pages", 3);
        assert!(pager.subscriptions().is_empty());
        pager.swipe(Direction::Forward);
        assert_eq!(pager.subscriptions().len(), 1);
        settle(&mut pager);
        assert!(pager.subscriptions().is_empty());
    }

    #[test]
    fn view_slides_titles() {
        let mut pager = Pager::with_titles("pages", ["One", "Two"]);
        let mut terminal = Terminal::new(TestBackend::new(22, 3)).unwrap();

        terminal.draw(|frame| pager.view(frame, frame.area())).unwrap();
        let text = buffer_to_string(terminal.backend().buffer());
        assert!(text.contains("One"));
        assert!(!text.contains("Two"));

        pager.drag_by(0.75);
        terminal.draw(|frame| pager.view(frame, frame.area())).unwrap();
        let text = buffer_to_string(terminal.backend().buffer());
        assert!(text.contains("Two"));
    }
}
