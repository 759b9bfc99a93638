//! A ready-made model pairing a [`Pager`] with a [`PageIndicator`].
//!
//! Drives the demo binary and doubles as a reference for wiring the two
//! widgets together: pager commands come back as
//! [`pager::Message::PageChanged`] and are handed to the indicator.

use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use pagedots_core::{terminal_events, Command, Component, Model, Subscription, TerminalEvent};
use pagedots_widgets::pager::{self, Direction, Pager};
use pagedots_widgets::style::IndicatorConfig;
use pagedots_widgets::PageIndicator;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Pages moved by one `,` or `.` key press.
pub const KEY_DRAG_STEP: f32 = 0.1;

const PAGER_ID: &str = "showcase-pager";

/// Startup options for [`Showcase`].
#[derive(Debug, Clone)]
pub struct ShowcaseFlags {
    /// Number of pages.
    pub pages: usize,
    /// Indicator style.
    pub config: IndicatorConfig,
    /// Start in right-to-left mode.
    pub rtl: bool,
    /// Bias added to pager positions before the indicator sees them.
    pub page_index_offset: i32,
}

impl Default for ShowcaseFlags {
    fn default() -> Self {
        Self {
            pages: 5,
            config: IndicatorConfig::default(),
            rtl: false,
            page_index_offset: 0,
        }
    }
}

/// Showcase messages.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Forwarded to the pager, or a notification coming back from it.
    Pager(pager::Message),
    /// Flip between sliding and jumping highlight.
    ToggleAnimated,
    /// Flip right-to-left mode.
    ToggleRtl,
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Left button pressed at this column.
    MouseDown(u16),
    /// Left button dragged to this column.
    MouseDrag(u16),
    /// Left button released.
    MouseUp,
    /// Leave the program.
    Quit,
}

/// Pager on top, indicator below, key help at the bottom.
pub struct Showcase {
    pager: Pager,
    indicator: PageIndicator,
    width: u16,
    drag_anchor: Option<u16>,
    dirty: bool,
}

impl Showcase {
    /// The pager.
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// The indicator.
    pub fn indicator(&self) -> &PageIndicator {
        &self.indicator
    }

    fn resync_indicator(&mut self) {
        self.indicator.set_position(self.pager.selected());
        self.dirty = true;
    }

    fn page_width(&self) -> f32 {
        // Two columns go to the pager's border.
        f32::from(self.width.saturating_sub(2).max(1))
    }
}

impl Model for Showcase {
    type Message = Msg;
    type Flags = ShowcaseFlags;

    fn init(flags: ShowcaseFlags) -> (Self, Command<Msg>) {
        let pager = Pager::new(PAGER_ID, flags.pages);
        let mut indicator = PageIndicator::new(&flags.config)
            .with_total_pages(pager.page_count())
            .with_rtl(flags.rtl)
            .with_page_index_offset(flags.page_index_offset);
        indicator.set_position(pager.selected());

        let model = Showcase {
            pager,
            indicator,
            width: 80,
            drag_anchor: None,
            dirty: true,
        };
        (model, Command::none())
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Pager(pager::Message::PageChanged(event)) => {
                event.dispatch(&mut self.indicator);
            }
            Msg::Pager(msg) => return self.pager.update(msg).map(Msg::Pager),
            Msg::ToggleAnimated => {
                let animated = !self.indicator.is_animated();
                self.indicator.set_animated(animated);
                self.resync_indicator();
            }
            Msg::ToggleRtl => {
                let rtl = !self.indicator.is_rtl();
                self.indicator.set_rtl(rtl);
                self.resync_indicator();
            }
            Msg::Resize(width, _) => {
                self.width = width;
                self.dirty = true;
            }
            Msg::MouseDown(column) => {
                self.drag_anchor = Some(column);
                return self.pager.update(pager::Message::BeginDrag).map(Msg::Pager);
            }
            Msg::MouseDrag(column) => {
                let Some(anchor) = self.drag_anchor else {
                    return Command::none();
                };
                self.drag_anchor = Some(column);
                // Dragging the content left reveals the next page.
                let columns = f32::from(anchor) - f32::from(column);
                let delta = columns / self.page_width();
                return self.pager.update(pager::Message::DragBy(delta)).map(Msg::Pager);
            }
            Msg::MouseUp => {
                if self.drag_anchor.take().is_some() {
                    return self.pager.update(pager::Message::Release).map(Msg::Pager);
                }
            }
            Msg::Quit => return Command::quit(),
        }
        Command::none()
    }

    fn view(&self, frame: &mut Frame) {
        let [header, pages, dots, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let mode = format!(
            "{} · {} · page {}/{}",
            if self.indicator.is_animated() { "animated" } else { "static" },
            if self.indicator.is_rtl() { "RTL" } else { "LTR" },
            self.pager.selected() + 1,
            self.pager.page_count(),
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("pagedots ", Style::default().fg(Color::Cyan)),
                Span::raw(mode),
            ])),
            header,
        );

        self.pager.view(frame, pages);
        self.indicator.view(frame, dots);

        let key = Style::default().fg(Color::Cyan);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("←/→", key),
                Span::raw(" swipe  "),
                Span::styled(",/.", key),
                Span::raw(" drag  "),
                Span::styled("space", key),
                Span::raw(" release  "),
                Span::styled("a", key),
                Span::raw(" animate  "),
                Span::styled("r", key),
                Span::raw(" rtl  "),
                Span::styled("q", key),
                Span::raw(" quit"),
            ]))
            .alignment(Alignment::Center),
            help,
        );
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        let mut subs = vec![terminal_events(map_terminal_event)];
        subs.extend(
            self.pager
                .subscriptions()
                .into_iter()
                .map(|sub| sub.map(Msg::Pager)),
        );
        subs
    }

    fn take_redraw_request(&mut self) -> bool {
        let pager = self.pager.take_redraw_request();
        let indicator = self.indicator.take_redraw_request();
        let own = std::mem::take(&mut self.dirty);
        pager || indicator || own
    }
}

/// Translate terminal input into showcase messages.
pub fn map_terminal_event(event: TerminalEvent) -> Option<Msg> {
    match event {
        TerminalEvent::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
            KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
            KeyCode::Left | KeyCode::Char('h') => {
                Some(Msg::Pager(pager::Message::Swipe(Direction::Backward)))
            }
            KeyCode::Right | KeyCode::Char('l') => {
                Some(Msg::Pager(pager::Message::Swipe(Direction::Forward)))
            }
            KeyCode::Char(',') => Some(Msg::Pager(pager::Message::DragBy(-KEY_DRAG_STEP))),
            KeyCode::Char('.') => Some(Msg::Pager(pager::Message::DragBy(KEY_DRAG_STEP))),
            KeyCode::Char(' ') => Some(Msg::Pager(pager::Message::Release)),
            KeyCode::Char('a') => Some(Msg::ToggleAnimated),
            KeyCode::Char('r') => Some(Msg::ToggleRtl),
            KeyCode::Char(c @ '1'..='9') => {
                let page = c.to_digit(10).map_or(0, |d| d as i32 - 1);
                Some(Msg::Pager(pager::Message::Select(page)))
            }
            _ => None,
        },
        TerminalEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Msg::MouseDown(mouse.column)),
            MouseEventKind::Drag(MouseButton::Left) => Some(Msg::MouseDrag(mouse.column)),
            MouseEventKind::Up(MouseButton::Left) => Some(Msg::MouseUp),
            _ => None,
        },
        TerminalEvent::Resize(width, height) => Some(Msg::Resize(width, height)),
        _ => None,
    }
}
