//! Row-of-dots page indicator that follows a pager.
//!
//! The indicator listens to a pager through [`PageChangeListener`] and
//! highlights the dot for the current page. When animated, the highlight
//! slides between dots as the pager is dragged.
//!
//! Drawing happens on a braille [`Canvas`], which gives every terminal cell a
//! 2x4 grid of pixels. All geometry (`spacing`, `size`, dot positions) is in
//! those pixels.

use crate::dot::Dot;
use crate::listener::{PageChangeListener, PageEvent, ScrollState};
use crate::style::IndicatorConfig;
use pagedots_core::command::Command;
use pagedots_core::component::Component;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::Canvas;
use ratatui::Frame;

/// Horizontal pixels per terminal cell.
pub const PIXELS_PER_CELL_X: f32 = 2.0;
/// Vertical pixels per terminal cell.
pub const PIXELS_PER_CELL_Y: f32 = 4.0;

/// Where each dot goes for a given drawing area.
#[derive(Debug, Clone, PartialEq)]
pub struct DotLayout {
    /// Vertical center shared by every dot.
    pub center_y: f32,
    /// X of the leftmost dot.
    pub first_x: f32,
    /// X of every regular dot, left to right.
    pub dots: Vec<f32>,
    /// X of the highlighted dot.
    pub highlight_x: f32,
}

/// A page indicator.
///
/// `total_pages` and positions are plain `i32`s and are not validated: a
/// negative page count draws no regular dots, and out-of-range positions are
/// clamped only in the direction the layout mode needs (see
/// [`set_position`](PageIndicator::set_position)).
///
/// Mutating calls record a redraw request instead of drawing. The host
/// collects it with [`take_redraw_request`](PageIndicator::take_redraw_request).
#[derive(Debug, Clone)]
pub struct PageIndicator {
    total_pages: i32,
    current_page: i32,
    displayed_page: i32,
    current_page_offset: f32,
    page_index_offset: i32,
    rtl: bool,
    animated: bool,
    current_page_color: Color,
    other_page_color: Color,
    spacing: f32,
    size: f32,
    redraw_requested: bool,
}

impl Default for PageIndicator {
    fn default() -> Self {
        Self::new(&IndicatorConfig::default())
    }
}

impl PageIndicator {
    /// Build an indicator from `config`, scaling spacing and size by its
    /// density.
    pub fn new(config: &IndicatorConfig) -> Self {
        Self {
            total_pages: 0,
            current_page: 0,
            displayed_page: 0,
            current_page_offset: 0.0,
            page_index_offset: 0,
            rtl: false,
            animated: config.animated,
            current_page_color: config.current_page_color,
            other_page_color: config.other_page_color,
            spacing: config.scaled_spacing(),
            size: config.scaled_size(),
            redraw_requested: true,
        }
    }

    /// Set the number of dots.
    pub fn with_total_pages(mut self, n: i32) -> Self {
        self.set_total_pages(n);
        self
    }

    /// Set right-to-left mode.
    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// Set the bias added to incoming page indices.
    pub fn with_page_index_offset(mut self, offset: i32) -> Self {
        self.page_index_offset = offset;
        self
    }

    // --- position tracking ---

    /// Set the number of dots and request a redraw.
    pub fn set_total_pages(&mut self, n: i32) {
        self.total_pages = n;
        self.request_redraw();
    }

    /// Track a new pager position.
    ///
    /// The tracked page is `position + page_index_offset`. The drawn page is
    /// clamped to the last dot in LTR mode and to the first dot in RTL mode;
    /// the other end is left alone so the index offset can push it past a
    /// boundary during a dismiss gesture.
    pub fn set_position(&mut self, position: i32) {
        self.current_page = position.wrapping_add(self.page_index_offset);
        self.displayed_page = if self.rtl {
            self.current_page.max(0)
        } else {
            self.current_page.min(self.total_pages.wrapping_sub(1))
        };
        tracing::trace!(
            position,
            current = self.current_page,
            displayed = self.displayed_page,
            "indicator position"
        );
        self.request_redraw();
    }

    /// The tracked page, including the index offset.
    pub fn position(&self) -> i32 {
        self.current_page
    }

    /// The page whose dot is highlighted.
    pub fn displayed_position(&self) -> i32 {
        self.displayed_page
    }

    /// Number of dots.
    pub fn total_pages(&self) -> i32 {
        self.total_pages
    }

    /// Fractional progress currently applied to the highlight.
    pub fn current_page_offset(&self) -> f32 {
        self.current_page_offset
    }

    /// Whether right-to-left mode is on.
    pub fn is_rtl(&self) -> bool {
        self.rtl
    }

    /// Switch right-to-left mode. Takes effect on the next
    /// [`set_position`](Self::set_position); no redraw is requested.
    pub fn set_rtl(&mut self, rtl: bool) {
        self.rtl = rtl;
    }

    /// Bias added to incoming page indices.
    pub fn page_index_offset(&self) -> i32 {
        self.page_index_offset
    }

    /// Change the index bias. Takes effect on the next
    /// [`set_position`](Self::set_position); no redraw is requested.
    pub fn set_page_index_offset(&mut self, offset: i32) {
        self.page_index_offset = offset;
    }

    /// Whether the tracked page sits on the boundary dot, where sliding the
    /// highlight further would overshoot the row.
    pub fn can_show_animation(&self) -> bool {
        if self.rtl {
            self.current_page < 0
        } else {
            self.current_page == self.total_pages.wrapping_sub(1)
        }
    }

    // --- style ---

    /// Whether scroll progress slides the highlight.
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Turn sliding on or off. Any applied offset is dropped.
    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
        self.current_page_offset = 0.0;
        self.request_redraw();
    }

    /// Color of the highlighted dot.
    pub fn current_page_color(&self) -> Color {
        self.current_page_color
    }

    /// Change the highlighted dot color.
    pub fn set_current_page_color(&mut self, color: Color) {
        self.current_page_color = color;
        self.request_redraw();
    }

    /// Color of the other dots.
    pub fn other_page_color(&self) -> Color {
        self.other_page_color
    }

    /// Change the color of the other dots.
    pub fn set_other_page_color(&mut self, color: Color) {
        self.other_page_color = color;
        self.request_redraw();
    }

    /// Distance between dot centers in pixels.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Change the distance between dot centers, in pixels. No density
    /// scaling is applied.
    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing;
        self.request_redraw();
    }

    /// Dot radius in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Change the dot radius, in pixels. No density scaling is applied.
    pub fn set_size(&mut self, size: f32) {
        self.size = size;
        self.request_redraw();
    }

    // --- redraw requests ---

    /// Whether a redraw has been requested since the last
    /// [`take_redraw_request`](Self::take_redraw_request).
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Return and clear the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    // --- geometry ---

    /// X of the leftmost dot such that the row is centered on `center_x`.
    ///
    /// Even counts center between the two middle dots. The center index is
    /// taken from `total - 1` for even counts and `total` for odd ones,
    /// before halving.
    pub fn first_dot_position(&self, center_x: f32) -> f32 {
        let even = self.total_pages % 2 == 0;
        let center_index = if even {
            self.total_pages.wrapping_sub(1) / 2
        } else {
            self.total_pages / 2
        };
        let mut spacing_mult = center_index as f32;
        if even {
            spacing_mult += 0.5;
        }
        center_x - self.spacing * spacing_mult
    }

    /// Dot positions for a drawing area of `width` x `height` pixels.
    ///
    /// Dots whose disc lies entirely outside `0..=width` are left out.
    pub fn dot_layout(&self, width: f32, height: f32) -> DotLayout {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        let first_x = self.first_dot_position(center_x);
        let dots = self
            .visible_dots(first_x, width)
            .map(|i| first_x + self.spacing * i as f32)
            .collect();
        let highlight_x =
            first_x + self.spacing * (self.displayed_page as f32 + self.current_page_offset);

        DotLayout {
            center_y,
            first_x,
            dots,
            highlight_x,
        }
    }

    // Indices of the dots that can touch `0..=width`.
    fn visible_dots(&self, first_x: f32, width: f32) -> std::ops::Range<i32> {
        let total = self.total_pages.max(0);
        let margin = if self.size.is_finite() { self.size.abs() } else { 0.0 };
        let (lo, hi) = (-margin, width + margin);
        if !first_x.is_finite() || !self.spacing.is_finite() {
            return 0..0;
        }
        if self.spacing == 0.0 {
            let touches = (lo..=hi).contains(&first_x);
            return 0..if touches { total.min(1) } else { 0 };
        }
        let a = (lo - first_x) / self.spacing;
        let b = (hi - first_x) / self.spacing;
        // Float to int casts saturate.
        let start = (a.min(b).ceil() as i32).max(0);
        let end = (a.max(b).floor() as i32).saturating_add(1).min(total);
        start..end.max(start)
    }
}

impl PageChangeListener for PageIndicator {
    fn on_page_scrolled(&mut self, position: i32, offset: f32) {
        if !self.animated {
            return;
        }
        self.set_position(position);
        self.current_page_offset = if self.can_show_animation() {
            0.0
        } else {
            offset
        };
        self.request_redraw();
    }

    fn on_page_selected(&mut self, position: i32) {
        if self.animated {
            return;
        }
        self.set_position(position);
        self.current_page_offset = 0.0;
        self.request_redraw();
    }

    fn on_page_scroll_state_changed(&mut self, _state: ScrollState) {}
}

impl Component for PageIndicator {
    type Message = PageEvent;

    fn update(&mut self, msg: PageEvent) -> Command<PageEvent> {
        msg.dispatch(self);
        Command::none()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = f32::from(area.width) * PIXELS_PER_CELL_X;
        let height = f32::from(area.height) * PIXELS_PER_CELL_Y;
        let layout = self.dot_layout(width, height);
        let radius = f64::from(self.size);
        let y = f64::from(layout.center_y);
        let x_bounds = [0.0, f64::from(width)];
        let y_bounds = [0.0, f64::from(height)];

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                for &x in &layout.dots {
                    ctx.draw(&Dot {
                        x: f64::from(x),
                        y,
                        radius,
                        color: self.other_page_color,
                        x_bounds,
                        y_bounds,
                    });
                }
                ctx.layer();
                ctx.draw(&Dot {
                    x: f64::from(layout.highlight_x),
                    y,
                    radius,
                    color: self.current_page_color,
                    x_bounds,
                    y_bounds,
                });
            });
        frame.render_widget(canvas, area);
    }
}
