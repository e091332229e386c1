//! Canvas chart of yearly OS shares.
//!
//! [`ShareChart`] draws the selected time window as monotone lines or grouped
//! bars, with title, legend, grid and an index-mode hover tooltip. Static
//! layers go through a caller-owned [`Cache`]; clear it whenever the view
//! state or theme changes.

pub mod curve;
pub mod layout;
pub mod tooltip;

use iced::{
    alignment::{Horizontal, Vertical},
    mouse,
    widget::canvas::{self, Action, Cache, Canvas, Event, Frame, Geometry, Path, Stroke, Text},
    Element, Length, Point, Rectangle, Renderer, Size,
};
use layout::{PlotArea, MARGINS};
use osshare_core::{ChartKind, DataWindow, Os, ViewState};
use osshare_theme::{Color, Theme};
use tooltip::Tooltip;

pub use iced::widget::canvas::Cache as ChartCache;

const TITLE: &str = "Annual share of users by operating system";
const Y_TITLE: &str = "Share of users (%)";
const X_TITLE: &str = "Year";

const POINT_RADIUS: f32 = 3.0;
const SWATCH: f32 = 12.0;
/// Fraction of each year band covered by its bar group.
const BAR_GROUP: f32 = 0.8;
/// Rough glyph advance relative to font size, for sizing boxes around text.
const CHAR_WIDTH: f32 = 0.6;

/// Borrowed inputs for one frame of the chart.
pub struct ShareChart<'a> {
    window: DataWindow<'a>,
    view:   ViewState,
    theme:  &'a Theme,
    cache:  &'a Cache,
}

impl<'a> ShareChart<'a> {
    pub fn new(window: DataWindow<'a>, view: ViewState, theme: &'a Theme, cache: &'a Cache) -> Self {
        Self { window, view, theme, cache }
    }

    /// Wrap the chart in a canvas filling the available space.
    pub fn view<Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn hovered(&self, bounds: Rectangle, cursor: mouse::Cursor) -> Option<usize> {
        let p = cursor.position_in(bounds)?;
        let area = PlotArea::new(bounds.size());
        if !area.contains(p) {
            return None;
        }
        area.index_at(p.x, self.window.len())
    }

    // ── Static layer ──────────────────────────────────────────────────────────

    fn draw_static(&self, frame: &mut Frame) {
        let size = frame.size();
        let area = PlotArea::new(size);
        let t = self.theme;

        frame.fill_text(label(
            TITLE,
            Point::new(size.width / 2.0, 14.0),
            t.foreground,
            t.font_size + 3.0,
            Horizontal::Center,
            Vertical::Top,
        ));

        self.draw_legend(frame, size);
        self.draw_grid(frame, &area);

        if self.window.is_empty() || self.view.visible.none_visible() {
            frame.fill_text(label(
                "No series selected",
                Point::new(area.rect.center_x(), area.rect.center_y()),
                t.muted(),
                t.font_size,
                Horizontal::Center,
                Vertical::Center,
            ));
            return;
        }

        match self.view.chart_kind {
            ChartKind::Line => self.draw_lines(frame, &area),
            ChartKind::Bar  => self.draw_bars(frame, &area),
        }
    }

    fn draw_legend(&self, frame: &mut Frame, size: Size) {
        let t = self.theme;
        let items: Vec<(Os, f32)> = self
            .view
            .visible
            .visible()
            .map(|os| (os, SWATCH + 6.0 + text_width(os.label(), t.font_size)))
            .collect();
        let gap = 18.0;
        let total: f32 = items.iter().map(|(_, w)| w).sum::<f32>()
            + gap * items.len().saturating_sub(1) as f32;

        let y = 46.0;
        let mut x = (size.width - total) / 2.0;
        for (os, w) in items {
            frame.fill_rectangle(
                Point::new(x, y - SWATCH / 2.0),
                Size::new(SWATCH, SWATCH),
                t.series_color(os).to_iced(),
            );
            frame.fill_text(label(
                os.label(),
                Point::new(x + SWATCH + 6.0, y),
                t.foreground,
                t.font_size,
                Horizontal::Left,
                Vertical::Center,
            ));
            x += w + gap;
        }
    }

    fn draw_grid(&self, frame: &mut Frame, area: &PlotArea) {
        let t = self.theme;
        let grid = Stroke::default().with_color(t.grid().to_iced()).with_width(1.0);
        let small = t.font_size - 2.0;

        for v in layout::y_ticks() {
            let y = area.y_for(v);
            frame.stroke(
                &Path::line(Point::new(area.left(), y), Point::new(area.right(), y)),
                grid,
            );
            frame.fill_text(label(
                format!("{v:.0}"),
                Point::new(area.left() - 8.0, y),
                t.muted(),
                small,
                Horizontal::Right,
                Vertical::Center,
            ));
        }

        let years = self.window.years();
        let stride = area.label_stride(years.len(), text_width("0000", small) + 8.0);
        for (i, year) in years.iter().enumerate() {
            let x = area.x_for(i, years.len());
            frame.stroke(
                &Path::line(Point::new(x, area.top()), Point::new(x, area.bottom())),
                grid,
            );
            // Keep the most recent year labelled.
            if (years.len() - 1 - i) % stride == 0 {
                frame.fill_text(label(
                    year.to_string(),
                    Point::new(x, area.bottom() + 6.0),
                    t.muted(),
                    small,
                    Horizontal::Center,
                    Vertical::Top,
                ));
            }
        }

        frame.fill_text(label(
            Y_TITLE,
            Point::new(area.left() - MARGINS.left + 8.0, area.top() - 12.0),
            t.foreground,
            small,
            Horizontal::Left,
            Vertical::Bottom,
        ));
        frame.fill_text(label(
            X_TITLE,
            Point::new(area.rect.center_x(), area.bottom() + MARGINS.bottom - 6.0),
            t.foreground,
            small,
            Horizontal::Center,
            Vertical::Bottom,
        ));
    }

    fn points(&self, area: &PlotArea, os: Os) -> Vec<Point> {
        let n = self.window.len();
        self.window
            .series(os)
            .iter()
            .enumerate()
            .map(|(i, v)| Point::new(area.x_for(i, n), area.y_for(*v)))
            .collect()
    }

    fn draw_lines(&self, frame: &mut Frame, area: &PlotArea) {
        let t = self.theme;
        for os in self.view.visible.visible() {
            let color = t.series_color(os).to_iced();
            let points = self.points(area, os);

            let segments = curve::monotone_segments(&points);
            if let Some(first) = segments.first() {
                let path = Path::new(|b| {
                    b.move_to(first.from);
                    for s in &segments {
                        b.bezier_curve_to(s.ctrl1, s.ctrl2, s.to);
                    }
                });
                frame.stroke(
                    &path,
                    Stroke::default()
                        .with_color(color)
                        .with_width(t.line_width)
                        .with_line_join(canvas::LineJoin::Round),
                );
            }

            for p in points {
                frame.fill(&Path::circle(p, POINT_RADIUS), color);
            }
        }
    }

    fn draw_bars(&self, frame: &mut Frame, area: &PlotArea) {
        let t = self.theme;
        let n = self.window.len();
        let visible: Vec<Os> = self.view.visible.visible().collect();
        let group = area.band_width(n) * BAR_GROUP;
        let bar = group / visible.len() as f32;
        let outline = t.line_width.min(bar / 4.0).max(1.0);

        for (slot, os) in visible.iter().enumerate() {
            let color = t.series_color(*os);
            for (i, v) in self.window.series(*os).iter().enumerate() {
                let x = area.x_for(i, n) - group / 2.0 + slot as f32 * bar;
                let top = area.y_for(*v);
                let rect = Path::rectangle(Point::new(x, top), Size::new(bar, area.bottom() - top));
                frame.fill(&rect, color.with_alpha(t.fill_alpha).to_iced());
                frame.stroke(
                    &rect,
                    Stroke::default().with_color(color.to_iced()).with_width(outline),
                );
            }
        }
    }

    // ── Hover layer ───────────────────────────────────────────────────────────

    fn draw_hover(&self, frame: &mut Frame, index: usize) {
        let Some(tip) = Tooltip::at(&self.window, self.view.visible, index) else {
            return;
        };
        let t = self.theme;
        let size = frame.size();
        let area = PlotArea::new(size);
        let n = self.window.len();
        let x = area.x_for(index, n);

        frame.stroke(
            &Path::line(Point::new(x, area.top()), Point::new(x, area.bottom())),
            Stroke::default()
                .with_color(t.foreground.with_alpha(0.3).to_iced())
                .with_width(1.0),
        );

        if self.view.chart_kind == ChartKind::Line {
            for (os, _) in &tip.entries {
                if let Some(v) = self.window.series(*os).get(index) {
                    let p = Point::new(x, area.y_for(*v));
                    frame.fill(&Path::circle(p, POINT_RADIUS + 2.0), t.series_color(*os).to_iced());
                }
            }
        }

        let font = t.font_size - 1.0;
        let line_h = font + 6.0;
        let pad = 8.0;
        let width = pad * 2.0 + SWATCH + 6.0 + text_width_chars(tip.widest(), font);
        let height = pad * 2.0 + line_h * (tip.entries.len() + 1) as f32;

        let mut left = x + 12.0;
        if left + width > size.width {
            left = x - 12.0 - width;
        }
        let top = area.top() + 8.0;

        frame.fill(
            &Path::rounded_rectangle(Point::new(left, top), Size::new(width, height), 6.0.into()),
            iced::Color::from_rgba(0.0, 0.0, 0.0, 0.8),
        );

        let text_color = Color::WHITE;
        frame.fill_text(label(
            tip.title.clone(),
            Point::new(left + pad, top + pad),
            text_color,
            font,
            Horizontal::Left,
            Vertical::Top,
        ));
        for (row, (os, line)) in tip.entries.iter().enumerate() {
            let y = top + pad + line_h * (row + 1) as f32;
            frame.fill_rectangle(
                Point::new(left + pad, y + (font - SWATCH) / 2.0 + 1.0),
                Size::new(SWATCH, SWATCH),
                t.series_color(*os).to_iced(),
            );
            frame.fill_text(label(
                line.clone(),
                Point::new(left + pad + SWATCH + 6.0, y),
                text_color,
                font,
                Horizontal::Left,
                Vertical::Top,
            ));
        }
    }
}

/// Per-canvas interaction state.
#[derive(Debug, Default)]
pub struct Hover {
    index: Option<usize>,
}

impl<Message> canvas::Program<Message> for ShareChart<'_> {
    type State = Hover;

    fn update(
        &self,
        state: &mut Hover,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::CursorMoved { .. } | mouse::Event::CursorLeft) => {
                let hovered = self.hovered(bounds, cursor);
                if hovered == state.index {
                    return None;
                }
                state.index = hovered;
                Some(Action::request_redraw())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        state: &Hover,
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let content = self.cache.draw(renderer, bounds.size(), |frame| self.draw_static(frame));

        let Some(index) = state.index.filter(|i| *i < self.window.len()) else {
            return vec![content];
        };

        let mut frame = Frame::new(renderer, bounds.size());
        self.draw_hover(&mut frame, index);
        vec![content, frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Hover,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.hovered(bounds, cursor).is_some() {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn label(
    content: impl Into<String>,
    position: Point,
    color: Color,
    size: f32,
    align_x: Horizontal,
    align_y: Vertical,
) -> Text {
    Text {
        content: content.into(),
        position,
        color: color.to_iced(),
        size: size.into(),
        align_x: align_x.into(),
        align_y,
        ..Text::default()
    }
}

fn text_width(s: &str, size: f32) -> f32 {
    text_width_chars(s.chars().count(), size)
}

fn text_width_chars(chars: usize, size: f32) -> f32 {
    chars as f32 * size * CHAR_WIDTH
}
