//! Horizontal progress bar without a percentage label
//!
//! Filled cells are colored along a purple-to-pink ramp stretched over the
//! whole bar, so the color of a cell does not change as the bar fills.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Default bar width in cells
pub const DEFAULT_WIDTH: u16 = 40;

const FULL: &str = "█";
const EMPTY: &str = "░";
const EMPTY_COLOR: Color = Color::Indexed(241);

const GRADIENT: &[u8] = &[62, 63, 99, 135, 171, 177, 213];

#[derive(Debug, Clone)]
pub struct ProgressBar {
    percent: f64,
    width: u16,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl ProgressBar {
    pub fn new(width: u16) -> Self {
        Self {
            percent: 0.0,
            width,
        }
    }

    /// Set the filled fraction, clamped to `0.0..=1.0`
    pub fn set_percent(&mut self, percent: f64) {
        self.percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 1.0)
        };
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn filled_cells(&self) -> u16 {
        ((self.percent * f64::from(self.width)).round() as u16).min(self.width)
    }

    /// One span per filled cell, then a single span for the empty rest
    pub fn line(&self) -> Line<'static> {
        let filled = self.filled_cells();
        let mut spans: Vec<Span<'static>> = (0..filled)
            .map(|cell| {
                let color = gradient_color(cell, self.width);
                Span::styled(FULL, Style::new().fg(color))
            })
            .collect();
        spans.push(Span::styled(
            EMPTY.repeat(usize::from(self.width - filled)),
            Style::new().fg(EMPTY_COLOR),
        ));
        Line::from(spans)
    }
}

impl Widget for &ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().render(area, buf);
    }
}

/// Color for a cell, stretching the gradient over the full bar width
fn gradient_color(cell: u16, width: u16) -> Color {
    if width <= 1 {
        return Color::Indexed(GRADIENT[0]);
    }
    let steps = GRADIENT.len() - 1;
    let (cell, width) = (usize::from(cell), usize::from(width));
    let position = (cell * steps + (width - 1) / 2) / (width - 1);
    Color::Indexed(GRADIENT[position.min(steps)])
}
