//! Line spinner advanced by animation ticks

use ratatui::{
    style::{Color, Style},
    text::Span,
};
use std::time::Duration;

/// Frames of the "line" spinner
pub const FRAMES: &[&str] = &["|", "/", "-", "\\"];

/// Time between animation ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

const SPINNER_COLOR: Color = Color::Indexed(63);

#[derive(Debug, Clone, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn frame(&self) -> &'static str {
        FRAMES[self.frame]
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(self.frame(), Style::new().fg(SPINNER_COLOR))
    }
}
