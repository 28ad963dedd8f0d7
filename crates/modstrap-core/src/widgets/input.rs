//! Single-line text input

use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span},
};

/// Maximum number of characters accepted
pub const CHAR_LIMIT: usize = 156;

/// Number of characters visible at once
pub const WIDTH: usize = 20;

const PROMPT: &str = "> ";
const PLACEHOLDER_COLOR: Color = Color::Indexed(240);

/// State for a single-line text input with a horizontally scrolling window
#[derive(Debug, Clone)]
pub struct TextInput {
    value: Vec<char>,
    /// Cursor position in characters
    cursor: usize,
    /// First visible character
    offset: usize,
    placeholder: String,
}

impl TextInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            value: Vec::new(),
            cursor: 0,
            offset: 0,
            placeholder: placeholder.into(),
        }
    }

    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert_char(&mut self, c: char) {
        if c.is_control() || self.value.len() >= CHAR_LIMIT {
            return;
        }
        self.value.insert(self.cursor, c);
        self.cursor += 1;
        self.scroll_to_cursor();
    }

    /// Delete the character before the cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.value.remove(self.cursor);
            self.scroll_to_cursor();
        }
    }

    /// Delete the character under the cursor
    pub fn delete_forward(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
            self.scroll_to_cursor();
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.scroll_to_cursor();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor += 1;
            self.scroll_to_cursor();
        }
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
        self.scroll_to_cursor();
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.value.len();
        self.scroll_to_cursor();
    }

    /// Keep the cursor cell inside `offset..offset + WIDTH`. The cell after the
    /// last character counts, so a cursor at the end still fits.
    fn scroll_to_cursor(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + WIDTH {
            self.offset = self.cursor + 1 - WIDTH;
        }
        let max_offset = (self.value.len() + 1).saturating_sub(WIDTH);
        self.offset = self.offset.min(max_offset);
    }

    /// Characters currently inside the visible window
    pub fn visible(&self) -> String {
        let end = (self.offset + WIDTH).min(self.value.len());
        self.value[self.offset..end].iter().collect()
    }

    /// Prompt, visible characters and a reverse-video cursor cell
    pub fn line(&self) -> Line<'static> {
        if self.value.is_empty() {
            return self.placeholder_line();
        }

        let end = (self.offset + WIDTH).min(self.value.len());
        let before: String = self.value[self.offset..self.cursor.max(self.offset)]
            .iter()
            .collect();
        let mut spans = vec![Span::raw(PROMPT), Span::raw(before)];

        if self.cursor < end {
            spans.push(Span::raw(self.value[self.cursor].to_string()).reversed());
            let after: String = self.value[self.cursor + 1..end].iter().collect();
            spans.push(Span::raw(after));
        } else {
            spans.push(Span::raw(" ").reversed());
        }
        Line::from(spans)
    }

    fn placeholder_line(&self) -> Line<'static> {
        let mut chars = self.placeholder.chars();
        let cursor = match chars.next() {
            Some(first) => first.to_string(),
            None => " ".to_string(),
        };
        Line::from(vec![
            Span::raw(PROMPT),
            Span::raw(cursor).reversed(),
            Span::styled(chars.as_str().to_string(), Style::new().fg(PLACEHOLDER_COLOR)),
        ])
    }
}
