//! Rendering for each session stage and for printed notices

use crate::config::PackageList;
use crate::session::{Install, Notice, Session, Stage};
use crate::widgets::TextInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::Widget,
};

/// Rows reserved for the live view; one more than the tallest stage so the
/// cursor can rest below it on exit
pub const VIEWPORT_HEIGHT: u16 = 6;

const PACKAGE_COLOR: Color = Color::Indexed(211);
const CHECK_COLOR: Color = Color::Indexed(42);
const ERROR_COLOR: Color = Color::Red;

pub fn prompt(input: &TextInput) -> Text<'static> {
    Text::from(vec![
        Line::from("Enter the project name"),
        Line::default(),
        input.line(),
        Line::default(),
        Line::from("(esc to quit)"),
    ])
}

pub fn done(total: usize) -> Text<'static> {
    Text::from(vec![
        Line::default(),
        Line::from(format!("  Done! Installed {} packages.", total)),
    ])
}

/// Rows the current stage occupies
pub fn height(session: &Session) -> u16 {
    match session.stage() {
        Stage::Prompting(_) => 5,
        Stage::Installing(install) if install.is_done() => 2,
        Stage::Installing(_) => 1,
    }
}

/// One status row: spinner, current package, padding, progress bar,
/// `index/total`. The counter keeps its cells on narrow terminals; the
/// package label gives up cells first.
fn render_status(install: &Install, packages: &PackageList, area: Rect, buf: &mut Buffer) {
    let count = Span::raw(format!(" {}/{}", install.index(), packages.len()));
    let count_width = (count.width() as u16).min(area.width);
    let count_area = Rect {
        x: area.right() - count_width,
        width: count_width,
        ..area
    };
    let rest = Rect {
        width: area.width - count_width,
        ..area
    };

    let spin_width = 2u16.min(rest.width);
    let bar_width = install.progress().width().min(rest.width - spin_width);
    let spin_area = Rect {
        width: spin_width,
        ..rest
    };
    let bar_area = Rect {
        x: rest.right() - bar_width,
        width: bar_width,
        ..rest
    };
    let label_area = Rect {
        x: rest.x + spin_width,
        width: rest.width - spin_width - bar_width,
        ..rest
    };

    let package = packages.get(install.index()).unwrap_or_default();
    let label = Line::from(vec![
        Span::raw("Installing "),
        Span::styled(package.to_string(), Style::new().fg(PACKAGE_COLOR)),
    ]);

    install.spinner().span().render(spin_area, buf);
    label.render(label_area, buf);
    install.progress().render(bar_area, buf);
    count.render(count_area, buf);
}

impl Widget for &Session {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.stage() {
            Stage::Prompting(input) => prompt(input).render(area, buf),
            Stage::Installing(install) if install.is_done() => {
                done(self.packages().len()).render(area, buf)
            }
            Stage::Installing(install) => {
                let row = Rect { height: 1, ..area };
                render_status(install, self.packages(), row, buf);
            }
        }
    }
}

/// Line printed above the live view
pub fn notice(notice: &Notice) -> Line<'static> {
    match notice {
        Notice::Attempted(package) => Line::from(vec![
            Span::styled("✓", Style::new().fg(CHECK_COLOR)),
            Span::raw(format!(" {}", package)),
        ]),
        Notice::Failed { package, error } => {
            Line::from(format!("Failed to install {}: {}", package, error))
        }
        Notice::ManifestFailed(error) => Line::styled(
            format!("Error creating manifest: {}", error),
            Style::new().fg(ERROR_COLOR),
        ),
    }
}
