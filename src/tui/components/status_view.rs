//! # Status View Component
//!
//! Centered placeholder shown in the main area whenever there is no result
//! to browse: before the first search, while a lookup is in flight, and
//! after a failure.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::search::SearchFailure;
use crate::tui::component::Component;

pub const EMPTY_MESSAGE: &str =
    "Enter a full address above to see the map, nearby schools, and property info.";
pub const LOADING_MESSAGE: &str = "Finding location and property details…";

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusKind {
    Empty,
    Loading,
    Error(SearchFailure),
}

pub struct StatusView {
    kind: StatusKind,
    spinner_frame: usize,
}

impl StatusView {
    pub fn new(kind: StatusKind, spinner_frame: usize) -> Self {
        Self {
            kind,
            spinner_frame,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        match self.kind {
            StatusKind::Empty => vec![
                Line::from(Span::styled(
                    "Propview",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(Span::styled(EMPTY_MESSAGE, Style::default().fg(Color::Gray))),
                Line::from(Span::styled(
                    format!("v{}", env!("CARGO_PKG_VERSION")),
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            StatusKind::Loading => vec![Line::from(vec![
                Span::styled(
                    SPINNER[self.spinner_frame % SPINNER.len()],
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(" "),
                Span::styled(LOADING_MESSAGE, Style::default().fg(Color::Gray)),
            ])],
            StatusKind::Error(failure) => vec![
                Line::from(Span::styled(
                    failure.message(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(Span::styled(
                    "Edit the address and press Enter to retry.",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
        }
    }
}

impl Component for StatusView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let height = lines.len() as u16;

        let [text_area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, text_area);
    }
}
