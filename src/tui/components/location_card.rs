//! # Location Card Component
//!
//! Normalized address plus the county / census tract line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::profile::Location;
use crate::tui::component::Component;

pub struct LocationCard<'a> {
    pub location: &'a Location,
}

impl<'a> LocationCard<'a> {
    pub fn new(location: &'a Location) -> Self {
        Self { location }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![Line::from(Span::styled(
            self.location.normalized_address.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))];
        if let Some(area) = self.location.area_line() {
            lines.push(Line::from(Span::styled(area, Style::default().fg(Color::Gray))));
        }
        lines.push(Line::from(Span::styled(
            format!("{:.5}, {:.5}", self.location.lat, self.location.lon),
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Component for LocationCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Location ")
                    .padding(Padding::horizontal(1)),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
