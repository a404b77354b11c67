//! # TitleBar Component
//!
//! Top status line. Stateless: receives all data as props.
//!
//! 1. **With radius**: `"Propview | Within 2 km | Searching: 1 Main St"`
//! 2. **With status**: `"Propview | Searching: 1 Main St"`
//! 3. **Default**: `"Propview"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar<'a> {
    pub status_message: &'a str,
    pub radius_km: Option<f64>,
}

impl<'a> TitleBar<'a> {
    pub fn new(status_message: &'a str, radius_km: Option<f64>) -> Self {
        Self {
            status_message,
            radius_km,
        }
    }

    fn text(&self) -> String {
        let mut parts = vec!["Propview".to_string()];
        if let Some(radius) = self.radius_km {
            parts.push(format!("Within {radius} km"));
        }
        if !self.status_message.is_empty() {
            parts.push(self.status_message.to_string());
        }
        parts.join(" | ")
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
