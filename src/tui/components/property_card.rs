//! # Property Card Component
//!
//! Summary of the property record: address, type, owner, image, and the two
//! tax tables. Falls back to the backend's message when there is no record.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::profile::property::{
    NO_PROPERTY_MESSAGE, PLACEHOLDER_IMAGE_NOTE, PropertySummary, TaxYearRow, format_usd,
};
use crate::profile::PropertyProfile;
use crate::tui::component::Component;

pub struct PropertyCard<'a> {
    pub profile: &'a PropertyProfile,
}

impl<'a> PropertyCard<'a> {
    pub fn new(profile: &'a PropertyProfile) -> Self {
        Self { profile }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let Some(record) = &self.profile.property else {
            let message = self
                .profile
                .property_message
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(NO_PROPERTY_MESSAGE);
            return vec![Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::DarkGray),
            ))];
        };

        let summary = PropertySummary::from_record(record);
        let mut lines = Vec::new();

        if let Some(address) = summary.address {
            lines.push(Line::from(Span::styled(
                address,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )));
        }
        if let Some(kind) = summary.property_type {
            lines.push(field("Type", kind));
        }
        if let Some(owner) = &summary.owner {
            lines.push(field("Owner", owner.display()));
        }

        if let Some(image) = self.profile.first_image() {
            lines.push(Line::default());
            lines.push(field("Image", image.url.clone()));
            if image.placeholder {
                lines.push(Line::from(Span::styled(
                    PLACEHOLDER_IMAGE_NOTE,
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                )));
            }
        }

        push_table(&mut lines, "Tax assessments", &summary.tax_assessments);
        push_table(&mut lines, "Property taxes", &summary.property_taxes);
        lines
    }
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
        Span::raw(value),
    ])
}

fn push_table(lines: &mut Vec<Line<'static>>, heading: &'static str, rows: &[TaxYearRow]) {
    if rows.is_empty() {
        return;
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        heading,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )));
    for row in rows {
        let amount = row.amount.map(format_usd).unwrap_or_else(|| "—".to_string());
        let style = if row.latest {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(format!("  {:<6} {amount:>14}", row.year), style)));
    }
}

impl Component for PropertyCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Property ")
                    .padding(Padding::horizontal(1)),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
