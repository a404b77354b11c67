//! # Detail Panel Component
//!
//! Drill-down view for one school, place, or news item. Stateless.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::core::categorize::{category_label, normalize_category};
use crate::core::selection::DetailSelection;
use crate::profile::{NearbyPlace, NewsItem, School};
use crate::tui::component::Component;

pub struct DetailPanel<'a> {
    pub detail: &'a DetailSelection,
}

impl<'a> DetailPanel<'a> {
    pub fn new(detail: &'a DetailSelection) -> Self {
        Self { detail }
    }

    /// Help text for the bottom border. "Show on map" only when there is somewhere to go.
    fn help(&self) -> &'static str {
        if self.detail.coordinates().is_some() {
            " Esc Back  m Show on map "
        } else {
            " Esc Back "
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        match self.detail {
            DetailSelection::School(school) => school_lines(school),
            DetailSelection::Place(place) => place_lines(place),
            DetailSelection::News(news) => news_lines(news),
        }
    }
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))
}

fn muted(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::Gray)))
}

fn school_lines(school: &School) -> Vec<Line<'_>> {
    let mut lines = vec![heading(&school.name), Line::default()];
    let address = school.formatted_address();
    if !address.is_empty() {
        lines.push(muted(address));
    }
    if let Some(id) = school.nces_id.as_deref().filter(|id| !id.is_empty()) {
        lines.push(Line::from(Span::styled(
            format!("NCES ID: {id}"),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if school.coordinates().is_none() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Location not available for the map.",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}

fn place_lines(place: &NearbyPlace) -> Vec<Line<'_>> {
    let key = normalize_category(&place.category);
    let mut lines = vec![
        heading(&place.name),
        Line::default(),
        muted(category_label(&key).to_string()),
    ];
    if let Some(address) = place.address.as_deref().filter(|a| !a.is_empty()) {
        lines.push(muted(address.to_string()));
    }
    lines
}

fn news_lines(news: &NewsItem) -> Vec<Line<'_>> {
    let mut lines = vec![heading(&news.title), Line::default()];
    if let Some(source) = news.source.as_deref().filter(|s| !s.is_empty()) {
        lines.push(muted(source.to_string()));
    }
    if let Some(date) = news.published_date.as_deref().filter(|d| !d.is_empty()) {
        lines.push(Line::from(Span::styled(
            format_published_date(date),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Read article: ", Style::default().fg(Color::Gray)),
        Span::styled(
            news.url.as_str(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
        ),
    ]));
    lines
}

/// `Mar 14, 2025` for anything that parses as a date; verbatim otherwise.
pub fn format_published_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

impl Component for DetailPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" ← Back ")
            .title_bottom(Line::from(self.help()).centered())
            .padding(Padding::new(1, 1, 1, 0));

        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
