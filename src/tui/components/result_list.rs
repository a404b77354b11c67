//! # Result List Component
//!
//! Renders the schools, nearby places, and news lists.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ResultListState` lives in `TuiState` (cursor survives redraws)
//! - `ResultList` is created each frame with borrowed state
//!
//! The cursor counts selectable items only. Place section headers are extra
//! rows, so the place list maps the cursor to a row index before rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};

use crate::core::controller::ResultController;
use crate::core::selection::ResultTab;
use crate::profile::PropertyProfile;

/// Persistent cursor for whichever list tab is active.
#[derive(Debug, Default)]
pub struct ResultListState {
    pub cursor: usize,
    pub list_state: ListState,
}

impl ResultListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.list_state = ListState::default();
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if len > 0 {
            self.cursor = (self.cursor + 1).min(len - 1);
        }
    }

    /// Clamp after the list shrank.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

pub fn empty_message(tab: ResultTab) -> &'static str {
    match tab {
        ResultTab::Schools => "No schools found in this area.",
        ResultTab::Places => "No nearby places in this radius.",
        ResultTab::News => "No local news available.",
        ResultTab::Property | ResultTab::Location => "",
    }
}

/// Transient render wrapper.
pub struct ResultList<'a> {
    state: &'a mut ResultListState,
    results: &'a ResultController,
    profile: &'a PropertyProfile,
    tab: ResultTab,
}

impl<'a> ResultList<'a> {
    pub fn new(
        state: &'a mut ResultListState,
        results: &'a ResultController,
        profile: &'a PropertyProfile,
        tab: ResultTab,
    ) -> Self {
        Self { state, results, profile, tab }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let profile = self.profile;
        let len = self.results.list_len(profile, self.tab);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ({len}) ", self.tab.label()))
            .title_bottom(Line::from(" Enter Open  ↑↓ Move ").centered())
            .padding(Padding::horizontal(1));

        if len == 0 {
            let empty = Paragraph::new(empty_message(self.tab))
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.clamp(len);
        let (items, selected_row) = match self.tab {
            ResultTab::Schools => self.school_rows(profile),
            ResultTab::Places => self.place_rows(profile),
            ResultTab::News => self.news_rows(profile),
            ResultTab::Property | ResultTab::Location => return,
        };

        self.state.list_state.select(Some(selected_row));
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }

    fn school_rows(&self, profile: &PropertyProfile) -> (Vec<ListItem<'static>>, usize) {
        let items = profile
            .schools
            .iter()
            .map(|school| {
                let mut lines = vec![Line::from(Span::styled(
                    school.name.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ))];
                let address = school.formatted_address();
                if !address.is_empty() {
                    lines.push(Line::from(Span::styled(address, Style::default().fg(Color::Gray))));
                }
                ListItem::new(lines)
            })
            .collect();
        (items, self.state.cursor)
    }

    fn place_rows(&self, profile: &PropertyProfile) -> (Vec<ListItem<'static>>, usize) {
        let mut items = Vec::new();
        let mut selected_row = 0;
        let mut place_index = 0;

        if let Some(radius) = profile.radius_km {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("Within {radius} km"),
                Style::default().fg(Color::DarkGray),
            ))));
        }

        for bucket in self.results.buckets(profile) {
            items.push(ListItem::new(Line::from(Span::styled(
                bucket.label.to_uppercase(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))));
            for place in &bucket.places {
                if place_index == self.state.cursor {
                    selected_row = items.len();
                }
                let mut lines = vec![Line::from(Span::styled(
                    place.name.clone(),
                    Style::default().fg(Color::White),
                ))];
                if let Some(address) = place.address.as_deref().filter(|a| !a.is_empty()) {
                    lines.push(Line::from(Span::styled(
                        address.to_string(),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                items.push(ListItem::new(lines));
                place_index += 1;
            }
        }
        (items, selected_row)
    }

    fn news_rows(&self, profile: &PropertyProfile) -> (Vec<ListItem<'static>>, usize) {
        let items = profile
            .news()
            .iter()
            .map(|item| {
                let mut lines = vec![Line::from(Span::styled(
                    item.title.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ))];
                if let Some(source) = item.source.as_deref().filter(|s| !s.is_empty()) {
                    lines.push(Line::from(Span::styled(
                        source.to_string(),
                        Style::default().fg(Color::Gray),
                    )));
                }
                ListItem::new(lines)
            })
            .collect();
        (items, self.state.cursor)
    }
}
