//! # AddressBar Component
//!
//! Single-line address input. Disabled while a lookup is in flight, so a
//! second search can't be submitted until the first settles.
//!
//! The buffer is internal state; `disabled` and `focused` are props synced
//! from App/TUI state before each frame.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Enter full address";

/// High-level events emitted by the AddressBar
#[derive(Debug, Clone, PartialEq)]
pub enum AddressEvent {
    /// Enter pressed with a non-blank buffer.
    Submit(String),
    ContentChanged,
}

pub struct AddressBar {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Lookup in flight (Prop)
    pub disabled: bool,
    /// Keyboard focus is on the bar (Prop)
    pub focused: bool,
}

impl AddressBar {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            disabled: false,
            focused: true,
        }
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            ..Self::new()
        }
    }

    /// Submit stays unavailable for a blank buffer, as well as while disabled.
    pub fn can_submit(&self) -> bool {
        !self.disabled && !self.buffer.trim().is_empty()
    }
}

impl Default for AddressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for AddressBar {
    type Event = AddressEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AddressEvent> {
        if self.disabled {
            return None;
        }
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.buffer.push(*c);
                Some(AddressEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Addresses are one line; fold pasted newlines into spaces
                let flattened: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.buffer.push_str(&flattened);
                Some(AddressEvent::ContentChanged)
            }
            TuiEvent::Backspace => self.buffer.pop().map(|_| AddressEvent::ContentChanged),
            TuiEvent::Submit if self.can_submit() => {
                Some(AddressEvent::Submit(self.buffer.clone()))
            }
            _ => None,
        }
    }
}

impl Component for AddressBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.disabled { " Searching… " } else { " Address " };
        let border_style = if self.focused && !self.disabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let line = if self.buffer.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
        } else if self.disabled {
            Line::from(Span::styled(
                self.buffer.as_str(),
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.buffer.as_str())
        };

        let inner_width = area.width.saturating_sub(2) as usize;
        let text_width = self.buffer.width();
        // Keep the tail (where typing happens) visible
        let scroll = text_width.saturating_sub(inner_width.saturating_sub(1)) as u16;

        let paragraph = Paragraph::new(line)
            .scroll((0, scroll))
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(border_style)
                    .title_style(border_style),
            );
        frame.render_widget(paragraph, area);

        if self.focused && !self.disabled {
            let x = area.x + 1 + (text_width as u16).saturating_sub(scroll);
            frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }
}
