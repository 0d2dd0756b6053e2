//! Rendering
//!
//! The input sits at the top with the suggestion popup drawn below it, over
//! whatever else is on screen. The status bar shows the last selection or
//! fetch error.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use geocomplete::autocomplete::{InputPropsOptions, Suggestion};

use super::state::{App, Focus, Status};
use crate::widgets::popup;

// Suggestion popup display constants
const MAX_VISIBLE_SUGGESTIONS: usize = 8;
const MAX_POPUP_WIDTH: usize = 72;
const MIN_POPUP_WIDTH: usize = 20;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;
const ELLIPSIS: char = '…';

const HELP_TEXT: &str = " ↑/↓ navigate · Enter select · Esc close · Ctrl+C quit";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let [input_area, _body, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_input_field(frame, input_area);
        self.render_status_bar(frame, status_area);
        // Popup last so it overlays everything below the input
        self.render_suggestions(frame, input_area);
    }

    fn render_input_field(&mut self, frame: &mut Frame, area: Rect) {
        let props = self.controller.input_props(InputPropsOptions::default());

        let border_color = if props.disabled {
            Color::DarkGray
        } else if self.focus == Focus::Input {
            Color::Cyan
        } else {
            Color::Gray
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(" Address ")
            .border_style(Style::default().fg(border_color));

        if self.controller.loading() {
            block = block.title(
                Line::from(Span::styled(" searching… ", Style::default().fg(Color::Yellow)))
                    .right_aligned(),
            );
        } else if props.aria_expanded {
            let count = self.controller.suggestions().len();
            block = block.title(Line::from(format!(" {} results ", count)).right_aligned());
        }

        self.textarea.set_block(block);
        frame.render_widget(&self.textarea, area);
        self.layout_regions.input = Some(area);
    }

    fn render_suggestions(&mut self, frame: &mut Frame, input_area: Rect) {
        let suggestions = self.controller.render_state().suggestions;
        if suggestions.is_empty() {
            self.layout_regions.clear_suggestions();
            return;
        }

        let visible_count = suggestions.len().min(MAX_VISIBLE_SUGGESTIONS);
        let popup_height = (visible_count as u16) + POPUP_BORDER_HEIGHT;

        let text_width = suggestions
            .iter()
            .map(|s| s.description.width())
            .max()
            .unwrap_or(MIN_POPUP_WIDTH)
            .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
        let popup_width = (text_width as u16) + POPUP_PADDING;

        let popup_area = popup::popup_below_anchor(
            input_area,
            frame.area(),
            popup_width,
            popup_height,
            POPUP_OFFSET_X,
        );
        if popup_area.height <= POPUP_BORDER_HEIGHT {
            self.layout_regions.clear_suggestions();
            return;
        }

        // Keep the active row in view
        let rows = usize::from(popup_area.height - POPUP_BORDER_HEIGHT).min(visible_count);
        let offset = suggestions
            .iter()
            .position(|s| s.active)
            .map_or(0, |active| (active + 1).saturating_sub(rows));

        let label_width = usize::from(popup_area.width.saturating_sub(POPUP_PADDING));
        let items: Vec<ListItem> = suggestions
            .iter()
            .skip(offset)
            .take(rows)
            .map(|suggestion| suggestion_item(suggestion, label_width))
            .collect();

        // Clear the background area to prevent transparency
        popup::clear_area(frame, popup_area);

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Suggestions ")
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );
        frame.render_widget(list, popup_area);

        self.layout_regions.suggestions = Some(popup_area);
        self.layout_regions.suggestion_offset = offset;
        self.layout_regions.suggestion_count = suggestions.len();
    }

    fn render_status_bar(&mut self, frame: &mut Frame, area: Rect) {
        let line = match &self.status {
            Some(Status::Selected {
                description,
                place_id,
            }) => Line::from(vec![
                Span::styled(" Selected: ", Style::default().fg(Color::Green)),
                Span::raw(description.clone()),
                Span::styled(format!(" ({})", place_id), Style::default().fg(Color::DarkGray)),
            ]),
            Some(Status::Error(status)) => Line::from(Span::styled(
                format!(" Suggestions unavailable (status {})", status),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray))),
        };

        frame.render_widget(Paragraph::new(line), area);
        self.layout_regions.status_bar = Some(area);
    }
}

fn suggestion_item(suggestion: &Suggestion, width: usize) -> ListItem<'static> {
    let label = truncate_to_width(&suggestion.description, width);

    let line = if suggestion.active {
        Line::from(Span::styled(
            format!("► {}", label),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("  {}", label),
            Style::default().fg(Color::White).bg(Color::Black),
        ))
    };

    ListItem::new(line)
}

/// Cut `text` to at most `max_width` display columns, marking the cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width().unwrap_or(1));
    let mut truncated = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        truncated.push(c);
    }
    truncated.push(ELLIPSIS);
    truncated
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
