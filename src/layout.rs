//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where components were drawn on the last frame so
//! mouse events can be routed to them. `region_at()` answers which component
//! is at a screen position.

use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Input,
    /// A suggestion row, by list index
    Suggestion(usize),
    /// Popup border or filler outside any row
    SuggestionPopup,
    StatusBar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input: Option<Rect>,
    pub suggestions: Option<Rect>,
    /// Index of the first visible row when the list is scrolled
    pub suggestion_offset: usize,
    pub suggestion_count: usize,
    pub status_bar: Option<Rect>,
}

impl LayoutRegions {
    pub fn clear_suggestions(&mut self) {
        self.suggestions = None;
        self.suggestion_offset = 0;
        self.suggestion_count = 0;
    }
}

fn contains(area: Option<Rect>, column: u16, row: u16) -> bool {
    area.is_some_and(|rect| rect.contains(Position::new(column, row)))
}

/// Component under the given cell, popup first since it overlaps the rest
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    if contains(regions.suggestions, column, row) {
        return Some(
            suggestion_row_at(regions, column, row)
                .map_or(Region::SuggestionPopup, Region::Suggestion),
        );
    }
    if contains(regions.input, column, row) {
        return Some(Region::Input);
    }
    if contains(regions.status_bar, column, row) {
        return Some(Region::StatusBar);
    }
    None
}

/// List index of the row under the cell, skipping the popup border
fn suggestion_row_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<usize> {
    let popup = regions.suggestions?;
    let inner_x = popup.x.saturating_add(1);
    let inner_y = popup.y.saturating_add(1);
    let inner_width = popup.width.saturating_sub(2);
    let inner_height = popup.height.saturating_sub(2);

    if column < inner_x
        || column >= inner_x.saturating_add(inner_width)
        || row < inner_y
        || row >= inner_y.saturating_add(inner_height)
    {
        return None;
    }

    let index = regions.suggestion_offset + usize::from(row - inner_y);
    (index < regions.suggestion_count).then_some(index)
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
