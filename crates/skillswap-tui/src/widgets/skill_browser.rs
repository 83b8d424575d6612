use ratatui::Frame;
use ratatui::layout::{Alignment, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use skillswap_core::data::{CATEGORIES, SKILLS};
use skillswap_core::{ALL_CATEGORIES, FilterQuery, Skill, filter};

use crate::layout::centered_rect;
use crate::theme::Theme;
use crate::widgets::truncate;

pub const EMPTY_MESSAGE: &str = "No skills found matching your criteria.";

/// Search dialog over the full skill catalog.
pub struct SkillBrowserState {
    query: FilterQuery,
    cursor: usize,
    category_index: usize,
    selected: usize,
    results: Vec<&'static Skill>,
}

impl SkillBrowserState {
    /// Open with `text` prefilled and the category chip set to `category`
    /// (falls back to "all" for an unknown id).
    #[must_use]
    pub fn new(text: &str, category: &str) -> Self {
        let category_index = CATEGORIES
            .iter()
            .position(|c| c.id == category)
            .unwrap_or(0);
        let mut state = Self {
            query: FilterQuery::new(text),
            cursor: text.chars().count(),
            category_index,
            selected: 0,
            results: Vec::new(),
        };
        state.query.category = state.category_id().to_owned();
        state.refilter();
        state
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.query.text
    }

    #[must_use]
    pub fn category_id(&self) -> &'static str {
        CATEGORIES
            .get(self.category_index)
            .map_or(ALL_CATEGORIES, |c| c.id)
    }

    #[must_use]
    pub fn results(&self) -> &[&'static Skill] {
        &self.results
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_skill(&self) -> Option<&'static Skill> {
        self.results.get(self.selected).copied()
    }

    pub fn push_char(&mut self, c: char) {
        let byte_offset = self
            .query
            .text
            .char_indices()
            .nth(self.cursor)
            .map_or(self.query.text.len(), |(i, _)| i);
        self.query.text.insert(byte_offset, c);
        self.cursor += 1;
        self.refilter();
    }

    pub fn pop_char(&mut self) {
        if self.cursor > 0 {
            let byte_offset = self
                .query
                .text
                .char_indices()
                .nth(self.cursor - 1)
                .map_or(self.query.text.len(), |(i, _)| i);
            self.query.text.remove(byte_offset);
            self.cursor -= 1;
            self.refilter();
        }
    }

    pub fn clear_text(&mut self) {
        self.query.text.clear();
        self.cursor = 0;
        self.refilter();
    }

    pub fn next_category(&mut self) {
        self.category_index = (self.category_index + 1) % CATEGORIES.len();
        self.set_category();
    }

    pub fn prev_category(&mut self) {
        self.category_index = (self.category_index + CATEGORIES.len() - 1) % CATEGORIES.len();
        self.set_category();
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + 1).min(self.results.len() - 1);
        }
    }

    fn set_category(&mut self) {
        self.query.category = self.category_id().to_owned();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.results = filter(SKILLS, &self.query);
        if self.results.is_empty() {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(self.results.len() - 1);
        }
    }
}

impl Default for SkillBrowserState {
    fn default() -> Self {
        Self::new("", ALL_CATEGORIES)
    }
}

pub fn render(state: &SkillBrowserState, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();

    let popup = centered_rect(80, area.height.saturating_sub(4).clamp(8, 24), area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border_focused)
        .title(" Browse Skills ")
        .title_alignment(Alignment::Center)
        .title_bottom(
            Line::from(" Tab category · ↑↓ select · Esc close ").alignment(Alignment::Center),
        );
    frame.render_widget(block, popup);

    let inner = popup.inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    if inner.height < 3 {
        return;
    }

    let search = Line::from(vec![
        Span::styled("Search: ", theme.highlight),
        Span::raw(state.text()),
        Span::styled("▏", theme.input_cursor),
    ]);
    frame.render_widget(Paragraph::new(search), Rect { height: 1, ..inner });

    let mut chips: Vec<Span> = Vec::with_capacity(CATEGORIES.len() * 2);
    for category in CATEGORIES {
        let style = if category.id == state.category_id() {
            theme.selected
        } else {
            theme.tab_inactive
        };
        chips.push(Span::styled(format!(" {} ", category.label), style));
        chips.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(chips)),
        Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        },
    );

    let list_area = Rect {
        y: inner.y + 3,
        height: inner.height.saturating_sub(3),
        ..inner
    };

    if state.results().is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(EMPTY_MESSAGE, theme.muted)))
            .alignment(Alignment::Center);
        frame.render_widget(empty, list_area);
        return;
    }

    let width = usize::from(list_area.width);
    let items: Vec<ListItem> = state
        .results()
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let marker = if i == state.selected() { "▸ " } else { "  " };
            let name_style = if i == state.selected() {
                theme.selected
            } else {
                theme.panel_title
            };
            let header = Line::from(vec![
                Span::raw(marker),
                Span::styled(skill.name, name_style),
                Span::raw("  "),
                Span::styled(format!("★ {:.1}", skill.avg_rating), theme.star),
                Span::raw("  "),
                Span::styled(skill.price_range, theme.price),
                Span::styled(
                    format!(
                        "  {} students · {} instructors",
                        skill.students, skill.instructors
                    ),
                    theme.muted,
                ),
            ]);
            let description = Line::from(Span::styled(
                format!("    {}", truncate(skill.description, width.saturating_sub(4))),
                theme.muted,
            ));
            ListItem::new(vec![header, description])
        })
        .collect();
    frame.render_widget(List::new(items), list_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_to_string;

    fn names(state: &SkillBrowserState) -> Vec<&'static str> {
        state.results().iter().map(|s| s.name).collect()
    }

    #[test]
    fn starts_with_full_catalog() {
        let state = SkillBrowserState::default();
        assert_eq!(state.results().len(), SKILLS.len());
        assert_eq!(state.category_id(), "all");
    }

    #[test]
    fn typing_filters_live() {
        let mut state = SkillBrowserState::default();
        for c in "guit".chars() {
            state.push_char(c);
        }
        assert_eq!(names(&state), ["Guitar"]);
        state.pop_char();
        state.pop_char();
        state.pop_char();
        assert_eq!(state.text(), "g");
        assert!(state.results().len() > 1);
    }

    #[test]
    fn prefilled_text_and_category() {
        let state = SkillBrowserState::new("photo", "creative");
        assert_eq!(names(&state), ["Photography"]);
        assert_eq!(state.category_id(), "creative");
    }

    #[test]
    fn unknown_category_falls_back_to_all() {
        let state = SkillBrowserState::new("", "astrology");
        assert_eq!(state.category_id(), "all");
    }

    #[test]
    fn category_cycle_wraps() {
        let mut state = SkillBrowserState::default();
        state.prev_category();
        assert_eq!(state.category_id(), "language");
        assert_eq!(names(&state), ["Spanish"]);
        state.next_category();
        assert_eq!(state.category_id(), "all");
    }

    #[test]
    fn selection_is_clamped_after_refilter() {
        let mut state = SkillBrowserState::default();
        for _ in 0..10 {
            state.move_down();
        }
        assert_eq!(state.selected(), SKILLS.len() - 1);
        state.push_char('z');
        state.push_char('z');
        assert!(state.results().is_empty());
        assert_eq!(state.selected(), 0);
        assert!(state.selected_skill().is_none());
    }

    #[test]
    fn render_lists_results() {
        let state = SkillBrowserState::new("", "creative");
        let output = render_to_string(100, 30, |frame, area| render(&state, frame, area));
        assert!(output.contains("Browse Skills"));
        assert!(output.contains("Graphic Design"));
        assert!(output.contains("Photography"));
        assert!(!output.contains("Guitar"));
    }

    #[test]
    fn render_empty_state() {
        let state = SkillBrowserState::new("", "technology");
        let output = render_to_string(100, 30, |frame, area| render(&state, frame, area));
        assert!(output.contains(EMPTY_MESSAGE));
    }
}
