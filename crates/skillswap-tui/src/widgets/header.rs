use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use skillswap_core::data::BRAND;

use crate::app::Section;
use crate::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = Theme::default();
    let line = Line::from(vec![
        Span::styled(format!(" {BRAND} "), theme.brand),
        Span::styled(
            "| / browse · l login · u sign up · ? help · q quit",
            theme.header,
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(theme.header), area);
}

pub fn render_tabs(active: Section, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();
    let titles: Vec<Line> = Section::ALL.iter().map(|s| Line::from(s.title())).collect();
    let selected = Section::ALL.iter().position(|s| *s == active).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(theme.tab_inactive)
        .highlight_style(theme.tab_active)
        .divider("│");
    frame.render_widget(tabs, area);
}
