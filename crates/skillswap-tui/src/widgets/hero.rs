use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use skillswap_core::data::HERO_STATS;

use crate::layout::columns;
use crate::theme::Theme;
use crate::widgets::panel;

pub fn render(focused: bool, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();
    let block = panel(" Welcome ", focused, &theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [text_area, stats_area] =
        Layout::vertical([Constraint::Min(6), Constraint::Length(3)]).areas(inner);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Learn Any Skill,", theme.panel_title)),
        Line::from(Span::styled("Teach What You Know", theme.tab_active)),
        Line::from(""),
        Line::from(Span::styled(
            "Connect with expert instructors for personalized 1-on-1 lessons, or share your own expertise with eager learners.",
            theme.muted,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" / Browse Skills ", theme.selected),
            Span::raw("   "),
            Span::styled(" u Become a Teacher ", theme.highlight),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: true }),
        text_area,
    );

    for (stat, cell) in HERO_STATS.iter().zip(columns(stats_area, HERO_STATS.len())) {
        let stat_lines = vec![
            Line::from(Span::styled(stat.value, theme.tab_active)),
            Line::from(Span::styled(stat.label, theme.muted)),
        ];
        frame.render_widget(
            Paragraph::new(stat_lines).alignment(Alignment::Center),
            cell,
        );
    }
}
