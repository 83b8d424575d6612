use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use skillswap_core::data::HOW_IT_WORKS;

use crate::layout::columns;
use crate::theme::Theme;
use crate::widgets::panel;

pub fn render(focused: bool, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();
    let block = panel(" How It Works ", focused, &theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (step, cell) in HOW_IT_WORKS.iter().zip(columns(inner, HOW_IT_WORKS.len())) {
        let mut lines = vec![
            Line::from(Span::styled(format!("Step {}", step.step), theme.accent)),
            Line::from(Span::styled(step.title, theme.panel_title)),
            Line::from(""),
            Line::from(Span::styled(step.description, theme.muted)),
            Line::from(""),
        ];
        lines.extend(step.details.iter().map(|d| {
            Line::from(vec![Span::styled("✓ ", theme.success), Span::raw(*d)])
        }));
        let card = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border);
        frame.render_widget(
            Paragraph::new(lines).block(card).wrap(Wrap { trim: true }),
            cell,
        );
    }
}
