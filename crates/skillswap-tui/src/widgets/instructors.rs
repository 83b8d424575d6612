use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use skillswap_core::data::INSTRUCTORS;

use crate::layout::columns;
use crate::theme::Theme;
use crate::widgets::{panel, truncate};

pub fn render(selected: usize, focused: bool, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();
    let block = panel(" Top Instructors ", focused, &theme)
        .title_bottom(" ←→ choose · Enter view profile · b book now ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (i, (instructor, cell)) in INSTRUCTORS
        .iter()
        .zip(columns(inner, INSTRUCTORS.len()))
        .enumerate()
    {
        let is_selected = focused && i == selected;
        let card = Block::default().borders(Borders::ALL).border_style(if is_selected {
            theme.panel_border_focused
        } else {
            theme.panel_border
        });
        let width = usize::from(card.inner(cell).width);

        let lines = vec![
            Line::from(vec![
                Span::styled(format!("({}) ", instructor.initials()), theme.accent),
                Span::styled(
                    truncate(instructor.name, width.saturating_sub(5)),
                    if is_selected {
                        theme.selected
                    } else {
                        theme.panel_title
                    },
                ),
            ]),
            Line::from(Span::styled(instructor.specialty, theme.accent)),
            Line::from(vec![
                Span::styled(format!("★ {:.1}", instructor.rating), theme.star),
                Span::styled(format!(" ({} reviews)", instructor.reviews), theme.muted),
            ]),
            Line::from(Span::styled(
                truncate(instructor.location, width),
                theme.muted,
            )),
            Line::from(Span::styled(
                format!("{} students", instructor.students),
                theme.muted,
            )),
            Line::from(Span::styled(
                format!("${}/hour", instructor.hourly_rate),
                theme.price,
            )),
            Line::from(""),
            Line::from(instructor.bio),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(card).wrap(Wrap { trim: true }),
            cell,
        );
    }
}
