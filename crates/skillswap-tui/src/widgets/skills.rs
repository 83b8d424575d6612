use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use skillswap_core::data::{category_by_id, popular_skills};

use crate::layout::columns;
use crate::theme::Theme;
use crate::widgets::{panel, truncate};

/// Popular skill cards; `selected` is highlighted when the section has focus.
pub fn render(selected: usize, focused: bool, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();
    let block = panel(" Popular Skills ", focused, &theme)
        .title_bottom(" ←→ choose · Enter explore classes ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let skills = popular_skills();
    for (i, (skill, cell)) in skills.iter().zip(columns(inner, skills.len())).enumerate() {
        let is_selected = focused && i == selected;
        let border = if is_selected {
            theme.panel_border_focused
        } else {
            theme.panel_border
        };
        let card = Block::default().borders(Borders::ALL).border_style(border);
        let width = usize::from(card.inner(cell).width);
        let category = category_by_id(skill.category).map_or(skill.category, |c| c.label);

        let lines = vec![
            Line::from(Span::styled(
                truncate(skill.name, width),
                if is_selected {
                    theme.selected
                } else {
                    theme.panel_title
                },
            )),
            Line::from(Span::styled(truncate(category, width), theme.accent)),
            Line::from(""),
            Line::from(Span::styled(skill.description, theme.muted)),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} students", skill.students),
                theme.muted,
            )),
            Line::from(vec![
                Span::styled(format!("★ {:.1}", skill.avg_rating), theme.star),
                Span::raw("  "),
                Span::styled(skill.price_range, theme.price),
            ]),
            Line::from(Span::styled(
                format!("{} instructors", skill.instructors),
                theme.muted,
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(card).wrap(Wrap { trim: true }),
            cell,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_to_string;

    #[test]
    fn renders_four_cards() {
        let output = render_to_string(140, 20, |frame, area| render(0, true, frame, area));
        for name in ["Cooking", "Graphic Design", "Guitar", "Excel"] {
            assert!(output.contains(name), "{name}");
        }
        assert!(!output.contains("Photography"));
        assert!(output.contains("$25-45/hr"));
    }
}
