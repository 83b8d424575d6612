use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Row, Table};

use crate::layout::centered_rect;
use crate::theme::Theme;

// 19 data rows + 1 header row + 2 border lines
const POPUP_HEIGHT: u16 = 22;

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = Theme::default();

    let popup = centered_rect(70, POPUP_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let rows = vec![
        group_row("Landing page", &theme),
        keybind_row("Tab / Shift+Tab", "next / previous section"),
        keybind_row("← / →", "choose card, previous / next testimonial"),
        keybind_row("Enter", "explore skill / view instructor"),
        keybind_row("b", "book the selected instructor"),
        keybind_row("1-6", "jump to testimonial"),
        keybind_row("/ or s", "browse skills"),
        keybind_row("l / u", "sign in / sign up"),
        keybind_row("?", "toggle this help"),
        keybind_row("q / Ctrl+C", "quit"),
        Row::new([Cell::from(""), Cell::from("")]),
        group_row("Dialogs", &theme),
        keybind_row("Esc", "close"),
        keybind_row("Tab / Shift+Tab", "next category / field"),
        keybind_row("↑ ↓ ← →", "move selection"),
        keybind_row("Enter", "select slot / submit"),
        keybind_row("b m f x", "book, message, save, share"),
        keybind_row("Ctrl+T", "switch sign in / sign up"),
        keybind_row("Ctrl+P", "show / hide password"),
    ];

    let header = Row::new([
        Cell::from(Span::styled("Key", theme.highlight)),
        Cell::from(Span::styled("Action", theme.highlight)),
    ]);

    let table = Table::new(
        rows,
        [Constraint::Percentage(30), Constraint::Percentage(70)],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border)
            .title(" Help · press ? or Esc to close ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(table, popup);
}

fn group_row(title: &'static str, theme: &Theme) -> Row<'static> {
    Row::new([
        Cell::from(Span::styled(title, theme.panel_title)),
        Cell::from(""),
    ])
}

fn keybind_row(key: &'static str, action: &'static str) -> Row<'static> {
    Row::new([Cell::from(Line::from(key)), Cell::from(Line::from(action))])
}

#[cfg(test)]
mod tests {
    use crate::test_utils::render_to_string;

    #[test]
    fn help_lists_keybindings() {
        let output = render_to_string(100, 30, |frame, area| {
            super::render(frame, area);
        });
        assert!(output.contains("Help"));
        assert!(output.contains("browse skills"));
        assert!(output.contains("show / hide password"));
    }
}
