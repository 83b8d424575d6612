use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::layout::bottom_right_rect;
use crate::theme::Theme;
use crate::toast::Toast;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 5;

/// Stack toasts upward from the bottom-right corner, newest at the bottom.
pub fn render(toasts: &[Toast], frame: &mut Frame, area: Rect) {
    let theme = Theme::default();
    let mut bottom = area;

    for toast in toasts.iter().rev() {
        if bottom.height < TOAST_HEIGHT {
            break;
        }
        let rect = bottom_right_rect(TOAST_WIDTH, TOAST_HEIGHT, bottom);
        bottom.height -= TOAST_HEIGHT;

        let style = if toast.notice.is_destructive() {
            theme.error
        } else {
            theme.success
        };
        frame.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(Span::styled(format!(" {} ", toast.notice.title), style));
        let body = Paragraph::new(Line::from(toast.notice.description.as_str()))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(body, rect);
    }
}
