pub mod auth;
pub mod header;
pub mod help;
pub mod hero;
pub mod how_it_works;
pub mod instructors;
pub mod profile;
pub mod skill_browser;
pub mod skills;
pub mod status;
pub mod testimonials;
pub mod toast;

use ratatui::widgets::{Block, Borders};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

/// Cut `text` to at most `max_width` display columns, ending with `…` when shortened.
#[must_use]
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Five-character star bar for a rating out of five.
#[must_use]
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn panel<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border = if focused {
        theme.panel_border_focused
    } else {
        theme.panel_border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
        .title_style(theme.panel_title)
}
