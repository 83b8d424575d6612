use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::theme::Theme;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();
    let carousel = app.carousel();

    let autoplay = match (carousel.is_auto_advancing(), app.is_autoplay_armed()) {
        (true, true) => "ON",
        (true, false) => "IDLE",
        (false, _) => "PAUSED",
    };
    let modal = app
        .modal_title()
        .map_or_else(String::new, |title| format!(" | [{title}]"));

    let text = format!(
        " {section} | Testimonial {pos}/{len} | Autoplay: {autoplay}{modal}",
        section = app.section().title(),
        pos = carousel.current_index() + 1,
        len = carousel.len(),
    );

    let line = Line::from(Span::styled(text, theme.status_bar));
    let paragraph = Paragraph::new(line).style(theme.status_bar);
    frame.render_widget(paragraph, area);
}
