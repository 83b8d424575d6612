use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use skillswap_core::Carousel;
use skillswap_core::data::{COMMUNITY_STATS, Testimonial};

use crate::layout::columns;
use crate::theme::Theme;
use crate::widgets::{panel, stars};

pub fn render(
    carousel: &Carousel<&'static Testimonial>,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let theme = Theme::default();
    let block = panel(" What Our Students Say ", focused, &theme)
        .title_bottom(" ←→ previous / next · 1-6 jump ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [quote_area, dots_area, stats_area] = Layout::vertical([
        Constraint::Min(6),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(inner);

    let t = carousel.current();
    let lines = vec![
        Line::from(Span::styled(stars(t.rating), theme.star)),
        Line::from(""),
        Line::from(format!("\u{201c}{}\u{201d}", t.content)),
        Line::from(""),
        Line::from(vec![
            Span::styled(t.name, theme.panel_title),
            Span::styled(format!(" · {} · {}", t.role, t.location), theme.muted),
        ]),
        Line::from(vec![
            Span::styled(format!("Learned {}", t.skill), theme.accent),
            Span::styled(format!(" · {} sessions", t.session_count), theme.muted),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        quote_area,
    );

    let mut dots: Vec<Span> = (0..carousel.len())
        .map(|i| {
            if i == carousel.current_index() {
                Span::styled("● ", theme.tab_active)
            } else {
                Span::styled("○ ", theme.muted)
            }
        })
        .collect();
    let state = if carousel.is_auto_advancing() {
        "auto-playing"
    } else {
        "paused"
    };
    dots.push(Span::styled(
        format!(" {}/{} {state}", carousel.current_index() + 1, carousel.len()),
        theme.muted,
    ));
    frame.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        dots_area,
    );

    for (stat, cell) in COMMUNITY_STATS
        .iter()
        .zip(columns(stats_area, COMMUNITY_STATS.len()))
    {
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

#[cfg(test)]
mod tests {
    use skillswap_core::data::TESTIMONIALS;

    use super::*;
    use crate::test_utils::render_to_string;

    fn carousel() -> Carousel<&'static Testimonial> {
        Carousel::new(TESTIMONIALS.iter().collect()).unwrap()
    }

    #[test]
    fn shows_current_testimonial() {
        let mut c = carousel();
        c.next();
        let output = render_to_string(120, 20, |frame, area| render(&c, true, frame, area));
        assert!(output.contains("Marcus Johnson"));
        assert!(!output.contains("Jessica Park"));
        assert!(output.contains("2/6 auto-playing"));
        assert!(output.contains("Sessions Completed"));
    }

    #[test]
    fn shows_paused_state() {
        let mut c = carousel();
        c.pause();
        let output = render_to_string(120, 20, |frame, area| render(&c, false, frame, area));
        assert!(output.contains("1/6 paused"));
    }
}
