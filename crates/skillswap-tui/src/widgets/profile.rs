use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use skillswap_core::data::default_slots;
use skillswap_core::{BookingSession, Instructor, Notifier};

use crate::layout::{centered_rect, columns};
use crate::theme::Theme;

/// Slots per row in the booking grid.
pub const SLOT_COLUMNS: usize = 2;

/// Instructor profile dialog: details plus the booking grid.
pub struct ProfileState {
    session: BookingSession,
    cursor: usize,
}

impl ProfileState {
    #[must_use]
    pub fn new(instructor: &'static Instructor) -> Self {
        Self {
            session: BookingSession::new(instructor, default_slots()),
            cursor: 0,
        }
    }

    #[must_use]
    pub fn session(&self) -> &BookingSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut BookingSession {
        &mut self.session
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let len = self.slot_count();
        if len > 0 {
            self.cursor = (self.cursor + 1).min(len - 1);
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(SLOT_COLUMNS);
    }

    pub fn move_down(&mut self) {
        if self.cursor + SLOT_COLUMNS < self.slot_count() {
            self.cursor += SLOT_COLUMNS;
        }
    }

    /// Select the slot under the cursor. Rejections are reported through `notifier`.
    pub fn select_at_cursor(&mut self, notifier: &dyn Notifier) -> bool {
        self.session.select_index(self.cursor, notifier).is_ok()
    }

    fn slot_count(&self) -> usize {
        self.session.selector().slots().len()
    }
}

pub fn render(state: &ProfileState, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();
    let instructor = state.session().instructor();

    let popup = centered_rect(80, area.height.saturating_sub(2).clamp(10, 26), area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border_focused)
        .title(format!(" {} ", instructor.name))
        .title_alignment(Alignment::Center)
        .title_bottom(
            Line::from(" Enter select · b book · m message · f save · x share · Esc close ")
                .alignment(Alignment::Center),
        );
    frame.render_widget(block, popup);

    let inner = popup.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let [details_area, slots_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(6)]).areas(inner);

    let details = vec![
        Line::from(vec![
            Span::styled(format!("({}) ", instructor.initials()), theme.accent),
            Span::styled(instructor.specialty, theme.panel_title),
        ]),
        Line::from(vec![
            Span::styled(format!("★ {:.1}", instructor.rating), theme.star),
            Span::styled(
                format!(
                    " ({} reviews) · {} students · {}",
                    instructor.reviews, instructor.students, instructor.location
                ),
                theme.muted,
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("${}/hour", instructor.hourly_rate), theme.price),
            Span::styled(
                format!("  · responds within {}", instructor.response_time),
                theme.muted,
            ),
        ]),
        Line::from(Span::styled(
            format!("Languages: {}", instructor.languages.join(", ")),
            theme.muted,
        )),
        Line::from(""),
        Line::from(instructor.bio),
    ];
    frame.render_widget(
        Paragraph::new(details).wrap(Wrap { trim: true }),
        details_area,
    );

    render_slots(state, &theme, frame, slots_area);
}

fn render_slots(state: &ProfileState, theme: &Theme, frame: &mut Frame, area: Rect) {
    let selector = state.session().selector();
    let title = match selector.selected() {
        Some(slot) => format!(" Available Times · selected {} {} ", slot.date, slot.time),
        None => " Available Times ".to_owned(),
    };
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.panel_border)
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (row, chunk) in selector.slots().chunks(SLOT_COLUMNS).enumerate() {
        let Ok(y) = u16::try_from(row) else { break };
        if y >= inner.height {
            break;
        }
        let row_area = Rect {
            y: inner.y + y,
            height: 1,
            ..inner
        };
        for (col, (slot, cell)) in chunk
            .iter()
            .zip(columns(row_area, SLOT_COLUMNS))
            .enumerate()
        {
            let index = row * SLOT_COLUMNS + col;
            let style = if selector.selected_index() == Some(index) {
                theme.selected
            } else if !slot.available {
                theme.disabled
            } else if index == state.cursor() {
                theme.highlight
            } else {
                theme.panel_title
            };
            let marker = if index == state.cursor() { "▸ " } else { "  " };
            let label = format!("{marker}{} {}", slot.date, slot.time);
            frame.render_widget(Paragraph::new(Span::styled(label, style)), cell);
        }
    }
}
