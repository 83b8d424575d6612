use ratatui::Frame;
use ratatui::layout::{Alignment, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use skillswap_core::{AuthField, AuthForm, AuthMode, AuthOutcome, Notifier};

use crate::layout::centered_rect;
use crate::theme::Theme;

/// Login / sign-up dialog with a focused input field.
pub struct AuthState {
    form: AuthForm,
    focus: usize,
}

impl AuthState {
    #[must_use]
    pub fn new(mode: AuthMode) -> Self {
        Self {
            form: AuthForm::new(mode),
            focus: 0,
        }
    }

    #[must_use]
    pub fn form(&self) -> &AuthForm {
        &self.form
    }

    #[must_use]
    pub fn focused_field(&self) -> AuthField {
        let fields = self.form.visible_fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.form.visible_fields().len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.form.visible_fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.focused_field();
        self.form.value_mut(field).push(c);
    }

    pub fn pop_char(&mut self) {
        let field = self.focused_field();
        self.form.value_mut(field).pop();
    }

    /// Switch mode, keeping focus on the same field when it stays visible.
    pub fn toggle_mode(&mut self) {
        let field = self.focused_field();
        self.form.toggle_mode();
        self.focus = self
            .form
            .visible_fields()
            .iter()
            .position(|f| *f == field)
            .unwrap_or(0);
    }

    pub fn toggle_password_visibility(&mut self) {
        self.form.toggle_password_visibility();
    }

    /// Submit the form; `None` when validation failed (already reported).
    pub fn submit(&mut self, notifier: &dyn Notifier) -> Option<AuthOutcome> {
        match self.form.submit(notifier) {
            Ok(outcome) => {
                self.focus = 0;
                Some(outcome)
            }
            Err(e) => {
                tracing::debug!(error = %e, "auth form rejected");
                None
            }
        }
    }
}

pub fn render(state: &AuthState, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();
    let form = state.form();
    let fields = form.visible_fields();

    #[allow(clippy::cast_possible_truncation)]
    let height = fields.len() as u16 * 2 + 6;
    let popup = centered_rect(50, height, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border_focused)
        .title(format!(" {} ", form.mode.title()))
        .title_alignment(Alignment::Center)
        .title_bottom(
            Line::from(" Tab next · ^T mode · ^P show password · Esc ")
                .alignment(Alignment::Center),
        );
    frame.render_widget(block, popup);

    let mut lines = Vec::with_capacity(fields.len() * 2 + 3);
    for field in fields {
        let focused = *field == state.focused_field();
        let label_style = if focused {
            theme.highlight
        } else {
            theme.muted
        };
        lines.push(Line::from(Span::styled(field.label(), label_style)));
        let mut value = vec![Span::raw("  "), Span::raw(form.display_value(*field))];
        if focused {
            value.push(Span::styled("▏", theme.input_cursor));
        }
        lines.push(Line::from(value));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", form.mode.submit_label()),
        theme.selected,
    )));
    let switch = match form.mode {
        AuthMode::Login => "Don't have an account? Ctrl+T to sign up",
        AuthMode::Signup => "Already have an account? Ctrl+T to sign in",
    };
    lines.push(Line::from(Span::styled(switch, theme.muted)));

    let inner = popup.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::test_utils::render_to_string;

    fn type_str(state: &mut AuthState, text: &str) {
        for c in text.chars() {
            state.push_char(c);
        }
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut state = AuthState::new(AuthMode::Login);
        type_str(&mut state, "ada@example.com");
        state.focus_next();
        type_str(&mut state, "engine");
        state.pop_char();
        assert_eq!(state.form().value(AuthField::Email), "ada@example.com");
        assert_eq!(state.form().value(AuthField::Password), "engin");
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut state = AuthState::new(AuthMode::Signup);
        state.focus_prev();
        assert_eq!(state.focused_field(), AuthField::ConfirmPassword);
        state.focus_next();
        assert_eq!(state.focused_field(), AuthField::Name);
    }

    #[test]
    fn toggle_mode_keeps_focused_field() {
        let mut state = AuthState::new(AuthMode::Signup);
        state.focus_next();
        state.focus_next();
        assert_eq!(state.focused_field(), AuthField::Password);
        state.toggle_mode();
        assert_eq!(state.form().mode, AuthMode::Login);
        assert_eq!(state.focused_field(), AuthField::Password);

        state.toggle_mode();
        state.focus_prev();
        state.focus_prev();
        assert_eq!(state.focused_field(), AuthField::Name);
        state.toggle_mode();
        assert_eq!(state.focused_field(), AuthField::Email);
    }

    #[test]
    fn submit_reports_result() {
        let sink = RefCell::new(Vec::new());
        let mut state = AuthState::new(AuthMode::Login);
        assert!(state.submit(&sink).is_none());
        type_str(&mut state, "ada@example.com");
        state.focus_next();
        type_str(&mut state, "engine");
        assert_eq!(state.submit(&sink), Some(AuthOutcome::LoggedIn));
        assert_eq!(state.focused_field(), AuthField::Email);
        assert_eq!(sink.borrow().len(), 2);
    }

    #[test]
    fn render_masks_password() {
        let mut state = AuthState::new(AuthMode::Signup);
        state.focus_next();
        state.focus_next();
        type_str(&mut state, "hunter2");
        let output = render_to_string(100, 30, |frame, area| render(&state, frame, area));
        assert!(output.contains("Join SkillSwap Hub"));
        assert!(output.contains("Confirm Password"));
        assert!(output.contains("*******"));
        assert!(!output.contains("hunter2"));

        state.toggle_password_visibility();
        let output = render_to_string(100, 30, |frame, area| render(&state, frame, area));
        assert!(output.contains("hunter2"));
    }
}
