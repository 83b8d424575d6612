use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use skillswap_core::data::{INSTRUCTORS, TESTIMONIALS, Testimonial, popular_skills};
use skillswap_core::{AuthMode, Carousel, CarouselController, Config, Notice, Notifier};
use tokio::sync::mpsc;

use crate::error::TuiError;
use crate::event::AppEvent;
use crate::layout::AppLayout;
use crate::toast::ToastQueue;
use crate::widgets;
use crate::widgets::auth::AuthState;
use crate::widgets::profile::ProfileState;
use crate::widgets::skill_browser::SkillBrowserState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    PopularSkills,
    TopInstructors,
    HowItWorks,
    Testimonials,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::Hero,
        Self::PopularSkills,
        Self::TopInstructors,
        Self::HowItWorks,
        Self::Testimonials,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::PopularSkills => "Popular Skills",
            Self::TopInstructors => "Top Instructors",
            Self::HowItWorks => "How It Works",
            Self::Testimonials => "Testimonials",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub enum Modal {
    Help,
    Browser(SkillBrowserState),
    Profile(ProfileState),
    Auth(AuthState),
}

impl Modal {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Help => "Help",
            Self::Browser(_) => "Browse Skills",
            Self::Profile(_) => "Instructor",
            Self::Auth(state) => state.form().mode.title(),
        }
    }
}

pub struct App {
    section: Section,
    skill_cursor: usize,
    instructor_cursor: usize,
    modal: Option<Modal>,
    carousel: CarouselController<&'static Testimonial, AppEvent>,
    toasts: ToastQueue,
    default_category: String,
    pub should_quit: bool,
}

impl App {
    /// Autoplay ticks are sent into `event_tx` as [`AppEvent::CarouselTick`].
    ///
    /// # Errors
    ///
    /// Returns [`TuiError::Carousel`] if there are no testimonials to show.
    pub fn new(event_tx: mpsc::Sender<AppEvent>, config: &Config) -> Result<Self, TuiError> {
        let carousel = CarouselController::new(
            TESTIMONIALS.iter().collect(),
            config.carousel.interval(),
            event_tx,
            AppEvent::CarouselTick,
        )?
        .with_autoplay(config.carousel.autoplay);

        Ok(Self {
            section: Section::Hero,
            skill_cursor: 0,
            instructor_cursor: 0,
            modal: None,
            carousel,
            toasts: ToastQueue::new(config.tui.toast_duration()),
            default_category: config.catalog.default_category.clone(),
            should_quit: false,
        })
    }

    /// Arm the testimonial autoplay timer. Must be called inside a tokio runtime.
    pub fn start(&mut self) {
        self.carousel.start();
    }

    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    #[must_use]
    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    #[must_use]
    pub fn modal_title(&self) -> Option<&'static str> {
        self.modal.as_ref().map(Modal::title)
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel<&'static Testimonial> {
        self.carousel.carousel()
    }

    #[must_use]
    pub fn is_autoplay_armed(&self) -> bool {
        self.carousel.is_armed()
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    #[must_use]
    pub fn skill_cursor(&self) -> usize {
        self.skill_cursor
    }

    #[must_use]
    pub fn instructor_cursor(&self) -> usize {
        self.instructor_cursor
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => self.toasts.expire(Instant::now()),
            AppEvent::CarouselTick => {
                if let Some(index) = self.carousel.on_tick() {
                    tracing::trace!(index, "testimonial advanced");
                }
            }
            AppEvent::Resize(_, _) => {}
        }
    }

    pub fn draw(&self, frame: &mut ratatui::Frame) {
        let layout = AppLayout::compute(frame.area());

        widgets::header::render(frame, layout.header);
        widgets::header::render_tabs(self.section, frame, layout.tabs);
        self.draw_section(frame, layout.body);
        widgets::status::render(self, frame, layout.status);

        match &self.modal {
            Some(Modal::Help) => widgets::help::render(frame, layout.body),
            Some(Modal::Browser(state)) => widgets::skill_browser::render(state, frame, layout.body),
            Some(Modal::Profile(state)) => widgets::profile::render(state, frame, layout.body),
            Some(Modal::Auth(state)) => widgets::auth::render(state, frame, layout.body),
            None => {}
        }

        widgets::toast::render(&self.toasts.visible(), frame, layout.body);
    }

    fn draw_section(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        let focused = self.modal.is_none();
        match self.section {
            Section::Hero => widgets::hero::render(focused, frame, area),
            Section::PopularSkills => {
                widgets::skills::render(self.skill_cursor, focused, frame, area);
            }
            Section::TopInstructors => {
                widgets::instructors::render(self.instructor_cursor, focused, frame, area);
            }
            Section::HowItWorks => widgets::how_it_works::render(focused, frame, area),
            Section::Testimonials => {
                widgets::testimonials::render(self.carousel.carousel(), focused, frame, area);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.modal.is_some() {
            self.handle_modal_key(key);
        } else {
            self.handle_landing_key(key);
        }
    }

    fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.focus(self.section.next()),
            KeyCode::BackTab => self.focus(self.section.prev()),
            KeyCode::Char('?') => self.modal = Some(Modal::Help),
            KeyCode::Char('/' | 's') => {
                self.modal = Some(Modal::Browser(SkillBrowserState::new(
                    "",
                    &self.default_category,
                )));
            }
            KeyCode::Char('l') => self.modal = Some(Modal::Auth(AuthState::new(AuthMode::Login))),
            KeyCode::Char('u') => {
                self.modal = Some(Modal::Auth(AuthState::new(AuthMode::Signup)));
            }
            KeyCode::Left => self.move_in_section(false),
            KeyCode::Right => self.move_in_section(true),
            KeyCode::Enter => self.activate(),
            KeyCode::Char('b') if self.section == Section::TopInstructors => {
                self.book_instructor();
            }
            KeyCode::Char(c @ '1'..='9') if self.section == Section::Testimonials => {
                let index = c as usize - '1' as usize;
                if let Err(e) = self.carousel.go_to(index) {
                    tracing::debug!(error = %e, "testimonial jump ignored");
                }
            }
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.modal = None;
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let mut close = false;

        match self.modal.as_mut() {
            Some(Modal::Help) => {
                if matches!(key.code, KeyCode::Char('?' | 'q')) {
                    close = true;
                }
            }
            Some(Modal::Browser(state)) => match key.code {
                KeyCode::Char('u') if ctrl => state.clear_text(),
                KeyCode::Char(c) if !ctrl => state.push_char(c),
                KeyCode::Backspace => state.pop_char(),
                KeyCode::Tab => state.next_category(),
                KeyCode::BackTab => state.prev_category(),
                KeyCode::Up => state.move_up(),
                KeyCode::Down => state.move_down(),
                _ => {}
            },
            Some(Modal::Profile(state)) => match key.code {
                KeyCode::Left => state.move_left(),
                KeyCode::Right => state.move_right(),
                KeyCode::Up => state.move_up(),
                KeyCode::Down => state.move_down(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    state.select_at_cursor(&self.toasts);
                }
                KeyCode::Char('b') => {
                    close = state.session_mut().book(&self.toasts).is_ok();
                }
                KeyCode::Char('m') => state.session().send_message(&self.toasts),
                KeyCode::Char('f') => state.session().save(&self.toasts),
                KeyCode::Char('x') => state.session().share(&self.toasts),
                _ => {}
            },
            Some(Modal::Auth(state)) => match key.code {
                KeyCode::Char('t') if ctrl => state.toggle_mode(),
                KeyCode::Char('p') if ctrl => state.toggle_password_visibility(),
                KeyCode::Char(c) if !ctrl => state.push_char(c),
                KeyCode::Backspace => state.pop_char(),
                KeyCode::Tab | KeyCode::Down => state.focus_next(),
                KeyCode::BackTab | KeyCode::Up => state.focus_prev(),
                KeyCode::Enter => close = state.submit(&self.toasts).is_some(),
                _ => {}
            },
            None => {}
        }

        if close {
            self.modal = None;
        }
    }

    /// Move focus to `section`, pausing autoplay while testimonials are in view.
    fn focus(&mut self, section: Section) {
        let leaving = self.section;
        self.section = section;
        if section == Section::Testimonials {
            self.carousel.pause();
        } else if leaving == Section::Testimonials {
            self.carousel.resume();
        }
        tracing::debug!(section = section.title(), "section focused");
    }

    fn move_in_section(&mut self, forward: bool) {
        match self.section {
            Section::PopularSkills => {
                self.skill_cursor = step(self.skill_cursor, popular_skills().len(), forward);
            }
            Section::TopInstructors => {
                self.instructor_cursor = step(self.instructor_cursor, INSTRUCTORS.len(), forward);
            }
            Section::Testimonials => {
                if forward {
                    self.carousel.next();
                } else {
                    self.carousel.prev();
                }
            }
            Section::Hero | Section::HowItWorks => {}
        }
    }

    fn activate(&mut self) {
        match self.section {
            Section::PopularSkills => self.explore_skill(),
            Section::TopInstructors => self.open_profile(),
            Section::Hero => {
                self.modal = Some(Modal::Browser(SkillBrowserState::new(
                    "",
                    &self.default_category,
                )));
            }
            Section::HowItWorks | Section::Testimonials => {}
        }
    }

    fn explore_skill(&mut self) {
        let Some(skill) = popular_skills().get(self.skill_cursor) else {
            return;
        };
        self.toasts.notify(Notice::info(
            format!("Exploring {} classes!", skill.name),
            "Opening skill browser with matching instructors...",
        ));
        self.modal = Some(Modal::Browser(SkillBrowserState::new(
            skill.name,
            &self.default_category,
        )));
    }

    fn open_profile(&mut self) {
        if let Some(instructor) = INSTRUCTORS.get(self.instructor_cursor) {
            self.modal = Some(Modal::Profile(ProfileState::new(instructor)));
        }
    }

    fn book_instructor(&mut self) {
        let Some(instructor) = INSTRUCTORS.get(self.instructor_cursor) else {
            return;
        };
        self.toasts.notify(Notice::info(
            "Opening booking calendar...",
            format!("Get ready to book a session with {}!", instructor.name),
        ));
        self.modal = Some(Modal::Profile(ProfileState::new(instructor)));
    }
}

fn step(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1).min(len - 1)
    } else {
        index.saturating_sub(1)
    }
}
