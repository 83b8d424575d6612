use std::fmt;

use crate::catalog::Instructor;
use crate::error::ValidationError;
use crate::notify::{Notice, Notifier};

/// Identifies a slot as `"{date}-{time}"`, e.g. `Today-2:00 PM`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey(String);

impl SlotKey {
    #[must_use]
    pub fn new(date: &str, time: &str) -> Self {
        Self(format!("{date}-{time}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SlotKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSlot {
    pub date: String,
    pub time: String,
    pub available: bool,
}

impl BookingSlot {
    #[must_use]
    pub fn new(date: impl Into<String>, time: impl Into<String>, available: bool) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            available,
        }
    }

    #[must_use]
    pub fn key(&self) -> SlotKey {
        SlotKey::new(&self.date, &self.time)
    }
}

/// Returned by a successful [`BookingSelector::commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub date: String,
    pub time: String,
}

impl fmt::Display for BookingConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.date, self.time)
    }
}

/// Single-selection state over a fixed list of slots.
#[derive(Debug, Clone)]
pub struct BookingSelector {
    slots: Vec<BookingSlot>,
    selected: Option<usize>,
}

impl BookingSelector {
    #[must_use]
    pub fn new(slots: Vec<BookingSlot>) -> Self {
        Self {
            slots,
            selected: None,
        }
    }

    #[must_use]
    pub fn slots(&self) -> &[BookingSlot] {
        &self.slots
    }

    #[must_use]
    pub fn selected(&self) -> Option<&BookingSlot> {
        self.selected.and_then(|i| self.slots.get(i))
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_selected(&self, key: &SlotKey) -> bool {
        self.selected().is_some_and(|s| &s.key() == key)
    }

    /// Select the slot identified by `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownSlot`] if no slot has that key and
    /// [`ValidationError::SlotUnavailable`] if the slot cannot be booked. The
    /// current selection is left untouched in both cases.
    pub fn select(&mut self, key: &SlotKey) -> Result<&BookingSlot, ValidationError> {
        let index = self
            .slots
            .iter()
            .position(|s| &s.key() == key)
            .ok_or_else(|| ValidationError::UnknownSlot(key.to_string()))?;
        self.select_index(index)
    }

    /// Select by position in [`slots`](Self::slots).
    ///
    /// # Errors
    ///
    /// Same conditions as [`select`](Self::select).
    pub fn select_index(&mut self, index: usize) -> Result<&BookingSlot, ValidationError> {
        let Some(slot) = self.slots.get(index) else {
            return Err(ValidationError::UnknownSlot(format!("#{index}")));
        };
        if !slot.available {
            tracing::debug!(slot = %slot.key(), "rejected unavailable slot");
            return Err(ValidationError::SlotUnavailable(slot.key().to_string()));
        }
        self.selected = Some(index);
        Ok(&self.slots[index])
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Consume the current selection.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoSelection`] when nothing is selected.
    pub fn commit(&mut self) -> Result<BookingConfirmation, ValidationError> {
        let slot = self.selected().ok_or(ValidationError::NoSelection)?;
        let confirmation = BookingConfirmation {
            date: slot.date.clone(),
            time: slot.time.clone(),
        };
        self.selected = None;
        Ok(confirmation)
    }
}

/// Booking flow of one instructor profile: slot selection plus the profile
/// actions, each reported through the notifier.
#[derive(Debug, Clone)]
pub struct BookingSession {
    instructor: &'static Instructor,
    selector: BookingSelector,
}

impl BookingSession {
    #[must_use]
    pub fn new(instructor: &'static Instructor, slots: Vec<BookingSlot>) -> Self {
        Self {
            instructor,
            selector: BookingSelector::new(slots),
        }
    }

    #[must_use]
    pub fn instructor(&self) -> &'static Instructor {
        self.instructor
    }

    #[must_use]
    pub fn selector(&self) -> &BookingSelector {
        &self.selector
    }

    /// Select the slot identified by `key`, raising a destructive notice on rejection.
    ///
    /// # Errors
    ///
    /// Propagates the selector's validation error.
    pub fn select(&mut self, key: &SlotKey, notifier: &dyn Notifier) -> Result<(), ValidationError> {
        match self.selector.select(key) {
            Ok(_) => Ok(()),
            Err(e) => {
                notifier.notify(Notice::destructive(
                    "Time slot unavailable",
                    "Choose an available time slot to book your session.",
                ));
                Err(e)
            }
        }
    }

    /// Select a slot by position, raising a destructive notice on rejection.
    ///
    /// # Errors
    ///
    /// Propagates the selector's validation error.
    pub fn select_index(
        &mut self,
        index: usize,
        notifier: &dyn Notifier,
    ) -> Result<(), ValidationError> {
        match self.selector.select_index(index) {
            Ok(_) => Ok(()),
            Err(e) => {
                notifier.notify(Notice::destructive(
                    "Time slot unavailable",
                    "Choose an available time slot to book your session.",
                ));
                Err(e)
            }
        }
    }

    /// Commit the selected slot.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoSelection`] when no slot was chosen.
    pub fn book(&mut self, notifier: &dyn Notifier) -> Result<BookingConfirmation, ValidationError> {
        match self.selector.commit() {
            Ok(confirmation) => {
                tracing::info!(
                    instructor = self.instructor.name,
                    slot = %confirmation,
                    "session booked"
                );
                notifier.notify(Notice::info(
                    "Session booked successfully!",
                    format!(
                        "Your session with {} is confirmed for {confirmation}.",
                        self.instructor.name
                    ),
                ));
                Ok(confirmation)
            }
            Err(e) => {
                notifier.notify(Notice::destructive(
                    "Please select a time slot",
                    "Choose an available time slot to book your session.",
                ));
                Err(e)
            }
        }
    }

    pub fn send_message(&self, notifier: &dyn Notifier) {
        notifier.notify(Notice::info(
            "Message sent!",
            format!(
                "Your message has been sent to {}. They typically respond within {}.",
                self.instructor.name, self.instructor.response_time
            ),
        ));
    }

    pub fn save(&self, notifier: &dyn Notifier) {
        notifier.notify(Notice::info(
            "Instructor saved!",
            format!("{} has been added to your favorites.", self.instructor.name),
        ));
    }

    pub fn share(&self, notifier: &dyn Notifier) {
        notifier.notify(Notice::info(
            "Profile shared!",
            "Profile link copied to clipboard.",
        ));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::data::{INSTRUCTORS, default_slots};

    fn two_slots() -> BookingSelector {
        BookingSelector::new(vec![
            BookingSlot::new("Today", "2:00 PM", true),
            BookingSlot::new("Today", "4:00 PM", false),
        ])
    }

    #[test]
    fn slot_key_format() {
        let slot = BookingSlot::new("Wed, Dec 21", "11:00 AM", true);
        assert_eq!(slot.key().as_str(), "Wed, Dec 21-11:00 AM");
    }

    #[test]
    fn unavailable_slot_leaves_selection_unset() {
        let mut selector = two_slots();
        let err = selector.select(&"Today-4:00 PM".into()).unwrap_err();
        assert_eq!(err, ValidationError::SlotUnavailable("Today-4:00 PM".into()));
        assert!(selector.selected().is_none());
    }

    #[test]
    fn select_then_commit_returns_confirmation() {
        let mut selector = two_slots();
        selector.select(&"Today-2:00 PM".into()).unwrap();
        let confirmation = selector.commit().unwrap();
        assert_eq!(
            confirmation,
            BookingConfirmation {
                date: "Today".into(),
                time: "2:00 PM".into(),
            }
        );
        assert!(selector.selected().is_none());
    }

    #[test]
    fn commit_without_selection_fails() {
        let mut selector = two_slots();
        assert_eq!(selector.commit(), Err(ValidationError::NoSelection));
    }

    #[test]
    fn unavailable_slot_keeps_previous_selection() {
        let mut selector = two_slots();
        selector.select_index(0).unwrap();
        assert!(selector.select_index(1).is_err());
        assert_eq!(selector.selected_index(), Some(0));
    }

    #[test]
    fn unknown_slot_is_rejected() {
        let mut selector = two_slots();
        let err = selector.select(&"Someday-1:00 AM".into()).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownSlot(_)));
        assert!(selector.select_index(42).is_err());
    }

    #[test]
    fn reselect_replaces_selection() {
        let mut selector = BookingSelector::new(default_slots());
        selector.select(&"Today-2:00 PM".into()).unwrap();
        selector.select(&"Tomorrow-10:00 AM".into()).unwrap();
        assert!(selector.is_selected(&"Tomorrow-10:00 AM".into()));
        assert!(!selector.is_selected(&"Today-2:00 PM".into()));
    }

    #[test]
    fn session_book_without_selection_notifies_failure() {
        let sink = RefCell::new(Vec::new());
        let mut session = BookingSession::new(&INSTRUCTORS[0], default_slots());
        assert!(session.book(&sink).is_err());
        let notices = sink.into_inner();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].is_destructive());
        assert_eq!(notices[0].title, "Please select a time slot");
    }

    #[test]
    fn session_book_confirms_with_instructor_name() {
        let sink = RefCell::new(Vec::new());
        let mut session = BookingSession::new(&INSTRUCTORS[2], default_slots());
        session.select_index(2, &sink).unwrap();
        let confirmation = session.book(&sink).unwrap();
        assert_eq!(confirmation.to_string(), "Tomorrow-10:00 AM");
        let notices = sink.into_inner();
        assert_eq!(
            notices[0].description,
            "Your session with Emma Thompson is confirmed for Tomorrow-10:00 AM."
        );
        assert!(session.selector().selected().is_none());
    }

    #[test]
    fn session_rejects_unavailable_slot_with_notice() {
        let sink = RefCell::new(Vec::new());
        let mut session = BookingSession::new(&INSTRUCTORS[0], default_slots());
        assert!(session.select_index(1, &sink).is_err());
        assert!(sink.borrow()[0].is_destructive());
        assert!(session.selector().selected().is_none());
    }

    #[test]
    fn session_select_by_key() {
        let sink = RefCell::new(Vec::new());
        let mut session = BookingSession::new(&INSTRUCTORS[3], default_slots());
        session.select(&"Wed, Dec 21-3:00 PM".into(), &sink).unwrap();
        assert!(sink.borrow().is_empty());
        let err = session.select(&"Today-9:00 PM".into(), &sink).unwrap_err();
        assert_eq!(err, ValidationError::UnknownSlot("Today-9:00 PM".into()));
        assert_eq!(sink.borrow().len(), 1);
        assert!(session.selector().is_selected(&"Wed, Dec 21-3:00 PM".into()));
    }

    #[test]
    fn profile_actions_notify() {
        let sink = RefCell::new(Vec::new());
        let session = BookingSession::new(&INSTRUCTORS[1], default_slots());
        session.send_message(&sink);
        session.save(&sink);
        session.share(&sink);
        let titles: Vec<_> = sink.into_inner().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, ["Message sent!", "Instructor saved!", "Profile shared!"]);
    }

    mod proptest_selector {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unavailable_never_changes_selection(
                availability in proptest::collection::vec(proptest::bool::ANY, 1..10),
                picks in proptest::collection::vec(0usize..12, 0..20),
            ) {
                let slots = availability
                    .iter()
                    .enumerate()
                    .map(|(i, &a)| BookingSlot::new("Day", format!("{i}:00"), a))
                    .collect();
                let mut selector = BookingSelector::new(slots);
                for pick in picks {
                    let before = selector.selected_index();
                    let result = selector.select_index(pick);
                    let allowed = availability.get(pick).copied().unwrap_or(false);
                    if allowed {
                        prop_assert!(result.is_ok());
                        prop_assert_eq!(selector.selected_index(), Some(pick));
                    } else {
                        prop_assert!(result.is_err());
                        prop_assert_eq!(selector.selected_index(), before);
                    }
                }
            }
        }
    }
}
