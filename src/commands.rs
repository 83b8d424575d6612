//! Headless subcommands: plain-text listings and a one-shot booking.

use std::fmt::Write as _;

use anyhow::Context;
use skillswap_core::data::{INSTRUCTORS, SKILLS, category_by_id, default_slots, instructor_by_name};
use skillswap_core::{
    BookingConfirmation, BookingSession, FilterQuery, Notifier, SlotKey, filter,
};

fn category_label(id: &str) -> &str {
    category_by_id(id).map_or(id, |c| c.label)
}

#[must_use]
pub fn list_skills(query: &FilterQuery) -> String {
    let matched = filter(SKILLS, query);
    if matched.is_empty() {
        return "No skills found matching your criteria.\n".to_owned();
    }
    let mut out = String::new();
    for skill in matched {
        let _ = writeln!(
            out,
            "{:<16} {:<11} {:>4.1}★ {:>10} {:>6} students  {}",
            skill.name,
            category_label(skill.category),
            skill.avg_rating,
            skill.price_range,
            skill.students,
            skill.description,
        );
    }
    out
}

#[must_use]
pub fn list_instructors(query: &FilterQuery) -> String {
    let matched = filter(INSTRUCTORS, query);
    if matched.is_empty() {
        return "No instructors found matching your criteria.\n".to_owned();
    }
    let mut out = String::new();
    for instructor in matched {
        let _ = writeln!(
            out,
            "{:<16} {:<26} {:>3.1}★ ({} reviews)  ${}/hour  {}",
            instructor.name,
            instructor.specialty,
            instructor.rating,
            instructor.reviews,
            instructor.hourly_rate,
            instructor.location,
        );
    }
    out
}

#[must_use]
pub fn list_slots() -> String {
    let mut out = String::new();
    for slot in default_slots() {
        let state = if slot.available { "available" } else { "booked" };
        let _ = writeln!(out, "{:<24} {state}", slot.key().as_str());
    }
    out
}

/// Select `slot` on `instructor`'s profile and commit it.
///
/// # Errors
///
/// Fails for an unknown instructor or when the slot cannot be selected and booked.
pub fn book(
    instructor: &str,
    slot: &str,
    notifier: &dyn Notifier,
) -> anyhow::Result<BookingConfirmation> {
    let instructor = instructor_by_name(instructor)
        .with_context(|| format!("unknown instructor: {instructor}"))?;
    let mut session = BookingSession::new(instructor, default_slots());
    session
        .select(&SlotKey::from(slot), notifier)
        .with_context(|| format!("cannot book {slot} with {}", instructor.name))?;
    Ok(session.book(notifier)?)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn skills_listing_honours_filter() {
        let out = list_skills(&FilterQuery::from_parts(Some("guit"), None));
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("Guitar"));
        assert!(out.contains("Music"));
    }

    #[test]
    fn skills_listing_empty_message() {
        let out = list_skills(&FilterQuery::default().with_category("technology"));
        assert_eq!(out, "No skills found matching your criteria.\n");
    }

    #[test]
    fn instructors_listing_by_category() {
        let out = list_instructors(&FilterQuery::default().with_category("business"));
        assert!(out.contains("David Kim"));
        assert!(!out.contains("Sarah Chen"));
    }

    #[test]
    fn slots_listing_marks_booked() {
        let out = list_slots();
        assert_eq!(out.lines().count(), 6);
        assert!(out.lines().any(|l| l.starts_with("Today-4:00 PM") && l.ends_with("booked")));
    }

    #[test]
    fn book_confirms_available_slot() {
        let sink = RefCell::new(Vec::new());
        let confirmation = book("sarah chen", "Tomorrow-10:00 AM", &sink).unwrap();
        assert_eq!(confirmation.to_string(), "Tomorrow-10:00 AM");
        assert_eq!(sink.borrow()[0].title, "Session booked successfully!");
    }

    #[test]
    fn book_rejects_unavailable_slot() {
        let sink = RefCell::new(Vec::new());
        let err = book("Sarah Chen", "Today-4:00 PM", &sink).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("cannot book Today-4:00 PM with Sarah Chen"));
        assert!(message.contains("not available"));
        assert!(sink.borrow()[0].is_destructive());
    }

    #[test]
    fn book_rejects_unknown_instructor() {
        let sink = RefCell::new(Vec::new());
        let err = book("Nobody", "Today-2:00 PM", &sink).unwrap_err();
        assert!(err.to_string().contains("unknown instructor: Nobody"));
        assert!(sink.borrow().is_empty());
    }
}
