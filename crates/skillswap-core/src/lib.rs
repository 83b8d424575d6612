//! Catalog filtering, testimonial carousel, booking selection, and local form
//! state for the SkillSwap landing page.

pub mod auth;
pub mod booking;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod notify;

pub use auth::{AuthField, AuthForm, AuthMode, AuthOutcome};
pub use booking::{BookingConfirmation, BookingSelector, BookingSession, BookingSlot, SlotKey};
pub use carousel::{Autoplay, Carousel, CarouselController, DEFAULT_AUTOPLAY_INTERVAL};
pub use catalog::{ALL_CATEGORIES, CatalogEntry, Category, FilterQuery, Instructor, Skill, filter};
pub use config::Config;
pub use error::{CoreError, PreconditionViolation, ValidationError};
pub use notify::{Notice, Notifier, Severity, TracingNotifier};
