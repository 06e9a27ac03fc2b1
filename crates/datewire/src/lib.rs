//! # datewire
//!
//! Provenance-aware parsing of date/time strings into typed calendar
//! values.
//!
//! Date strings reach an application from two untrusted directions: a
//! backend API following a fixed wire convention, and a human typing into
//! a locale-shaped widget. The syntax is the easy part; the policy is not.
//! This crate decides which string shapes are acceptable for which target
//! type, refuses timezone-sensitive conversions that would silently use
//! the wrong zone, and fails loudly whenever the information needed for a
//! correct answer is missing. Calendar and timezone arithmetic itself is
//! delegated to chrono and chrono-tz on every path.
//!
//! ## Modules
//!
//! - [`server`] — parser for backend-supplied strings (Zulu instants and
//!   bare ISO calendar dates)
//! - [`user_input`] — parser for user-entered text under an explicit
//!   pattern and locale
//! - [`role`] — the capability trait shared by both roles, and the value
//!   type aliases
//! - [`zone`] — the observer's timezone as a first-class value
//! - [`factory`] — one construction point producing both roles
//! - [`error`] — error types

pub mod error;
pub mod factory;
pub mod role;
pub mod server;
pub mod user_input;
pub mod zone;

pub use error::{DatewireError, Result};
pub use factory::{make_parsers, Parsers};
pub use role::{
    CalendarDate, DateStringParser, Instant, LocalDateTime, LocalTime, ZonedDateTime,
};
pub use server::{ExecutionContext, ServerValueParser};
pub use user_input::{UserDateInput, UserInputParser};
pub use zone::ObserverZone;

/// The locale a user-input pattern is interpreted under, re-exported for
/// callers of [`UserInputParser`].
pub use chrono::format::Locale;
