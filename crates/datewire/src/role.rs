//! The capability surface shared by every parser role.
//!
//! Each role answers the same five questions, but only a subset of the
//! answers is mathematically well-defined for any given provenance. A role
//! that cannot answer one returns [`DatewireError::Unsupported`] carrying
//! the reason and the recommended path, so a refusal is as loud and as
//! specific as a parse failure.
//!
//! [`DatewireError::Unsupported`]: crate::error::DatewireError::Unsupported

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::error::Result;

/// An absolute point on the UTC timeline, zone-free.
///
/// The only wire format allowed to cross the server boundary for
/// time-bearing values.
pub type Instant = DateTime<Utc>;

/// A year/month/day with no time-of-day and no zone attached.
pub type CalendarDate = NaiveDate;

/// A date and wall-clock time pinned to a named zone.
///
/// No role produces one today; the alias exists so the refusal is typed.
pub type ZonedDateTime = DateTime<Tz>;

/// A date and wall-clock time that cannot be placed on the timeline
/// because it carries no zone. Likewise refusal-only.
pub type LocalDateTime = NaiveDateTime;

/// A wall-clock time of day with no date and no zone. Likewise refusal-only.
pub type LocalTime = NaiveTime;

/// One parser role: a stateless converter from strings of a single
/// provenance into typed calendar values.
///
/// Implementations are immutable after construction, so concurrent calls
/// are independent and order-insensitive.
pub trait DateStringParser {
    /// What this role accepts when asked for a calendar date. Server values
    /// are bare strings; user input carries its pattern and locale
    /// alongside the text.
    type DateInput<'a>
    where
        Self: 'a;

    /// Convert the input into an absolute UTC instant.
    fn to_instant(&self, input: &str) -> Result<Instant>;

    /// Convert the input into a calendar date.
    fn to_calendar_date<'a>(&'a self, input: Self::DateInput<'a>) -> Result<CalendarDate>;

    /// Convert the input into a date-time pinned to a named zone.
    fn to_zoned_date_time(&self, input: &str) -> Result<ZonedDateTime>;

    /// Convert the input into a zone-less date-time.
    fn to_local_date_time(&self, input: &str) -> Result<LocalDateTime>;

    /// Convert the input into a bare time of day.
    fn to_local_time(&self, input: &str) -> Result<LocalTime>;
}
