//! Parsing of backend-supplied date/time strings.
//!
//! The wire convention admits exactly two shapes: an RFC 3339 instant with
//! the trailing `Z` for Zulu, or a bare `YYYY-MM-DD` calendar date. Every
//! other shape is rejected before chrono ever sees it, so an offset-only
//! instant or a zoned date-time string forces an explicit protocol decision
//! upstream instead of being quietly absorbed here.
//!
//! Shape checks are cheap heuristics that pick a branch and produce the
//! "which shape did you mean" error message; chrono remains the final
//! arbiter of grammar and calendar validity on every branch.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{DatewireError, Result};
use crate::role::{
    CalendarDate, DateStringParser, Instant, LocalDateTime, LocalTime, ZonedDateTime,
};
use crate::zone::ObserverZone;

/// Strict `YYYY-MM-DD` with the year confined to 1900-2999.
static CALENDAR_DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(19[0-9]{2}|2[0-9]{3})-(0[1-9]|1[012])-([123]0|[012][1-9]|31)$")
        .expect("calendar date shape regex must compile")
});

// ── Construction ────────────────────────────────────────────────────────────

/// Whether a parser is being built by production wiring or by a test
/// harness. Only the latter may pin the observer zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    Production,
    Test,
}

/// Converts backend date/time strings into calendar values, holding the one
/// observer zone that timezone-dependent derivations are allowed to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerValueParser {
    observer_zone: ObserverZone,
}

impl ServerValueParser {
    /// Build a production parser. The observer zone is the host's
    /// configured zone; production code has no way to substitute another.
    ///
    /// # Errors
    ///
    /// Returns [`DatewireError::Configuration`] if the host zone cannot be
    /// determined.
    pub fn new() -> Result<Self> {
        Ok(Self {
            observer_zone: ObserverZone::host()?,
        })
    }

    /// Build a parser with an explicit observer zone override.
    ///
    /// Only a test harness may supply the override; it is what makes the
    /// midnight-boundary assertions deterministic regardless of where the
    /// test machine sits. A production context supplying one is a wiring
    /// mistake and fails immediately.
    ///
    /// # Errors
    ///
    /// Returns [`DatewireError::Configuration`] if `override_zone` is
    /// supplied outside [`ExecutionContext::Test`], or if no override is
    /// given and the host zone cannot be determined.
    pub fn with_context(
        context: ExecutionContext,
        override_zone: Option<ObserverZone>,
    ) -> Result<Self> {
        match (context, override_zone) {
            (ExecutionContext::Test, Some(zone)) => Ok(Self {
                observer_zone: zone,
            }),
            (ExecutionContext::Production, Some(zone)) => {
                Err(DatewireError::Configuration(format!(
                    "the observer zone can only be overridden from a test context, \
                     but a production caller tried to set it to '{zone}'"
                )))
            }
            (_, None) => Self::new(),
        }
    }

    /// The observer zone this parser was configured with.
    pub fn observer_zone(&self) -> ObserverZone {
        self.observer_zone
    }

    // ── Shape sniffing ──────────────────────────────────────────────────

    /// Loose check picking the instant branch. chrono still decides whether
    /// the string is a real RFC 3339 instant.
    fn smells_like_instant(input: &str) -> bool {
        input.ends_with('Z')
    }

    /// Loose check picking the calendar-date branch. The same predicate
    /// gates [`Self::to_calendar_date`] and the dangerous derivation, so a
    /// string cannot pass one gate and fail the other.
    fn smells_like_calendar_date(input: &str) -> bool {
        CALENDAR_DATE_SHAPE.is_match(input)
    }

    // ── Gated derivation ────────────────────────────────────────────────

    /// Derive the calendar date an instant falls on, in the observer's zone.
    ///
    /// Named to signal danger: which day an instant belongs to is
    /// load-bearing on knowing precisely which human's zone to project
    /// into. Prefer rendering a full date/time wherever the UI allows it,
    /// and reach for this only when a day is genuinely all there is room
    /// for.
    ///
    /// The contract, in order:
    ///
    /// 1. `zone_of_observer` must equal the zone this parser was configured
    ///    with, by value. Anything else fails with
    ///    [`DatewireError::ObserverZoneMismatch`] naming both zones, so a
    ///    caller cannot launder an arbitrary zone through the API and walk
    ///    away with the wrong day.
    /// 2. A calendar-date-shaped input short-circuits to
    ///    [`Self::to_calendar_date`]; there is nothing to project.
    /// 3. Any other non-instant shape fails with
    ///    [`DatewireError::ShapeMismatch`].
    /// 4. The instant is parsed by chrono, projected into the observer
    ///    zone, and the date component of the zoned result is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use datewire::{ExecutionContext, ObserverZone, ServerValueParser};
    ///
    /// let zone = ObserverZone::named("Pacific/Honolulu")?;
    /// let parser = ServerValueParser::with_context(ExecutionContext::Test, Some(zone))?;
    ///
    /// // 10:00 UTC is local midnight in Honolulu (UTC-10).
    /// let date = parser.to_calendar_date_from_instant_dangerous("2023-08-22T10:00:00Z", zone)?;
    /// assert_eq!(date.to_string(), "2023-08-22");
    /// # Ok::<(), datewire::DatewireError>(())
    /// ```
    pub fn to_calendar_date_from_instant_dangerous(
        &self,
        input: &str,
        zone_of_observer: ObserverZone,
    ) -> Result<CalendarDate> {
        if self.observer_zone != zone_of_observer {
            return Err(DatewireError::ObserverZoneMismatch {
                expected: self.observer_zone.to_string(),
                given: zone_of_observer.to_string(),
            });
        }
        if Self::smells_like_calendar_date(input) {
            return self.to_calendar_date(input);
        }
        if !Self::smells_like_instant(input) {
            return Err(DatewireError::ShapeMismatch(format!(
                "only a stringified calendar date or a stringified instant can become \
                 a calendar date, but '{input}' is neither"
            )));
        }
        let instant = self.to_instant(input)?;
        Ok(instant.with_timezone(&zone_of_observer.tz()).date_naive())
    }
}

impl DateStringParser for ServerValueParser {
    type DateInput<'a> = &'a str
    where
        Self: 'a;

    /// Parse an RFC 3339 instant. The trailing `Z` is required: a string
    /// that carries a numeric offset instead is rejected here even though
    /// chrono could parse it, because the wire contract says time-bearing
    /// server values travel as instants.
    fn to_instant(&self, input: &str) -> Result<Instant> {
        if !Self::smells_like_instant(input) {
            return Err(DatewireError::ShapeMismatch(format!(
                "'{input}' is not an instant: the Z for Zulu is missing"
            )));
        }
        let dt = DateTime::parse_from_rfc3339(input)?;
        Ok(dt.with_timezone(&Utc))
    }

    /// Parse a bare `YYYY-MM-DD` calendar date.
    fn to_calendar_date<'a>(&'a self, input: &'a str) -> Result<CalendarDate> {
        if !Self::smells_like_calendar_date(input) {
            return Err(DatewireError::ShapeMismatch(format!(
                "the input ('{input}') was not in ISO-8601 format for a day type"
            )));
        }
        Ok(NaiveDate::parse_from_str(input, "%Y-%m-%d")?)
    }

    fn to_zoned_date_time(&self, _input: &str) -> Result<ZonedDateTime> {
        Err(DatewireError::Unsupported(
            "no stable contract exists for carrying a zoned date-time across the server \
             boundary; use to_instant and keep the zone decision next to the display code"
                .to_string(),
        ))
    }

    fn to_local_date_time(&self, _input: &str) -> Result<LocalDateTime> {
        Err(DatewireError::Unsupported(
            "a date-time string without a zone or trailing Z cannot be placed on the \
             timeline, and guessing an offset here would surface as date math errors in \
             the UI. Renegotiate the wire contract so the server sends an instant \
             (trailing Z) or, once supported, a zoned date-time. Do not just append a Z"
                .to_string(),
        ))
    }

    fn to_local_time(&self, _input: &str) -> Result<LocalTime> {
        Err(DatewireError::Unsupported(
            "server values never carry a bare time of day; without a date and a zone \
             there is nothing it could mean"
                .to_string(),
        ))
    }
}
