//! Parsing of user-entered date text.
//!
//! Nothing is sniffed here. What a human types depends on their locale and
//! on the widget in front of them, so the caller must say exactly which
//! pattern and locale the text was collected under, and the text either
//! matches that pattern exactly or the call fails. No coercion, no
//! defaults.

use chrono::format::{parse, Locale, Parsed, StrftimeItems};

use crate::error::{DatewireError, Result};
use crate::role::{
    CalendarDate, DateStringParser, Instant, LocalDateTime, LocalTime, ZonedDateTime,
};

/// One piece of user-entered date text, together with the pattern and
/// locale the UI widget collected it under.
#[derive(Debug, Clone, Copy)]
pub struct UserDateInput<'a> {
    /// The text as the user typed or picked it.
    pub text: &'a str,
    /// A chrono strftime pattern describing the widget's format,
    /// e.g. `"%m/%d/%Y"`.
    pub pattern: &'a str,
    /// The locale the widget renders in.
    pub locale: Locale,
}

/// Converts end-user-entered text into calendar dates under an explicitly
/// supplied pattern and locale.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserInputParser;

impl UserInputParser {
    pub fn new() -> Self {
        Self
    }
}

/// Rewrite every two-digit-year directive (`%y`) into the full proleptic
/// year (`%Y`), including flag-prefixed forms (`%-y`, `%0y`, `%_y`).
///
/// `%y` resolves its two digits through a sliding century window (00-68
/// becomes 20xx, 69-99 becomes 19xx), so the same keystrokes can land in
/// different centuries depending on the pivot. `%Y` reads the digits as
/// the era-aware year itself. `%%` escapes are left alone.
fn rewrite_ambiguous_year(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    while let Some(ch) = chars.next() {
        out.push(ch);
        if ch != '%' {
            continue;
        }
        if let Some(&flag) = chars.peek() {
            if matches!(flag, '-' | '0' | '_') {
                chars.next();
                out.push(flag);
            }
        }
        match chars.next() {
            Some('y') => out.push('Y'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

impl DateStringParser for UserInputParser {
    type DateInput<'a> = UserDateInput<'a>
    where
        Self: 'a;

    fn to_instant(&self, _input: &str) -> Result<Instant> {
        Err(DatewireError::Unsupported(
            "free-text user input carries no zone or offset, so it cannot pin an \
             absolute instant; collect the date here and take the zone from the \
             environment the user is in"
                .to_string(),
        ))
    }

    /// Parse the text strictly against its pattern and locale.
    ///
    /// The pattern goes through the year-directive rewrite first, then
    /// drives chrono's parser directly: unmatched literals, trailing text,
    /// and impossible field combinations are chrono errors, forwarded
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use datewire::{DateStringParser, Locale, UserDateInput, UserInputParser};
    ///
    /// let parser = UserInputParser::new();
    /// let date = parser.to_calendar_date(UserDateInput {
    ///     text: "08/22/2023",
    ///     pattern: "%m/%d/%Y",
    ///     locale: Locale::en_US,
    /// })?;
    /// assert_eq!(date.to_string(), "2023-08-22");
    /// # Ok::<(), datewire::DatewireError>(())
    /// ```
    fn to_calendar_date<'a>(&'a self, input: UserDateInput<'a>) -> Result<CalendarDate> {
        let pattern = rewrite_ambiguous_year(input.pattern);
        let mut parsed = Parsed::new();
        parse(
            &mut parsed,
            input.text,
            StrftimeItems::new_with_locale(&pattern, input.locale),
        )?;
        Ok(parsed.to_naive_date()?)
    }

    fn to_zoned_date_time(&self, _input: &str) -> Result<ZonedDateTime> {
        Err(DatewireError::Unsupported(
            "user input never names a zone reliably enough to build a zoned date-time; \
             collect the zone through a dedicated picker, not free text"
                .to_string(),
        ))
    }

    fn to_local_date_time(&self, _input: &str) -> Result<LocalDateTime> {
        Err(DatewireError::Unsupported(
            "time-of-day entry is a separate widget concern; this role only produces \
             calendar dates"
                .to_string(),
        ))
    }

    fn to_local_time(&self, _input: &str) -> Result<LocalTime> {
        Err(DatewireError::Unsupported(
            "time-of-day entry is a separate widget concern; this role only produces \
             calendar dates"
                .to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn input<'a>(text: &'a str, pattern: &'a str) -> UserDateInput<'a> {
        UserDateInput {
            text,
            pattern,
            locale: Locale::en_US,
        }
    }

    // ── Pattern rewriting ───────────────────────────────────────────────

    #[test]
    fn test_rewrite_replaces_two_digit_year() {
        assert_eq!(rewrite_ambiguous_year("%y"), "%Y");
        assert_eq!(rewrite_ambiguous_year("%m/%d/%y"), "%m/%d/%Y");
        assert_eq!(rewrite_ambiguous_year("%-y.%0y.%_y"), "%-Y.%0Y.%_Y");
    }

    #[test]
    fn test_rewrite_leaves_everything_else_alone() {
        assert_eq!(rewrite_ambiguous_year("%Y-%m-%d"), "%Y-%m-%d");
        assert_eq!(rewrite_ambiguous_year("%%y"), "%%y");
        assert_eq!(rewrite_ambiguous_year("day %d, month %B"), "day %d, month %B");
        assert_eq!(rewrite_ambiguous_year(""), "");
    }

    // ── to_calendar_date tests ──────────────────────────────────────────

    #[test]
    fn test_parses_slash_pattern() {
        let parser = UserInputParser::new();
        let date = parser.to_calendar_date(input("08/22/2023", "%m/%d/%Y")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 8, 22).unwrap());
    }

    #[test]
    fn test_round_trips_formatted_output() {
        let parser = UserInputParser::new();
        let original = NaiveDate::from_ymd_opt(2023, 8, 22).unwrap();
        for pattern in ["%Y-%m-%d", "%m/%d/%Y", "%d %B %Y", "%d.%m.%Y"] {
            let rendered = original.format_localized(pattern, Locale::en_US).to_string();
            let parsed = parser.to_calendar_date(input(&rendered, pattern)).unwrap();
            assert_eq!(parsed, original, "pattern: {pattern}");
        }
    }

    #[test]
    fn test_two_digit_year_is_era_aware() {
        // "23" is the year 23, not 1923 and not 2023; no century window.
        let parser = UserInputParser::new();
        let date = parser.to_calendar_date(input("08/22/23", "%m/%d/%y")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(23, 8, 22).unwrap());
    }

    #[test]
    fn test_strict_rejects_trailing_text() {
        let parser = UserInputParser::new();
        let err = parser
            .to_calendar_date(input("08/22/2023 oops", "%m/%d/%Y"))
            .unwrap_err();
        assert!(matches!(err, DatewireError::Parse(_)));
    }

    #[test]
    fn test_strict_rejects_pattern_mismatch() {
        let parser = UserInputParser::new();
        for text in ["2023-08-22", "08-22-2023", "August 22, 2023"] {
            let err = parser.to_calendar_date(input(text, "%m/%d/%Y")).unwrap_err();
            assert!(matches!(err, DatewireError::Parse(_)), "text: {text}");
        }
    }

    #[test]
    fn test_strict_rejects_impossible_date() {
        let parser = UserInputParser::new();
        for text in ["02/30/2023", "13/01/2023", "00/10/2023"] {
            let err = parser.to_calendar_date(input(text, "%m/%d/%Y")).unwrap_err();
            assert!(matches!(err, DatewireError::Parse(_)), "text: {text}");
        }
    }

    #[test]
    fn test_month_names_parse_under_pattern() {
        let parser = UserInputParser::new();
        let date = parser
            .to_calendar_date(input("22 August 2023", "%d %B %Y"))
            .unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 8, 22).unwrap());
    }

    // ── Unsupported operations ──────────────────────────────────────────

    #[test]
    fn test_time_bearing_operations_unsupported() {
        let parser = UserInputParser::new();
        assert!(matches!(
            parser.to_instant("08/22/2023").unwrap_err(),
            DatewireError::Unsupported(_)
        ));
        assert!(matches!(
            parser.to_zoned_date_time("08/22/2023").unwrap_err(),
            DatewireError::Unsupported(_)
        ));
        assert!(matches!(
            parser.to_local_date_time("08/22/2023").unwrap_err(),
            DatewireError::Unsupported(_)
        ));
        assert!(matches!(
            parser.to_local_time("10:30").unwrap_err(),
            DatewireError::Unsupported(_)
        ));
    }
}
