//! The observer's timezone.
//!
//! "The day" an instant falls on depends on where the observing human is
//! standing, so the zone used for that projection is a first-class value
//! here rather than a bare string: it resolves against the IANA database at
//! construction and compares by value everywhere it is checked.

use std::fmt;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{DatewireError, Result};

/// The timezone of the human looking at the screen, as distinct from the
/// zone the server happens to run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObserverZone(Tz);

impl ObserverZone {
    /// Resolve a named IANA zone (e.g. `"America/New_York"`) against the
    /// timezone database.
    ///
    /// # Errors
    ///
    /// Returns [`DatewireError::InvalidZone`] if the name is not in the
    /// database.
    pub fn named(id: &str) -> Result<Self> {
        id.parse::<Tz>()
            .map(ObserverZone)
            .map_err(|_| DatewireError::InvalidZone(format!("'{id}'")))
    }

    /// The zone the host process is configured with.
    ///
    /// # Errors
    ///
    /// Returns [`DatewireError::Configuration`] if the host zone cannot be
    /// determined, or [`DatewireError::InvalidZone`] if the host reports a
    /// name the database does not know.
    pub fn host() -> Result<Self> {
        let name = iana_time_zone::get_timezone().map_err(|e| {
            DatewireError::Configuration(format!("cannot determine the host timezone: {e}"))
        })?;
        Self::named(&name)
    }

    /// The underlying database zone, for projections.
    pub fn tz(&self) -> Tz {
        self.0
    }

    /// The IANA name of this zone.
    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl fmt::Display for ObserverZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}

impl From<Tz> for ObserverZone {
    fn from(tz: Tz) -> Self {
        ObserverZone(tz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_resolves_iana_name() {
        let zone = ObserverZone::named("America/New_York").unwrap();
        assert_eq!(zone.name(), "America/New_York");
        assert_eq!(zone.to_string(), "America/New_York");
    }

    #[test]
    fn test_named_rejects_unknown_zone() {
        let err = ObserverZone::named("Atlantis/Sunken_City").unwrap_err();
        assert!(matches!(err, DatewireError::InvalidZone(_)));
        assert!(err.to_string().contains("Atlantis/Sunken_City"), "got: {err}");
    }

    #[test]
    fn test_compares_by_value() {
        let a = ObserverZone::named("Europe/London").unwrap();
        let b = ObserverZone::from(chrono_tz::Europe::London);
        assert_eq!(a, b);
        assert_ne!(a, ObserverZone::named("Europe/Dublin").unwrap());
    }

    #[test]
    fn test_host_resolves_or_reports_configuration() {
        // CI containers may have no zone configured; both outcomes are legal,
        // anything else is not.
        match ObserverZone::host() {
            Ok(zone) => assert!(!zone.name().is_empty()),
            Err(e) => assert!(matches!(
                e,
                DatewireError::Configuration(_) | DatewireError::InvalidZone(_)
            )),
        }
    }
}
