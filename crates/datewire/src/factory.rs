//! Construction of the two parser roles.

use crate::error::Result;
use crate::server::ServerValueParser;
use crate::user_input::UserInputParser;

/// The pair of parser roles a consumer holds for the lifetime of a
/// session. The two share nothing: each call on either is a pure function
/// of its inputs and the configuration captured here.
#[derive(Debug, Clone, Copy)]
pub struct Parsers {
    /// For strings produced by the backend under the wire convention.
    pub from_server_value: ServerValueParser,
    /// For text typed or picked by the user under an explicit pattern and
    /// locale.
    pub from_user_input: UserInputParser,
}

/// Build one parser per provenance, production-configured.
///
/// The server parser's observer zone is the host's configured zone; there
/// is no way to substitute another from here.
///
/// # Errors
///
/// Returns [`DatewireError::Configuration`] if the host zone cannot be
/// determined.
///
/// [`DatewireError::Configuration`]: crate::error::DatewireError::Configuration
pub fn make_parsers() -> Result<Parsers> {
    Ok(Parsers {
        from_server_value: ServerValueParser::new()?,
        from_user_input: UserInputParser::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DatewireError;

    #[test]
    fn test_make_parsers_wires_host_zone_or_reports_configuration() {
        // CI containers may have no zone configured; both outcomes are
        // legal, anything else is not.
        match make_parsers() {
            Ok(parsers) => {
                assert!(!parsers.from_server_value.observer_zone().name().is_empty());
            }
            Err(e) => assert!(matches!(
                e,
                DatewireError::Configuration(_) | DatewireError::InvalidZone(_)
            )),
        }
    }
}
