use regex::Regex;

use unwrap_core::{decision::abort, SourceLocation, UnwrapDecision};

use crate::errors::StaticValueError;

/// Compiles a hard coded pattern, aborting in any build if it is invalid.
#[track_caller]
pub fn static_regex(pattern: &'static str, purpose: &'static str) -> Regex {
    let location = SourceLocation::caller();
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(source) => abort(
            &StaticValueError::Regex {
                pattern,
                purpose,
                source,
            },
            location,
        ),
    }
}

/// [`try_static_regex_in`] with the process-wide decision.
///
/// # Errors
/// See [`try_static_regex_in`].
#[track_caller]
pub fn try_static_regex(pattern: &'static str, purpose: &'static str) -> Result<Regex, StaticValueError> {
    try_static_regex_in(UnwrapDecision::global(), pattern, purpose)
}

/// Compiles a hard coded pattern. An invalid pattern aborts while developing.
///
/// # Errors
/// [`StaticValueError::Regex`] for an invalid pattern in production.
#[track_caller]
pub fn try_static_regex_in(
    decision: UnwrapDecision,
    pattern: &'static str,
    purpose: &'static str,
) -> Result<Regex, StaticValueError> {
    decision.resolve_result(
        Regex::new(pattern),
        |source| StaticValueError::Regex {
            pattern,
            purpose,
            source,
        },
        SourceLocation::caller(),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use unwrap_core::BuildMode;

    use super::*;

    static MENTION: LazyLock<Regex> = LazyLock::new(|| static_regex(r"<@!?(\d+)>", "user mentions"));

    #[test]
    fn compiles_valid_pattern_once() {
        let id = MENTION
            .captures("hello <@!1234>")
            .and_then(|captures| captures.get(1))
            .map(|id| id.as_str());

        assert_eq!(id, Some("1234"));
    }

    #[test]
    fn invalid_pattern_is_recoverable_in_production() {
        let err = try_static_regex_in(
            UnwrapDecision::new(BuildMode::Production),
            "(unclosed",
            "group names",
        )
        .unwrap_err();

        assert!(matches!(err, StaticValueError::Regex { pattern: "(unclosed", .. }));
        assert_eq!(err.purpose(), "group names");
        assert!(err
            .to_string()
            .starts_with("Invalid static regex pattern (unclosed for \"group names\": "));
    }
}
