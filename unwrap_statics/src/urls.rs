use url::Url;

use unwrap_core::{SourceLocation, UnwrapDecision};

use crate::errors::StaticValueError;

/// Parses a hard coded URL, aborting in any build if it is invalid.
///
/// `purpose` names what the constant is used for, so the diagnostic reads as
/// more than a bad string.
#[track_caller]
pub fn static_url(literal: &'static str, purpose: &'static str) -> Url {
    UnwrapDecision::force(
        Url::parse(literal).ok(),
        || format!("URL constant \"{literal}\" for \"{purpose}\""),
        SourceLocation::caller(),
    )
}

/// [`try_static_url_in`] with the process-wide decision.
///
/// # Errors
/// See [`try_static_url_in`].
#[track_caller]
pub fn try_static_url(literal: &'static str, purpose: &'static str) -> Result<Url, StaticValueError> {
    try_static_url_in(UnwrapDecision::global(), literal, purpose)
}

/// Parses a hard coded URL. An invalid literal aborts while developing.
///
/// # Errors
/// [`StaticValueError::Url`] for an invalid literal in production.
#[track_caller]
pub fn try_static_url_in(
    decision: UnwrapDecision,
    literal: &'static str,
    purpose: &'static str,
) -> Result<Url, StaticValueError> {
    decision.resolve_result(
        Url::parse(literal),
        |source| StaticValueError::Url {
            literal,
            purpose,
            source,
        },
        SourceLocation::caller(),
    )
}
