//! Unwrapping that treats an absent value as a defect.
//!
//! While developing, an absent value aborts the process at the call site.
//! In production the same absence becomes an error the caller can recover
//! from. See [`UnwrapDecision`] for the rules.

pub mod build_mode;
pub mod decision;
pub mod descriptor;
pub mod errors;
pub mod location;
pub mod macros;
pub mod opt_ext;

use std::{borrow::Cow, fmt::Display};

pub use build_mode::{BuildMode, BUILD_MODE_ENV};
pub use decision::UnwrapDecision;
pub use descriptor::FailureDescriptor;
pub use errors::{UnwrapError, UnwrapErrorExt, UnwrapErrorKind};
pub use location::SourceLocation;
pub use opt_ext::{OptionExt, OptionTryUnwrap, DEFAULT_REASONING};

/// [`UnwrapDecision::resolve`] using the process-wide mode and the caller's location.
///
/// # Errors
/// The resolved error when `optional` is `None` in production.
#[track_caller]
pub fn resolve<T, E, F>(optional: Option<T>, descriptor: FailureDescriptor<E, F>) -> Result<T, E>
where
    E: From<UnwrapError> + Display,
    F: FnOnce() -> Result<(), E>,
{
    UnwrapDecision::global().resolve(optional, descriptor, SourceLocation::caller())
}

/// [`UnwrapDecision::resolve_with_fallback`] using the process-wide mode.
#[track_caller]
pub fn resolve_with_fallback<T: std::fmt::Debug>(optional: Option<T>, fallback: impl FnOnce() -> T) -> T {
    UnwrapDecision::global().resolve_with_fallback(optional, fallback, SourceLocation::caller())
}

/// Aborts on `None` whatever the mode, naming `reasoning` in the diagnostic.
#[track_caller]
pub fn force_unwrap<T>(optional: Option<T>, reasoning: impl Into<Cow<'static, str>>) -> T {
    UnwrapDecision::force(optional, || reasoning, SourceLocation::caller())
}
