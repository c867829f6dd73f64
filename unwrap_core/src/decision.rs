use std::{borrow::Cow, fmt::Display, io::Write as _};

use tracing::{error, warn};

use crate::{
    build_mode::BuildMode,
    descriptor::FailureDescriptor,
    errors::{UnwrapError, UnwrapErrorKind},
    location::SourceLocation,
};

pub const FALLBACK_REASONING: &str = "fallback invoked during development";
pub const PRODUCER_RETURNED_REASONING: &str = "failure producer returned without an error";
/// `kind` logged for errors the caller supplied or produced.
pub const CALLER_ERROR_KIND: &str = "caller-error";

/// Decides what happens to an absent value: abort, recoverable error, or
/// fallback, depending on the [`BuildMode`] it was built with.
///
/// Holds no state besides the mode, so it is `Copy` and can be shared freely
/// between threads.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct UnwrapDecision {
    mode: BuildMode,
}

impl UnwrapDecision {
    #[must_use]
    pub const fn new(mode: BuildMode) -> Self {
        Self { mode }
    }

    /// Uses the process-wide [`BuildMode::global`].
    #[must_use]
    pub fn global() -> Self {
        Self::new(BuildMode::global())
    }

    #[must_use]
    pub const fn mode(self) -> BuildMode {
        self.mode
    }

    /// Returns the value if present, otherwise reports the failure described
    /// by `descriptor`.
    ///
    /// A `Producer` descriptor is only invoked when the value is absent, but
    /// the descriptor itself is built by the caller whatever the outcome. If
    /// building it allocates or formats, use [`Self::resolve_with`].
    ///
    /// # Errors
    /// In [`BuildMode::Production`], the resolved error for an absent value.
    /// In [`BuildMode::Development`] an absent value aborts the process instead.
    #[inline]
    pub fn resolve<T, E, F>(
        self,
        optional: Option<T>,
        descriptor: FailureDescriptor<E, F>,
        location: SourceLocation,
    ) -> Result<T, E>
    where
        E: From<UnwrapError> + Display,
        F: FnOnce() -> Result<(), E>,
    {
        match optional {
            Some(value) => Ok(value),
            None => {
                let (error, kind) = describe::<T, E, F>(descriptor, location);
                Err(self.fail::<T, E>(error, kind, location))
            }
        }
    }

    /// Like [`Self::resolve`], but the descriptor itself is only built on absence.
    ///
    /// # Errors
    /// See [`Self::resolve`].
    #[inline]
    pub fn resolve_with<T, E, F>(
        self,
        optional: Option<T>,
        descriptor: impl FnOnce() -> FailureDescriptor<E, F>,
        location: SourceLocation,
    ) -> Result<T, E>
    where
        E: From<UnwrapError> + Display,
        F: FnOnce() -> Result<(), E>,
    {
        match optional {
            Some(value) => Ok(value),
            None => {
                let (error, kind) = describe::<T, E, F>(descriptor(), location);
                Err(self.fail::<T, E>(error, kind, location))
            }
        }
    }

    /// Same policy as [`Self::resolve`] for a `Result`, where `map_err` turns
    /// the cause into the error to report. `map_err` only runs on failure.
    ///
    /// # Errors
    /// In [`BuildMode::Production`], the mapped error.
    #[inline]
    pub fn resolve_result<T, S, E>(
        self,
        result: Result<T, S>,
        map_err: impl FnOnce(S) -> E,
        location: SourceLocation,
    ) -> Result<T, E>
    where
        E: Display,
    {
        match result {
            Ok(value) => Ok(value),
            Err(source) => Err(self.fail::<T, E>(map_err(source), CALLER_ERROR_KIND, location)),
        }
    }

    /// Returns the value if present. Otherwise aborts while developing, or
    /// logs the substitution and returns `fallback()` in production.
    #[inline]
    pub fn resolve_with_fallback<T: std::fmt::Debug>(
        self,
        optional: Option<T>,
        fallback: impl FnOnce() -> T,
        location: SourceLocation,
    ) -> T {
        match optional {
            Some(value) => value,
            None => match self.mode {
                BuildMode::Development => abort(
                    &UnwrapError::new::<T>(
                        UnwrapErrorKind::FallbackInvoked,
                        FALLBACK_REASONING,
                        location,
                    ),
                    location,
                ),
                BuildMode::Production => {
                    let value = fallback();
                    warn!(
                        file = location.file,
                        line = location.line,
                        type_name = std::any::type_name::<T>(),
                        kind = UnwrapErrorKind::FallbackInvoked.as_str(),
                        "Unwrap of Option<{}> falling back to {value:?}, {location}",
                        std::any::type_name::<T>(),
                    );
                    value
                }
            },
        }
    }

    /// Returns the value if present and aborts otherwise, whatever the mode.
    #[inline]
    pub fn force<T, R>(optional: Option<T>, reasoning: impl FnOnce() -> R, location: SourceLocation) -> T
    where
        R: Into<Cow<'static, str>>,
    {
        match optional {
            Some(value) => value,
            None => abort(&UnwrapError::forced::<T>(reasoning(), location), location),
        }
    }

    #[cold]
    fn fail<T, E: Display>(self, error: E, kind: &'static str, location: SourceLocation) -> E {
        match self.mode {
            BuildMode::Development => abort(&error, location),
            BuildMode::Production => {
                warn!(
                    file = location.file,
                    line = location.line,
                    type_name = std::any::type_name::<T>(),
                    kind,
                    "{error}"
                );
                error
            }
        }
    }
}

impl Default for UnwrapDecision {
    fn default() -> Self {
        Self::global()
    }
}

/// Resolves the descriptor to the error to report and the `kind` to log.
fn describe<T, E, F>(descriptor: FailureDescriptor<E, F>, location: SourceLocation) -> (E, &'static str)
where
    E: From<UnwrapError>,
    F: FnOnce() -> Result<(), E>,
{
    let forced = UnwrapErrorKind::ForceUnwrapFailed.as_str();
    match descriptor {
        FailureDescriptor::Message(reasoning) => {
            (UnwrapError::forced::<T>(reasoning, location).into(), forced)
        }
        FailureDescriptor::Error(error) => (error, CALLER_ERROR_KIND),
        FailureDescriptor::Producer(producer) => match producer() {
            Err(error) => (error, CALLER_ERROR_KIND),
            Ok(()) => (
                UnwrapError::forced::<T>(PRODUCER_RETURNED_REASONING, location).into(),
                forced,
            ),
        },
    }
}

/// Emits `diagnostic` and aborts the process without unwinding.
///
/// Goes to stderr as well as `tracing`, since there may be no subscriber to
/// flush before the process dies.
#[cold]
#[inline(never)]
pub fn abort(diagnostic: &dyn Display, location: SourceLocation) -> ! {
    error!(file = location.file, line = location.line, "{diagnostic}");
    drop(writeln!(
        std::io::stderr().lock(),
        "Fatal error: {diagnostic}, {location}"
    ));
    std::process::abort()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    const PRODUCTION: UnwrapDecision = UnwrapDecision::new(BuildMode::Production);
    const DEVELOPMENT: UnwrapDecision = UnwrapDecision::new(BuildMode::Development);

    fn here() -> SourceLocation {
        SourceLocation::new("src/decision.rs", 1, 1)
    }

    #[test]
    fn present_value_skips_producer_in_every_mode() {
        for decision in [PRODUCTION, DEVELOPMENT] {
            let value = decision.resolve(
                Some(7),
                FailureDescriptor::producer(|| -> Result<(), UnwrapError> {
                    unreachable!("producer evaluated on the present path")
                }),
                here(),
            );
            assert_eq!(value, Ok(7));
        }
    }

    #[test]
    fn present_value_skips_descriptor_builder() {
        let built = Cell::new(false);
        let value = DEVELOPMENT.resolve_with(
            Some("value"),
            || {
                built.set(true);
                FailureDescriptor::<UnwrapError>::message(format!("built {}", 1))
            },
            here(),
        );

        assert_eq!(value, Ok("value"));
        assert!(!built.get());
    }

    #[test]
    fn producer_returning_ok_falls_back_to_generic_error() {
        let calls = Cell::new(0);
        let err = PRODUCTION
            .resolve(
                None::<u8>,
                FailureDescriptor::producer(|| -> Result<(), UnwrapError> {
                    calls.set(calls.get() + 1);
                    Ok(())
                }),
                here(),
            )
            .unwrap_err();

        assert_eq!(calls.get(), 1);
        assert_eq!(err.kind(), UnwrapErrorKind::ForceUnwrapFailed);
        assert_eq!(err.reasoning(), PRODUCER_RETURNED_REASONING);
        assert_eq!(err.type_name(), "u8");
    }

    #[test]
    fn result_cause_is_mapped_lazily() {
        let mapped = Cell::new(false);
        let ok: Result<u8, UnwrapError> = PRODUCTION.resolve_result(
            Ok::<_, &str>(1),
            |_| {
                mapped.set(true);
                UnwrapError::forced::<u8>("unused", here())
            },
            here(),
        );
        assert_eq!(ok, Ok(1));
        assert!(!mapped.get());

        let err = PRODUCTION
            .resolve_result(
                "x".parse::<u8>(),
                |source| UnwrapError::forced::<u8>(source.to_string(), here()),
                here(),
            )
            .unwrap_err();
        assert!(err.reasoning().contains("invalid digit"));
    }

    #[test]
    fn force_returns_present_value_without_reasoning() {
        let value = UnwrapDecision::force(Some('a'), || -> &'static str { unreachable!() }, here());
        assert_eq!(value, 'a');
    }
}
