use std::borrow::Cow;

use crate::location::SourceLocation;

/// What went wrong, so callers can tell forced-unwrap failures apart from
/// their own errors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UnwrapErrorKind {
    /// A value asserted to be present was absent.
    ForceUnwrapFailed,
    /// A fallback was reached while developing.
    FallbackInvoked,
}

impl UnwrapErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ForceUnwrapFailed => "forced-unwrap-failed",
            Self::FallbackInvoked => "fallback-invoked",
        }
    }
}

impl std::fmt::Display for UnwrapErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error produced for an absent value when the caller supplied no error
/// of their own.
#[must_use]
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
#[error("Forced unwrap of type Option<{type_name}> asserting '{reasoning}' failed at {location}")]
pub struct UnwrapError {
    kind: UnwrapErrorKind,
    reasoning: Cow<'static, str>,
    type_name: &'static str,
    location: SourceLocation,
}

impl UnwrapError {
    pub fn new<T: ?Sized>(
        kind: UnwrapErrorKind,
        reasoning: impl Into<Cow<'static, str>>,
        location: SourceLocation,
    ) -> Self {
        Self {
            kind,
            reasoning: reasoning.into(),
            type_name: std::any::type_name::<T>(),
            location,
        }
    }

    pub fn forced<T: ?Sized>(
        reasoning: impl Into<Cow<'static, str>>,
        location: SourceLocation,
    ) -> Self {
        Self::new::<T>(UnwrapErrorKind::ForceUnwrapFailed, reasoning, location)
    }

    #[must_use]
    pub fn kind(&self) -> UnwrapErrorKind {
        self.kind
    }

    #[must_use]
    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    /// Name of the type that was expected inside the `Option`.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub fn location(&self) -> SourceLocation {
        self.location
    }
}

/// Finds an [`UnwrapError`] anywhere in an application error chain.
pub trait UnwrapErrorExt {
    fn unwrap_failure(&self) -> Option<&UnwrapError>;

    fn is_unwrap_failure(&self) -> bool {
        self.unwrap_failure().is_some()
    }
}

impl UnwrapErrorExt for anyhow::Error {
    fn unwrap_failure(&self) -> Option<&UnwrapError> {
        self.chain().find_map(|err| err.downcast_ref::<UnwrapError>())
    }
}
