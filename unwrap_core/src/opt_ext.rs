use std::fmt::{Debug, Display};

use anyhow::Result;

use crate::{
    decision::UnwrapDecision, descriptor::FailureDescriptor, errors::UnwrapError,
    location::SourceLocation,
};

/// Reasoning used when the caller gives none.
pub const DEFAULT_REASONING: &str = "Will never be None";

/// Unwrapping through [`UnwrapDecision::global`], recording the caller's location.
pub trait OptionExt<T>: Sized {
    /// The descriptor is built whatever `self` holds. Prefer
    /// [`OptionExt::unwrap_or_fail_with`] when building it allocates.
    ///
    /// # Errors
    /// The resolved error when `self` is `None` in production.
    fn unwrap_or_fail<E, F>(self, descriptor: FailureDescriptor<E, F>) -> Result<T, E>
    where
        E: From<UnwrapError> + Display,
        F: FnOnce() -> Result<(), E>;

    /// # Errors
    /// The resolved error when `self` is `None` in production.
    fn unwrap_or_fail_with<E, F>(
        self,
        descriptor: impl FnOnce() -> FailureDescriptor<E, F>,
    ) -> Result<T, E>
    where
        E: From<UnwrapError> + Display,
        F: FnOnce() -> Result<(), E>;

    /// `reasoning` is a `&'static str` so nothing is built when `self` is
    /// `Some`. For a formatted message use [`OptionExt::unwrap_or_fail_with`].
    ///
    /// # Errors
    /// An [`UnwrapError`] carrying `reasoning` when `self` is `None` in production.
    fn unwrap_or_reason(self, reasoning: &'static str) -> Result<T, UnwrapError>;

    /// `error` is built even when `self` is `Some`. If building it is not
    /// free, use [`OptionExt::unwrap_or_raise`] or
    /// [`OptionExt::unwrap_or_fail_with`], which only run on `None`.
    ///
    /// # Errors
    /// `error` itself when `self` is `None` in production.
    fn unwrap_or_error<E>(self, error: E) -> Result<T, E>
    where
        E: From<UnwrapError> + Display;

    /// # Errors
    /// Whatever `producer` returns when `self` is `None` in production.
    fn unwrap_or_raise<E, F>(self, producer: F) -> Result<T, E>
    where
        E: From<UnwrapError> + Display,
        F: FnOnce() -> Result<(), E>;

    fn unwrap_or_fallback(self, fallback: impl FnOnce() -> T) -> T
    where
        T: Debug;

    /// Aborts on `None` in every mode.
    fn force_unwrap(self, reasoning: &'static str) -> T;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    fn unwrap_or_fail<E, F>(self, descriptor: FailureDescriptor<E, F>) -> Result<T, E>
    where
        E: From<UnwrapError> + Display,
        F: FnOnce() -> Result<(), E>,
    {
        UnwrapDecision::global().resolve(self, descriptor, SourceLocation::caller())
    }

    #[track_caller]
    fn unwrap_or_fail_with<E, F>(
        self,
        descriptor: impl FnOnce() -> FailureDescriptor<E, F>,
    ) -> Result<T, E>
    where
        E: From<UnwrapError> + Display,
        F: FnOnce() -> Result<(), E>,
    {
        UnwrapDecision::global().resolve_with(self, descriptor, SourceLocation::caller())
    }

    #[track_caller]
    fn unwrap_or_reason(self, reasoning: &'static str) -> Result<T, UnwrapError> {
        UnwrapDecision::global().resolve(
            self,
            FailureDescriptor::message(reasoning),
            SourceLocation::caller(),
        )
    }

    #[track_caller]
    fn unwrap_or_error<E>(self, error: E) -> Result<T, E>
    where
        E: From<UnwrapError> + Display,
    {
        UnwrapDecision::global().resolve(
            self,
            FailureDescriptor::error(error),
            SourceLocation::caller(),
        )
    }

    #[track_caller]
    fn unwrap_or_raise<E, F>(self, producer: F) -> Result<T, E>
    where
        E: From<UnwrapError> + Display,
        F: FnOnce() -> Result<(), E>,
    {
        UnwrapDecision::global().resolve(
            self,
            FailureDescriptor::producer(producer),
            SourceLocation::caller(),
        )
    }

    #[track_caller]
    fn unwrap_or_fallback(self, fallback: impl FnOnce() -> T) -> T
    where
        T: Debug,
    {
        UnwrapDecision::global().resolve_with_fallback(self, fallback, SourceLocation::caller())
    }

    #[track_caller]
    fn force_unwrap(self, reasoning: &'static str) -> T {
        UnwrapDecision::force(self, || reasoning, SourceLocation::caller())
    }
}

pub trait OptionTryUnwrap<T> {
    /// # Errors
    /// An [`UnwrapError`], wrapped in [`anyhow::Error`], when `self` is `None`
    /// in production.
    fn try_unwrap(self) -> Result<T>;
}

impl<T> OptionTryUnwrap<T> for Option<T> {
    #[track_caller]
    fn try_unwrap(self) -> Result<T> {
        UnwrapDecision::global().resolve(
            self,
            FailureDescriptor::message(DEFAULT_REASONING),
            SourceLocation::caller(),
        )
    }
}
