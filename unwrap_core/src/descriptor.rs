use std::borrow::Cow;

use crate::errors::UnwrapError;

/// Describes what an absent value means, and so which error gets reported.
///
/// `F` is the producer type and defaults to a plain function pointer, so the
/// `Message` and `Error` constructors need no annotations.
pub enum FailureDescriptor<E = UnwrapError, F = fn() -> Result<(), E>> {
    /// Why absence should never happen. Becomes an [`UnwrapError`].
    Message(Cow<'static, str>),
    /// Reported exactly as given.
    Error(E),
    /// Run only once absence is detected. May return an error, or end the
    /// process itself and never return.
    ///
    /// Returning `Ok(())` means the producer had nothing to report, in which
    /// case a generic [`UnwrapError`] is used.
    Producer(F),
}

impl<E> FailureDescriptor<E> {
    pub fn message(reasoning: impl Into<Cow<'static, str>>) -> Self {
        Self::Message(reasoning.into())
    }

    pub fn error(error: E) -> Self {
        Self::Error(error)
    }
}

impl<E, F> FailureDescriptor<E, F>
where
    F: FnOnce() -> Result<(), E>,
{
    pub fn producer(producer: F) -> Self {
        Self::Producer(producer)
    }
}

impl<E> From<&'static str> for FailureDescriptor<E> {
    fn from(reasoning: &'static str) -> Self {
        Self::Message(Cow::Borrowed(reasoning))
    }
}

impl<E> From<String> for FailureDescriptor<E> {
    fn from(reasoning: String) -> Self {
        Self::Message(Cow::Owned(reasoning))
    }
}

impl<E: std::fmt::Debug, F> std::fmt::Debug for FailureDescriptor<E, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(reasoning) => f.debug_tuple("Message").field(reasoning).finish(),
            Self::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}
