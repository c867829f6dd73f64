//! Unwrapping for values that must be present: abort at the defect while
//! developing, hand back a recoverable error in production.
//!
//! ```no_run
//! use unwrap_guard::prelude::*;
//!
//! fn port(config: Option<u16>) -> anyhow::Result<u16> {
//!     Ok(config.unwrap_or_reason("port is filled in by defaults")?)
//! }
//! ```

pub mod startup;

pub use unwrap_core::{
    force_unwrap, resolve, resolve_with_fallback, BuildMode, FailureDescriptor, OptionExt,
    OptionTryUnwrap, SourceLocation, UnwrapDecision, UnwrapError, UnwrapErrorExt,
    UnwrapErrorKind,
};
pub use unwrap_statics::{
    static_regex, static_url, try_static_regex, try_static_url, StaticValueError,
};
pub use unwrap_tasks::{logging, LogSink};

pub mod prelude {
    pub use unwrap_core::{
        FailureDescriptor, OptionExt as _, OptionTryUnwrap as _, UnwrapErrorExt as _,
    };
    pub use unwrap_statics::{static_regex, static_url};
}
