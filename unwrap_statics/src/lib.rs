//! Non-optional construction of values from literals that should never fail
//! to parse, using the same abort-or-recover rules as `unwrap_core`.

pub mod errors;
pub mod patterns;
pub mod urls;

pub use errors::StaticValueError;
pub use patterns::{static_regex, try_static_regex, try_static_regex_in};
pub use urls::{static_url, try_static_url, try_static_url_in};
