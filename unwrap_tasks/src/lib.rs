pub mod logging;

pub use logging::{LogBuffer, LogSink};
