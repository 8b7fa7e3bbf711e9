pub mod log;

pub use log::{GitLog, LogFile, LogOutput, LogSource, TextLog, DEFAULT_MAX_COUNT, LOG_FORMAT};
