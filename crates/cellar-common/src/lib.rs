pub mod errors;
pub mod id;
pub mod logging;

pub use errors::{BridgeError, CellarError, ConfigError, HostError, PlatformError};
pub use id::timestamp_id;
pub use logging::{LogJournal, LogLevel, LogRecord, Logger};

pub type Result<T> = std::result::Result<T, CellarError>;
