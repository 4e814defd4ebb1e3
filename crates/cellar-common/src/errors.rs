use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Failures of the host process: window creation and content loading.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("window creation failed: {0}")]
    WindowCreation(String),

    #[error("failed to load {target}: {reason}")]
    Load { target: String, reason: String },

    #[error("main window not created")]
    NoWindow,

    #[error("display error: {0}")]
    Display(String),
}

/// Failures inside the bridge between host and presentation.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("invalid bridge request: {0}")]
    InvalidRequest(String),

    #[error("No handler registered for '{0}'")]
    UnknownOperation(String),

    #[error("handler failed: {0}")]
    Handler(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CellarError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
