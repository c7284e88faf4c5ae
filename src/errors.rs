use std::fmt;

/// Errors raised while setting up diagnostics.
///
/// Logging and crash handling themselves never fail observably; only the
/// setup paths (signal registration, configuration, tracing bridge) return
/// these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticsError {
    SignalOperation(String),
    Configuration(String),
    FileOperation(String),
    Serialization(String),
    LoggingInit(String),
    Validation(String),
}

impl DiagnosticsError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticsError::SignalOperation(_) => "D001",
            DiagnosticsError::Configuration(_) => "D002",
            DiagnosticsError::FileOperation(_) => "D003",
            DiagnosticsError::Serialization(_) => "D004",
            DiagnosticsError::LoggingInit(_) => "D005",
            DiagnosticsError::Validation(_) => "D006",
        }
    }

    /// Human readable error category
    pub fn error_type(&self) -> &'static str {
        match self {
            DiagnosticsError::SignalOperation(_) => "Signal Operation Error",
            DiagnosticsError::Configuration(_) => "Configuration Error",
            DiagnosticsError::FileOperation(_) => "File Operation Error",
            DiagnosticsError::Serialization(_) => "Serialization Error",
            DiagnosticsError::LoggingInit(_) => "Logging Initialization Error",
            DiagnosticsError::Validation(_) => "Validation Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DiagnosticsError::SignalOperation(msg) => msg,
            DiagnosticsError::Configuration(msg) => msg,
            DiagnosticsError::FileOperation(msg) => msg,
            DiagnosticsError::Serialization(msg) => msg,
            DiagnosticsError::LoggingInit(msg) => msg,
            DiagnosticsError::Validation(msg) => msg,
        }
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for DiagnosticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for DiagnosticsError {}

impl DiagnosticsError {
    pub fn signal_operation<T: Into<String>>(msg: T) -> Self {
        DiagnosticsError::SignalOperation(msg.into())
    }

    pub fn configuration<T: Into<String>>(msg: T) -> Self {
        DiagnosticsError::Configuration(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        DiagnosticsError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        DiagnosticsError::Serialization(msg.into())
    }

    pub fn logging_init<T: Into<String>>(msg: T) -> Self {
        DiagnosticsError::LoggingInit(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        DiagnosticsError::Validation(msg.into())
    }
}

impl From<std::io::Error> for DiagnosticsError {
    fn from(err: std::io::Error) -> Self {
        DiagnosticsError::FileOperation(err.to_string())
    }
}

impl From<config::ConfigError> for DiagnosticsError {
    fn from(err: config::ConfigError) -> Self {
        DiagnosticsError::Configuration(err.to_string())
    }
}

impl From<toml::ser::Error> for DiagnosticsError {
    fn from(err: toml::ser::Error) -> Self {
        DiagnosticsError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DiagnosticsError>;
