use strum::{EnumIter, EnumString, IntoStaticStr};

/// Severity attached to a log line.
///
/// Purely a label selector: there is no threshold and no ordering between
/// levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[repr(u8)]
pub enum Severity {
    #[default]
    Unknown = 0,
    Debug = 1,
    Info = 2,
    Warning = 3,
    Error = 4,
}

impl Severity {
    /// Map a raw discriminant back to a level.
    ///
    /// Anything that is not one of the four named levels is `Unknown`.
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Severity::Debug,
            2 => Severity::Info,
            3 => Severity::Warning,
            4 => Severity::Error,
            _ => Severity::Unknown,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Decorated label, see [`label_for`](super::format::label_for).
    pub const fn label(self) -> &'static str {
        super::format::label_for(self)
    }

    /// Lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl From<u8> for Severity {
    fn from(raw: u8) -> Self {
        Severity::from_raw(raw)
    }
}

// TRACE has no counterpart among the named levels.
impl From<tracing::Level> for Severity {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::ERROR => Severity::Error,
            tracing::Level::WARN => Severity::Warning,
            tracing::Level::INFO => Severity::Info,
            tracing::Level::DEBUG => Severity::Debug,
            _ => Severity::Unknown,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
