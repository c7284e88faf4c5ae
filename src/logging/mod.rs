//! Leveled logging with call-site tags
//!
//! - `level`: the closed [`Severity`] set
//! - `site`: [`CallSite`] descriptors and the capture macros
//! - `format`: label mapping and line rendering
//! - `logger`: the stdout writer behind `debug!`/`info!`/`warning!`/`error!`

pub mod format;
mod level;
mod logger;
mod macros;
pub mod site;

pub use format::{FIELD_SEPARATOR, label_for, render_line, write_line};
pub use level::Severity;
pub use logger::{log, log_to};
pub use site::CallSite;
