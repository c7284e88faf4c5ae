//! Tracing bridge
//!
//! Installs a `tracing` subscriber that renders events in the same one-line
//! format as the logging macros, so library code that emits `tracing` events
//! lands on stdout next to `dnis::info!` output:
//!
//! ```text
//! [INFO]\t| src/server.rs:12 my_app::server \t| listening port=8080
//! ```
//!
//! `tracing` metadata carries no function name; the module path stands in.
//! Every level passes through, there is no filter.

use std::fmt;
use std::io;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

use crate::config::LoggingConfig;
use crate::errors::{DiagnosticsError, Result};
use crate::logging::{CallSite, FIELD_SEPARATOR, Severity, label_for};

/// `tracing_subscriber` event format producing diagnostics lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosticsFormat;

impl<S, N> FormatEvent<S, N> for DiagnosticsFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let site = CallSite::new(
            meta.file().unwrap_or("<unknown>"),
            meta.line().unwrap_or(0),
            meta.module_path().unwrap_or_else(|| meta.target()),
        );

        write!(
            writer,
            "{}{sep}{} {sep}",
            label_for(Severity::from(*meta.level())),
            site,
            sep = FIELD_SEPARATOR
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Build the bridge subscriber over any writer factory.
pub fn build_subscriber<W>(make_writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .event_format(DiagnosticsFormat)
        .with_writer(make_writer)
        .with_max_level(Level::TRACE)
        .finish()
}

/// Initialize the tracing bridge based on configuration
///
/// **Note**: this sets the global default subscriber and should be called
/// once during startup. A second call returns `LoggingInit`.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    if !config.bridge_tracing {
        return Ok(());
    }

    tracing::subscriber::set_global_default(build_subscriber(io::stdout)).map_err(|e| {
        DiagnosticsError::logging_init(format!("Failed to set global tracing subscriber: {}", e))
    })
}
