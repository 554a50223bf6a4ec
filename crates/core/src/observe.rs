//! Observability collaborator injected into the pipeline stages.
//!
//! Stages report coarse events (a section synthesized, a fallback pool hit,
//! a style map resolved) through an explicitly passed [`Recorder`] rather
//! than any process-wide state.

/// Receives engine events with structured fields.
pub trait Recorder {
    fn record(&self, event: &str, fields: &[(&str, &str)]);
}

/// Forwards events to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRecorder;

impl Recorder for LogRecorder {
    fn record(&self, event: &str, fields: &[(&str, &str)]) {
        if log::log_enabled!(log::Level::Debug) {
            let rendered: Vec<String> = fields.iter().map(|(k, v)| format!("{k}={v}")).collect();
            log::debug!(target: "sitewright", "{event} {}", rendered.join(" "));
        }
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRecorder;

impl Recorder for NullRecorder {
    fn record(&self, _event: &str, _fields: &[(&str, &str)]) {}
}
