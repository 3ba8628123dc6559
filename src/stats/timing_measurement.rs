//! Timing measurement for a single timed scope
//!
//! Holds the label, the alignment width and the two monotonic clock reads of
//! one scope execution, and renders the report line.

use std::time::{Duration, Instant};

/// Literal placed between the padded label and the elapsed seconds.
pub const ELAPSED_MARKER: &str = "elapsed \u{0394}";

/// Widths above this are treated as this many columns.
pub const MAX_WIDTH: usize = 1 << 20;

/// One measurement, alive only for the duration of its scope
#[derive(Debug)]
pub(crate) struct TimingMeasurement {
    label: String,
    width: usize,
    start: Instant,
    stop: Option<Instant>,
}

impl TimingMeasurement {
    /// Start measuring now
    pub(crate) fn begin(label: impl Into<String>, width: usize) -> Self {
        Self {
            label: label.into(),
            width,
            start: Instant::now(),
            stop: None,
        }
    }

    /// Record the stop time. Only the first call takes effect.
    pub(crate) fn finish(&mut self) -> Duration {
        let stop = *self.stop.get_or_insert_with(Instant::now);
        // Instant is monotonic, so this never saturates in practice
        stop.saturating_duration_since(self.start)
    }

    pub(crate) fn label(&self) -> &str {
        &self.label
    }

    /// Report line for a finished measurement, without the trailing newline
    pub(crate) fn report_line(&mut self) -> String {
        let elapsed = self.finish();
        format_report(&self.label, self.width, elapsed)
    }
}

/// `<label padded to width>elapsed Δ<secs with 4 decimals>s`
///
/// Padding is done by hand: `{:<width$}` panics past `u16::MAX` columns,
/// and this runs inside `Drop`.
pub(crate) fn format_report(label: &str, width: usize, elapsed: Duration) -> String {
    let pad = width.min(MAX_WIDTH).saturating_sub(label.chars().count());
    let mut line = String::with_capacity(label.len() + pad + ELAPSED_MARKER.len() + 16);
    line.push_str(label);
    line.extend(std::iter::repeat(' ').take(pad));
    line.push_str(ELAPSED_MARKER);
    line.push_str(&format!("{:.4}s", elapsed.as_secs_f64()));
    line
}
