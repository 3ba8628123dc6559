//! Scoped timing
//!
//! A [`ScopedTimer`] captures a monotonic start time when it is created and
//! writes one report line when it is dropped. Because the report lives in
//! `Drop`, the line is written on every exit path of the enclosing scope:
//! normal completion, early return with `?`, and panic unwinding.

pub mod async_scope;
pub mod options;

use std::io::{self, Stdout, Write};

use tracing::{debug, trace, warn};

use crate::stats::timing_measurement::TimingMeasurement;
use options::TimerOptions;

// ============================================================================
// GUARD
// ============================================================================

/// Reports the elapsed time of its own lifetime when dropped
///
/// ```no_run
/// use timed_scope::ScopedTimer;
///
/// {
///     let _timer = ScopedTimer::start("load data", 25);
///     // work
/// }
/// // prints: load data                elapsed Δ0.0012s
/// ```
#[must_use = "the timer reports when dropped; bind it to a named variable such as `_timer`"]
pub struct ScopedTimer<W: Write = Stdout> {
    measurement: TimingMeasurement,
    sink: W,
}

impl ScopedTimer<Stdout> {
    /// Start a timer that reports to stdout
    pub fn start(label: impl Into<String>, width: usize) -> Self {
        Self::with_sink(&TimerOptions::new(label, width), io::stdout())
    }

    /// Start a timer that reports to stdout using `options`
    pub fn with_options(options: &TimerOptions) -> Self {
        Self::with_sink(options, io::stdout())
    }
}

impl<W: Write> ScopedTimer<W> {
    /// Start a timer that reports to `sink` instead of stdout
    pub fn with_sink(options: &TimerOptions, sink: W) -> Self {
        trace!(label = %options.label, "timed scope started");
        Self {
            measurement: TimingMeasurement::begin(options.label.clone(), options.width),
            sink,
        }
    }
}

impl<W: Write> Drop for ScopedTimer<W> {
    fn drop(&mut self) {
        let elapsed = self.measurement.finish();
        let line = self.measurement.report_line();
        debug!(
            label = self.measurement.label(),
            elapsed_secs = elapsed.as_secs_f64(),
            "timed scope finished"
        );

        // Drop cannot propagate, and the timed work's own outcome must win
        let written = writeln!(self.sink, "{line}").and_then(|()| self.sink.flush());
        if let Err(e) = written {
            warn!(error = %e, "failed to write timing report");
        }
    }
}

// ============================================================================
// CLOSURE HELPERS
// ============================================================================

/// Run `f`, then print how long it took to stdout. Returns `f`'s value unchanged.
pub fn timed<T>(label: &str, width: usize, f: impl FnOnce() -> T) -> T {
    timed_with(&TimerOptions::new(label, width), f)
}

/// Like [`timed`], taking prepared options
pub fn timed_with<T>(options: &TimerOptions, f: impl FnOnce() -> T) -> T {
    timed_to(options, io::stdout(), f)
}

/// Like [`timed_with`], reporting to `sink`
pub fn timed_to<W: Write, T>(options: &TimerOptions, sink: W, f: impl FnOnce() -> T) -> T {
    let _timer = ScopedTimer::with_sink(options, sink);
    f()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};
    use std::time::Duration;

    fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8(buf.to_vec())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_guard_reports_once_on_drop() {
        let mut buf = Vec::new();
        {
            let _timer = ScopedTimer::with_sink(&TimerOptions::new("phase-one", 10), &mut buf);
        }
        let out = lines(&buf);
        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with("phase-one elapsed \u{0394}0.00"), "{}", out[0]);
        assert!(out[0].ends_with('s'));
    }

    #[test]
    fn test_explicit_drop_reports() {
        let mut buf = Vec::new();
        let timer = ScopedTimer::with_sink(&TimerOptions::default(), &mut buf);
        drop(timer);
        assert_eq!(lines(&buf).len(), 1);
    }

    #[test]
    fn test_timed_to_returns_value() {
        let mut buf = Vec::new();
        let v = timed_to(&TimerOptions::labeled("sum"), &mut buf, || (1..=4).sum::<i32>());
        assert_eq!(v, 10);
        assert_eq!(lines(&buf).len(), 1);
    }

    #[test]
    fn test_error_is_returned_unchanged_and_reported() {
        let mut buf = Vec::new();
        let res: Result<(), io::Error> = timed_to(&TimerOptions::labeled("fail"), &mut buf, || {
            Err(io::Error::new(io::ErrorKind::NotFound, "missing input"))
        });
        let err = res.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(err.to_string(), "missing input");
        assert_eq!(lines(&buf).len(), 1);
    }

    #[test]
    fn test_reports_while_unwinding() {
        let mut buf = Vec::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            timed_to(&TimerOptions::labeled("boom"), &mut buf, || panic!("work failed"))
        }));
        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"work failed"));
        let out = lines(&buf);
        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with("boom "));
    }

    #[test]
    fn test_boundary_widths_while_unwinding() {
        for width in [0, 1, 4, 70_000] {
            let mut buf = Vec::new();
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                timed_to(&TimerOptions::new("boom", width), &mut buf, || panic!("work failed"))
            }));
            assert!(result.is_err());
            let out = lines(&buf);
            assert_eq!(out.len(), 1, "width {width}");
            assert_eq!(out[0].find("elapsed"), Some(width.max(4)), "width {width}");
        }
    }

    #[test]
    fn test_elapsed_covers_the_work() {
        let mut buf = Vec::new();
        timed_to(&TimerOptions::new("", 25), &mut buf, || {
            std::thread::sleep(Duration::from_millis(100))
        });
        let out = lines(&buf);
        let secs: f64 = out[0]
            .trim_start()
            .strip_prefix("elapsed \u{0394}")
            .and_then(|s| s.strip_suffix('s'))
            .unwrap()
            .parse()
            .unwrap();
        assert!(secs >= 0.1, "{secs}");
        assert!(out[0].starts_with(&" ".repeat(25)));
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_does_not_disturb_work() {
        let v = timed_to(&TimerOptions::default(), BrokenSink, || 7);
        assert_eq!(v, 7);
    }
}
