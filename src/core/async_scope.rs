//! Timing for async work
//!
//! The scope of an async timer is the awaited future: the clock starts when
//! the returned future is first polled and the report is written when the
//! inner future completes or the whole thing is dropped.

use std::future::Future;
use std::io::{self, Write};

use super::options::TimerOptions;
use super::ScopedTimer;

/// Await `future` and print how long it took to stdout
pub async fn timed_async<F: Future>(options: &TimerOptions, future: F) -> F::Output {
    timed_async_to(options, io::stdout(), future).await
}

/// Like [`timed_async`], reporting to `sink`
pub async fn timed_async_to<W: Write, F: Future>(
    options: &TimerOptions,
    sink: W,
    future: F,
) -> F::Output {
    let _timer = ScopedTimer::with_sink(options, sink);
    future.await
}
