//! Scoped wall-clock timing
//!
//! Measures how long a block of work takes and prints one aligned line when
//! the block is left:
//!
//! ```text
//! load data                elapsed Δ1.2345s
//! ```
//!
//! The line is written on every exit path, including errors and panics, and
//! the work's own result is passed through untouched.

pub mod core;
pub mod error;
pub mod stats;
pub mod utils;

pub use crate::core::async_scope::{timed_async, timed_async_to};
pub use crate::core::options::{TimerOptions, DEFAULT_WIDTH};
pub use crate::core::{timed, timed_to, timed_with, ScopedTimer};
pub use error::OptionsError;
pub use stats::timing_measurement::{ELAPSED_MARKER, MAX_WIDTH};
pub use utils::logging::init_logging;
