//! Process time stopwatch: measures processor time consumed by the calling
//! process, not wall-clock time.
//!
//! The readings come from the operating system's process time accounting
//! facility and cover user-mode time only, so a measurement tells you how much
//! work your process actually did, regardless of how long it spent sleeping,
//! blocked, or descheduled.
//!
//! The core functionality includes:
//! - [`Stopwatch`] - start/lap/stop/elapsed measurement over process time
//! - [`Timestamp`] - an exact process time reading
//! - [`sample_process_time`] - the underlying reading, exposed directly
//! - [`duration_between`] - seconds between two readings
//!
//! # Measuring a section of code
//!
//! ```
//! use cpu_stopwatch::Stopwatch;
//!
//! let mut stopwatch = Stopwatch::new();
//! stopwatch.start();
//!
//! // Perform some processor-intensive work.
//! let mut sum = 0_u64;
//! for i in 0..100_000 {
//!     sum = sum.wrapping_add(i);
//! }
//! std::hint::black_box(sum);
//!
//! let seconds = stopwatch.stop();
//! println!("consumed {seconds:.6} seconds of process time");
//! ```
//!
//! # Lap timing
//!
//! While a cycle is running, [`Stopwatch::lap()`] reports the time consumed
//! since the previous lap point without ending the cycle, and
//! [`Stopwatch::elapsed()`] peeks at the running total without disturbing
//! anything:
//!
//! ```
//! use cpu_stopwatch::Stopwatch;
//!
//! let mut stopwatch = Stopwatch::new();
//! stopwatch.start();
//!
//! // First phase of work...
//! let first_phase = stopwatch.lap();
//!
//! // Second phase of work...
//! let second_phase = stopwatch.lap();
//!
//! // The whole cycle is still measured from start().
//! let total = stopwatch.stop();
//! assert!(total >= first_phase + second_phase - 1e-9);
//! ```
//!
//! # Process time versus wall-clock time
//!
//! Time only accumulates while the process executes its own instructions;
//! sleeping is free:
//!
//! ```
//! use std::time::Duration;
//!
//! use cpu_stopwatch::Stopwatch;
//!
//! let mut stopwatch = Stopwatch::new();
//! stopwatch.start();
//!
//! std::thread::sleep(Duration::from_millis(20));
//!
//! // Nearly no process time was consumed while sleeping.
//! let seconds = stopwatch.stop();
//! assert!(seconds < 0.02);
//! ```
//!
//! # Threading
//!
//! Instances are independent and freely movable between threads. Mutating
//! operations take `&mut self`, so a single instance cannot be driven from
//! two threads at once without external synchronization; there are no locks
//! inside.

mod error;
mod pal;
mod sample;
mod stopwatch;
mod timestamp;

pub use error::Error;
pub(crate) use error::Result;
pub use sample::*;
pub use stopwatch::*;
pub use timestamp::*;
