//! Standalone process time sampling.

use crate::pal::{ProcessTimeSource, TimeSourceFacade};
use crate::{Result, Timestamp};

/// Samples the user-mode processor time consumed by the calling process since
/// it started.
///
/// This is the reading every [`Stopwatch`][crate::Stopwatch] operation is
/// built from, exposed directly for callers that prefer to hold readings
/// themselves and turn pairs of them into durations with
/// [`duration_between`][crate::duration_between].
///
/// Successive readings are non-decreasing; process time never goes backward.
///
/// # Errors
///
/// Returns [`Error::SampleFailed`][crate::Error::SampleFailed] if the
/// operating system rejects the process time query. This does not happen in
/// practice for a live process querying itself.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), cpu_stopwatch::Error> {
/// use cpu_stopwatch::{duration_between, sample_process_time};
///
/// let before = sample_process_time()?;
///
/// // Perform some processor-intensive work.
/// let mut sum = 0_u64;
/// for i in 0..100_000 {
///     sum = sum.wrapping_add(i);
/// }
/// std::hint::black_box(sum);
///
/// let after = sample_process_time()?;
/// assert!(duration_between(before, after) >= 0.0);
/// # Ok(())
/// # }
/// ```
pub fn sample_process_time() -> Result<Timestamp> {
    TimeSourceFacade::real().sample()
}
