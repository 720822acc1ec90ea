//! Process time sampling on Windows.

use windows::Win32::Foundation::FILETIME;
use windows::Win32::System::Threading::{GetCurrentProcess, GetProcessTimes};

use crate::pal::ProcessTimeSource;
use crate::{Error, Result, Timestamp};

/// Process times are reported in 100-nanosecond ticks on Windows.
const TICKS_PER_SECOND: u64 = 10_000_000;
const TICKS_PER_MICROSECOND: u64 = 10;

/// Process time source reading from the operating system that the build is
/// targeting, synthesized from the process times query.
#[derive(Clone, Debug, Default)]
pub(crate) struct BuildTargetTimeSource;

impl ProcessTimeSource for BuildTargetTimeSource {
    /// Returns the accumulated user-mode time of the calling process.
    ///
    /// Windows has no resource usage accounting call, so the equivalent
    /// reading is synthesized from `GetProcessTimes()`, truncating the
    /// 100-nanosecond ticks to whole microseconds. The same call also fills
    /// in kernel-mode time; only user-mode time becomes part of the reading.
    #[cfg_attr(test, mutants::skip)] // The error branch cannot be provoked with real system calls. Intentional.
    fn sample(&self) -> Result<Timestamp> {
        let mut creation_time = FILETIME::default();
        let mut exit_time = FILETIME::default();
        let mut kernel_time = FILETIME::default();
        let mut user_time = FILETIME::default();

        // SAFETY: The pseudo handle for the current process is always valid
        // and every out-pointer references a live value.
        unsafe {
            GetProcessTimes(
                GetCurrentProcess(),
                &raw mut creation_time,
                &raw mut exit_time,
                &raw mut kernel_time,
                &raw mut user_time,
            )
        }
        .map_err(|source| Error::SampleFailed {
            source: source.into(),
        })?;

        Ok(filetime_to_timestamp(user_time))
    }
}

/// Converts a 100-nanosecond-tick duration into a whole-microsecond reading.
#[expect(
    clippy::integer_division,
    clippy::cast_possible_truncation,
    reason = "whole seconds and whole microseconds are exactly what the reading stores; the sub-second part stays below one million"
)]
fn filetime_to_timestamp(filetime: FILETIME) -> Timestamp {
    let ticks = (u64::from(filetime.dwHighDateTime) << 32) | u64::from(filetime.dwLowDateTime);

    let seconds = ticks / TICKS_PER_SECOND;
    let microseconds = (ticks % TICKS_PER_SECOND) / TICKS_PER_MICROSECOND;

    Timestamp::new(seconds, microseconds as u32)
}
