//! Process time sampling on Unix-family platforms.

use std::io;
use std::mem;

use crate::pal::ProcessTimeSource;
use crate::{Error, Result, Timestamp};

/// Process time source reading from the operating system that the build is
/// targeting, via the resource usage accounting facility.
#[derive(Clone, Debug, Default)]
pub(crate) struct BuildTargetTimeSource;

impl ProcessTimeSource for BuildTargetTimeSource {
    /// Returns the accumulated user-mode time of the calling process.
    ///
    /// Uses `getrusage(RUSAGE_SELF)`, which reports times at microsecond
    /// granularity, matching our reading type exactly. The same call also
    /// fills in kernel-mode time (`ru_stime`); only user-mode time becomes
    /// part of the reading.
    #[cfg_attr(test, mutants::skip)] // The error branch cannot be provoked with real system calls. Intentional.
    #[expect(
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation,
        reason = "rusage times are never negative and the sub-second part stays below one million"
    )]
    fn sample(&self) -> Result<Timestamp> {
        // SAFETY: All-zero is a valid initial value for this type.
        let mut usage: libc::rusage = unsafe { mem::zeroed() };

        // SAFETY: We pass a valid pointer to a live rusage value, no other requirements.
        let result = unsafe { libc::getrusage(libc::RUSAGE_SELF, &raw mut usage) };

        if result != 0 {
            return Err(Error::SampleFailed {
                source: io::Error::last_os_error(),
            });
        }

        Ok(Timestamp::new(
            usage.ru_utime.tv_sec as u64,
            usage.ru_utime.tv_usec as u32,
        ))
    }
}
