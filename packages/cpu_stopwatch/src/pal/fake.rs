//! Fake process time source for testing.

use std::io;
use std::sync::{Arc, Mutex};

use crate::pal::ProcessTimeSource;
use crate::{Error, Result, Timestamp};

/// Internal state for the fake source that can be shared between clones.
#[derive(Debug)]
struct FakeTimeSourceState {
    process_time: Timestamp,
    fail_sampling: bool,
}

/// Fake implementation of the process time source for testing.
///
/// This implementation allows tests to control the readings instead of relying
/// on actual system calls. Multiple clones of the same `FakeTimeSource` share
/// the same underlying state, allowing tests to modify the reading after the
/// source has been handed to a stopwatch, to simulate process time advancing.
#[derive(Clone, Debug)]
pub(crate) struct FakeTimeSource {
    state: Arc<Mutex<FakeTimeSourceState>>,
}

impl FakeTimeSource {
    /// Creates a new fake source with a zero reading.
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTimeSourceState {
                process_time: Timestamp::ZERO,
                fail_sampling: false,
            })),
        }
    }

    /// Sets the reading returned by future samples.
    ///
    /// This affects all clones of this source, allowing tests to simulate
    /// process time advancing during a measurement.
    pub(crate) fn set_process_time(&self, time: Timestamp) {
        self.state
            .lock()
            .expect("FakeTimeSource state lock should not be poisoned")
            .process_time = time;
    }

    /// Makes future samples fail with an operating system error, or stops
    /// doing so.
    ///
    /// This affects all clones of this source.
    pub(crate) fn set_fail_sampling(&self, fail: bool) {
        self.state
            .lock()
            .expect("FakeTimeSource state lock should not be poisoned")
            .fail_sampling = fail;
    }
}

impl ProcessTimeSource for FakeTimeSource {
    fn sample(&self) -> Result<Timestamp> {
        let state = self
            .state
            .lock()
            .expect("FakeTimeSource state lock should not be poisoned");

        if state.fail_sampling {
            return Err(Error::SampleFailed {
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            });
        }

        Ok(state.process_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializes_with_zero_reading() {
        let source = FakeTimeSource::new();

        assert_eq!(source.sample().unwrap(), Timestamp::ZERO);
    }

    #[test]
    fn returns_the_set_reading() {
        let source = FakeTimeSource::new();
        source.set_process_time(Timestamp::new(0, 150_000));

        assert_eq!(source.sample().unwrap(), Timestamp::new(0, 150_000));
    }

    #[test]
    fn shares_state_between_clones() {
        let source1 = FakeTimeSource::new();
        let source2 = source1.clone();

        // Setting the reading on one clone affects the other.
        source1.set_process_time(Timestamp::new(0, 100_000));
        assert_eq!(source2.sample().unwrap(), Timestamp::new(0, 100_000));
    }

    #[test]
    fn injects_and_clears_failure() {
        let source = FakeTimeSource::new();

        source.set_fail_sampling(true);
        assert!(source.sample().is_err());

        source.set_fail_sampling(false);
        assert!(source.sample().is_ok());
    }
}
