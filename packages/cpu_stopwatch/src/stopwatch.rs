use crate::pal::{ProcessTimeSource, TimeSourceFacade};
use crate::{Timestamp, duration_between};

/// Measures processor time consumed by the calling process between explicit
/// points in its execution.
///
/// The readings behind every operation are user-mode process time, not
/// wall-clock time: only time the process spends executing its own
/// instructions accumulates, while sleeping or waiting is free. All durations
/// are returned in seconds, as floating-point values.
///
/// A stopwatch starts out idle. [`start()`][Self::start] begins a measurement
/// cycle, [`lap()`][Self::lap] reports the time since the previous lap point
/// without ending the cycle, [`elapsed()`][Self::elapsed] peeks at the running
/// total without disturbing anything, and [`stop()`][Self::stop] ends the
/// cycle and reports its whole duration. Every duration query on an idle
/// stopwatch returns `0.0`.
///
/// Instances are independent; create as many as needed. Mutating operations
/// take `&mut self`, so concurrent use of a single instance is ruled out at
/// compile time rather than guarded by locks.
///
/// If the operating system rejects a process time query, the stopwatch records
/// the reading as [`Timestamp::ZERO`] instead of failing, so durations derived
/// from it are zero-based rather than errors. Use
/// [`sample_process_time()`][crate::sample_process_time] to observe such
/// failures directly.
///
/// # Examples
///
/// ```
/// use cpu_stopwatch::Stopwatch;
///
/// let mut stopwatch = Stopwatch::new();
/// stopwatch.start();
///
/// // Perform some processor-intensive work.
/// let mut sum = 0_u64;
/// for i in 0..100_000 {
///     sum = sum.wrapping_add(i);
/// }
/// std::hint::black_box(sum);
///
/// let seconds = stopwatch.stop();
/// assert!(seconds >= 0.0);
/// ```
#[derive(Debug)]
pub struct Stopwatch {
    state: State,
    start_time: Timestamp,
    lap_time: Timestamp,
    stop_time: Timestamp,
    time_source: TimeSourceFacade,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    Idle,
    Running,
}

impl Stopwatch {
    /// Creates a new stopwatch in the idle state.
    ///
    /// No process time is sampled until [`start()`][Self::start] is called.
    #[must_use]
    pub fn new() -> Self {
        Self::with_time_source(TimeSourceFacade::real())
    }

    pub(crate) fn with_time_source(time_source: TimeSourceFacade) -> Self {
        Self {
            state: State::Idle,
            start_time: Timestamp::ZERO,
            lap_time: Timestamp::ZERO,
            stop_time: Timestamp::ZERO,
            time_source,
        }
    }

    /// Whether a measurement cycle is in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    /// Begins a measurement cycle.
    ///
    /// Valid in any state. Starting an already running stopwatch begins a new
    /// cycle, silently discarding the one in progress.
    pub fn start(&mut self) {
        let now = self.sample_or_zero();

        self.state = State::Running;
        self.start_time = now;
        self.lap_time = now;
    }

    /// Reports the seconds of process time consumed since the previous lap
    /// point and makes the current moment the new lap point.
    ///
    /// The first lap of a cycle measures from [`start()`][Self::start].
    /// Lapping does not end the cycle; [`stop()`][Self::stop] still reports
    /// the whole cycle regardless of any laps taken.
    ///
    /// Returns `0.0` when idle, without touching any state.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu_stopwatch::Stopwatch;
    ///
    /// let mut stopwatch = Stopwatch::new();
    /// stopwatch.start();
    ///
    /// // First piece of work...
    /// let first = stopwatch.lap();
    ///
    /// // Second piece of work...
    /// let second = stopwatch.lap();
    ///
    /// assert!(first >= 0.0);
    /// assert!(second >= 0.0);
    /// ```
    pub fn lap(&mut self) -> f64 {
        match self.state {
            State::Idle => 0.0,
            State::Running => {
                let now = self.sample_or_zero();
                let seconds = duration_between(self.lap_time, now);
                self.lap_time = now;
                seconds
            }
        }
    }

    /// Ends the measurement cycle and reports its whole duration in seconds
    /// of process time.
    ///
    /// Returns `0.0` when idle, without touching any state. Stopping does not
    /// rewind anything; a later [`start()`][Self::start] begins a fresh cycle
    /// that measures only its own interval.
    pub fn stop(&mut self) -> f64 {
        match self.state {
            State::Idle => 0.0,
            State::Running => {
                self.stop_time = self.sample_or_zero();
                self.state = State::Idle;
                duration_between(self.start_time, self.stop_time)
            }
        }
    }

    /// Reports the seconds of process time consumed since
    /// [`start()`][Self::start], without disturbing the cycle.
    ///
    /// This is a non-destructive peek: lap points and the cycle itself remain
    /// exactly as they were, so subsequent [`lap()`][Self::lap] and
    /// [`stop()`][Self::stop] results are unaffected.
    ///
    /// Returns `0.0` when idle.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        match self.state {
            State::Idle => 0.0,
            State::Running => duration_between(self.start_time, self.sample_or_zero()),
        }
    }

    /// Takes a reading, degrading to the zero reading if the operating system
    /// rejects the query.
    fn sample_or_zero(&self) -> Timestamp {
        self.time_source.sample().unwrap_or(Timestamp::ZERO)
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::pal::FakeTimeSource;

    fn create_test_stopwatch() -> (Stopwatch, FakeTimeSource) {
        let fake_source = FakeTimeSource::new();
        let stopwatch = Stopwatch::with_time_source(TimeSourceFacade::fake(fake_source.clone()));
        (stopwatch, fake_source)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, actual {actual}"
        );
    }

    #[test]
    fn new_stopwatch_is_idle() {
        let (stopwatch, _source) = create_test_stopwatch();

        assert!(!stopwatch.is_running());
    }

    #[test]
    fn idle_stopwatch_reports_zero() {
        let (mut stopwatch, _source) = create_test_stopwatch();

        assert_close(stopwatch.elapsed(), 0.0);
        assert_close(stopwatch.lap(), 0.0);
        assert_close(stopwatch.stop(), 0.0);
    }

    #[test]
    fn idle_operations_ignore_the_source() {
        let (mut stopwatch, source) = create_test_stopwatch();

        // The source has advanced, but an idle stopwatch has nothing to
        // measure against it.
        source.set_process_time(Timestamp::new(5, 0));

        assert_close(stopwatch.elapsed(), 0.0);
        assert_close(stopwatch.lap(), 0.0);
        assert_close(stopwatch.stop(), 0.0);
        assert!(!stopwatch.is_running());
    }

    #[test]
    fn start_transitions_to_running() {
        let (mut stopwatch, _source) = create_test_stopwatch();

        stopwatch.start();

        assert!(stopwatch.is_running());
    }

    #[test]
    fn lap_measures_since_previous_lap_point() {
        let (mut stopwatch, source) = create_test_stopwatch();

        source.set_process_time(Timestamp::new(10, 0));
        stopwatch.start();

        source.set_process_time(Timestamp::new(10, 250_000));
        assert_close(stopwatch.lap(), 0.25);

        source.set_process_time(Timestamp::new(10, 750_000));
        assert_close(stopwatch.lap(), 0.5);
    }

    #[test]
    fn lap_with_unchanged_reading_is_zero() {
        let (mut stopwatch, source) = create_test_stopwatch();

        source.set_process_time(Timestamp::new(5, 0));
        stopwatch.start();

        source.set_process_time(Timestamp::new(5, 100_000));
        assert_close(stopwatch.lap(), 0.1);

        // The lap point was just moved; no further time has been consumed.
        assert_close(stopwatch.lap(), 0.0);
    }

    #[test]
    fn stop_measures_whole_cycle_regardless_of_laps() {
        let (mut stopwatch, source) = create_test_stopwatch();

        source.set_process_time(Timestamp::new(2, 0));
        stopwatch.start();

        source.set_process_time(Timestamp::new(2, 500_000));
        assert_close(stopwatch.lap(), 0.5);

        source.set_process_time(Timestamp::new(3, 500_000));
        assert_close(stopwatch.stop(), 1.5);
        assert!(!stopwatch.is_running());
    }

    #[test]
    fn second_stop_reports_zero() {
        let (mut stopwatch, source) = create_test_stopwatch();

        source.set_process_time(Timestamp::new(1, 0));
        stopwatch.start();

        source.set_process_time(Timestamp::new(1, 50_000));
        assert_close(stopwatch.stop(), 0.05);
        assert_close(stopwatch.stop(), 0.0);
    }

    #[test]
    fn elapsed_is_a_non_destructive_peek() {
        let (mut stopwatch, source) = create_test_stopwatch();

        source.set_process_time(Timestamp::new(1, 0));
        stopwatch.start();

        source.set_process_time(Timestamp::new(1, 500_000));
        assert_close(stopwatch.elapsed(), 0.5);
        assert_close(stopwatch.elapsed(), 0.5);

        // The lap point is still the start point.
        assert_close(stopwatch.lap(), 0.5);

        // And the cycle still measures from its start.
        source.set_process_time(Timestamp::new(2, 0));
        assert_close(stopwatch.stop(), 1.0);
    }

    #[test]
    fn restart_discards_the_previous_cycle() {
        let (mut stopwatch, source) = create_test_stopwatch();

        source.set_process_time(Timestamp::new(1, 0));
        stopwatch.start();

        source.set_process_time(Timestamp::new(2, 0));
        assert_close(stopwatch.stop(), 1.0);

        source.set_process_time(Timestamp::new(5, 0));
        stopwatch.start();

        source.set_process_time(Timestamp::new(5, 250_000));
        assert_close(stopwatch.stop(), 0.25);
    }

    #[test]
    fn start_while_running_begins_a_new_cycle() {
        let (mut stopwatch, source) = create_test_stopwatch();

        source.set_process_time(Timestamp::new(1, 0));
        stopwatch.start();

        source.set_process_time(Timestamp::new(3, 0));
        stopwatch.start();

        assert!(stopwatch.is_running());

        source.set_process_time(Timestamp::new(3, 500_000));
        assert_close(stopwatch.stop(), 0.5);
    }

    #[test]
    fn failed_sample_degrades_to_zero_reading() {
        let (mut stopwatch, source) = create_test_stopwatch();

        source.set_fail_sampling(true);
        stopwatch.start();

        assert!(stopwatch.is_running());

        // The failed start was recorded as the zero reading, so the cycle
        // measures from zero once sampling recovers.
        source.set_fail_sampling(false);
        source.set_process_time(Timestamp::new(2, 500_000));
        assert_close(stopwatch.stop(), 2.5);
    }

    #[test]
    fn default_matches_new() {
        let stopwatch = Stopwatch::default();

        assert!(!stopwatch.is_running());
    }

    // The type is safe to hand between threads; one instance still cannot be
    // mutated from two threads at once because mutation requires `&mut self`.
    assert_impl_all!(Stopwatch: Send, Sync);
}
