/// Number of microseconds in one second.
const MICROSECONDS_PER_SECOND: u32 = 1_000_000;

/// An exact process time reading, as whole seconds plus whole microseconds.
///
/// Represents the user-mode processor time the calling process had consumed at
/// the moment the reading was taken. Readings from the same process are
/// directly comparable and monotonically non-decreasing; process time never
/// goes backward.
///
/// The reading is stored as exact integers. Floating point enters only when
/// two readings are turned into a duration via [`duration_between`], so no
/// precision is lost by holding a reading for an arbitrarily long time.
///
/// # Examples
///
/// ```
/// use cpu_stopwatch::Timestamp;
///
/// let reading = Timestamp::new(3, 250_000);
///
/// assert_eq!(reading.seconds(), 3);
/// assert_eq!(reading.subsec_micros(), 250_000);
/// assert_eq!(reading.as_micros(), 3_250_000);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp {
    seconds: u64,
    microseconds: u32,
}

impl Timestamp {
    /// The zero reading.
    ///
    /// This is the reading of a process that has consumed no processor time.
    /// It also stands in for a reading that could not be taken; see
    /// [`Stopwatch`][crate::Stopwatch].
    pub const ZERO: Self = Self {
        seconds: 0,
        microseconds: 0,
    };

    /// Creates a reading from whole seconds plus whole microseconds.
    ///
    /// # Panics
    ///
    /// Panics if `microseconds` is one second or more; the sub-second part
    /// must stay below 1 000 000.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu_stopwatch::Timestamp;
    ///
    /// let reading = Timestamp::new(1, 500_000);
    /// assert_eq!(reading.as_micros(), 1_500_000);
    /// ```
    #[must_use]
    pub fn new(seconds: u64, microseconds: u32) -> Self {
        assert!(
            microseconds < MICROSECONDS_PER_SECOND,
            "microseconds must remain below one second"
        );

        Self {
            seconds,
            microseconds,
        }
    }

    /// The whole-seconds part of the reading.
    #[must_use]
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// The sub-second part of the reading, in microseconds.
    ///
    /// Always below 1 000 000.
    #[must_use]
    pub fn subsec_micros(&self) -> u32 {
        self.microseconds
    }

    /// The entire reading as a single microsecond count.
    #[must_use]
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "u64 seconds scaled to microseconds cannot reach the u128 range"
    )]
    pub fn as_micros(&self) -> u128 {
        u128::from(self.seconds) * u128::from(MICROSECONDS_PER_SECOND)
            + u128::from(self.microseconds)
    }
}

/// Seconds between two process time readings, as a floating-point value.
///
/// Computes `end - start`. The result is negative when `end` is the earlier
/// reading; the function is antisymmetric in its arguments.
///
/// The subtraction happens on the exact integer microsecond counts and only
/// the final scaling to seconds is floating-point.
///
/// # Examples
///
/// ```
/// use cpu_stopwatch::{Timestamp, duration_between};
///
/// let start = Timestamp::new(1, 250_000);
/// let end = Timestamp::new(2, 0);
///
/// let seconds = duration_between(start, end);
/// assert!((seconds - 0.75).abs() < 1e-9);
///
/// let negated = duration_between(end, start);
/// assert!((negated + 0.75).abs() < 1e-9);
/// ```
#[must_use]
#[expect(
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::arithmetic_side_effects,
    reason = "process time readings are vastly below both the i128 range and the exact-integer range of f64"
)]
pub fn duration_between(start: Timestamp, end: Timestamp) -> f64 {
    let delta_microseconds = end.as_micros() as i128 - start.as_micros() as i128;

    delta_microseconds as f64 / f64::from(MICROSECONDS_PER_SECOND)
}
