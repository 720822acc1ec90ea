//! Platform abstraction trait definitions.

use std::fmt::Debug;

use crate::{Result, Timestamp};

/// Provides process time readings.
///
/// This trait abstracts the platform-specific process time accounting
/// facilities, allowing for both real implementations (using system calls)
/// and fake implementations (for testing).
pub(crate) trait ProcessTimeSource: Debug + Send + Sync + 'static {
    /// Samples the user-mode processor time consumed by the calling process
    /// since it started.
    fn sample(&self) -> Result<Timestamp>;
}
