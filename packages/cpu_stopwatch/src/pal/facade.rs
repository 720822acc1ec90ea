//! Platform facade for switching between real and fake implementations.

#[cfg(test)]
use crate::pal::FakeTimeSource;
use crate::pal::{BuildTargetTimeSource, ProcessTimeSource};
use crate::{Result, Timestamp};

/// Facade that allows switching between real and fake process time sources.
///
/// This enum provides a unified interface to either the real source
/// (using actual system calls) or a fake source (for testing).
#[derive(Clone, Debug)]
pub(crate) enum TimeSourceFacade {
    /// Real source reading from the operating system.
    Real(BuildTargetTimeSource),

    /// Fake source for testing.
    #[cfg(test)]
    Fake(FakeTimeSource),
}

impl TimeSourceFacade {
    /// Creates a new facade using the real source.
    pub(crate) fn real() -> Self {
        Self::Real(BuildTargetTimeSource)
    }

    /// Creates a new facade using a fake source.
    #[cfg(test)]
    pub(crate) fn fake(source: FakeTimeSource) -> Self {
        Self::Fake(source)
    }
}

impl ProcessTimeSource for TimeSourceFacade {
    fn sample(&self) -> Result<Timestamp> {
        match self {
            Self::Real(source) => source.sample(),
            #[cfg(test)]
            Self::Fake(source) => source.sample(),
        }
    }
}
