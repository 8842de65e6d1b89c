//! Random number generation backed by the OS CSPRNG.

mod os;
mod sampler;
pub mod stats;

pub use os::OsEntropy;
pub use sampler::Sampler;

use crate::Result;

// =============================================================================
// Entropy
// =============================================================================

/// A source of cryptographically secure random bytes.
///
/// Implementations must either fill `dest` completely or return an error.
/// A failing source is never retried or replaced by a weaker one.
pub trait EntropySource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    #[inline]
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}

/// Name of the default entropy source, for diagnostics.
pub fn source_name() -> &'static str {
    os::source_name()
}
