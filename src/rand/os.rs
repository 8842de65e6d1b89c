//! Operating system entropy via `getrandom`.

use super::EntropySource;
use crate::Result;

/// The platform CSPRNG (`getrandom(2)`, `getentropy`, `BCryptGenRandom`, ...).
///
/// Stateless, so every caller effectively gets its own handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    #[inline]
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        getrandom::fill(dest)?;
        Ok(())
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn source_name() -> &'static str {
    "getrandom(2)"
}

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "openbsd"))]
pub fn source_name() -> &'static str {
    "getentropy"
}

#[cfg(windows)]
pub fn source_name() -> &'static str {
    "ProcessPrng"
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "openbsd",
    windows
)))]
pub fn source_name() -> &'static str {
    "OS CSPRNG"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_whole_buffer() {
        // 64 zero bytes from a working CSPRNG has probability 2^-512.
        let mut buf = [0u8; 64];
        OsEntropy.fill(&mut buf).unwrap();
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn empty_fill_is_ok() {
        OsEntropy.fill(&mut []).unwrap();
    }
}
