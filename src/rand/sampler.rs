//! Unbiased bounded sampling over an entropy source.

use std::num::NonZeroU32;

use zeroize::Zeroize;

use super::EntropySource;
use crate::Result;

const BLOCK_SIZE: usize = 256;

/// Buffered reader of 32-bit words from an [`EntropySource`].
///
/// The buffer is zeroized on drop so consumed randomness does not outlive
/// the generation call.
pub struct Sampler<E: EntropySource> {
    source: E,
    block: [u8; BLOCK_SIZE],
    pos: usize,
}

impl<E: EntropySource> Sampler<E> {
    pub fn new(source: E) -> Self {
        Self {
            source,
            block: [0; BLOCK_SIZE],
            pos: BLOCK_SIZE,
        }
    }

    /// Next uniformly distributed 32-bit word.
    #[inline]
    pub fn next_u32(&mut self) -> Result<u32> {
        if self.pos + 4 > BLOCK_SIZE {
            self.source.fill(&mut self.block)?;
            self.pos = 0;
        }
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.block[self.pos..self.pos + 4]);
        self.block[self.pos..self.pos + 4].zeroize();
        self.pos += 4;
        Ok(u32::from_le_bytes(word))
    }

    /// Uniform integer in `[0, n)`.
    ///
    /// Words below `2^32 mod n` are rejected so the accepted range is an exact
    /// multiple of `n` and every result has the same probability.
    pub fn below(&mut self, n: NonZeroU32) -> Result<u32> {
        let n = n.get();
        let threshold = n.wrapping_neg() % n;
        loop {
            let x = self.next_u32()?;
            if x >= threshold {
                return Ok(x % n);
            }
        }
    }
}

impl<E: EntropySource> Drop for Sampler<E> {
    fn drop(&mut self) {
        self.block.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::rand::testing::{Broken, Scripted};

    fn nz(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn reads_words_in_order() {
        let mut s = Sampler::new(Scripted::new(&[7, 9, 11]));
        assert_eq!(s.next_u32().unwrap(), 7);
        assert_eq!(s.next_u32().unwrap(), 9);
        assert_eq!(s.next_u32().unwrap(), 11);
        assert_eq!(s.next_u32().unwrap(), 7);
    }

    #[test]
    fn refills_after_block_is_consumed() {
        let words: Vec<u32> = (0..100).collect();
        let mut s = Sampler::new(Scripted::new(&words));
        for expected in 0..100 {
            assert_eq!(s.next_u32().unwrap(), expected);
        }
    }

    #[test]
    fn rejects_words_in_biased_zone() {
        // 2^32 mod 10 == 6, so words below 6 are discarded.
        let mut s = Sampler::new(Scripted::new(&[5, 0, 13, 17]));
        assert_eq!(s.below(nz(10)).unwrap(), 3);
        assert_eq!(s.below(nz(10)).unwrap(), 7);
    }

    #[test]
    fn power_of_two_never_rejects() {
        let mut s = Sampler::new(Scripted::new(&[0, 1, 2, 3]));
        for expected in 0..4 {
            assert_eq!(s.below(nz(64)).unwrap(), expected);
        }
    }

    #[test]
    fn bound_of_one_is_always_zero() {
        let mut s = Sampler::new(Scripted::new(&[u32::MAX, 12345]));
        assert_eq!(s.below(nz(1)).unwrap(), 0);
        assert_eq!(s.below(nz(1)).unwrap(), 0);
    }

    #[test]
    fn top_of_range_is_accepted() {
        let mut s = Sampler::new(Scripted::new(&[u32::MAX]));
        assert_eq!(s.below(nz(10)).unwrap(), u32::MAX % 10);
    }

    #[test]
    fn entropy_failure_propagates() {
        let mut s = Sampler::new(Broken);
        assert!(matches!(s.next_u32(), Err(Error::EntropySource(_))));
        assert!(matches!(s.below(nz(36)), Err(Error::EntropySource(_))));
    }
}
