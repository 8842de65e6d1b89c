//! Password generation.

use std::num::NonZeroU32;

use super::charset::Alphabet;
use crate::rand::{EntropySource, OsEntropy, Sampler};
use crate::{Error, Result};

/// Generate a password of `length` characters drawn uniformly, with
/// replacement, from `alphabet` using the OS CSPRNG.
///
/// A zero length always yields an empty password, even for an empty alphabet.
pub fn generate(length: usize, alphabet: &Alphabet) -> Result<String> {
    generate_with(length, alphabet, OsEntropy)
}

/// Same as [`generate`], drawing from the given entropy source.
pub fn generate_with<E: EntropySource>(
    length: usize,
    alphabet: &Alphabet,
    source: E,
) -> Result<String> {
    if length == 0 {
        return Ok(String::new());
    }
    let bound = u32::try_from(alphabet.len())
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(Error::EmptyAlphabet)?;

    let chars = alphabet.chars();
    let mut sampler = Sampler::new(source);
    let mut password = String::with_capacity(length);
    for _ in 0..length {
        let idx = sampler.below(bound)? as usize;
        password.push(chars[idx]);
    }
    Ok(password)
}
