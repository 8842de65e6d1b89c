//! Character classes and alphabet building.

use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::{Error, Result};

const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8; 26] = &to_ascii_uppercase(LOWERCASE);
const DIGITS: &[u8; 10] = b"0123456789";
const SYMBOLS: &[u8; 27] = b"!@#$%^&*()_+-=[]{}|;':,.<>?";

const fn to_ascii_uppercase<const N: usize>(src: &[u8; N]) -> [u8; N] {
    let mut out = *src;
    let mut i = 0;
    while i < N {
        out[i] = out[i].to_ascii_uppercase();
        i += 1;
    }
    out
}

/// A named group of characters that can be toggled into the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in canonical alphabet order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The fixed character sequence for this class.
    pub fn chars(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Lowercase (a-z)",
            CharacterClass::Uppercase => "Uppercase (A-Z)",
            CharacterClass::Digit => "Digits (0-9)",
            CharacterClass::Symbol => "Symbols (!@#...)",
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

// =============================================================================
// ClassSet
// =============================================================================

/// A set of character classes. Iterates in canonical order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const EMPTY: ClassSet = ClassSet(0);
    pub const ALL: ClassSet = ClassSet(0b1111);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.0 ^= class.bit();
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<CharacterClass> for ClassSet {
    fn extend<I: IntoIterator<Item = CharacterClass>>(&mut self, iter: I) {
        for class in iter {
            self.insert(class);
        }
    }
}

impl<const N: usize> From<[CharacterClass; N]> for ClassSet {
    fn from(classes: [CharacterClass; N]) -> Self {
        classes.into_iter().collect()
    }
}

// =============================================================================
// Alphabet
// =============================================================================

/// Ordered characters eligible for selection in one generation call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

/// Collects characters, keeping the first occurrence of each.
impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        Alphabet(iter.into_iter().filter(|c| seen.insert(*c)).collect())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Build the alphabet for a set of classes, in canonical class order.
pub fn build(classes: ClassSet) -> Result<Alphabet> {
    if classes.is_empty() {
        return Err(Error::NoClassSelected);
    }

    let mut chars: Vec<char> = Vec::with_capacity(size(classes));
    for class in classes.iter() {
        chars.extend(class.chars().iter().map(|&b| b as char));
    }

    debug!(
        "built alphabet of {} chars from {} class(es)",
        chars.len(),
        classes.len()
    );
    Ok(Alphabet(chars))
}

/// Alphabet size for a set of classes, without building it.
pub fn size(classes: ClassSet) -> usize {
    classes.iter().map(|c| c.chars().len()).sum()
}

#[cfg(test)]
mod tests {
    use super::CharacterClass::*;
    use super::*;

    #[test]
    fn class_sizes() {
        assert_eq!(Lowercase.chars().len(), 26);
        assert_eq!(Uppercase.chars().len(), 26);
        assert_eq!(Digit.chars().len(), 10);
        assert_eq!(Symbol.chars().len(), 27);
    }

    #[test]
    fn uppercase_is_derived_from_lowercase() {
        assert_eq!(Uppercase.chars(), b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn fixed_sequences_have_no_duplicates() {
        let all = build(ClassSet::ALL).unwrap();
        let unique: Alphabet = all.chars().iter().copied().collect();
        assert_eq!(unique.len(), all.len());
        assert_eq!(all.len(), 26 + 26 + 10 + 27);
    }

    #[test]
    fn lowercase_and_digits() {
        let alphabet = build(ClassSet::from([Lowercase, Digit])).unwrap();
        assert_eq!(alphabet.to_string(), "abcdefghijklmnopqrstuvwxyz0123456789");
        assert_eq!(alphabet.len(), 36);
    }

    #[test]
    fn supply_order_does_not_matter() {
        let a = build(ClassSet::from([Symbol, Lowercase])).unwrap();
        let b = build(ClassSet::from([Lowercase, Symbol])).unwrap();
        assert_eq!(a, b);
        assert!(a.to_string().starts_with("abc"));
        assert!(a.to_string().ends_with("<>?"));
    }

    #[test]
    fn empty_set_is_rejected() {
        assert!(matches!(build(ClassSet::EMPTY), Err(Error::NoClassSelected)));
    }

    #[test]
    fn size_matches_built_alphabet() {
        for mask in 1u8..16 {
            let classes: ClassSet = CharacterClass::ALL
                .into_iter()
                .filter(|c| mask & (1 << *c as u8) != 0)
                .collect();
            assert_eq!(build(classes).unwrap().len(), size(classes));
        }
    }

    #[test]
    fn class_set_operations() {
        let mut set = ClassSet::new();
        assert!(set.is_empty());
        set.insert(Digit);
        set.insert(Digit);
        assert_eq!(set.len(), 1);
        set.toggle(Symbol);
        assert!(set.contains(Symbol));
        set.toggle(Symbol);
        assert!(!set.contains(Symbol));
        set.set(Uppercase, true);
        set.remove(Digit);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Uppercase]);
        assert_eq!(ClassSet::ALL.iter().collect::<Vec<_>>(), CharacterClass::ALL);
    }

    #[test]
    fn collected_alphabet_keeps_first_occurrence() {
        let alphabet: Alphabet = "abcabd".chars().collect();
        assert_eq!(alphabet.to_string(), "abcd");
    }

    #[test]
    fn collecting_a_large_alphabet_dedups_in_order() {
        let alphabet: Alphabet = (0..200_000u32)
            .map(|n| char::from_u32(0x4e00 + n % 20_000).unwrap())
            .collect();
        assert_eq!(alphabet.len(), 20_000);
        assert_eq!(alphabet.chars()[0], '\u{4e00}');
        assert_eq!(alphabet.chars()[19_999], char::from_u32(0x4e00 + 19_999).unwrap());
    }
}
