//! Password generation from selectable character classes.
//!
//! The core is two pure operations: [`pass::charset::build`] turns a set of
//! character classes into an [`Alphabet`], and [`pass::generate`] draws an
//! unbiased password from it using the OS CSPRNG.

mod error;
pub mod pass;
pub mod rand;
pub mod settings;

pub use error::{Error, Result};
pub use pass::charset::{Alphabet, CharacterClass, ClassSet};
pub use pass::request::GenerationRequest;
pub use pass::{generate, generate_with};
