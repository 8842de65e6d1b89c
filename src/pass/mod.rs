//! Password generation.

pub mod charset;
mod generate;
pub mod request;

pub use generate::{generate, generate_with};
