//! A single generation request: length plus selected classes.

use log::debug;

use super::charset::{self, ClassSet};
use super::generate;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }

    /// Build a fresh alphabet for this request and draw a password from it.
    pub fn generate(&self) -> Result<String> {
        let alphabet = charset::build(self.classes)?;
        debug!("generating {} char password", self.length);
        generate(self.length, &alphabet)
    }
}
