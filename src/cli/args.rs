//! Command-line arguments.

use clap::{Parser, ValueEnum};

use charpass::CharacterClass;
use charpass::settings::{MAX_LENGTH, MIN_LENGTH, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassArg {
    Lower,
    Upper,
    Digits,
    Symbols,
}

impl From<ClassArg> for CharacterClass {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::Lower => CharacterClass::Lowercase,
            ClassArg::Upper => CharacterClass::Uppercase,
            ClassArg::Digits => CharacterClass::Digit,
            ClassArg::Symbols => CharacterClass::Symbol,
        }
    }
}

/// Generate cryptographically strong passwords from selectable character classes.
#[derive(Debug, Parser)]
#[command(name = "charpass", version, about)]
pub struct Args {
    /// Characters per password [4-128]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(MIN_LENGTH as i64..=MAX_LENGTH as i64))]
    pub length: Option<u32>,

    /// How many passwords to generate
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub number: u32,

    /// Use exactly these classes (comma separated)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub classes: Option<Vec<ClassArg>>,

    /// Exclude lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Exclude uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Exclude digits
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive panel
    #[arg(short, long)]
    pub interactive: bool,

    /// Save length and class selection as the new defaults
    #[arg(long)]
    pub save: bool,
}

impl Args {
    /// Overlay the explicit flags on top of the saved defaults.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(length) = self.length {
            settings.length = length as usize;
        }

        if let Some(ref classes) = self.classes {
            settings.set_classes(classes.iter().map(|&c| CharacterClass::from(c)).collect());
        }

        if self.no_lower {
            settings.lowercase = false;
        }
        if self.no_upper {
            settings.uppercase = false;
        }
        if self.no_digits {
            settings.digits = false;
        }
        if self.no_symbols {
            settings.symbols = false;
        }
    }
}
