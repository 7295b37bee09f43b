use std::collections::HashSet;
use std::fmt;

use crate::IdError;

/// Most symbols an alphabet can have. Indexes are taken from single random bytes.
pub(crate) const MAX_SYMBOLS: usize = 256;

/// URL-safe alphabet used by [`crate::standard()`].
pub const STANDARD_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Printable ASCII window `0x28..=0x7D` used by [`crate::ascii()`].
pub const ASCII_ALPHABET: &str =
    "()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}";

/// Set of symbols IDs are made of.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Alphabet {
    /// [`STANDARD_ALPHABET`], 64 symbols.
    #[default]
    Standard,
    /// [`ASCII_ALPHABET`], 86 symbols.
    Ascii,
    /// Caller supplied symbols. Each `char` is one symbol.
    Custom(String),
}

impl Alphabet {
    /// The symbols of this alphabet, in order.
    pub fn as_str(&self) -> &str {
        match self {
            Alphabet::Standard => STANDARD_ALPHABET,
            Alphabet::Ascii => ASCII_ALPHABET,
            Alphabet::Custom(v) => v,
        }
    }

    /// Checked symbol table for the sampling engine.
    pub(crate) fn symbols(&self) -> Result<Box<[char]>, IdError> {
        let symbols: Box<[char]> = self.as_str().chars().collect();

        if symbols.is_empty() || symbols.len() > MAX_SYMBOLS {
            return Err(IdError::InvalidAlphabet(symbols.len()));
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        let dupes = symbols.iter().filter(|c| !seen.insert(**c)).count();
        if dupes > 0 {
            warn!(
                "Alphabet has {} duplicated symbols, those will be over-represented",
                dupes
            );
        }

        Ok(symbols)
    }
}

impl From<&str> for Alphabet {
    fn from(v: &str) -> Self {
        Alphabet::Custom(v.to_string())
    }
}

impl From<String> for Alphabet {
    fn from(v: String) -> Self {
        Alphabet::Custom(v)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Standard => write!(f, "standard"),
            Alphabet::Ascii => write!(f, "ascii"),
            Alphabet::Custom(v) => write!(f, "custom({})", v.chars().count()),
        }
    }
}
