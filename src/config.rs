use crate::alphabet::Alphabet;
use crate::generator::Generator;
use crate::IdError;

/// Length used when none is set. 126 bits with the standard alphabet.
const DEFAULT_LENGTH: usize = 21;

/// Customized config for building a [`Generator`].
///
/// ```
/// use shortid::{Alphabet, GeneratorConfig};
///
/// let gen = GeneratorConfig::new()
///     .set_alphabet(Alphabet::Custom("0123456789".into()))
///     .set_length(12)
///     .build()
///     .unwrap();
///
/// assert!(gen.generate().chars().all(|c| c.is_ascii_digit()));
/// ```
///
/// Nothing is validated until [`GeneratorConfig::build()`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    alphabet: Alphabet,
    length: usize,
}

impl GeneratorConfig {
    /// Creates a new default config, the standard alphabet and length 21.
    pub fn new() -> Self {
        GeneratorConfig::default()
    }

    /// Alphabet to draw symbols from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Set the alphabet.
    ///
    /// Defaults to [`Alphabet::Standard`].
    pub fn set_alphabet(mut self, alphabet: impl Into<Alphabet>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    /// Number of symbols in generated IDs.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Set the ID length. Must be in `2..=255` for [`GeneratorConfig::build()`] to succeed.
    ///
    /// Defaults to 21.
    pub fn set_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Validate the config and create the [`Generator`].
    ///
    /// The length is checked first, then the alphabet.
    pub fn build(&self) -> Result<Generator, IdError> {
        Generator::new(&self.alphabet, self.length)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::Standard,
            length: DEFAULT_LENGTH,
        }
    }
}
