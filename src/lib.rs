//! Short, unique, URL-safe random identifiers.
//!
//! IDs are drawn from a cryptographically strong random source over a configurable
//! alphabet. Every symbol of the alphabet is equally likely at every position of the
//! ID. There is no modulo bias, no matter the alphabet size.
//!
//! A generator is validated and built once, then called any number of times:
//!
//! ```
//! let gen = shortid::standard(21).unwrap();
//!
//! let id = gen.generate();
//! assert_eq!(id.chars().count(), 21);
//! ```
//!
//! # Alphabets
//!
//! There are three ways of making a generator.
//!
//! * [`standard()`] uses the 64 symbol URL-safe alphabet `A-Z`, `a-z`, `0-9`, `_` and `-`.
//! * [`custom()`] takes any set of up to 256 symbols. Every `char` is one symbol,
//!   also multi-byte ones.
//! * [`ascii()`] uses the printable ASCII window `(` to `}` (86 symbols).
//!
//! ```
//! let gen = shortid::custom("abcdef", 21).unwrap();
//!
//! let id = gen.generate();
//! assert!(id.chars().all(|c| "abcdef".contains(c)));
//! ```
//!
//! The length must be in `2..=255`. Anything else, negative numbers included, is
//! refused when building the generator and never when generating.
//!
//! ```
//! # use shortid::IdError;
//! assert!(matches!(shortid::standard(1), Err(IdError::InvalidLength(1))));
//! assert!(matches!(shortid::standard(256), Err(IdError::InvalidLength(256))));
//! assert!(matches!(shortid::standard(-1), Err(IdError::InvalidLength(-1))));
//! ```
//!
//! # Sampling
//!
//! For an alphabet of `k` symbols, each random byte is masked down to the smallest
//! power of two covering `k`. Indexes landing outside the alphabet are thrown away
//! rather than wrapped around. Random bytes are read in batches sized from the
//! rejection rate, so that most IDs need a single read from the random source.
//!
//! # Uniqueness
//!
//! Nothing is tracked between calls. Uniqueness is a matter of probability and
//! follows from alphabet size and length: 21 symbols of the standard alphabet
//! hold 126 bits.
//!
//! # Concurrency
//!
//! [`Generator`] is immutable, `Send` and `Sync`. All per-call state lives on the
//! stack of the call, so one generator can be shared between threads freely.
//!
//! # Configuration
//!
//! [`GeneratorConfig`] is a builder for when the alphabet and length come from
//! application settings. With the `serde` feature it can be deserialized directly.
//!
//! ```
//! use shortid::{Alphabet, GeneratorConfig};
//!
//! let gen = GeneratorConfig::new()
//!     .set_alphabet(Alphabet::Ascii)
//!     .set_length(32)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(gen.generate().len(), 32);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

use thiserror::Error;

mod alphabet;
pub use alphabet::{Alphabet, ASCII_ALPHABET, STANDARD_ALPHABET};

mod config;
pub use config::GeneratorConfig;

mod generator;
pub use generator::{Generator, Iter};

mod length;
pub use length::Length;

mod sample;

/// Errors from building generators or generating IDs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IdError {
    /// The requested ID length is outside `2..=255`.
    #[error("invalid ID length {0}, must be between {min} and {max}", min = Length::MIN, max = Length::MAX)]
    InvalidLength(i128),

    /// The alphabet is empty or has more than 256 symbols.
    #[error("invalid alphabet of {0} symbols, must be between 1 and {max}", max = alphabet::MAX_SYMBOLS)]
    InvalidAlphabet(usize),

    /// The random source failed.
    ///
    /// This is never retried. A broken entropy source is fatal.
    #[error("random source failed: {0}")]
    Entropy(String),
}

/// Generator over the 64 symbol URL-safe [`STANDARD_ALPHABET`].
///
/// Fails with [`IdError::InvalidLength`] if `length` is not in `2..=255`.
pub fn standard<L>(length: L) -> Result<Generator, IdError>
where
    L: TryInto<Length, Error = IdError>,
{
    Generator::standard(length)
}

/// Generator over a caller supplied alphabet.
///
/// Every `char` of `alphabet` is one symbol. Duplicated symbols are allowed, but
/// make those symbols proportionally more likely.
///
/// Fails with [`IdError::InvalidLength`] if `length` is not in `2..=255`, and then
/// with [`IdError::InvalidAlphabet`] if the alphabet is empty or longer than 256.
pub fn custom<L>(alphabet: &str, length: L) -> Result<Generator, IdError>
where
    L: TryInto<Length, Error = IdError>,
{
    Generator::custom(alphabet, length)
}

/// Generator over the printable [`ASCII_ALPHABET`] window.
///
/// Fails with [`IdError::InvalidLength`] if `length` is not in `2..=255`.
pub fn ascii<L>(length: L) -> Result<Generator, IdError>
where
    L: TryInto<Length, Error = IdError>,
{
    Generator::ascii(length)
}
