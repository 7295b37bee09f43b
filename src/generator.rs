use std::convert::Infallible;
use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, TryRngCore};

use crate::alphabet::Alphabet;
use crate::length::Length;
use crate::sample::Sampler;
use crate::IdError;

/// Validated, reusable ID generator.
///
/// Built from an alphabet and a length through [`crate::standard()`], [`crate::custom()`],
/// [`crate::ascii()`] or [`crate::GeneratorConfig`]. Once built, generating never fails
/// on configuration.
///
/// ```
/// let gen = shortid::Generator::standard(8).unwrap();
///
/// let a = gen.generate();
/// let b = gen.generate();
///
/// assert_eq!(a.len(), 8);
/// assert_eq!(b.len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    symbols: Box<[char]>,
    length: Length,
    sampler: Sampler,
    /// Bytes needed for the longest possible ID.
    capacity: usize,
}

impl Generator {
    /// Generator over the [`crate::STANDARD_ALPHABET`].
    pub fn standard<L>(length: L) -> Result<Self, IdError>
    where
        L: TryInto<Length, Error = IdError>,
    {
        Self::new(&Alphabet::Standard, length)
    }

    /// Generator over a caller supplied alphabet. See [`crate::custom()`].
    pub fn custom<L>(alphabet: &str, length: L) -> Result<Self, IdError>
    where
        L: TryInto<Length, Error = IdError>,
    {
        Self::new(&Alphabet::from(alphabet), length)
    }

    /// Generator over the [`crate::ASCII_ALPHABET`].
    pub fn ascii<L>(length: L) -> Result<Self, IdError>
    where
        L: TryInto<Length, Error = IdError>,
    {
        Self::new(&Alphabet::Ascii, length)
    }

    /// Generator over any [`Alphabet`].
    ///
    /// The length is checked before the alphabet.
    pub fn new<L>(alphabet: &Alphabet, length: L) -> Result<Self, IdError>
    where
        L: TryInto<Length, Error = IdError>,
    {
        let length = length.try_into()?;
        Self::build(alphabet, length)
    }

    pub(crate) fn build(alphabet: &Alphabet, length: Length) -> Result<Self, IdError> {
        let symbols = alphabet.symbols()?;
        let sampler = Sampler::new(symbols.len(), length.get());

        let max_utf8 = symbols.iter().map(|c| c.len_utf8()).max().unwrap_or(1);
        let capacity = max_utf8 * length.get();

        debug!(
            "Generator for {} alphabet, {} symbols, length {}, mask {:#04x}, step {}",
            alphabet,
            symbols.len(),
            length,
            sampler.mask,
            sampler.step
        );

        Ok(Generator {
            symbols,
            length,
            sampler,
            capacity,
        })
    }

    /// Generate one ID using the thread local CSPRNG.
    ///
    /// Panics if the operating system random source is broken, which is not
    /// recoverable. Use [`Generator::try_generate()`] to get an error instead.
    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::rng())
    }

    /// Generate one ID using the given cryptographically secure RNG.
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let gen = shortid::standard(21).unwrap();
    ///
    /// let a = gen.generate_with(&mut StdRng::seed_from_u64(7));
    /// let b = gen.generate_with(&mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// ```
    pub fn generate_with<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> String {
        let r = self.sample(|buf| {
            rng.fill_bytes(buf);
            Ok::<_, Infallible>(())
        });

        match r {
            Ok(id) => id,
            Err(e) => match e {},
        }
    }

    /// Generate one ID reading directly from the operating system random source.
    ///
    /// A failing source gives [`IdError::Entropy`]. No partial ID is returned.
    pub fn try_generate(&self) -> Result<String, IdError> {
        let mut rng = OsRng;
        self.sample(|buf| rng.try_fill_bytes(buf))
            .map_err(|e| IdError::Entropy(e.to_string()))
    }

    fn sample<E>(&self, fill: impl FnMut(&mut [u8]) -> Result<(), E>) -> Result<String, E> {
        let mut id = String::with_capacity(self.capacity);
        self.sampler
            .sample(&self.symbols, self.length.get(), &mut id, fill)?;
        Ok(id)
    }

    /// Endless iterator of fresh IDs.
    ///
    /// ```
    /// let gen = shortid::ascii(10).unwrap();
    /// let ids: Vec<String> = gen.iter().take(3).collect();
    /// assert_eq!(ids.len(), 3);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter { gen: self }
    }

    /// Number of symbols in each generated ID.
    pub fn length(&self) -> usize {
        self.length.get()
    }

    /// Symbols IDs are made of.
    pub fn alphabet(&self) -> &[char] {
        &self.symbols
    }

    /// Bit mask applied to each random byte.
    pub fn mask(&self) -> u8 {
        self.sampler.mask
    }

    /// Random bytes read from the source per batch.
    pub fn step(&self) -> usize {
        self.sampler.step
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generator({} symbols, length {})",
            self.symbols.len(),
            self.length
        )
    }
}

/// Iterator of IDs, see [`Generator::iter()`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    gen: &'a Generator,
}

impl<'a> Iterator for Iter<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.gen.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
