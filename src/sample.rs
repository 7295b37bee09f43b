//! Unbiased sampling of alphabet indexes from random bytes.

/// Upper bound of [`Sampler::step`] over all alphabet sizes and lengths.
///
/// The worst case is `k = 129`, `length = 255` which gives 807.
pub(crate) const MAX_STEP: usize = 1024;

/// Mask and batch size for one alphabet size and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Sampler {
    /// `2^b - 1`, smallest such value covering the alphabet.
    pub mask: u8,
    /// Random bytes read per batch.
    pub step: usize,
}

impl Sampler {
    /// `k` is the alphabet size `1..=256`, `length` the ID length `2..=255`.
    pub fn new(k: usize, length: usize) -> Self {
        debug_assert!((1..=256).contains(&k));

        // OR 1 makes a single symbol alphabet use a 1 bit mask.
        let bits = usize::BITS - ((k - 1) | 1).leading_zeros();
        let mask = (1_usize << bits) - 1;

        // ceil(1.6 * mask * length / k). The factor keeps the expected
        // number of refills per ID near zero without overdrawing much.
        let num = 8 * mask * length;
        let den = 5 * k;
        let step = ((num + den - 1) / den).max(1);

        debug_assert!(step <= MAX_STEP);

        Sampler {
            mask: mask as u8,
            step,
        }
    }

    /// Fill `out` with `length` symbols picked from `symbols`.
    ///
    /// `fill` is called once per batch of `step` random bytes. Any error from it is
    /// returned straight away without retrying. `out` then holds a partial ID that
    /// must be discarded.
    pub fn sample<E>(
        &self,
        symbols: &[char],
        length: usize,
        out: &mut String,
        mut fill: impl FnMut(&mut [u8]) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut buf = [0_u8; MAX_STEP];
        let step = self.step;

        let mut accepted = 0;
        let mut batches = 0_usize;

        loop {
            fill(&mut buf[..step])?;
            batches += 1;

            if batches > 1 {
                trace!("Refill {} of {} bytes at {}/{}", batches, step, accepted, length);
            }

            for v in &buf[..step] {
                let idx = (v & self.mask) as usize;

                // Indexes outside the alphabet are rejected, not wrapped.
                let Some(c) = symbols.get(idx) else {
                    continue;
                };

                out.push(*c);
                accepted += 1;

                if accepted == length {
                    return Ok(());
                }
            }
        }
    }
}
