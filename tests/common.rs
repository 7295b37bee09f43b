#![allow(unused)]
use std::collections::HashMap;
use std::sync::Once;

use rand::{CryptoRng, RngCore};

pub fn init_log() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    static START: Once = Once::new();

    START.call_once(|| {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(env_filter)
            .init();
    });
}

/// Byte source replaying a fixed script, for driving the sampler byte by byte.
///
/// Wraps around when the script is exhausted. Only meant for tests, it is
/// obviously not a secure RNG.
pub struct ScriptedRng {
    data: Vec<u8>,
    pos: usize,
    /// Number of fill_bytes calls.
    pub fills: usize,
    /// Total bytes handed out.
    pub consumed: usize,
}

impl ScriptedRng {
    pub fn new(data: &[u8]) -> Self {
        assert!(!data.is_empty());
        Self {
            data: data.to_vec(),
            pos: 0,
            fills: 0,
            consumed: 0,
        }
    }

    fn next_byte(&mut self) -> u8 {
        let b = self.data[self.pos];
        self.pos = (self.pos + 1) % self.data.len();
        self.consumed += 1;
        b
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let mut b = [0; 4];
        self.fill_bytes(&mut b);
        u32::from_le_bytes(b)
    }

    fn next_u64(&mut self) -> u64 {
        let mut b = [0; 8];
        self.fill_bytes(&mut b);
        u64::from_le_bytes(b)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.fills += 1;
        for v in dst.iter_mut() {
            *v = self.next_byte();
        }
    }
}

impl CryptoRng for ScriptedRng {}

/// Count occurrences of every symbol over all ids.
pub fn symbol_hits(ids: impl Iterator<Item = String>) -> HashMap<char, usize> {
    let mut hits = HashMap::new();
    for id in ids {
        for c in id.chars() {
            *hits.entry(c).or_insert(0) += 1;
        }
    }
    hits
}

/// Assert every count is within `epsilon` relative error of `expected`.
pub fn assert_flat(hits: &HashMap<char, usize>, symbols: usize, expected: usize, epsilon: f64) {
    assert_eq!(hits.len(), symbols, "every symbol should be hit");

    for (c, count) in hits {
        let delta = (*count as f64 - expected as f64).abs() / expected as f64;
        assert!(
            delta <= epsilon,
            "symbol {:?} hit {} times, expected {} (delta {:.4} > {})",
            c,
            count,
            expected,
            delta,
            epsilon
        );
    }
}
