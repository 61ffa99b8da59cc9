//! Seeded randomness for reproducible generation runs.
//!
//! A seed's textual form is folded into 32 bits with FNV-1a and drives a
//! Mulberry32 stream. Without a seed the engine draws from a `SmallRng`
//! seeded by the thread-local generator, so runs differ from one another.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Fold a seed string into a 32-bit state using FNV-1a over its UTF-16 code units.
pub fn hash_seed(text: &str) -> u32 {
    text.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Mulberry32: a 32-bit counter pushed through two multiply/xor-shift rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(state: u32) -> Self {
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}

/// User supplied seed: text or an integer, hashed through its textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(untagged))]
pub enum Seed {
    Integer(i64),
    Text(String),
}

impl Seed {
    /// Textual form fed to [`hash_seed`].
    pub fn text(&self) -> String {
        match self {
            Seed::Integer(n) => n.to_string(),
            Seed::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Integer(n) => write!(f, "{}", n),
            Seed::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Seed::Text(s.to_string())
    }
}

impl From<String> for Seed {
    fn from(s: String) -> Self {
        Seed::Text(s)
    }
}

impl From<i64> for Seed {
    fn from(n: i64) -> Self {
        Seed::Integer(n)
    }
}

impl From<u32> for Seed {
    fn from(n: u32) -> Self {
        Seed::Integer(i64::from(n))
    }
}

/// Source of uniform draws owned by a placement engine.
#[derive(Debug, Clone)]
pub enum RandomSource {
    /// Reproducible stream derived from a seed.
    Seeded(Mulberry32),
    /// Non-deterministic stream.
    Entropy(SmallRng),
}

impl RandomSource {
    /// Seeded stream when `seed` has a non-empty textual form, entropy otherwise.
    pub fn from_seed(seed: Option<&Seed>) -> Self {
        match seed.map(Seed::text).filter(|s| !s.is_empty()) {
            Some(text) => RandomSource::Seeded(Mulberry32::new(hash_seed(&text))),
            None => Self::entropy(),
        }
    }

    #[cfg(feature = "std")]
    pub fn entropy() -> Self {
        let mut seed_rng = rand::rng();
        RandomSource::Entropy(SmallRng::from_rng(&mut seed_rng))
    }

    /// Without `std` there is no OS entropy; unseeded engines share a fixed stream.
    #[cfg(not(feature = "std"))]
    pub fn entropy() -> Self {
        RandomSource::Entropy(SmallRng::seed_from_u64(0x9E37_79B9_7F4A_7C15))
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self, RandomSource::Seeded(_))
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        match self {
            RandomSource::Seeded(m) => m.next_f64(),
            RandomSource::Entropy(rng) => rng.random::<f64>(),
        }
    }

    /// Fair coin.
    pub fn coin(&mut self) -> bool {
        self.next_f64() < 0.5
    }

    /// Uniform index in `[0, n)`; `n` must be non-zero.
    pub fn below(&mut self, n: usize) -> usize {
        let idx = (self.next_f64() * n as f64) as usize;
        idx.min(n - 1)
    }
}

/// Fisher-Yates shuffle of a copy of `items`, walking from the last index down to 1.
pub fn shuffled<T: Clone>(items: &[T], rng: &mut RandomSource) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.below(i + 1);
        out.swap(i, j);
    }
    out
}
