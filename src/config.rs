use alloc::vec::Vec;

use crate::common::Position;
use crate::dictionary::DictionarySource;
use crate::policy::PolicyKind;
use crate::rng::Seed;

pub const DEFAULT_GRID_SIZE: usize = 30;
/// Largest side length a configuration resolves to.
pub const MAX_GRID_SIZE: usize = 256;
pub const DEFAULT_MIN_WORDS: i64 = 2;
pub const DEFAULT_MAX_WORDS: i64 = 15;
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Lowest target word count a run may draw.
pub const MIN_WORDS_FLOOR: usize = 1;

/// Demo dictionary used when a collaborator supplies none.
pub const DEFAULT_WORDS: [&str; 30] = [
    "casa", "computador", "livro", "sol", "mesa", "janela", "porta", "carro", "amigo",
    "floresta", "rio", "luz", "tempo", "caminho", "sorriso", "brasil", "noite", "tarde",
    "manhã", "cidade", "praia", "montanha", "vila", "cachorro", "gato", "festa", "musica",
    "vento", "chuva", "neve",
];

/// Construction options for a [`crate::PlacementEngine`].
///
/// Values are taken as given and coerced by [`EngineConfig::resolve`]; nothing
/// here is ever rejected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default, rename_all = "camelCase"))]
pub struct EngineConfig {
    pub grid_size: usize,
    /// Anchor for the first word; grid midpoint when absent.
    pub center: Option<Position>,
    pub min_words: i64,
    pub max_words: i64,
    pub max_attempts_per_word: usize,
    pub dictionary: DictionarySource,
    pub seed: Option<Seed>,
    pub policy: PolicyKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            center: None,
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
            max_attempts_per_word: DEFAULT_MAX_ATTEMPTS,
            dictionary: DictionarySource::default(),
            seed: None,
            policy: PolicyKind::default(),
        }
    }
}

impl EngineConfig {
    /// Default options over the given dictionary.
    pub fn new(dictionary: impl Into<DictionarySource>) -> Self {
        Self {
            dictionary: dictionary.into(),
            ..Self::default()
        }
    }

    /// Options over the built-in demo dictionary.
    pub fn demo() -> Self {
        Self::new(DEFAULT_WORDS.iter().copied().collect::<Vec<_>>())
    }

    pub fn with_seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_center(mut self, center: Position) -> Self {
        self.center = Some(center);
        self
    }

    pub fn with_word_range(mut self, min_words: i64, max_words: i64) -> Self {
        self.min_words = min_words;
        self.max_words = max_words;
        self
    }

    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts_per_word = attempts;
        self
    }

    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    /// Coerce out-of-range values into a usable configuration.
    pub fn resolve(&self) -> ResolvedConfig {
        let grid_size = self.grid_size.clamp(1, MAX_GRID_SIZE);
        let last = grid_size - 1;
        let center = match self.center {
            Some(c) => Position::new(c.row.min(last), c.col.min(last)),
            None => Position::new(grid_size / 2, grid_size / 2),
        };
        let min_words = self.min_words.max(MIN_WORDS_FLOOR as i64) as usize;
        let max_words = self.max_words.max(min_words as i64) as usize;
        ResolvedConfig {
            grid_size,
            center,
            min_words,
            max_words,
            max_attempts_per_word: self.max_attempts_per_word.max(1),
        }
    }
}

/// Engine parameters after coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub grid_size: usize,
    pub center: Position,
    pub min_words: usize,
    pub max_words: usize,
    pub max_attempts_per_word: usize,
}
