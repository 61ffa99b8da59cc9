//! Placement engine: anchors one word on the center, then keeps crossing the
//! most recent placement with the opposite orientation until the target count
//! is reached or no candidate fits.
//!
//! Every random decision (target count, pool order, orientation of the anchor,
//! candidate order, crossing order) is drawn from the engine's own
//! [`RandomSource`] in a fixed order, so a seeded engine reproduces its
//! history exactly.

use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{Orientation, Position};
use crate::config::{EngineConfig, ResolvedConfig};
use crate::dictionary::{normalize_words, DictionarySource};
use crate::grid::Grid;
use crate::placement::{PlacedLetter, PlacementRecord, Run};
use crate::policy::PlacementValidator;
use crate::rng::{shuffled, RandomSource};

/// Lifecycle of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum EngineState {
    Idle,
    FirstWordSearch,
    Extending,
    Done,
}

/// Append-only diagnostics for one generation, cleared on reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct GenerationLog {
    entries: Vec<String>,
}

impl GenerationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: String) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Read-only copy of an engine's outputs for rendering or export.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct EngineSnapshot {
    pub grid_size: usize,
    pub center: Position,
    pub target: Option<usize>,
    pub state: EngineState,
    /// Grid rows, `.` marking empty cells.
    pub rows: Vec<String>,
    pub placements: Vec<PlacementRecord>,
    pub log: GenerationLog,
}

/// Owns the grid, the placement history, the used-word set and the random
/// stream of a generation run.
pub struct PlacementEngine {
    config: ResolvedConfig,
    words: Vec<String>,
    grid: Grid,
    history: Vec<PlacementRecord>,
    used_words: BTreeSet<String>,
    log: GenerationLog,
    origin: RandomSource,
    rng: RandomSource,
    validator: Box<dyn PlacementValidator>,
    state: EngineState,
    target: Option<usize>,
}

impl PlacementEngine {
    /// Create an engine using the policy named in `config`.
    pub fn new(config: EngineConfig) -> Self {
        let validator = config.policy.validator();
        Self::with_validator(config, validator)
    }

    /// Create an engine with a caller supplied legality policy.
    pub fn with_validator(config: EngineConfig, validator: Box<dyn PlacementValidator>) -> Self {
        let resolved = config.resolve();
        let rng = RandomSource::from_seed(config.seed.as_ref());
        let mut engine = Self {
            config: resolved,
            words: Vec::new(),
            grid: Grid::new(resolved.grid_size),
            history: Vec::new(),
            used_words: BTreeSet::new(),
            log: GenerationLog::new(),
            origin: rng.clone(),
            rng,
            validator,
            state: EngineState::Idle,
            target: None,
        };
        engine.load_dictionary(config.dictionary);
        engine
    }

    /// Normalize and store a raw word source, returning the cleaned list.
    pub fn load_dictionary(&mut self, raw: impl Into<DictionarySource>) -> &[String] {
        let raw = raw.into();
        self.words = normalize_words(raw.entries(), self.config.grid_size);
        log::debug!(
            "dictionary loaded: {} raw entries, {} usable",
            raw.entries().len(),
            self.words.len()
        );
        &self.words
    }

    /// Clear grid, history, used words and log. A seeded stream restarts from its seed.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.history.clear();
        self.used_words.clear();
        self.log.clear();
        self.state = EngineState::Idle;
        self.target = None;
        if self.origin.is_seeded() {
            self.rng = self.origin.clone();
        }
    }

    /// Run a full generation and return the ordered placement history.
    ///
    /// The history may be shorter than the drawn target; reasons are in [`Self::log`].
    /// Call [`Self::reset`] first for a fresh grid, otherwise placements pile up.
    pub fn place_words(&mut self) -> &[PlacementRecord] {
        self.state = EngineState::FirstWordSearch;
        if self.words.is_empty() {
            self.note(String::from("Dictionary is empty."));
            self.state = EngineState::Done;
            return &self.history;
        }

        let target = self.pick_target();
        self.target = Some(target);
        self.note(format!(
            "Target: place {} word(s). Dictionary size: {}.",
            target,
            self.words.len()
        ));

        let pool = shuffled(&self.words, &mut self.rng);

        if !pool.iter().any(|word| self.place_first_word(word)) {
            self.note(String::from("Could not anchor the first word on the center."));
            self.state = EngineState::Done;
            return &self.history;
        }

        self.state = EngineState::Extending;
        while self.history.len() < target {
            if !self.try_extend(&pool) {
                self.note(String::from(
                    "No further word fits without breaking the placement rules. Stopping.",
                ));
                break;
            }
        }

        self.state = EngineState::Done;
        &self.history
    }

    /// Draw the target count uniformly from `[min_words, max_words]`.
    fn pick_target(&mut self) -> usize {
        let span = self.config.max_words - self.config.min_words + 1;
        self.config.min_words + self.rng.below(span)
    }

    fn place_first_word(&mut self, word: &str) -> bool {
        let orientation = if self.rng.coin() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let center = self.config.center;
        let run = Run::centered(word, center, orientation);
        if !self.validator.is_legal(&self.grid, &run) {
            log::debug!("anchor {} ({}) rejected", word, orientation);
            return false;
        }
        if !self.commit(&run) {
            return false;
        }
        self.note(format!(
            "First word: {} ({}), middle letter on cell ({},{}).",
            word, orientation, center.row, center.col
        ));
        true
    }

    /// Try to cross the last placement with one more word from `pool`.
    fn try_extend(&mut self, pool: &[String]) -> bool {
        let Some(last) = self.history.last().cloned() else {
            return false;
        };
        let orientation = last.orientation.flip();
        let grid_size = self.config.grid_size;

        let candidates: Vec<String> = pool
            .iter()
            .filter(|w| !self.used_words.contains(*w) && w.chars().count() <= grid_size)
            .cloned()
            .collect();
        if candidates.is_empty() {
            return false;
        }

        let mut bag = shuffled(&candidates, &mut self.rng);
        let mut attempts = 0;
        while attempts < self.config.max_attempts_per_word {
            let Some(candidate) = bag.pop() else {
                break;
            };
            attempts += 1;

            let pairs = crossing_pairs(&candidate, &last);
            for (idx, at) in shuffled(&pairs, &mut self.rng) {
                let run = Run::crossing(&candidate, idx, at.position(), orientation);
                if !self.validator.is_legal(&self.grid, &run) {
                    continue;
                }
                if self.commit(&run) {
                    self.note(format!(
                        "Placed: {} ({}) crossing '{}' at ({},{}) [letter '{}'].",
                        candidate, orientation, last.word, at.row, at.col, at.ch
                    ));
                    return true;
                }
            }
            log::debug!("candidate {} has no legal crossing with {}", candidate, last.word);
        }

        self.note(format!(
            "Failed to fit the next word after {} attempt(s).",
            attempts
        ));
        false
    }

    fn commit(&mut self, run: &Run) -> bool {
        match self.grid.commit(run) {
            Ok(record) => {
                self.used_words.insert(record.word.clone());
                self.history.push(record);
                true
            }
            Err(e) => {
                self.note(format!("Rejected {}: {}.", run.word(), e));
                false
            }
        }
    }

    fn note(&mut self, entry: String) {
        log::info!("{}", entry);
        self.log.push(entry);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &[PlacementRecord] {
        &self.history
    }

    pub fn log(&self) -> &GenerationLog {
        &self.log
    }

    /// Normalized dictionary currently loaded.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Target count drawn by the last run, if any.
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn center(&self) -> Position {
        self.config.center
    }

    pub fn policy_name(&self) -> &'static str {
        self.validator.name()
    }

    pub fn is_seeded(&self) -> bool {
        self.origin.is_seeded()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            grid_size: self.config.grid_size,
            center: self.config.center,
            target: self.target,
            state: self.state,
            rows: self
                .grid
                .rows()
                .map(|row| row.iter().map(|c| c.unwrap_or('.')).collect())
                .collect(),
            placements: self.history.clone(),
            log: self.log.clone(),
        }
    }
}

/// Every (candidate letter index, matching cell of `last`) pair, candidate
/// letters outermost, `last` cells in placement order.
fn crossing_pairs(candidate: &str, last: &PlacementRecord) -> Vec<(usize, PlacedLetter)> {
    candidate
        .chars()
        .enumerate()
        .flat_map(|(idx, ch)| {
            last.positions
                .iter()
                .filter(move |p| p.ch == ch)
                .map(move |p| (idx, *p))
        })
        .collect()
}

impl fmt::Debug for PlacementEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacementEngine")
            .field("config", &self.config)
            .field("policy", &self.validator.name())
            .field("state", &self.state)
            .field("target", &self.target)
            .field("words", &self.words.len())
            .field("placed", &self.history.len())
            .finish()
    }
}
