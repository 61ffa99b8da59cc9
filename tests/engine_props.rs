use std::collections::BTreeMap;

use proptest::prelude::*;
use wordcross::{EngineConfig, PlacementEngine, PlacementRecord, PolicyKind, Position};

fn policy_strategy() -> impl Strategy<Value = PolicyKind> {
    prop_oneof![Just(PolicyKind::Strict), Just(PolicyKind::Blanket)]
}

fn config_strategy() -> impl Strategy<Value = EngineConfig> {
    (
        prop::collection::vec("[A-E]{1,7}", 0..30),
        any::<u32>(),
        5usize..17,
        -2i64..7,
        -2i64..13,
        0usize..21,
        policy_strategy(),
    )
        .prop_map(|(words, seed, grid, min, max, attempts, policy)| {
            EngineConfig::new(words)
                .with_seed(seed)
                .with_grid_size(grid)
                .with_word_range(min, max)
                .with_max_attempts(attempts)
                .with_policy(policy)
        })
}

fn owners(history: &[PlacementRecord]) -> BTreeMap<Position, usize> {
    let mut owners = BTreeMap::new();
    for record in history {
        for pos in record.cells() {
            *owners.entry(pos).or_insert(0) += 1;
        }
    }
    owners
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn seeded_runs_are_reproducible(config in config_strategy()) {
        let mut a = PlacementEngine::new(config.clone());
        let mut b = PlacementEngine::new(config);
        prop_assert_eq!(a.place_words(), b.place_words());
        prop_assert_eq!(a.log(), b.log());
        prop_assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn history_is_a_connected_alternating_chain(config in config_strategy()) {
        let mut engine = PlacementEngine::new(config);
        let history = engine.place_words().to_vec();
        let resolved = *engine.config();

        prop_assert!(history.len() <= resolved.max_words);
        if let Some(target) = engine.target() {
            prop_assert!(history.len() <= target);
        }

        let mut words: Vec<&str> = history.iter().map(|p| p.word.as_str()).collect();
        words.sort_unstable();
        words.dedup();
        prop_assert_eq!(words.len(), history.len());

        for pair in history.windows(2) {
            prop_assert_ne!(pair[0].orientation, pair[1].orientation);
            prop_assert!(pair[1].cells().any(|pos| pair[0].covers(pos)));
        }

        if let Some(first) = history.first() {
            let letters: Vec<char> = first.word.chars().collect();
            let middle = letters[(letters.len() - 1) / 2];
            let center = engine.center();
            prop_assert_eq!(engine.grid().get(center.row, center.col).unwrap(), Some(middle));
        }
    }

    #[test]
    fn grid_matches_history(config in config_strategy()) {
        let mut engine = PlacementEngine::new(config);
        let history = engine.place_words().to_vec();
        let grid = engine.grid();
        let size = grid.size();

        for record in &history {
            prop_assert_eq!(record.positions.len(), record.word.chars().count());
            for p in &record.positions {
                prop_assert!(p.row < size && p.col < size);
                prop_assert_eq!(grid.get(p.row, p.col).unwrap(), Some(p.ch));
            }
        }
        prop_assert_eq!(grid.filled_count(), owners(&history).len());
    }

    #[test]
    fn unshared_cells_have_empty_flanks(config in config_strategy()) {
        let mut engine = PlacementEngine::new(config);
        let history = engine.place_words().to_vec();
        let grid = engine.grid();
        let owners = owners(&history);

        for record in &history {
            let (pr, pc) = record.orientation.flip().step();
            for pos in record.cells() {
                if owners[&pos] > 1 {
                    continue;
                }
                let (r, c) = (pos.row as isize, pos.col as isize);
                prop_assert!(!grid.is_occupied(r + pr, c + pc), "{} at {}", record.word, pos);
                prop_assert!(!grid.is_occupied(r - pr, c - pc), "{} at {}", record.word, pos);
            }

            let (dr, dc) = record.orientation.step();
            let (sr, sc) = (record.start.row as isize, record.start.col as isize);
            let len = record.len() as isize;
            prop_assert!(!grid.is_occupied(sr - dr, sc - dc), "{} runs into a word", record.word);
            prop_assert!(!grid.is_occupied(sr + dr * len, sc + dc * len), "{} runs into a word", record.word);
        }
    }
}
