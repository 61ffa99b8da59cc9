use wordcross::{
    base_checks, BlanketPolicy, Grid, Orientation, PlacementValidator, PolicyKind, Position, Run,
    StrictPolicy,
};

const POLICIES: [&dyn PlacementValidator; 2] = [&StrictPolicy, &BlanketPolicy];

/// CAT written horizontally across (5,3)..(5,5).
fn grid_with_cat() -> Grid {
    let mut grid = Grid::new(10);
    grid.commit(&Run::new("CAT", 5, 3, Orientation::Horizontal))
        .unwrap();
    grid
}

#[test]
fn test_first_word_on_empty_grid() {
    let grid = Grid::new(10);
    let run = Run::centered("FLORESTA", Position::new(5, 5), Orientation::Horizontal);
    for policy in POLICIES {
        assert!(policy.is_legal(&grid, &run), "{}", policy.name());
    }
}

#[test]
fn test_out_of_bounds_rejected() {
    let grid = Grid::new(5);
    let left = Run::new("CASA", 0, -1, Orientation::Horizontal);
    let down = Run::new("CASA", 2, 0, Orientation::Vertical);
    for policy in POLICIES {
        assert!(!policy.is_legal(&grid, &left));
        assert!(!policy.is_legal(&grid, &down));
    }
}

#[test]
fn test_empty_run_rejected() {
    let grid = Grid::new(5);
    assert!(!base_checks(&grid, &Run::new("", 1, 1, Orientation::Vertical)));
}

#[test]
fn test_letter_mismatch_rejected() {
    let grid = grid_with_cat();
    // O would land on A
    let run = Run::crossing("SOL", 1, Position::new(5, 4), Orientation::Vertical);
    for policy in POLICIES {
        assert!(!policy.is_legal(&grid, &run));
    }
}

#[test]
fn test_run_must_write_a_new_cell() {
    let grid = grid_with_cat();
    let run = Run::new("A", 5, 4, Orientation::Vertical);
    assert!(!base_checks(&grid, &run));
}

#[test]
fn test_same_axis_reuse_rejected() {
    let grid = grid_with_cat();
    let run = Run::new("CATS", 5, 3, Orientation::Horizontal);
    for policy in POLICIES {
        assert!(!policy.is_legal(&grid, &run), "{}", policy.name());
    }
}

#[test]
fn test_perpendicular_crossing_accepted() {
    let grid = grid_with_cat();
    let run = Run::crossing("BAT", 1, Position::new(5, 4), Orientation::Vertical);
    assert_eq!(run.start(), (4, 4));
    for policy in POLICIES {
        assert!(policy.is_legal(&grid, &run), "{}", policy.name());
    }
}

#[test]
fn test_parallel_neighbour_rejected() {
    let grid = grid_with_cat();
    let below = Run::new("DOG", 6, 3, Orientation::Horizontal);
    let beside = Run::new("DOG", 4, 6, Orientation::Vertical);
    for policy in POLICIES {
        assert!(!policy.is_legal(&grid, &below), "{}", policy.name());
        assert!(!policy.is_legal(&grid, &beside), "{}", policy.name());
    }
}

#[test]
fn test_end_flush_against_word() {
    let grid = grid_with_cat();
    // DOG would end right before C
    let run = Run::new("DOG", 5, 0, Orientation::Horizontal);
    for policy in POLICIES {
        assert!(!policy.is_legal(&grid, &run), "{}", policy.name());
    }
}

#[test]
fn test_diagonal_touch_only_blocked_by_strict() {
    let grid = grid_with_cat();
    // D at (4,6) touches T at (5,5) on the diagonal
    let run = Run::new("DOG", 4, 6, Orientation::Horizontal);
    assert!(!StrictPolicy.is_legal(&grid, &run));
    assert!(BlanketPolicy.is_legal(&grid, &run));
}

#[test]
fn test_run_ending_on_crossing_cannot_touch_next_word() {
    let mut grid = grid_with_cat();
    grid.commit(&Run::new("OX", 6, 4, Orientation::Vertical))
        .unwrap();
    // BA ends on the A of CAT; committing it would spell BAOX down column 4
    let run = Run::new("BA", 4, 4, Orientation::Vertical);
    for policy in POLICIES {
        assert!(!policy.is_legal(&grid, &run), "{}", policy.name());
    }

    // same crossing with nothing below it is fine
    let grid = grid_with_cat();
    for policy in POLICIES {
        assert!(policy.is_legal(&grid, &run), "{}", policy.name());
    }
}

#[test]
fn test_run_starting_on_crossing_cannot_touch_previous_word() {
    let mut grid = grid_with_cat();
    grid.commit(&Run::new("ON", 3, 5, Orientation::Vertical))
        .unwrap();
    // TO starts on the T of CAT right under the N of ON
    let run = Run::new("TO", 5, 5, Orientation::Vertical);
    for policy in POLICIES {
        assert!(!policy.is_legal(&grid, &run), "{}", policy.name());
    }
}

#[test]
fn test_policy_kind_selects_validator() {
    assert_eq!(PolicyKind::default(), PolicyKind::Strict);
    assert_eq!(PolicyKind::Strict.validator().name(), "strict");
    assert_eq!(PolicyKind::Blanket.validator().name(), "blanket");
}
