use wordcross::{render_grid, render_summary, EngineConfig, PlacementEngine};

fn finished_engine() -> PlacementEngine {
    let config = EngineConfig::new(vec!["CASA", "SOL", "RIO"])
        .with_seed("abc")
        .with_grid_size(10)
        .with_word_range(3, 3);
    let mut engine = PlacementEngine::new(config);
    engine.place_words();
    engine
}

#[test]
fn test_render_grid_marks_center() {
    let engine = finished_engine();
    let text = render_grid(engine.grid(), engine.center());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "     0  1  2  3  4  5  6  7  8  9");
    assert_eq!(lines[6], " 5   .  .  .  .  .[I]  .  .  .  .");
    assert_eq!(lines[7], " 6   .  .  .  .  S  O  L  .  .  .");
}

#[test]
fn test_render_summary_lists_placements() {
    let engine = finished_engine();
    let text = render_summary(engine.history());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "  #  word  axis        start      len",
            "  1  RIO   vertical    (4,5)      3",
            "  2  SOL   horizontal  (6,4)      3",
        ]
    );
}

#[test]
fn test_render_summary_empty_history() {
    assert_eq!(render_summary(&[]), "  #  word  axis        start      len\n");
}
