use anyhow::Context;
use serde_json::json;
use wordcross::{EngineConfig, PlacementEngine, PolicyKind};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: {} <seed> <runs> [strict|blanket]", args[0]);
        std::process::exit(1);
    }
    let seed = &args[1];
    let runs: usize = args[2].parse().context("runs must be a non-negative integer")?;
    let policy = match args.get(3).map(String::as_str) {
        None | Some("strict") => PolicyKind::Strict,
        Some("blanket") => PolicyKind::Blanket,
        Some(other) => anyhow::bail!("unknown policy {}", other),
    };

    let mut placed = Vec::with_capacity(runs);
    let mut reached = 0usize;
    for i in 0..runs {
        let config = EngineConfig::demo()
            .with_seed(format!("{}-{}", seed, i))
            .with_policy(policy);
        let mut engine = PlacementEngine::new(config);
        let count = engine.place_words().len();
        if engine.target() == Some(count) {
            reached += 1;
        }
        placed.push(count);
    }

    let total: usize = placed.iter().sum();
    let result = json!({
        "seed": seed,
        "runs": runs,
        "policy": format!("{:?}", policy).to_lowercase(),
        "placed": placed,
        "max": placed.iter().copied().max(),
        "mean": if runs == 0 { 0.0 } else { total as f64 / runs as f64 },
        "reachedTarget": reached,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
