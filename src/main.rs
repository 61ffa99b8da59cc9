use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use wordcross::{
    init_logging, normalize_words, print_grid, print_summary, DictionarySource, EngineConfig,
    PlacementEngine, PolicyKind, Seed, DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS, DEFAULT_WORDS,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// JSON list, `{"words": [...]}` object, or one word per line.
    #[arg(long)]
    dictionary: Option<PathBuf>,
    /// Inline comma separated words, used when no dictionary file is given.
    #[arg(long, value_delimiter = ',')]
    words: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out crossing words and print the grid.
    Generate {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long, help = "Fix the seed for reproducible layouts (e.g., --seed abc)")]
        seed: Option<String>,
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        grid_size: usize,
        #[arg(long, default_value_t = DEFAULT_MIN_WORDS, allow_hyphen_values = true)]
        min_words: i64,
        #[arg(long, default_value_t = DEFAULT_MAX_WORDS, allow_hyphen_values = true)]
        max_words: i64,
        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,
        #[arg(long, value_enum, default_value_t = PolicyKind::Strict)]
        policy: PolicyKind,
        /// Print the result as JSON instead of a grid.
        #[arg(long)]
        json: bool,
    },
    /// Print the cleaned, uppercased, de-duplicated word list.
    Normalize {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        grid_size: usize,
        #[arg(long)]
        json: bool,
    },
}

fn load_source(args: &SourceArgs) -> anyhow::Result<DictionarySource> {
    if let Some(path) = &args.dictionary {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dictionary {}", path.display()))?;
        return Ok(DictionarySource::parse(&text));
    }
    if !args.words.is_empty() {
        return Ok(DictionarySource::from(args.words.clone()));
    }
    Ok(DictionarySource::from(DEFAULT_WORDS.to_vec()))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            source,
            seed,
            grid_size,
            min_words,
            max_words,
            max_attempts,
            policy,
            json,
        } => {
            let dictionary = load_source(&source)?;
            let mut config = EngineConfig::new(dictionary)
                .with_grid_size(grid_size)
                .with_word_range(min_words, max_words)
                .with_max_attempts(max_attempts)
                .with_policy(policy);
            config.seed = seed.map(Seed::from);

            let mut engine = PlacementEngine::new(config);
            engine.reset();
            engine.place_words();

            if json {
                let out = json!({
                    "policy": engine.policy_name(),
                    "seeded": engine.is_seeded(),
                    "result": engine.snapshot(),
                });
                println!("{}", serde_json::to_string(&out)?);
            } else {
                print_grid(engine.grid(), engine.center());
                println!();
                print_summary(engine.history());
                println!();
                for entry in engine.log().iter() {
                    println!("{}", entry);
                }
            }
        }
        Commands::Normalize {
            source,
            grid_size,
            json,
        } => {
            let dictionary = load_source(&source)?;
            let words = normalize_words(dictionary.entries(), grid_size);
            if json {
                println!("{}", serde_json::to_string(&words)?);
            } else {
                for word in words {
                    println!("{}", word);
                }
            }
        }
    }
    Ok(())
}
