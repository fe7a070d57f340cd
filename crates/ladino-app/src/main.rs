use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use ladino_config::{Config, Settings};
use ladino_core::RunContext;
use ladino_core::dictionary::load_dictionary_with;
use ladino_core::language::Conjugator;
use ladino_lang::LadinoConjugator;

mod export;

/// Build the Ladino dictionary from its word files
#[derive(Debug, Parser)]
#[command(name = "ladino", version)]
struct Cli {
    /// Dictionary repository: config.yaml plus a directory of word files
    #[arg(long)]
    dictionary: PathBuf,

    /// Only read this many word files
    #[arg(long)]
    limit: Option<usize>,

    /// Write word_mapping.json and count.json into this directory
    #[arg(long)]
    json: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Fill in regular conjugations the word files leave out
    #[arg(long)]
    synthesize_conjugations: bool,

    /// Additional logging
    #[arg(long)]
    log: bool,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.log)?;

    let context = RunContext::new();
    tracing::info!("Start generating Ladino dictionary");

    run(&cli)?;

    tracing::info!("Elapsed time: {} sec", context.elapsed().as_secs());
    Ok(())
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose { "info" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(default))?;

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = Settings::from_env();
    let limit = cli.limit.or(settings.limit);

    let config = Config::load(&cli.dictionary)?;

    let conjugator = LadinoConjugator::new();
    let conjugator = cli
        .synthesize_conjugations
        .then_some(&conjugator as &dyn Conjugator);

    let words_dir = cli.dictionary.join(&settings.words_dir);
    let dictionary = load_dictionary_with(&config, limit, &words_dir, conjugator)
        .with_context(|| format!("Failed to load dictionary from {}", words_dir.display()))?;

    for (language, count) in &dictionary.count {
        tracing::info!(
            "{}: {} words, {} examples",
            language,
            count.words,
            count.examples
        );
    }

    if let Some(dir) = &cli.json {
        export::write_json(&dictionary, dir, cli.pretty)?;
    }

    Ok(())
}
