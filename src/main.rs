use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gizadict::{run_pipeline, AlignConfig, TableFileSource};

/// gizadict - build a bilingual dictionary and align GIZA vocabularies
#[derive(Parser, Debug)]
#[command(name = "gizadict")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source language code (names the word table and the <lang>.vcb file)
    #[arg(long, default_value = "ru")]
    source_lang: String,

    /// Target language code
    #[arg(long, default_value = "en_GB")]
    target_lang: String,

    /// Directory holding the vocabulary files, cache file and output
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Directory of word table exports (<lang>.tsv); defaults to the data directory
    #[arg(long)]
    store_dir: Option<PathBuf>,

    /// Override the dictionary cache file path
    #[arg(long)]
    cache_file: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    if let Err(error) = run(&cli) {
        tracing::error!("{error:#}");
        tracing::info!("process finished with code 1");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = AlignConfig::new(&cli.source_lang, &cli.target_lang, &cli.data_dir);
    if let Some(cache_file) = &cli.cache_file {
        config = config.with_cache_path(cache_file);
    }

    let store_dir = cli.store_dir.clone().unwrap_or_else(|| cli.data_dir.clone());
    let mut source = TableFileSource::new(store_dir);

    let summary = run_pipeline(&config, &mut source).with_context(|| {
        format!(
            "alignment for {} -> {} failed",
            cli.source_lang, cli.target_lang
        )
    })?;

    tracing::info!(
        "wrote {} pairs to {:?} ({} lookup misses, {} dictionary entries)",
        summary.pairs_written,
        config.output_path,
        summary.lookup_misses,
        summary.dictionary_entries,
    );
    Ok(())
}
