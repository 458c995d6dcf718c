use anyhow::Context;
use clap::{Parser, Subcommand};
use phonetic_lookup::{
    normalize, Collection, Config, Dictionary, EncoderSet, MatchMode, PhoneticSearch, Record,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "phonetic-lookup")]
#[command(about = "Sound-alike lookup of node and type names", long_about = None)]
struct Args {
    /// Dictionary document (overrides config and environment)
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Config file (defaults to ./phonetic-lookup.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log the generated code, candidates and selected record
    #[arg(long, global = true)]
    debug: bool,

    /// Distinct codes kept by fuzzy matching
    #[arg(long, global = true)]
    fuzzy_limit: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the record that best matches a spoken or typed query
    Search {
        query: String,

        /// Collection to search (nodes or types)
        #[arg(long, default_value = "nodes")]
        collection: Collection,

        /// Phonetic encoder
        #[arg(long, default_value = "metaphone")]
        encoder: String,

        /// Code matching mode (exact or fuzzy)
        #[arg(long, default_value = "exact")]
        mode: MatchMode,
    },
    /// Print the normalized text and every encoder's code for it
    Encode { text: String },
    /// Build a dictionary document from a file with one name per line
    Annotate {
        names_file: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phonetic_lookup=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = resolve_config(&args)?;

    match args.command {
        Command::Search {
            query,
            collection,
            encoder,
            mode,
        } => {
            let engine = PhoneticSearch::from_config(&config)
                .with_context(|| format!("Failed to load dictionary {}", config.dictionary_path.display()))?;

            match engine.search_with(&query, collection, &encoder, mode)? {
                Some(record) => println!("{}", serde_json::to_string_pretty(record)?),
                None => println!("no match"),
            }
        }
        Command::Encode { text } => {
            let normalized = normalize(&text)?;
            println!("normalized: {}", normalized);
            for (field, code) in EncoderSet::standard().encode_all(&normalized) {
                println!("{:>16}: {}", field, code);
            }
        }
        Command::Annotate { names_file, output } => {
            let dictionary = annotate(&names_file)?;
            match output {
                Some(path) => {
                    dictionary.save(&path)?;
                    tracing::info!("Wrote {} records to {}", dictionary.nodes.len(), path.display());
                }
                None => println!("{}", dictionary.to_json_pretty()?),
            }
        }
    }

    Ok(())
}

/// Config file, then environment, then command-line flags.
fn resolve_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.apply_env_overrides();
            config
        }
        None => Config::load(Path::new("."))?,
    };

    if let Some(path) = &args.dictionary {
        config.dictionary_path = path.clone();
    }
    if args.debug {
        config.debug = true;
    }
    if let Some(limit) = args.fuzzy_limit {
        config.fuzzy_limit = limit;
    }
    Ok(config)
}

fn annotate(names_file: &Path) -> anyhow::Result<Dictionary> {
    let content = std::fs::read_to_string(names_file)
        .with_context(|| format!("Failed to read {}", names_file.display()))?;

    let encoders = EncoderSet::standard();
    let nodes = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|name| Record::encoded(name, &encoders))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Dictionary::new(nodes, Vec::new()))
}
