use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use pattern_catalog::load_catalog;
use pattern_frequency::FrequencyTracker;
use pattern_search::SearchIndex;
use std::path::PathBuf;

mod guide;
mod output;
mod render;

#[derive(Parser)]
#[command(name = "pattern-finder")]
#[command(about = "Guided pattern recommendation over a tool catalog", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog file: a JSON array of pattern records
    #[arg(long, global = true, default_value = "catalog.json")]
    catalog: PathBuf,

    /// Frequency snapshot path
    #[arg(long, global = true, default_value = ".pattern-finder/frequency.json")]
    store: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the guided questions and get matching patterns
    Guide,

    /// Search the catalog by tool-name substring
    Search(SearchArgs),

    /// Resolve a suggestion key and show its records
    Resolve(ResolveArgs),

    /// List the deduplicated tool-name suggestions
    Suggest(SuggestArgs),

    /// Show the most-searched patterns leaderboard
    Top(TopArgs),
}

#[derive(Args)]
struct SearchArgs {
    /// Substring to match against tool names
    text: String,

    /// Emit JSON instead of cards
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ResolveArgs {
    /// Stable suggestion key (see `suggest`)
    key: String,

    /// Emit JSON instead of cards
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SuggestArgs {
    /// Emit JSON instead of a plain list
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TopArgs {
    /// How many leaderboard rows to show
    #[arg(short = 'n', long = "limit", default_value_t = 10)]
    limit: usize,

    /// Emit JSON instead of the rendered leaderboard
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // --json implies quiet so stdout stays machine-readable.
    let json_output = match &cli.command {
        Commands::Guide => false,
        Commands::Search(args) => args.json,
        Commands::Resolve(args) => args.json,
        Commands::Suggest(args) => args.json,
        Commands::Top(args) => args.json,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let result = match &cli.command {
        Commands::Guide => guide::run(&cli.catalog, &cli.store).await,
        Commands::Search(args) => run_search(&cli, args).await,
        Commands::Resolve(args) => run_resolve(&cli, args).await,
        Commands::Suggest(args) => run_suggest(&cli, args).await,
        Commands::Top(args) => run_top(&cli, args),
    };

    if let Err(err) = result {
        if json_output {
            output::print_error(&format!("{err:#}"));
            std::process::exit(1);
        }
        return Err(err);
    }
    Ok(())
}

async fn run_search(cli: &Cli, args: &SearchArgs) -> Result<()> {
    let records = load_catalog(&cli.catalog)
        .await
        .context("Failed to load catalog")?;
    let index = SearchIndex::build(&records);
    let matches = index.query(&args.text);

    if args.json {
        output::print_ok(&output::SearchOutput {
            query: args.text.clone(),
            matches: matches.iter().map(|&r| r.clone()).collect(),
        })
    } else {
        render::print_candidates(&matches.iter().map(|&r| r.clone()).collect::<Vec<_>>());
        Ok(())
    }
}

async fn run_resolve(cli: &Cli, args: &ResolveArgs) -> Result<()> {
    let records = load_catalog(&cli.catalog)
        .await
        .context("Failed to load catalog")?;
    let index = SearchIndex::build(&records);
    let entry = index
        .resolve(&args.key)
        .with_context(|| format!("Unknown suggestion key: {}", args.key))?;

    // Selecting a suggestion by identity is a resolution event.
    let mut tracker = FrequencyTracker::open(&cli.store);
    tracker.record(&entry.label);

    let resolved: Vec<_> = index.records_for(entry).iter().map(|&r| r.clone()).collect();
    if args.json {
        output::print_ok(&output::ResolveOutput {
            key: entry.key.clone(),
            label: entry.label.clone(),
            records: resolved,
        })
    } else {
        render::print_candidates(&resolved);
        Ok(())
    }
}

async fn run_suggest(cli: &Cli, args: &SuggestArgs) -> Result<()> {
    let records = load_catalog(&cli.catalog)
        .await
        .context("Failed to load catalog")?;
    let index = SearchIndex::build(&records);

    if args.json {
        output::print_ok(&output::SuggestOutput {
            suggestions: index
                .entries()
                .iter()
                .map(|entry| output::Suggestion {
                    key: entry.key.clone(),
                    label: entry.label.clone(),
                })
                .collect(),
        })
    } else {
        for entry in index.entries() {
            println!("{:>4}  {}", entry.key, entry.label);
        }
        Ok(())
    }
}

fn run_top(cli: &Cli, args: &TopArgs) -> Result<()> {
    let tracker = FrequencyTracker::open(&cli.store);
    let board = tracker.top_n(args.limit);

    if args.json {
        output::print_ok(&output::TopOutput {
            total: board.total,
            entries: board
                .entries
                .iter()
                .map(|entry| output::TopEntry {
                    name: entry.name.clone(),
                    count: entry.count,
                    share: board.share(entry.count),
                })
                .collect(),
        })
    } else {
        render::print_leaderboard(&board);
        Ok(())
    }
}
