use clap::{Parser, Subcommand};
use tracing::{debug, error};

use seqops::catalog;
use seqops::demo;
use seqops::input;
use seqops::ops;

/// Build reusable closures and apply them to integer sequences
#[derive(Parser)]
#[command(name = "seqops")]
#[command(about = "Build filter, map, and fold closures over integer sequences", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demonstration (default command)
    Demo,
    /// Keep the elements a named predicate accepts
    Filter {
        /// Predicate to build the filter from (odd, even, positive, negative)
        #[arg(short, long)]
        predicate: String,

        /// Integers forming the first batch
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Further batch, as a whitespace-separated list (repeatable)
        #[arg(short, long, allow_hyphen_values = true)]
        batch: Vec<String>,
    },
    /// Transform every element with a named transform
    Map {
        /// Transform to build the mapper from (double, square, negate, abs)
        #[arg(short, long)]
        transform: String,

        /// Integers forming the first batch
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Further batch, as a whitespace-separated list (repeatable)
        #[arg(short, long, allow_hyphen_values = true)]
        batch: Vec<String>,
    },
    /// Fold batches into one persistent accumulator
    Reduce {
        /// Combiner folding each element into the accumulator (add, mul, min, max)
        #[arg(short, long)]
        combiner: String,

        /// Starting accumulator value
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        initial: i64,

        /// Integers forming the first batch
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Further batch, as a whitespace-separated list (repeatable)
        #[arg(short, long, allow_hyphen_values = true)]
        batch: Vec<String>,
    },
    /// Transform each element, then fold it into one persistent accumulator
    MapReduce {
        /// Transform applied to each element before folding (double, square, negate, abs)
        #[arg(short, long)]
        transform: String,

        /// Combiner folding each transformed element into the accumulator (add, mul, min, max)
        #[arg(short, long)]
        combiner: String,

        /// Starting accumulator value
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        initial: i64,

        /// Integers forming the first batch
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Further batch, as a whitespace-separated list (repeatable)
        #[arg(short, long, allow_hyphen_values = true)]
        batch: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => run_demo(),
        Commands::Filter {
            predicate,
            values,
            batch,
        } => run_filter(&predicate, values, &batch),
        Commands::Map {
            transform,
            values,
            batch,
        } => run_map(&transform, values, &batch),
        Commands::Reduce {
            combiner,
            initial,
            values,
            batch,
        } => run_reduce(&combiner, initial, values, &batch),
        Commands::MapReduce {
            transform,
            combiner,
            initial,
            values,
            batch,
        } => run_map_reduce(&transform, &combiner, initial, values, &batch),
    };

    if let Err(e) = result {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_demo() -> anyhow::Result<()> {
    for line in demo::lines() {
        println!("{line}");
    }
    Ok(())
}

fn run_filter(name: &str, values: Vec<i64>, batches: &[String]) -> anyhow::Result<()> {
    let keep = ops::filter(catalog::predicate(name)?);
    let gathered = input::gather_batches(values, batches)?;
    debug!("Filtering {} batch(es) with predicate '{}'", gathered.len(), name);
    for batch in &gathered {
        println!("{}", demo::format_seq(&keep(batch)));
    }
    Ok(())
}

fn run_map(name: &str, values: Vec<i64>, batches: &[String]) -> anyhow::Result<()> {
    let apply = ops::map(catalog::transform(name)?);
    let gathered = input::gather_batches(values, batches)?;
    debug!("Mapping {} batch(es) with transform '{}'", gathered.len(), name);
    for batch in &gathered {
        println!("{}", demo::format_seq(&apply(batch)));
    }
    Ok(())
}

fn run_reduce(
    name: &str,
    initial: i64,
    values: Vec<i64>,
    batches: &[String],
) -> anyhow::Result<()> {
    let mut fold = ops::reduce(initial, catalog::combiner(name)?);
    let gathered = input::gather_batches(values, batches)?;
    debug!(
        "Folding {} batch(es) with combiner '{}' from {}",
        gathered.len(),
        name,
        initial
    );
    if gathered.is_empty() {
        println!("{}", fold(&[]));
        return Ok(());
    }
    for batch in &gathered {
        println!("{}", fold(batch));
    }
    Ok(())
}

fn run_map_reduce(
    transform: &str,
    combiner: &str,
    initial: i64,
    values: Vec<i64>,
    batches: &[String],
) -> anyhow::Result<()> {
    let mut fold = ops::map_reduce(
        initial,
        catalog::transform(transform)?,
        catalog::combiner(combiner)?,
    );
    let gathered = input::gather_batches(values, batches)?;
    debug!(
        "Transforming with '{}' and folding {} batch(es) with combiner '{}' from {}",
        transform,
        gathered.len(),
        combiner,
        initial
    );
    if gathered.is_empty() {
        println!("{}", fold(&[]));
        return Ok(());
    }
    for batch in &gathered {
        println!("{}", fold(batch));
    }
    Ok(())
}
