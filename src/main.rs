use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use prime_directive::{Error, IntPair, PrimeFactorSequence, SequenceConfig};
use std::fmt::Display;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "prime-directive")]
#[command(version, about = "Prime factor counts, close pairs and walks to primes over 0..=bound")]
struct Cli {
    /// Upper bound of the integer range, must be positive
    #[arg(short, long, allow_negative_numbers = true)]
    bound: i64,

    /// Number of filtered subsequences kept in the cache, 0 disables it
    #[arg(long, default_value_t = SequenceConfig::default().filter_cache)]
    cache: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the factor count of every integer from 0 to the bound
    Sequence,

    /// Print the factor count of a single integer
    Count { n: u64 },

    /// Print the integers with exactly M prime factors
    Exact { m: u32 },

    /// Print neighbouring integers with exactly M prime factors at most GAP apart
    Pairs { m: u32, gap: u64 },

    /// Print the walk from N to a prime ("-" if none is found within the bound)
    Reach { n: u64 },
}

fn list<T: Display>(items: &[T]) -> String {
    let body: Vec<String> = items.iter().map(|i| i.to_string()).collect();
    format!("[{}]", body.join(", "))
}

fn run(cli: Cli) -> Result<String> {
    let bound = u64::try_from(cli.bound).map_err(|_| Error::InvalidBound)?;
    let config = SequenceConfig {
        filter_cache: cli.cache,
    };
    let seq = PrimeFactorSequence::with_config(bound, config)?;

    Ok(match cli.command {
        Command::Sequence => list(&seq.factor_count_sequence()),
        Command::Count { n } => seq.count_factors(n)?.to_string(),
        Command::Exact { m } => list(&seq.numbers_with_exact_factor_count(m)),
        Command::Pairs { m, gap } => list::<IntPair>(&seq.close_adjacent_pairs(m, gap)),
        Command::Reach { n } => {
            ensure!(n <= bound, Error::OutOfRange { value: n, bound });
            seq.change_to_prime(n)
        }
    })
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let output = run(Cli::parse())?;
    println!("{}", output);
    Ok(())
}
