use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, eyre};
use elapsed::measure_time;
use itertools::Itertools;
use log::info;
use num_bigint::BigUint;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use factor_sat_core::factoring::{self, FactoringInstance, GeneratorConfig};
use factor_sat_core::karatsuba;

mod numbers;
mod output;

use numbers::PrimeFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Encodes the factorization of an integer as a DIMACS CNF")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Factorize a specific number.
    Number {
        /// The number to be factorized.
        value: String,

        /// Redirect the CNF to a file. `-` (or omitting this flag) writes to
        /// stdout; a bare `-o`/`--outfile` with no value, or an existing
        /// directory, gets a default filename inside it.
        #[clap(short, long, min_values = 0, default_missing_value = "")]
        outfile: Option<String>,
    },
    /// Generate a random number and factorize it.
    Random {
        /// Inclusive upper bound on the generated number.
        max_value: String,

        /// Inclusive lower bound on the generated number.
        #[clap(long, default_value = "2")]
        min_value: String,

        /// Seed for the pseudorandom generator; a fresh seed is drawn (and
        /// echoed in the output's comments) if omitted.
        #[clap(short, long)]
        seed: Option<u64>,

        /// Require the generated number to be prime.
        #[clap(long, conflicts_with = "no_prime")]
        prime: bool,

        /// Require the generated number to be composite.
        #[clap(long = "no-prime", conflicts_with = "prime")]
        no_prime: bool,

        /// Miller-Rabin error bound; omit it (or pass <= 0) for deterministic
        /// trial-division primality.
        #[clap(long)]
        error: Option<f64>,

        /// Maximum number of draws before giving up.
        #[clap(long, default_value_t = 100)]
        tries: u32,

        /// Redirect the CNF to a file, as in `number`.
        #[clap(short, long, min_values = 0, default_missing_value = "")]
        outfile: Option<String>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    TermLogger::init(LevelFilter::Info, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;

    let args = Cli::parse();
    info!("args = {:?}", args);

    match args.command {
        Command::Number { value, outfile } => run_number(&value, outfile.as_deref()),
        Command::Random {
            max_value,
            min_value,
            seed,
            prime,
            no_prime,
            error,
            tries,
            outfile,
        } => run_random(
            &max_value,
            &min_value,
            seed,
            filter_from_flags(prime, no_prime),
            error,
            tries,
            outfile.as_deref(),
        ),
    }
}

fn filter_from_flags(prime: bool, no_prime: bool) -> PrimeFilter {
    if prime {
        PrimeFilter::Prime
    } else if no_prime {
        PrimeFilter::Composite
    } else {
        PrimeFilter::Any
    }
}

fn run_number(value: &str, outfile: Option<&str>) -> color_eyre::Result<()> {
    let n: BigUint = value.parse().map_err(|_| eyre!("invalid number: '{}'", value))?;
    if n < BigUint::from(2u32) {
        bail!("N must be at least 2, got {}", n);
    }

    let (elapsed, instance) = measure_time(|| factoring::factorize(&n));
    info!(
        "encoded N={} into {} variables / {} clauses in {}",
        n,
        instance.cnf.number_of_variables,
        instance.cnf.num_clauses(),
        elapsed
    );

    let comments = instance_comments(&instance);
    let destination = output::resolve_output_path(outfile, &output::default_filename_number(&n));
    output::write_cnf(&instance, &comments, destination)?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_random(
    max_value: &str,
    min_value: &str,
    seed: Option<u64>,
    filter: PrimeFilter,
    error: Option<f64>,
    tries: u32,
    outfile: Option<&str>,
) -> color_eyre::Result<()> {
    let max_value: BigUint = max_value
        .parse()
        .map_err(|_| eyre!("invalid max-value: '{}'", max_value))?;
    let min_value: BigUint = min_value
        .parse()
        .map_err(|_| eyre!("invalid min-value: '{}'", min_value))?;
    if min_value < BigUint::from(2u32) {
        bail!("min-value must be at least 2, got {}", min_value);
    }
    if min_value >= max_value {
        bail!("min-value ({}) must be less than max-value ({})", min_value, max_value);
    }

    let generated = numbers::generate_number(&min_value, &max_value, seed, filter, error, tries)?;
    info!("generated N={} with seed={}", generated.value, generated.seed);

    let generator_config = GeneratorConfig {
        seed: Some(generated.seed),
        min_len: None,
    };
    let (elapsed, instance) = measure_time(|| {
        factoring::factorize_with(&generated.value, karatsuba::MIN_LEN, Some(generator_config))
    });
    info!(
        "encoded N={} into {} variables / {} clauses in {}",
        generated.value,
        instance.cnf.number_of_variables,
        instance.cnf.num_clauses(),
        elapsed
    );

    let comments = random_comments(&instance, &min_value, &max_value, generated.seed);
    let default_name = output::default_filename_random(generated.seed, &max_value);
    let destination = output::resolve_output_path(outfile, &default_name);
    output::write_cnf(&instance, &comments, destination)?;
    Ok(())
}

/// Factor/variable comments shared by both subcommands
/// (`gen_factor_sat/factoring_sat.py::FactoringSat.to_dimacs`).
fn instance_comments(instance: &FactoringInstance) -> Vec<String> {
    vec![
        format!("Factorization of the number: {}", instance.n),
        format!(
            "Factor 1 is encoded in the variables: [{}]",
            instance.factor_1_vars.iter().copied().join(", ")
        ),
        format!(
            "Factor 2 is encoded in the variables: [{}]",
            instance.factor_2_vars.iter().copied().join(", ")
        ),
    ]
}

fn random_comments(instance: &FactoringInstance, min_value: &BigUint, max_value: &BigUint, seed: u64) -> Vec<String> {
    let mut comments = vec![
        format!("Random number in range: {} - {}", min_value, max_value),
        format!("Seed: {}", seed),
        String::new(),
    ];
    comments.extend(instance_comments(instance));
    comments
}
