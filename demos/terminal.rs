use bit_indices::{BitArray, ParseBitsError, indices_off, indices_on, word_count};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

const BIT_COUNT: usize = 10;
type Bits = BitArray<BIT_COUNT, { word_count(BIT_COUNT) }>;

/// Prints the on and off bit indices of a 10-bit pattern and of its negation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Bit pattern, most significant bit first (at most 10 digits)
    #[arg(default_value = "10110010")]
    pattern: String,
}

fn print_indices(label: &str, indices: impl Iterator<Item = usize>) {
    print!("* {label} are");
    for idx in indices {
        print!(" {idx}");
    }
    println!();
}

fn run(args: &Args) -> Result<(), ParseBitsError> {
    let bits: Bits = args.pattern.parse()?;
    debug!(pattern = %args.pattern, ?bits, "parsed bit pattern");

    println!("For bitset {bits}:");
    print_indices("Indices \"ON\"", indices_on(&bits));
    print_indices("Indices \"OFF\"", indices_off(&bits));
    print_indices("Negated indices \"ON\"", indices_on(!bits));
    print_indices("Negated indices \"OFF\"", indices_off(!bits));
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        error!(pattern = %args.pattern, "{err}");
        std::process::exit(1);
    }
}
