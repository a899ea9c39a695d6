mod error;
mod logging;

use std::io::{self, Write};

use clap::Parser;
use melt_rs::SaltConditions;
use tracing::debug;

use crate::error::Result;

/// Calculate nucleotide melting temps
#[derive(Parser, Debug)]
#[command(name = "Tm", version, about, long_about = None)]
struct Args {
    /// Nucleotide sequence
    #[arg()]
    seq: String,

    /// Do not use monovalent/divalent cation corrections
    #[arg(long)]
    uncorrected: bool,

    /// DNA concentration (nM)
    #[arg(short, long, allow_negative_numbers = true, default_value_t = SaltConditions::DEFAULT.dna)]
    dna: f64,

    /// Na+ concentration (mM)
    #[arg(long, allow_negative_numbers = true, default_value_t = SaltConditions::DEFAULT.na)]
    na: f64,

    /// Mg++ concentration (mM)
    #[arg(long, allow_negative_numbers = true, default_value_t = SaltConditions::DEFAULT.mg)]
    mg: f64,

    /// Nucleotide triphosphate concentration (mM)
    #[arg(long, allow_negative_numbers = true, default_value_t = SaltConditions::DEFAULT.dntps)]
    dntp: f64,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all logging
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn conditions(&self) -> SaltConditions {
        SaltConditions {
            dna: self.dna,
            na: self.na,
            mg: self.mg,
            dntps: self.dntp,
        }
    }
}

fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let conditions = args.conditions();
    debug!(?conditions, uncorrected = args.uncorrected, "calculating tm");

    let tm = if args.uncorrected {
        melt_rs::compute_tm_uncorrected(args.seq.as_bytes(), conditions.dna)?
    } else {
        melt_rs::compute_tm(args.seq.as_bytes(), &conditions)?
    };

    writeln!(out, "{tm:03.1}")?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    let result = logging::setup_logging(args.verbose, args.quiet)
        .and_then(|()| run(&args, &mut io::stdout().lock()));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
