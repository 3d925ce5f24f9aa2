//! Grani Command-Line Interface
//!
//! Three one-shot variational-quantum tools sharing one shape: read all of
//! standard input, parse the challenge text grammar, solve, print a single
//! comma-separated line to standard output.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{classify, gradient, vqe};

/// Grani - variational quantum challenge tools
#[derive(Parser)]
#[command(name = "grani")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a variational classifier and predict labels for the test rows
    Classify {
        /// Adam training iterations
        #[arg(long, default_value = "80")]
        iterations: usize,

        /// Mini-batch size
        #[arg(long, default_value = "5")]
        batch_size: usize,

        /// RNG seed for weight init and batch sampling
        #[arg(long, default_value = "1111")]
        seed: u64,
    },

    /// Parameter-shift gradient and Hessian of the fixed challenge circuit
    Gradient,

    /// Find the lowest eigenenergies of a Hamiltonian by deflation VQE
    Vqe {
        /// Number of lowest energies to find
        #[arg(long, default_value = "3")]
        states: usize,

        /// Nesterov iterations per state
        #[arg(long, default_value = "200")]
        iterations: usize,

        /// RNG seed for ansatz initialisation
        #[arg(long, default_value = "123")]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Classify {
            iterations,
            batch_size,
            seed,
        } => classify::execute(iterations, batch_size, seed),

        Commands::Gradient => gradient::execute(),

        Commands::Vqe {
            states,
            iterations,
            seed,
        } => vqe::execute(states, iterations, seed),
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
