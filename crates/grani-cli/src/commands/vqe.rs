//! `grani vqe` — lowest eigenenergies of a parsed Hamiltonian by
//! overlap-penalty deflation.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use grani_io::{join_floats, parse_hamiltonian};
use grani_vqa::vqe::{VqeConfig, find_lowest_energies};

pub fn execute(states: usize, iterations: usize, seed: u64) -> Result<()> {
    let input = super::common::read_stdin()?;
    let hamiltonian = parse_hamiltonian(&input).context("Failed to parse Hamiltonian input")?;
    info!(
        terms = hamiltonian.n_terms(),
        qubits = hamiltonian.min_qubits(),
        "hamiltonian parsed"
    );

    let config = VqeConfig {
        iterations,
        ..VqeConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let energies = find_lowest_energies(&hamiltonian, states, &config, &mut rng)
        .context("VQE optimisation failed")?;

    println!("{}", join_floats(&energies));
    Ok(())
}
