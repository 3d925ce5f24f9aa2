//! `grani-sim` — statevector simulation for variational circuits.
//!
//! Provides the two pieces the variational solvers need:
//!
//! - a **Hamiltonian model**: a sum of weighted Pauli strings,
//!   H = Σ_k c_k · P_k
//! - a **statevector engine** that runs `grani_ir::Circuit`s and evaluates
//!   Pauli-observable expectation values and state overlaps exactly.
//!
//! # Quick start
//!
//! ```rust
//! use grani_ir::{Circuit, QubitId};
//! use grani_sim::{Hamiltonian, HamiltonianTerm, Statevector};
//!
//! // ⟨Z₀⟩ on |1⟩ is -1
//! let mut circuit = Circuit::new("flip", 1);
//! circuit.x(QubitId(0)).unwrap();
//!
//! let sv = Statevector::from_circuit(&circuit).unwrap();
//! let h = Hamiltonian::from_terms(vec![HamiltonianTerm::z(0, 1.0)]);
//! let e = sv.expectation_hamiltonian(&h).unwrap();
//! assert!((e - (-1.0)).abs() < 1e-12);
//! ```

pub mod error;
pub mod hamiltonian;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use hamiltonian::{Hamiltonian, HamiltonianTerm, PauliOp, PauliString};
pub use statevector::Statevector;
