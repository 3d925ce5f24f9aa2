//! Quantum gate types.
//!
//! All rotation angles are concrete `f64` values. The variational solvers
//! rebuild circuits for each parameter assignment, so symbolic parameters
//! are not represented.

use serde::{Deserialize, Serialize};

/// Gates understood by the statevector engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    // Single-qubit Pauli gates
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,

    /// Hadamard gate.
    H,

    // Single-qubit rotation gates
    /// Rotation around X axis.
    Rx(f64),
    /// Rotation around Y axis.
    Ry(f64),
    /// Rotation around Z axis.
    Rz(f64),
    /// General rotation Rot(φ, θ, ω) = Rz(ω)·Ry(θ)·Rz(φ).
    Rot(f64, f64, f64),

    // Two-qubit gates
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
}

impl Gate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::X => "x",
            Gate::Y => "y",
            Gate::Z => "z",
            Gate::H => "h",
            Gate::Rx(_) => "rx",
            Gate::Ry(_) => "ry",
            Gate::Rz(_) => "rz",
            Gate::Rot(_, _, _) => "rot",
            Gate::CX => "cx",
            Gate::CZ => "cz",
        }
    }

    /// Number of qubits this gate acts on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::CX | Gate::CZ => 2,
            _ => 1,
        }
    }

    /// The adjoint (inverse) of this gate.
    ///
    /// Used to uncompute an ansatz when measuring state overlaps.
    pub fn adjoint(&self) -> Gate {
        match *self {
            Gate::Rx(theta) => Gate::Rx(-theta),
            Gate::Ry(theta) => Gate::Ry(-theta),
            Gate::Rz(theta) => Gate::Rz(-theta),
            // (Rz(ω)·Ry(θ)·Rz(φ))† = Rz(-φ)·Ry(-θ)·Rz(-ω)
            Gate::Rot(phi, theta, omega) => Gate::Rot(-omega, -theta, -phi),
            // Self-inverse gates
            g => g,
        }
    }
}
