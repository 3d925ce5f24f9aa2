//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};

use crate::gate::Gate;
use crate::qubit::QubitId;

/// A gate together with the qubits it acts on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate.
    pub gate: Gate,
    /// Qubits this instruction operates on, in gate-operand order.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a single-qubit gate instruction.
    pub fn single(gate: Gate, qubit: QubitId) -> Self {
        Self {
            gate,
            qubits: vec![qubit],
        }
    }

    /// Create a two-qubit gate instruction.
    pub fn two(gate: Gate, q0: QubitId, q1: QubitId) -> Self {
        Self {
            gate,
            qubits: vec![q0, q1],
        }
    }

    /// The instruction's adjoint, with the same operands.
    pub fn adjoint(&self) -> Self {
        Self {
            gate: self.gate.adjoint(),
            qubits: self.qubits.clone(),
        }
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> &'static str {
        self.gate.name()
    }
}
