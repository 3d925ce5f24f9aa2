//! High-level circuit builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::instruction::Instruction;
use crate::qubit::QubitId;

/// A quantum circuit: an ordered list of gate instructions over a fixed
/// qubit register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// Instructions, in application order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit over `num_qubits` qubits.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            instructions: vec![],
        }
    }

    /// Name of the circuit.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Instructions in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// True if the circuit contains no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    fn check_qubit(&self, qubit: QubitId, gate_name: &'static str) -> IrResult<()> {
        if qubit.0 >= self.num_qubits {
            return Err(IrError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
                gate_name,
            });
        }
        Ok(())
    }

    /// Append a single-qubit gate.
    pub fn apply(&mut self, gate: Gate, qubit: QubitId) -> IrResult<&mut Self> {
        self.check_qubit(qubit, gate.name())?;
        self.instructions.push(Instruction::single(gate, qubit));
        Ok(self)
    }

    /// Append a two-qubit gate.
    pub fn apply_two(&mut self, gate: Gate, q0: QubitId, q1: QubitId) -> IrResult<&mut Self> {
        self.check_qubit(q0, gate.name())?;
        self.check_qubit(q1, gate.name())?;
        if q0 == q1 {
            return Err(IrError::DuplicateQubit {
                qubit: q0,
                gate_name: gate.name(),
            });
        }
        self.instructions.push(Instruction::two(gate, q0, q1));
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::X, qubit)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::Y, qubit)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::Z, qubit)
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::H, qubit)
    }

    /// Apply X rotation.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::Rx(theta), qubit)
    }

    /// Apply Y rotation.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::Ry(theta), qubit)
    }

    /// Apply Z rotation.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::Rz(theta), qubit)
    }

    /// Apply general rotation Rot(φ, θ, ω) = Rz(ω)·Ry(θ)·Rz(φ).
    pub fn rot(&mut self, phi: f64, theta: f64, omega: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::Rot(phi, theta, omega), qubit)
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply_two(Gate::CX, control, target)
    }

    /// Apply controlled-Z gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply_two(Gate::CZ, control, target)
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Append all instructions of `other`.
    ///
    /// Fails if `other` references a qubit outside this circuit's register.
    pub fn extend(&mut self, other: &Circuit) -> IrResult<&mut Self> {
        for inst in other.instructions() {
            for &q in &inst.qubits {
                self.check_qubit(q, inst.name())?;
            }
        }
        self.instructions
            .extend(other.instructions.iter().cloned());
        Ok(self)
    }

    /// The adjoint circuit: instructions reversed, each gate inverted.
    pub fn adjoint(&self) -> Circuit {
        Circuit {
            name: format!("{}_dag", self.name),
            num_qubits: self.num_qubits,
            instructions: self.instructions.iter().rev().map(Instruction::adjoint).collect(),
        }
    }
}
