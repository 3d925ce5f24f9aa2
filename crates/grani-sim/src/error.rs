//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced by the statevector engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// A circuit needs more qubits than the state holds.
    #[error("Circuit uses {circuit_qubits} qubits but state has {state_qubits}")]
    CircuitTooLarge {
        /// Qubits required by the circuit.
        circuit_qubits: u32,
        /// Qubits in the statevector.
        state_qubits: u32,
    },

    /// An observable references a qubit index that is out of range.
    #[error("Observable references qubit {qubit} but state only has {state_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: u32,
        /// Qubits in the statevector.
        state_qubits: u32,
    },

    /// Two states of different sizes were combined.
    #[error("State size mismatch: {left} qubits vs {right} qubits")]
    SizeMismatch {
        /// Qubits in the left operand.
        left: u32,
        /// Qubits in the right operand.
        right: u32,
    },
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
