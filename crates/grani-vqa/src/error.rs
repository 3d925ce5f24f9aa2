//! Error types for the variational algorithms.

use thiserror::Error;

/// Errors produced by the variational solvers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VqaError {
    /// Training set is empty.
    #[error("Training set is empty")]
    EmptyTrainingSet,

    /// Feature/label row counts disagree.
    #[error("Label count ({labels}) does not match training row count ({rows})")]
    LabelCountMismatch {
        /// Number of labels.
        labels: usize,
        /// Number of training rows.
        rows: usize,
    },

    /// A label outside the supported set.
    #[error("Label {0} is not one of -1, 0, 1")]
    InvalidLabel(i64),

    /// Feature vector width does not match the circuit register.
    #[error("Expected feature vectors of width {expected}, got {got}")]
    FeatureWidthMismatch {
        /// Required width.
        expected: usize,
        /// Provided width.
        got: usize,
    },

    /// Wrong number of parameters for a fixed-shape circuit.
    #[error("Expected {expected} parameters, got {got}")]
    WrongParameterCount {
        /// Required count.
        expected: usize,
        /// Provided count.
        got: usize,
    },

    /// Hamiltonian has no qubits to act on.
    #[error("Hamiltonian has no qubits to act on")]
    EmptyHamiltonian,

    /// Simulation failed.
    #[error("Simulation error: {0}")]
    Sim(#[from] grani_sim::SimError),

    /// Circuit construction failed.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] grani_ir::IrError),
}

/// Result type for variational solver operations.
pub type VqaResult<T> = Result<T, VqaError>;
