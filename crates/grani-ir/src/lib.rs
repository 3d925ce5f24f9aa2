//! Grani Circuit Intermediate Representation
//!
//! Core data structures for representing the parameterized quantum circuits
//! used by the variational solvers. Circuits are stored as a flat, ordered
//! instruction list; there are no compilation passes in Grani, so no DAG
//! is needed.
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use grani_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new("bell_state", 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.len(), 2);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::Gate;
pub use instruction::Instruction;
pub use qubit::QubitId;
