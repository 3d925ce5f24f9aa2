//! `grani-vqa` — variational quantum algorithms.
//!
//! The three solvers behind the Grani command-line tools:
//!
//! - [`classifier`]: a 3-qubit, 3-class variational classifier trained with
//!   Adam over mini-batches.
//! - [`shift`]: parameter-shift gradients and Hessians of a counted
//!   objective, plus the fixed 5-parameter challenge circuit.
//! - [`vqe`]: excited-state search by overlap-penalty deflation with
//!   Nesterov-momentum descent.
//!
//! Supporting modules: [`ansatz`] (circuit templates) and [`optimizer`]
//! (gradient-descent steppers). All randomness is drawn from a caller
//! supplied RNG; nothing seeds global state.

pub mod ansatz;
pub mod classifier;
pub mod error;
pub mod optimizer;
pub mod shift;
pub mod vqe;

pub use classifier::{ClassifierConfig, TrainedClassifier};
pub use error::{VqaError, VqaResult};
pub use optimizer::{Adam, NesterovMomentum};
pub use shift::gradient_and_hessian;
pub use vqe::VqeConfig;
