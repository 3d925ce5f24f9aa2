//! `grani-io` — the challenge text grammar.
//!
//! The judge-facing wire format of the three tools:
//!
//! - `XXX` separates the three dataset sections (training rows, training
//!   labels, test rows)
//! - `S` separates rows / Hamiltonian records
//! - `,` separates numeric fields
//! - spaces separate tokens within a Hamiltonian record:
//!   `<sign> <magnitude> <op><site> ...`
//!
//! Malformed input is rejected with a descriptive [`ParseError`], and an
//! unknown operator tag is a hard error rather than a silently dropped term.
//!
//! # Example
//!
//! ```rust
//! use grani_io::parse_hamiltonian;
//!
//! let h = parse_hamiltonian("+ 0.5 Z0 X1S- 1.0 I").unwrap();
//! assert_eq!(h.n_terms(), 2);
//! assert!((h.terms()[1].coeff - (-1.0)).abs() < 1e-12);
//! ```

pub mod dataset;
pub mod error;
pub mod format;
pub mod hamiltonian;

pub use dataset::{Dataset, parse_dataset, parse_labels, parse_weights};
pub use error::{ParseError, ParseResult};
pub use format::{join_floats, join_labels, join_rounded};
pub use hamiltonian::parse_hamiltonian;

/// Major section separator (dataset input only).
pub const SECTION_SEPARATOR: &str = "XXX";
/// Row / record separator.
pub const ROW_SEPARATOR: char = 'S';
/// Numeric field separator.
pub const FIELD_SEPARATOR: char = ',';
