//! Statevector simulation engine.

use num_complex::Complex64;
use rand::Rng;

use grani_ir::{Circuit, Gate, Instruction};

use crate::error::{SimError, SimResult};
use crate::hamiltonian::{Hamiltonian, PauliOp, PauliString};

/// A statevector representing a pure quantum state.
#[derive(Debug, Clone)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: u32,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: u32) -> Self {
        let size = 1usize << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Run a circuit on |0...0⟩ and return the resulting state.
    pub fn from_circuit(circuit: &Circuit) -> SimResult<Self> {
        let mut sv = Self::new(circuit.num_qubits());
        sv.run(circuit)?;
        Ok(sv)
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The raw amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Apply all instructions of a circuit in order.
    pub fn run(&mut self, circuit: &Circuit) -> SimResult<()> {
        if circuit.num_qubits() > self.num_qubits {
            return Err(SimError::CircuitTooLarge {
                circuit_qubits: circuit.num_qubits(),
                state_qubits: self.num_qubits,
            });
        }
        for inst in circuit.instructions() {
            self.apply(inst);
        }
        Ok(())
    }

    /// Apply a single instruction.
    ///
    /// Operand ranges are validated at circuit-construction time by
    /// `grani_ir`, so this does not re-check them.
    pub fn apply(&mut self, instruction: &Instruction) {
        let q = |i: usize| instruction.qubits[i].index();
        match instruction.gate {
            Gate::X => self.apply_x(q(0)),
            Gate::Y => self.apply_y(q(0)),
            Gate::Z => self.apply_z(q(0)),
            Gate::H => self.apply_h(q(0)),
            Gate::Rx(theta) => self.apply_rx(q(0), theta),
            Gate::Ry(theta) => self.apply_ry(q(0), theta),
            Gate::Rz(theta) => self.apply_rz(q(0), theta),
            Gate::Rot(phi, theta, omega) => {
                self.apply_rz(q(0), phi);
                self.apply_ry(q(0), theta);
                self.apply_rz(q(0), omega);
            }
            Gate::CX => self.apply_cx(q(0), q(1)),
            Gate::CZ => self.apply_cz(q(0), q(1)),
        }
    }

    // =========================================================================
    // Gate kernels
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1usize << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..(1usize << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1usize << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1usize << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_rx(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        let neg_i_s = Complex64::new(0.0, -s);
        for i in 0..(1usize << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + neg_i_s * b;
                self.amplitudes[j] = neg_i_s * a + c * b;
            }
        }
    }

    fn apply_ry(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        for i in 0..(1usize << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - s * b;
                self.amplitudes[j] = s * a + c * b;
            }
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for i in 0..(1usize << self.num_qubits) {
            if i & mask == 0 {
                self.amplitudes[i] *= phase_0;
            } else {
                self.amplitudes[i] *= phase_1;
            }
        }
    }

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1usize << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_cz(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1usize << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    // =========================================================================
    // Observables
    // =========================================================================

    /// Exact expectation value ⟨ψ|P|ψ⟩ of a Pauli string.
    pub fn expectation(&self, pauli: &PauliString) -> SimResult<f64> {
        if let Some(max) = pauli.max_qubit() {
            if max >= self.num_qubits {
                return Err(SimError::QubitOutOfRange {
                    qubit: max,
                    state_qubits: self.num_qubits,
                });
            }
        }
        // ⟨ψ|P|ψ⟩ = ⟨ψ|φ⟩ with |φ⟩ = P|ψ⟩; real since P is Hermitian.
        let mut shifted = self.clone();
        for &(qubit, op) in pauli.ops() {
            match op {
                PauliOp::I => {}
                PauliOp::X => shifted.apply_x(qubit as usize),
                PauliOp::Y => shifted.apply_y(qubit as usize),
                PauliOp::Z => shifted.apply_z(qubit as usize),
            }
        }
        Ok(self.inner(&shifted)?.re)
    }

    /// Exact expectation value ⟨ψ|H|ψ⟩ of a weighted Pauli sum.
    pub fn expectation_hamiltonian(&self, h: &Hamiltonian) -> SimResult<f64> {
        let mut total = 0.0;
        for term in h.terms() {
            total += term.coeff * self.expectation(&term.pauli)?;
        }
        Ok(total)
    }

    /// Inner product ⟨self|other⟩.
    pub fn inner(&self, other: &Statevector) -> SimResult<Complex64> {
        if self.num_qubits != other.num_qubits {
            return Err(SimError::SizeMismatch {
                left: self.num_qubits,
                right: other.num_qubits,
            });
        }
        Ok(self
            .amplitudes
            .iter()
            .zip(&other.amplitudes)
            .map(|(a, b)| a.conj() * b)
            .sum())
    }

    /// Squared overlap |⟨self|other⟩|².
    ///
    /// Equals the probability of the all-zeros outcome after appending the
    /// adjoint of `other`'s preparation circuit to `self`'s.
    pub fn overlap(&self, other: &Statevector) -> SimResult<f64> {
        Ok(self.inner(other)?.norm_sqr())
    }

    /// The 2-norm of the state (1.0 up to rounding for any circuit output).
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(Complex64::norm_sqr)
            .sum::<f64>()
            .sqrt()
    }

    /// Sample a measurement outcome in the computational basis.
    pub fn sample(&self, rng: &mut impl Rng) -> usize {
        let r: f64 = rng.r#gen();
        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }
        // Fallback (shouldn't happen with normalized states)
        self.amplitudes.len() - 1
    }

    /// Convert a measurement outcome to a bitstring, qubit 0 first.
    pub fn outcome_to_bitstring(&self, outcome: usize) -> String {
        format!(
            "{:0width$b}",
            outcome,
            width = self.num_qubits as usize
        )
        .chars()
        .rev()
        .collect()
    }
}
