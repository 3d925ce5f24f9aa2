//! Ansatz circuit templates.
//!
//! Builders append onto an existing circuit so that data embedding and
//! variational layers compose. Weight tensors use the shapes of the
//! corresponding PennyLane templates: `(layers, wires)` for the basic
//! entangler and `(layers, wires, 3)` for the strongly entangling layers.

use ndarray::{ArrayView1, ArrayView2, ArrayView3};

use grani_ir::{Circuit, IrResult, QubitId};

/// RX-rotation data embedding: one feature per wire.
pub fn angle_embedding(circuit: &mut Circuit, features: ArrayView1<'_, f64>) -> IrResult<()> {
    for (i, &x) in features.iter().enumerate() {
        circuit.rx(x, QubitId::from(i))?;
    }
    Ok(())
}

/// Basic entangler layers: per layer, an RX rotation on every wire followed
/// by a ring of CNOTs.
///
/// For two wires a single CNOT is applied (a ring would cancel itself);
/// a single wire gets no entangler.
pub fn basic_entangler_layers(circuit: &mut Circuit, weights: ArrayView2<'_, f64>) -> IrResult<()> {
    let wires = weights.ncols();
    for layer in weights.outer_iter() {
        for (i, &theta) in layer.iter().enumerate() {
            circuit.rx(theta, QubitId::from(i))?;
        }
        entangle_ring(circuit, wires, false)?;
    }
    Ok(())
}

/// Strongly entangling layers: per layer, a general Rot(φ, θ, ω) rotation on
/// every wire followed by a ring of CNOTs with range 1.
pub fn strongly_entangling_layers(
    circuit: &mut Circuit,
    weights: ArrayView3<'_, f64>,
) -> IrResult<()> {
    let wires = weights.shape()[1];
    for layer in weights.outer_iter() {
        for (i, angles) in layer.outer_iter().enumerate() {
            circuit.rot(angles[0], angles[1], angles[2], QubitId::from(i))?;
        }
        entangle_ring(circuit, wires, true)?;
    }
    Ok(())
}

/// CNOT ring over `wires` qubits.
///
/// `full` controls the two-wire case: the strongly entangling template
/// applies both CNOT(0,1) and CNOT(1,0), the basic entangler only one.
fn entangle_ring(circuit: &mut Circuit, wires: usize, full: bool) -> IrResult<()> {
    match wires {
        0 | 1 => {}
        2 => {
            circuit.cx(QubitId(0), QubitId(1))?;
            if full {
                circuit.cx(QubitId(1), QubitId(0))?;
            }
        }
        n => {
            for i in 0..n {
                circuit.cx(QubitId::from(i), QubitId::from((i + 1) % n))?;
            }
        }
    }
    Ok(())
}

/// Weight shape for [`basic_entangler_layers`].
pub fn basic_entangler_shape(layers: usize, wires: usize) -> (usize, usize) {
    (layers, wires)
}

/// Weight shape for [`strongly_entangling_layers`].
pub fn strongly_entangling_shape(layers: usize, wires: usize) -> (usize, usize, usize) {
    (layers, wires, 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, Array3};

    #[test]
    fn embedding_gate_count() {
        let mut c = Circuit::new("embed", 3);
        angle_embedding(&mut c, Array1::from(vec![0.1, 0.2, 0.3]).view()).unwrap();
        assert_eq!(c.len(), 3);
        assert!(c.instructions().iter().all(|i| i.name() == "rx"));
    }

    #[test]
    fn basic_entangler_gate_count() {
        // 2 layers × (3 rotations + 3-CNOT ring)
        let mut c = Circuit::new("bel", 3);
        let w = Array2::zeros((2, 3));
        basic_entangler_layers(&mut c, w.view()).unwrap();
        assert_eq!(c.len(), 2 * (3 + 3));
    }

    #[test]
    fn basic_entangler_two_wires_single_cnot() {
        let mut c = Circuit::new("bel2", 2);
        let w = Array2::zeros((1, 2));
        basic_entangler_layers(&mut c, w.view()).unwrap();
        let cnots = c.instructions().iter().filter(|i| i.name() == "cx").count();
        assert_eq!(cnots, 1);
    }

    #[test]
    fn strongly_entangling_gate_count() {
        // 1 layer × (2 rots + 2 CNOTs for the two-wire full ring)
        let mut c = Circuit::new("sel", 2);
        let w = Array3::zeros((1, 2, 3));
        strongly_entangling_layers(&mut c, w.view()).unwrap();
        assert_eq!(c.len(), 2 + 2);
    }

    #[test]
    fn strongly_entangling_single_wire_no_entangler() {
        let mut c = Circuit::new("sel1", 1);
        let w = Array3::zeros((1, 1, 3));
        strongly_entangling_layers(&mut c, w.view()).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.instructions()[0].name(), "rot");
    }
}
