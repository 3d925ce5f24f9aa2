//! Variational quantum classifier.
//!
//! Three features are angle-embedded onto three wires, passed through
//! basic-entangler layers, and read out as per-wire ⟨Z⟩ values. A per-class
//! bias and a softmax turn the three expectations into class probabilities;
//! classes map to the labels -1, 0, 1.
//!
//! Training minimises the cross-entropy with Adam over mini-batches.
//! Circuit-weight gradients come from the parameter-shift rule chained
//! through the softmax (`∂L/∂logit_k = p_k − y_k`); the bias gradient is the
//! same residual directly.

use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::Rng;
use tracing::debug;

use grani_ir::Circuit;
use grani_sim::{PauliString, Statevector};

use crate::ansatz::{angle_embedding, basic_entangler_layers, basic_entangler_shape};
use crate::error::{VqaError, VqaResult};
use crate::optimizer::Adam;

use std::f64::consts::FRAC_PI_2;

/// Number of wires, features, and classes. The label set {-1, 0, 1} is tied
/// to reading one class per wire.
pub const NUM_WIRES: usize = 3;

/// Training hyperparameters.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Basic-entangler layer count.
    pub layers: usize,
    /// Adam iterations.
    pub iterations: usize,
    /// Mini-batch size.
    pub batch_size: usize,
    /// Adam learning rate.
    pub step_size: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            layers: 3,
            iterations: 80,
            batch_size: 5,
            step_size: 0.02,
        }
    }
}

/// A trained classifier: circuit weights plus the classical bias head.
#[derive(Debug, Clone)]
pub struct TrainedClassifier {
    weights: Array2<f64>,
    bias: [f64; NUM_WIRES],
}

impl TrainedClassifier {
    /// Predict the label of a single feature vector.
    pub fn predict(&self, features: ArrayView1<'_, f64>) -> VqaResult<i64> {
        if features.len() != NUM_WIRES {
            return Err(VqaError::FeatureWidthMismatch {
                expected: NUM_WIRES,
                got: features.len(),
            });
        }
        let z = wire_expectations(&self.weights.view(), features)?;
        let mut best = 0;
        for k in 1..NUM_WIRES {
            if z[k] + self.bias[k] > z[best] + self.bias[best] {
                best = k;
            }
        }
        Ok(best as i64 - 1)
    }

    /// Predict labels for every row, in input order.
    pub fn predict_all(&self, features: ArrayView2<'_, f64>) -> VqaResult<Vec<i64>> {
        features.outer_iter().map(|row| self.predict(row)).collect()
    }
}

/// Train a classifier on `(x, labels)` with mini-batch Adam.
///
/// Weight initialisation and batch sampling draw from `rng`; a fixed seed
/// gives a fully reproducible run.
pub fn train(
    x: ArrayView2<'_, f64>,
    labels: &[i64],
    config: &ClassifierConfig,
    rng: &mut impl Rng,
) -> VqaResult<TrainedClassifier> {
    let rows = x.nrows();
    if rows == 0 {
        return Err(VqaError::EmptyTrainingSet);
    }
    if labels.len() != rows {
        return Err(VqaError::LabelCountMismatch {
            labels: labels.len(),
            rows,
        });
    }
    if x.ncols() != NUM_WIRES {
        return Err(VqaError::FeatureWidthMismatch {
            expected: NUM_WIRES,
            got: x.ncols(),
        });
    }
    let classes: Vec<usize> = labels
        .iter()
        .map(|&l| match l {
            -1 | 0 | 1 => Ok((l + 1) as usize),
            other => Err(VqaError::InvalidLabel(other)),
        })
        .collect::<VqaResult<_>>()?;

    let (layers, wires) = basic_entangler_shape(config.layers, NUM_WIRES);
    let n_weights = layers * wires;
    // Flat parameter vector: circuit weights then the three biases.
    let mut params: Vec<f64> = (0..n_weights + NUM_WIRES)
        .map(|i| {
            if i < n_weights {
                rng.gen_range(-0.1..0.1)
            } else {
                0.0
            }
        })
        .collect();

    let mut opt = Adam::new(config.step_size);

    for iteration in 0..config.iterations {
        let mut grad = vec![0.0; params.len()];
        let mut batch_loss = 0.0;

        for _ in 0..config.batch_size {
            let idx = rng.gen_range(0..rows);
            let sample = x.row(idx);
            let class = classes[idx];

            let weights =
                ArrayView2::from_shape((layers, wires), &params[..n_weights]).expect("weight shape");
            let z = wire_expectations(&weights, sample)?;
            let mut logits = [0.0; NUM_WIRES];
            for k in 0..NUM_WIRES {
                logits[k] = z[k] + params[n_weights + k];
            }
            let p = softmax(&logits);
            batch_loss -= (p[class] + 1e-12).ln();

            // ∂L/∂logit_k = p_k − y_k; feeds both heads of the gradient.
            let mut delta = p;
            delta[class] -= 1.0;

            for i in 0..n_weights {
                let original = params[i];
                params[i] = original + FRAC_PI_2;
                let weights = ArrayView2::from_shape((layers, wires), &params[..n_weights])
                    .expect("weight shape");
                let z_plus = wire_expectations(&weights, sample)?;
                params[i] = original - FRAC_PI_2;
                let weights = ArrayView2::from_shape((layers, wires), &params[..n_weights])
                    .expect("weight shape");
                let z_minus = wire_expectations(&weights, sample)?;
                params[i] = original;

                let mut dz = 0.0;
                for k in 0..NUM_WIRES {
                    dz += delta[k] * (z_plus[k] - z_minus[k]) / 2.0;
                }
                grad[i] += dz;
            }
            for k in 0..NUM_WIRES {
                grad[n_weights + k] += delta[k];
            }
        }

        for g in &mut grad {
            *g /= config.batch_size as f64;
        }
        opt.step(&mut params, &grad);

        if iteration % 10 == 0 {
            debug!(
                iteration,
                loss = batch_loss / config.batch_size as f64,
                "classifier training step"
            );
        }
    }

    let weights =
        Array2::from_shape_vec((layers, wires), params[..n_weights].to_vec()).expect("weight shape");
    let mut bias = [0.0; NUM_WIRES];
    bias.copy_from_slice(&params[n_weights..]);
    Ok(TrainedClassifier { weights, bias })
}

/// Per-wire ⟨Z⟩ readout of the embedded-and-entangled state.
fn wire_expectations(
    weights: &ArrayView2<'_, f64>,
    features: ArrayView1<'_, f64>,
) -> VqaResult<[f64; NUM_WIRES]> {
    let mut circuit = Circuit::new("classifier", NUM_WIRES as u32);
    angle_embedding(&mut circuit, features)?;
    basic_entangler_layers(&mut circuit, weights.view())?;
    let sv = Statevector::from_circuit(&circuit)?;

    let mut z = [0.0; NUM_WIRES];
    for (wire, slot) in z.iter_mut().enumerate() {
        *slot = sv.expectation(&PauliString::z(wire as u32))?;
    }
    Ok(z)
}

fn softmax(logits: &[f64; NUM_WIRES]) -> [f64; NUM_WIRES] {
    let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mut out = [0.0; NUM_WIRES];
    let mut sum = 0.0;
    for k in 0..NUM_WIRES {
        out[k] = (logits[k] - max).exp();
        sum += out[k];
    }
    for v in &mut out {
        *v /= sum;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn softmax_normalises() {
        let p = softmax(&[0.1, 0.5, -0.3]);
        let sum: f64 = p.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(p.iter().all(|&v| v > 0.0));
    }

    #[test]
    fn softmax_prefers_largest_logit() {
        let p = softmax(&[-1.0, 2.0, 0.0]);
        assert!(p[1] > p[0] && p[1] > p[2]);
    }
}
