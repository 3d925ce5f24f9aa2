//! Tests for the parameter-shift gradient/Hessian routine.

use grani_vqa::error::VqaError;
use grani_vqa::shift::{CHALLENGE_PARAMS, challenge_expectation, gradient_and_hessian};

// ---------------------------------------------------------------------------
// Exactness on a closed-form trigonometric objective
// ---------------------------------------------------------------------------

#[test]
fn exact_on_product_of_cosines() {
    // f(w) = cos(w0)·cos(w1): single-frequency in each parameter, so the
    // shift rule is exact.
    let f = |w: &[f64]| Ok(w[0].cos() * w[1].cos());
    let w = [0.3, -0.7];
    let (grad, hess, _) = gradient_and_hessian(f, &w).unwrap();

    assert!((grad[0] - (-w[0].sin() * w[1].cos())).abs() < 1e-12);
    assert!((grad[1] - (-w[0].cos() * w[1].sin())).abs() < 1e-12);
    assert!((hess[[0, 0]] - (-w[0].cos() * w[1].cos())).abs() < 1e-12);
    assert!((hess[[1, 1]] - (-w[0].cos() * w[1].cos())).abs() < 1e-12);
    assert!((hess[[0, 1]] - (w[0].sin() * w[1].sin())).abs() < 1e-12);
}

// ---------------------------------------------------------------------------
// Evaluation count
// ---------------------------------------------------------------------------

#[test]
fn five_parameters_use_exactly_51_evaluations() {
    let w = [0.1, 0.2, 0.3, 0.4, 0.5];
    let (_, _, evals) = gradient_and_hessian(|p| challenge_expectation(p), &w).unwrap();
    assert_eq!(evals, 51);
}

#[test]
fn evaluation_count_formula() {
    // 2n + 1 + 2n(n−1)
    let f = |w: &[f64]| Ok(w.iter().map(|v| v.cos()).sum::<f64>());
    let (_, _, evals) = gradient_and_hessian(f, &[0.1, 0.2]).unwrap();
    assert_eq!(evals, 9);
    let (_, _, evals) = gradient_and_hessian(f, &[0.5]).unwrap();
    assert_eq!(evals, 3);
}

// ---------------------------------------------------------------------------
// Challenge circuit
// ---------------------------------------------------------------------------

#[test]
fn challenge_at_zero_is_maximal() {
    // All rotations vanish, the CNOT rings fix |000⟩, and ⟨Z₀Z₂⟩ = 1.
    let f = challenge_expectation(&[0.0; CHALLENGE_PARAMS]).unwrap();
    assert!((f - 1.0).abs() < 1e-12);

    // A maximum is a critical point.
    let (grad, _, _) =
        gradient_and_hessian(|p| challenge_expectation(p), &[0.0; CHALLENGE_PARAMS]).unwrap();
    for i in 0..CHALLENGE_PARAMS {
        assert!(grad[i].abs() < 1e-10, "grad[{i}] = {}", grad[i]);
    }
}

#[test]
fn challenge_hessian_is_symmetric() {
    let w = [0.13, -0.42, 0.87, 1.2, -0.31];
    let (_, hess, _) = gradient_and_hessian(|p| challenge_expectation(p), &w).unwrap();
    for i in 0..CHALLENGE_PARAMS {
        for j in 0..CHALLENGE_PARAMS {
            assert_eq!(hess[[i, j]], hess[[j, i]]);
        }
    }
}

#[test]
fn challenge_gradient_matches_finite_difference() {
    let w = [0.1, 0.2, 0.3, 0.4, 0.5];
    let (grad, _, _) = gradient_and_hessian(|p| challenge_expectation(p), &w).unwrap();

    let eps = 1e-6;
    for i in 0..CHALLENGE_PARAMS {
        let mut plus = w;
        plus[i] += eps;
        let mut minus = w;
        minus[i] -= eps;
        let fd = (challenge_expectation(&plus).unwrap() - challenge_expectation(&minus).unwrap())
            / (2.0 * eps);
        assert!((grad[i] - fd).abs() < 1e-6, "param {i}: {} vs {}", grad[i], fd);
    }
}

#[test]
fn challenge_rejects_wrong_parameter_count() {
    let err = challenge_expectation(&[0.1, 0.2]).unwrap_err();
    assert!(matches!(
        err,
        VqaError::WrongParameterCount {
            expected: 5,
            got: 2
        }
    ));
}
