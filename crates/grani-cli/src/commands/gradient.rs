//! `grani gradient` — parameter-shift gradient and Hessian of the fixed
//! 5-parameter challenge circuit.
//!
//! Output: 5 gradient values, 25 row-major Hessian values, then the count
//! of circuit evaluations (51), all comma-separated and rounded to 10
//! decimal places (the count as a bare integer).

use anyhow::{Context, Result};
use tracing::info;

use grani_io::{join_rounded, parse_weights};
use grani_vqa::shift::{challenge_expectation, gradient_and_hessian};

const OUTPUT_DECIMALS: u32 = 10;

pub fn execute() -> Result<()> {
    let input = super::common::read_stdin()?;
    let weights = parse_weights(&input).context("Failed to parse weight vector")?;

    let (grad, hessian, evals) = gradient_and_hessian(|w| challenge_expectation(w), &weights)
        .context("Gradient evaluation failed")?;
    info!(evals, "gradient and hessian computed");

    let mut values: Vec<f64> = grad.to_vec();
    values.extend(hessian.iter().copied());
    println!("{},{}", join_rounded(&values, OUTPUT_DECIMALS), evals);
    Ok(())
}
