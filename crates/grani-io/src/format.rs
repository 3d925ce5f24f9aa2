//! Output formatting: comma-joined value lists.

use crate::FIELD_SEPARATOR;

/// Join integer labels with commas; integers render without decimal points.
///
/// Inverse of [`crate::parse_labels`] for any label sequence.
pub fn join_labels(labels: &[i64]) -> String {
    join(labels.iter())
}

/// Join floats with commas at full precision.
pub fn join_floats(values: &[f64]) -> String {
    join(values.iter())
}

/// Join floats with commas, rounded to `decimals` decimal places.
///
/// Rounded values render in shortest form (`0.25`, not `0.2500000000`).
pub fn join_rounded(values: &[f64], decimals: u32) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded: Vec<f64> = values.iter().map(|v| (v * factor).round() / factor).collect();
    join(rounded.iter())
}

fn join<T: std::fmt::Display>(values: impl Iterator<Item = T>) -> String {
    values
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(&FIELD_SEPARATOR.to_string())
}
