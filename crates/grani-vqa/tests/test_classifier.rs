//! Tests for the variational classifier.

use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::StdRng;

use grani_vqa::classifier::{ClassifierConfig, train};
use grani_vqa::error::VqaError;

/// Three well-separated clusters, one per label. A π rotation on a wire
/// flips its ⟨Z⟩ sign, so each cluster has a distinct readout pattern.
fn clustered_data(per_class: usize) -> (Array2<f64>, Vec<i64>) {
    let mut rows = vec![];
    let mut labels = vec![];
    let centers = [
        (std::f64::consts::PI, 0.0, 0.0, -1),
        (0.0, std::f64::consts::PI, 0.0, 0),
        (0.0, 0.0, std::f64::consts::PI, 1),
    ];
    for i in 0..per_class {
        // Small deterministic spread so rows within a class differ.
        let jitter = 0.05 * (i as f64);
        for &(a, b, c, label) in &centers {
            rows.extend_from_slice(&[a + jitter, b - jitter, c + jitter]);
            labels.push(label);
        }
    }
    let n = labels.len();
    (Array2::from_shape_vec((n, 3), rows).unwrap(), labels)
}

fn quick_config() -> ClassifierConfig {
    ClassifierConfig {
        iterations: 30,
        ..ClassifierConfig::default()
    }
}

#[test]
fn predictions_cover_every_row_in_order() {
    let (x, y) = clustered_data(8);
    let mut rng = StdRng::seed_from_u64(1111);
    let model = train(x.view(), &y, &quick_config(), &mut rng).unwrap();

    let test = x.slice(ndarray::s![0..5, ..]);
    let predictions = model.predict_all(test).unwrap();
    assert_eq!(predictions.len(), 5);
    assert!(predictions.iter().all(|p| [-1i64, 0, 1].contains(p)));
}

#[test]
fn training_is_deterministic_for_fixed_seed() {
    let (x, y) = clustered_data(5);
    let config = quick_config();

    let a = train(x.view(), &y, &config, &mut StdRng::seed_from_u64(9)).unwrap();
    let b = train(x.view(), &y, &config, &mut StdRng::seed_from_u64(9)).unwrap();

    let pa = a.predict_all(x.view()).unwrap();
    let pb = b.predict_all(x.view()).unwrap();
    assert_eq!(pa, pb);
}

#[test]
fn empty_training_set_rejected() {
    let x = Array2::<f64>::zeros((0, 3));
    let mut rng = StdRng::seed_from_u64(1);
    let err = train(x.view(), &[], &quick_config(), &mut rng).unwrap_err();
    assert!(matches!(err, VqaError::EmptyTrainingSet));
}

#[test]
fn label_count_mismatch_rejected() {
    let x = Array2::<f64>::zeros((2, 3));
    let mut rng = StdRng::seed_from_u64(1);
    let err = train(x.view(), &[-1], &quick_config(), &mut rng).unwrap_err();
    assert!(matches!(
        err,
        VqaError::LabelCountMismatch { labels: 1, rows: 2 }
    ));
}

#[test]
fn invalid_label_rejected() {
    let x = Array2::<f64>::zeros((2, 3));
    let mut rng = StdRng::seed_from_u64(1);
    let err = train(x.view(), &[0, 5], &quick_config(), &mut rng).unwrap_err();
    assert!(matches!(err, VqaError::InvalidLabel(5)));
}

#[test]
fn wrong_feature_width_rejected() {
    let x = Array2::<f64>::zeros((2, 4));
    let mut rng = StdRng::seed_from_u64(1);
    let err = train(x.view(), &[0, 1], &quick_config(), &mut rng).unwrap_err();
    assert!(matches!(
        err,
        VqaError::FeatureWidthMismatch {
            expected: 3,
            got: 4
        }
    ));
}
