//! End-to-end pipeline tests.
//!
//! The CLI is a binary crate, so these tests drive the same
//! parse → solve → format path through the underlying library crates.

use rand::SeedableRng;
use rand::rngs::StdRng;

// ============================================================================
// classify pipeline
// ============================================================================

#[test]
fn classify_pipeline_emits_one_label_per_test_row() {
    // 6 training rows with labels, 2 test rows.
    let input = "3.1,0.0,0.0S0.0,3.1,0.0S0.0,0.0,3.1S3.0,0.1,0.1S0.1,3.0,0.1S0.1,0.1,3.0\
XXX-1,0,1,-1,0,1\
XXX3.1,0.0,0.0S0.0,0.0,3.1";

    let dataset = grani_io::parse_dataset(input).unwrap();
    let config = grani_vqa::ClassifierConfig {
        iterations: 20,
        ..grani_vqa::ClassifierConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(1111);
    let model =
        grani_vqa::classifier::train(dataset.train.view(), &dataset.labels, &config, &mut rng)
            .unwrap();
    let predictions = model.predict_all(dataset.test.view()).unwrap();

    let output = grani_io::join_labels(&predictions);
    let fields: Vec<&str> = output.split(',').collect();
    assert_eq!(fields.len(), 2);
    for field in fields {
        let label: i64 = field.parse().unwrap();
        assert!([-1, 0, 1].contains(&label));
    }
}

// ============================================================================
// gradient pipeline
// ============================================================================

#[test]
fn gradient_pipeline_emits_31_fields_ending_in_51() {
    let weights = grani_io::parse_weights("0.1,0.2,0.3,0.4,0.5").unwrap();
    let (grad, hessian, evals) =
        grani_vqa::gradient_and_hessian(|w| grani_vqa::shift::challenge_expectation(w), &weights)
            .unwrap();

    let mut values: Vec<f64> = grad.to_vec();
    values.extend(hessian.iter().copied());
    let output = format!("{},{}", grani_io::join_rounded(&values, 10), evals);

    let fields: Vec<&str> = output.split(',').collect();
    assert_eq!(fields.len(), 5 + 25 + 1);
    assert_eq!(*fields.last().unwrap(), "51");
    // Every numeric field parses back.
    for field in &fields[..30] {
        field.parse::<f64>().unwrap();
    }
}

// ============================================================================
// vqe pipeline
// ============================================================================

#[test]
fn vqe_pipeline_emits_sorted_energies() {
    let input = "- 1.0 Z0S- 0.5 Z1";
    let hamiltonian = grani_io::parse_hamiltonian(input).unwrap();

    let config = grani_vqa::VqeConfig::default();
    let mut rng = StdRng::seed_from_u64(123);
    let energies = grani_vqa::vqe::find_lowest_energies(&hamiltonian, 3, &config, &mut rng).unwrap();

    let output = grani_io::join_floats(&energies);
    let parsed: Vec<f64> = output.split(',').map(|f| f.parse().unwrap()).collect();
    assert_eq!(parsed.len(), 3);
    for pair in parsed.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}
