//! Fixtures shared by the integration suites.

use chaincluster_core::Dataset;
use chaincluster_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a dataset from literal rows.
#[must_use]
pub fn dataset(rows: &[&[f64]]) -> Dataset {
    Dataset::from_rows(rows.iter().map(|row| row.to_vec()).collect()).expect("rows are valid")
}

/// Two tight triples, ids `0..3` and `3..6`, plus far outliers `6` and `7`.
#[must_use]
pub fn two_groups_with_outliers() -> Dataset {
    dataset(&[
        &[0.0, 0.0],
        &[0.3, 0.0],
        &[0.0, 0.4],
        &[10.0, 10.0],
        &[10.2, 10.0],
        &[10.0, 10.25],
        &[50.0, -50.0],
        &[-50.0, 50.0],
    ])
}

/// Proptest configuration honouring the CI overrides.
#[must_use]
pub fn proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Small datasets of 0 to 40 points in 1 to 3 dimensions.
pub fn datasets() -> impl Strategy<Value = Dataset> {
    (1_usize..=3).prop_flat_map(|dimension| {
        prop::collection::vec(prop::collection::vec(-50.0_f64..50.0, dimension), 0..40)
            .prop_map(|rows| Dataset::from_rows(rows).expect("generated rows are valid"))
    })
}
