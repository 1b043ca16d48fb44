use chaincluster_core::{
    ChainClusterError, ChainClusterErrorCode, Dataset, DatasetError, DatasetErrorCode,
};
use rstest::rstest;

#[rstest]
#[case(DatasetError::ZeroDimension, DatasetErrorCode::ZeroDimension)]
#[case(
    DatasetError::DimensionMismatch { row: 1, expected: 2, found: 3 },
    DatasetErrorCode::DimensionMismatch,
)]
#[case(
    DatasetError::NonFinite { row: 0, column: 1, value: f64::NAN },
    DatasetErrorCode::NonFinite,
)]
#[case(
    DatasetError::ExtentTooLarge { extent: 2e9, limit: 1e9 },
    DatasetErrorCode::ExtentTooLarge,
)]
fn returns_expected_dataset_code(#[case] error: DatasetError, #[case] expected: DatasetErrorCode) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
}

#[rstest]
#[case(
    ChainClusterError::InvalidNumSeedPoints { got: 0 },
    ChainClusterErrorCode::InvalidNumSeedPoints,
    None,
)]
#[case(
    ChainClusterError::InvalidLinkingStrength { got: -1.0 },
    ChainClusterErrorCode::InvalidLinkingStrength,
    None,
)]
#[case(
    ChainClusterError::SeedSelectionFailed { free_points: 4 },
    ChainClusterErrorCode::SeedSelectionFailed,
    None,
)]
#[case(
    ChainClusterError::from(DatasetError::ZeroDimension),
    ChainClusterErrorCode::DatasetFailure,
    Some(DatasetErrorCode::ZeroDimension),
)]
fn returns_expected_chain_code(
    #[case] error: ChainClusterError,
    #[case] expected: ChainClusterErrorCode,
    #[case] dataset_code: Option<DatasetErrorCode>,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
    assert_eq!(error.dataset_code(), dataset_code);
}

#[rstest]
#[case(DatasetErrorCode::ZeroDimension, "DATASET_ZERO_DIMENSION")]
#[case(DatasetErrorCode::DimensionMismatch, "DATASET_DIMENSION_MISMATCH")]
#[case(DatasetErrorCode::NonFinite, "DATASET_NON_FINITE")]
#[case(DatasetErrorCode::ExtentTooLarge, "DATASET_EXTENT_EXCEEDS_MAX_DISTANCE")]
fn dataset_codes_are_stable(#[case] code: DatasetErrorCode, #[case] expected: &str) {
    assert_eq!(code.as_str(), expected);
    assert_eq!(code.to_string(), expected);
}

#[rstest]
#[case(ChainClusterErrorCode::InvalidNumSeedPoints, "CHAIN_INVALID_NUM_SEED_POINTS")]
#[case(ChainClusterErrorCode::InvalidLinkingStrength, "CHAIN_INVALID_LINKING_STRENGTH")]
#[case(ChainClusterErrorCode::DatasetFailure, "CHAIN_DATASET_FAILURE")]
#[case(ChainClusterErrorCode::SeedSelectionFailed, "CHAIN_SEED_SELECTION_FAILED")]
fn chain_codes_are_stable(#[case] code: ChainClusterErrorCode, #[case] expected: &str) {
    assert_eq!(code.as_str(), expected);
    assert_eq!(code.to_string(), expected);
}

#[test]
fn dataset_failure_exposes_source() {
    let error = Dataset::from_rows(vec![vec![1.0, 2.0], vec![1.0]])
        .map_err(ChainClusterError::from)
        .expect_err("ragged rows must fail");

    let source = std::error::Error::source(&error).expect("source must be kept");
    assert_eq!(
        source.to_string(),
        "row 1 has dimension 1 but the dataset expects 2"
    );
    assert_eq!(
        error.dataset_code(),
        Some(DatasetErrorCode::DimensionMismatch)
    );
}
