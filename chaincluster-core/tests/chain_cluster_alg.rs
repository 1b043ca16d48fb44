//! Tests for the `ChainClusterAlg` orchestration API.

mod common;

use chaincluster_core::{
    ChainClusterBuilder, ChainClusterError, Cluster, ClusterId, Dataset, DatasetErrorCode,
    GenerateSummary,
};
use chaincluster_test_support::recording::RecordingLayer;
use common::{dataset, two_groups_with_outliers};
use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[fixture]
fn groups() -> Dataset {
    two_groups_with_outliers()
}

#[rstest]
fn builder_defaults() {
    let builder = ChainClusterBuilder::new();
    assert_eq!(builder.num_seed_points(), 3);
    assert_eq!(builder.linking_strength(), 2.0);

    let data = dataset(&[&[0.0]]);
    let alg = builder.build(&data).expect("defaults valid");
    assert_eq!(alg.num_seed_points().get(), 3);
    assert!((alg.density_cutoff() - (-2.0_f64).exp()).abs() < 1e-15);
    assert!(alg.clusters().is_empty());
    assert_eq!(alg.free_points().len(), 1);
}

#[rstest]
fn builder_rejects_zero_seed_points(groups: Dataset) {
    let err = ChainClusterBuilder::new()
        .with_num_seed_points(0)
        .build(&groups)
        .expect_err("builder must reject zero seed points");
    assert_eq!(err, ChainClusterError::InvalidNumSeedPoints { got: 0 });
}

#[rstest]
#[case(0.0)]
#[case(-2.0)]
#[case(f64::NAN)]
fn builder_rejects_bad_linking_strength(groups: Dataset, #[case] strength: f64) {
    let err = ChainClusterBuilder::new()
        .with_linking_strength(strength)
        .build(&groups)
        .expect_err("builder must reject the strength");
    assert!(matches!(err, ChainClusterError::InvalidLinkingStrength { .. }));
}

#[rstest]
fn separates_tight_groups_and_leaves_outliers(groups: Dataset) {
    let mut alg = ChainClusterBuilder::new()
        .with_num_seed_points(2)
        .with_linking_strength(2.0)
        .build(&groups)
        .expect("configuration must be valid");

    let summary = alg.generate().expect("generate must succeed");

    assert_eq!(
        summary,
        GenerateSummary {
            clusters: 2,
            assigned: 6,
            unassigned: 2,
        }
    );
    let clusters = alg.clusters();
    assert_eq!(clusters[0].content(), &[3, 4, 5]);
    assert_eq!(clusters[1].content(), &[0, 1, 2]);
    for cluster in clusters {
        assert!(cluster.content().contains(&cluster.medoid_index()));
    }
    assert_eq!(alg.free_points().to_vec(), vec![6, 7]);

    let centre = clusters[1].centre_of_mass();
    assert!((centre[0] - 0.1).abs() < 1e-12);
    assert!((centre[1] - 0.4 / 3.0).abs() < 1e-12);
}

#[rstest]
fn assignments_label_by_rank(groups: Dataset) {
    let mut alg = ChainClusterBuilder::new()
        .with_num_seed_points(2)
        .build(&groups)
        .expect("configuration must be valid");
    alg.generate().expect("generate must succeed");

    let assignments = alg.assignments().expect("clusters form a partition");
    assert_eq!(assignments.cluster_count(), 2);
    assert_eq!(assignments.members_of(ClusterId::new(0)), vec![3, 4, 5]);
    assert_eq!(assignments.members_of(ClusterId::new(1)), vec![0, 1, 2]);
    assert_eq!(assignments.unassigned().collect::<Vec<_>>(), vec![6, 7]);
}

#[rstest]
fn larger_clusters_come_first() {
    let data = dataset(&[&[0.0], &[1.0], &[2.0], &[3.0], &[100.0], &[101.5], &[300.0]]);
    let mut alg = ChainClusterBuilder::new()
        .with_num_seed_points(2)
        .with_linking_strength(3.0)
        .build(&data)
        .expect("configuration must be valid");

    alg.generate().expect("generate must succeed");

    let sizes: Vec<usize> = alg.clusters().iter().map(Cluster::num_points).collect();
    assert_eq!(sizes, vec![4, 3]);
    assert_eq!(alg.clusters()[0].content(), &[1, 0, 2, 3]);
    assert!(alg.free_points().is_empty());
}

#[rstest]
fn two_tight_pairs_merge_into_one_chain() {
    // Each point's second-nearest neighbour sits in the other pair, so the
    // search radius spans both pairs and they chain together.
    let data = dataset(&[
        &[0.0, 0.0],
        &[0.1, 0.0],
        &[5.0, 5.0],
        &[5.1, 5.0],
        &[40.0, -40.0],
        &[-40.0, 40.0],
    ]);
    let mut alg = ChainClusterBuilder::new()
        .with_num_seed_points(2)
        .with_linking_strength(2.0)
        .build(&data)
        .expect("configuration must be valid");

    let summary = alg.generate().expect("generate must succeed");

    assert_eq!(summary.clusters, 1);
    let cluster = &alg.clusters()[0];
    assert_eq!(cluster.content(), &[1, 0, 2, 3]);
    assert!(cluster.content().contains(&cluster.medoid_index()));
    assert_eq!(alg.free_points().to_vec(), vec![4, 5]);
}

#[rstest]
fn far_flung_points_are_rejected_before_clustering() {
    let rows = vec![vec![0.0], vec![2e9], vec![4e9], vec![6e9]];
    let err = Dataset::from_rows(rows)
        .map_err(ChainClusterError::from)
        .expect_err("points this far apart cannot be clustered");

    assert_eq!(err.dataset_code(), Some(DatasetErrorCode::ExtentTooLarge));
}

#[rstest]
fn single_point_dataset_declines_to_run() {
    let data = dataset(&[&[1.5, 2.5]]);
    let mut alg = ChainClusterBuilder::new()
        .with_num_seed_points(1)
        .build(&data)
        .expect("configuration must be valid");

    let summary = alg.generate().expect("generate must succeed");

    assert_eq!(summary.clusters, 0);
    assert!(alg.clusters().is_empty());
    assert_eq!(alg.free_points().to_vec(), vec![0]);
}

#[rstest]
fn empty_dataset_yields_no_clusters() {
    let data = Dataset::from_rows(Vec::new()).expect("empty input is allowed");
    let mut alg = ChainClusterBuilder::new()
        .build(&data)
        .expect("configuration must be valid");

    let summary = alg.generate().expect("generate must succeed");

    assert_eq!(
        summary,
        GenerateSummary {
            clusters: 0,
            assigned: 0,
            unassigned: 0,
        }
    );
}

#[rstest]
fn dataset_smaller_than_seed_count_yields_no_clusters(groups: Dataset) {
    let mut alg = ChainClusterBuilder::new()
        .with_num_seed_points(groups.len())
        .build(&groups)
        .expect("configuration must be valid");

    assert_eq!(alg.generate().expect("generate must succeed").clusters, 0);
}

#[rstest]
fn generate_restarts_from_scratch(groups: Dataset) {
    let mut alg = ChainClusterBuilder::new()
        .with_num_seed_points(2)
        .build(&groups)
        .expect("configuration must be valid");

    let first = alg.generate().expect("first run must succeed");
    let first_contents: Vec<Vec<usize>> =
        alg.clusters().iter().map(|c| c.content().to_vec()).collect();
    let second = alg.generate().expect("second run must succeed");
    let second_contents: Vec<Vec<usize>> =
        alg.clusters().iter().map(|c| c.content().to_vec()).collect();

    assert_eq!(first, second);
    assert_eq!(first_contents, second_contents);
}

#[rstest]
fn setters_apply_to_the_next_run_only(groups: Dataset) {
    let mut alg = ChainClusterBuilder::new()
        .with_num_seed_points(2)
        .build(&groups)
        .expect("configuration must be valid");
    alg.generate().expect("generate must succeed");

    alg.set_num_seed_points(8).expect("eight is valid");
    alg.set_linking_strength(5.0).expect("five is valid");
    assert_eq!(alg.clusters().len(), 2);
    assert_eq!(alg.num_seed_points().get(), 8);
    assert_eq!(alg.linking_strength(), 5.0);

    // A seed needs more free points than the dataset holds.
    alg.generate().expect("generate must succeed");
    assert!(alg.clusters().is_empty());
}

#[rstest]
fn setters_reject_invalid_values(groups: Dataset) {
    let mut alg = ChainClusterBuilder::new()
        .build(&groups)
        .expect("configuration must be valid");

    assert_eq!(
        alg.set_num_seed_points(0),
        Err(ChainClusterError::InvalidNumSeedPoints { got: 0 })
    );
    assert!(alg.set_linking_strength(f64::INFINITY).is_err());
    assert_eq!(alg.num_seed_points().get(), 3);
    assert_eq!(alg.linking_strength(), 2.0);
}

#[rstest]
fn stronger_linking_grows_chains() {
    // Unit spacing: a weak link leaves the seed alone, a strong one chains
    // along the line.
    let rows: Vec<Vec<f64>> = (0..12).map(|i| vec![f64::from(i)]).collect();
    let data = Dataset::from_rows(rows).expect("rows are valid");

    let mut weak = ChainClusterBuilder::new()
        .with_num_seed_points(1)
        .with_linking_strength(0.5)
        .build(&data)
        .expect("configuration must be valid");
    weak.generate().expect("generate must succeed");

    let mut strong = ChainClusterBuilder::new()
        .with_num_seed_points(1)
        .with_linking_strength(6.0)
        .build(&data)
        .expect("configuration must be valid");
    strong.generate().expect("generate must succeed");

    assert!(strong.clusters()[0].num_points() > weak.clusters()[0].num_points());
}

#[rstest]
fn generate_records_tracing(groups: Dataset) {
    let mut alg = ChainClusterBuilder::new()
        .with_num_seed_points(2)
        .build(&groups)
        .expect("configuration must be valid");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    tracing::subscriber::with_default(subscriber, || alg.generate())
        .expect("generate must succeed");

    let run = layer
        .span("chain.generate")
        .expect("chain.generate span must exist");
    assert_eq!(run.field("points"), Some("8"));
    assert_eq!(run.field("num_seed_points"), Some("2"));
    assert_eq!(run.field("linking_strength"), Some("2"));

    let grows = layer.spans_named("chain.grow");
    assert_eq!(grows.len(), 2);
    assert_eq!(grows[0].field("seed"), Some("3"));
    assert_eq!(grows[0].field("free_points"), Some("8"));
    assert_eq!(grows[1].field("seed"), Some("0"));

    assert!(layer.has_event(Level::INFO, "chain clustering completed"));
}

#[rstest]
fn small_dataset_logs_warning() {
    let data = dataset(&[&[0.0], &[1.0]]);
    let mut alg = ChainClusterBuilder::new()
        .with_num_seed_points(2)
        .build(&data)
        .expect("configuration must be valid");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    tracing::subscriber::with_default(subscriber, || alg.generate())
        .expect("generate must succeed");

    assert!(layer.has_event(Level::WARN, "dataset too small to seed a cluster"));
}
