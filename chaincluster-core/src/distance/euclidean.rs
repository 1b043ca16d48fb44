/// Computes the Euclidean distance between two points of equal length.
///
/// The kernel accumulates squared differences and takes a single square root,
/// so `euclidean_distance(p, p)` is exactly zero.
///
/// # Examples
///
/// ```
/// use chaincluster_core::euclidean_distance;
///
/// let distance = euclidean_distance(&[1.0, 2.0, 3.0], &[4.0, 6.0, 8.0]);
/// assert!((distance - 50.0_f64.sqrt()).abs() < 1e-12);
/// ```
#[must_use]
pub fn euclidean_distance(left: &[f64], right: &[f64]) -> f64 {
    debug_assert_eq!(left.len(), right.len(), "points must share a dimension");
    left.iter()
        .zip(right)
        .map(|(&l, &r)| {
            let diff = l - r;
            diff * diff
        })
        .sum::<f64>()
        .sqrt()
}
