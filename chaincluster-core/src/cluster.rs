//! Read-only view shared by every clustering result.

/// Capability exposed by a finished cluster.
///
/// Consumers such as [`crate::ClusterAssignments`] depend on this trait rather
/// than on the concrete builder that produced the cluster.
///
/// # Examples
/// ```
/// use chaincluster_core::Cluster;
///
/// struct Singleton {
///     index: usize,
///     coords: Vec<f64>,
/// }
///
/// impl Cluster for Singleton {
///     fn content(&self) -> &[usize] { std::slice::from_ref(&self.index) }
///     fn point(&self, member: usize) -> Option<&[f64]> {
///         (member == 0).then_some(self.coords.as_slice())
///     }
///     fn centre_of_mass(&self) -> &[f64] { &self.coords }
///     fn medoid_index(&self) -> usize { self.index }
/// }
///
/// let cluster = Singleton { index: 4, coords: vec![1.0, 2.0] };
/// assert_eq!(cluster.num_points(), 1);
/// assert_eq!(cluster.point(0), Some(&[1.0, 2.0][..]));
/// ```
pub trait Cluster {
    /// Dataset indices of the members, in the order they joined the cluster.
    fn content(&self) -> &[usize];

    /// Number of members.
    fn num_points(&self) -> usize {
        self.content().len()
    }

    /// Coordinates of the member at position `member` within
    /// [`Self::content`].
    fn point(&self, member: usize) -> Option<&[f64]>;

    /// Coordinate-wise mean of all members.
    fn centre_of_mass(&self) -> &[f64];

    /// Dataset index of the member closest to [`Self::centre_of_mass`].
    fn medoid_index(&self) -> usize;
}
