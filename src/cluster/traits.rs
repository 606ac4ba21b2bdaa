use super::label::Label;
use super::point::Point;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering<Id> {
    /// Cluster `points` and return one label per input point, by position.
    fn fit_predict(&self, points: &[Point<Id>]) -> Vec<Label>;
}
