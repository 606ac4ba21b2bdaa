//! Density-based clustering of identified 2D points.
//!
//! ## DBSCAN
//!
//! Density-based clustering that discovers clusters of arbitrary shape and
//! identifies outliers (noise points), without being told the number of
//! clusters in advance. Two parameters drive it:
//!
//! - `eps`: the neighborhood radius (a point at exactly `eps` is a neighbor)
//! - `min_pts`: how many points, the point itself included, a neighborhood
//!   needs for its center to be a core point
//!
//! The result is a [`LabelMap`] from point identifier to [`Label`]: either a
//! cluster id (0, 1, ... in discovery order) or noise (rendered as `-1`).
//!
//! ## Determinism
//!
//! The scan visits points in input order. The same input sequence with the
//! same parameters always yields the same labels; reordering the input may
//! renumber clusters and move border points between clusters.
//!
//! ## Usage
//!
//! ```rust
//! use dbclust::cluster::{Dbscan, Label, Point};
//!
//! let points = vec![
//!     Point::new(1, 0.0, 0.0),
//!     Point::new(2, 0.0, 0.5),
//!     Point::new(3, 0.0, 10.0),
//! ];
//!
//! let labels = Dbscan::new(1.0, 2).fit(&points);
//! assert_eq!(labels.get(&1), Some(Label::Cluster(0)));
//! assert_eq!(labels.get(&2), Some(Label::Cluster(0)));
//! assert_eq!(labels.get(&3), Some(Label::Noise));
//! ```

mod dbscan;
mod label;
mod point;
mod traits;

pub use dbscan::Dbscan;
pub use label::{Label, LabelMap, NOISE};
pub use point::{distance, region_query, Point};
pub use traits::Clustering;
