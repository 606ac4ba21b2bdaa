//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points based on neighborhood density. It:
//!
//! - Discovers clusters of arbitrary shape
//! - Determines the number of clusters by itself
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbors (inclusive).
//! - **MinPts**: Minimum neighborhood size, the point itself included, for a point to be "core".
//! - **Core point**: Its ε-neighborhood holds at least MinPts points.
//! - **Border point**: Not core, but claimed by a core point's expansion.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. For each point P in input order that has no label yet:
//!    - Find its neighbors within ε
//!    - If |neighbors| < MinPts, label P noise
//!    - Else P is core: start a new cluster and expand it
//!
//! 2. Expansion walks a growing work queue seeded with P's neighbors:
//!    - Every unlabeled entry joins the cluster
//!    - If that entry is core, its neighbors are appended to the queue
//!
//! ## Noise is final
//!
//! Expansion only claims points that carry no label at all. A point labeled
//! noise when the main loop reached it stays noise, even if a core point
//! scanned later has it in range. Points reached by an expansion *before* the
//! main loop visits them become border points of that cluster, and the first
//! cluster to reach a border point keeps it.
//!
//! ## Complexity
//!
//! - **Time**: O(n²), one brute-force region query per visited point.
//! - **Space**: O(n) for labels plus the transient work queue.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};

use super::label::{Label, LabelMap};
use super::point::{region_query, Point};
use super::traits::Clustering;
use crate::error::{Error, Result};

/// DBSCAN clustering algorithm over 2D points.
#[derive(Debug, Clone)]
pub struct Dbscan {
    /// Epsilon: maximum distance for neighborhood.
    eps: f64,
    /// Minimum neighborhood size (self included) for core point classification.
    min_pts: usize,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `eps` - Maximum distance between two points to be neighbors.
    /// * `min_pts` - Minimum number of points, the point itself included, to form a dense region.
    ///
    /// Degenerate values are accepted. With `min_pts == 0` every point is a core
    /// point. With a negative (or NaN) `eps` no point is a neighbor of anything,
    /// itself included.
    pub fn new(eps: f64, min_pts: usize) -> Self {
        Self { eps, min_pts }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Set minimum points for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Neighborhood radius.
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Minimum neighborhood size.
    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    /// Cluster `points` and return the label of every identifier.
    pub fn fit<Id>(&self, points: &[Point<Id>]) -> LabelMap<Id>
    where
        Id: Clone + Eq + Hash,
    {
        let (labels, _) = self.scan(points, || false);
        self.label_map(points, labels)
    }

    /// Like [`Dbscan::fit`], checking `cancel` before each main-loop iteration.
    ///
    /// Returns [`Error::Cancelled`] as soon as the flag is observed set.
    pub fn fit_cancellable<Id>(
        &self,
        points: &[Point<Id>],
        cancel: &AtomicBool,
    ) -> Result<LabelMap<Id>>
    where
        Id: Clone + Eq + Hash,
    {
        let (labels, visited) = self.scan(points, || cancel.load(Ordering::Relaxed));
        if visited < points.len() {
            log::warn!("dbscan cancelled after {visited} of {} points", points.len());
            return Err(Error::Cancelled {
                visited,
                total: points.len(),
            });
        }
        Ok(self.label_map(points, labels))
    }

    /// Whether each point is a core point, by position.
    pub fn core_points<Id>(&self, points: &[Point<Id>]) -> Vec<bool> {
        (0..points.len())
            .map(|idx| self.is_core(region_query(points, idx, self.eps).len()))
            .collect()
    }

    #[inline]
    fn is_core(&self, neighborhood_size: usize) -> bool {
        neighborhood_size >= self.min_pts
    }

    /// Main loop. Returns the labels and how many points it visited; the count
    /// falls short of `points.len()` only when `should_stop` fired.
    fn scan<Id>(
        &self,
        points: &[Point<Id>],
        mut should_stop: impl FnMut() -> bool,
    ) -> (Vec<Label>, usize) {
        // `None` means unclassified.
        let mut labels: Vec<Option<Label>> = vec![None; points.len()];
        let mut cluster_id = 0;

        for point_idx in 0..points.len() {
            if should_stop() {
                return (Vec::new(), point_idx);
            }
            if labels[point_idx].is_some() {
                continue;
            }

            let neighbors = region_query(points, point_idx, self.eps);
            if !self.is_core(neighbors.len()) {
                labels[point_idx] = Some(Label::Noise);
                continue;
            }

            let size =
                self.expand_cluster(points, point_idx, neighbors, &mut labels, cluster_id);
            log::debug!("cluster {cluster_id}: seeded at index {point_idx}, {size} members");
            cluster_id += 1;
        }

        let labels = labels
            .into_iter()
            .map(|label| label.unwrap_or(Label::Noise))
            .collect();
        (labels, points.len())
    }

    /// Expand cluster `cluster_id` from a core point; returns how many points it claimed.
    fn expand_cluster<Id>(
        &self,
        points: &[Point<Id>],
        point_idx: usize,
        neighbors: Vec<usize>,
        labels: &mut [Option<Label>],
        cluster_id: usize,
    ) -> usize {
        let label = Label::Cluster(cluster_id);
        labels[point_idx] = Some(label);
        let mut claimed = 1;

        // Grows while it is walked; the cursor keeps earlier entries in place.
        let mut queue = neighbors;
        let mut cursor = 0;
        while cursor < queue.len() {
            let neighbor_idx = queue[cursor];
            cursor += 1;

            // Any label, noise included, is final.
            if labels[neighbor_idx].is_some() {
                continue;
            }
            labels[neighbor_idx] = Some(label);
            claimed += 1;

            let neighbor_neighbors = region_query(points, neighbor_idx, self.eps);
            if self.is_core(neighbor_neighbors.len()) {
                queue.extend(
                    neighbor_neighbors
                        .into_iter()
                        .filter(|&idx| labels[idx].is_none()),
                );
            }
        }
        claimed
    }

    fn label_map<Id>(&self, points: &[Point<Id>], labels: Vec<Label>) -> LabelMap<Id>
    where
        Id: Clone + Eq + Hash,
    {
        let map: LabelMap<Id> = points
            .iter()
            .zip(labels)
            .map(|(point, label)| (point.id.clone(), label))
            .collect();
        log::info!(
            "dbscan (eps={}, min_pts={}): {} points, {} clusters, {} noise",
            self.eps,
            self.min_pts,
            map.len(),
            map.n_clusters(),
            map.noise_count()
        );
        map
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}

impl<Id> Clustering<Id> for Dbscan {
    fn fit_predict(&self, points: &[Point<Id>]) -> Vec<Label> {
        self.scan(points, || false).0
    }
}
