//! Density-based clustering of 2D points.
//!
//! `dbclust` groups identified points in the plane with DBSCAN and writes the
//! largest groups out as plain-text id lists.
//!
//! - [`cluster`]: the clustering engine (distance, neighbor query, expansion, scan)
//! - [`io`]: delimited point reader and ranked cluster writer

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod io;

pub use cluster::{Clustering, Dbscan, Label, LabelMap, Point, NOISE};
pub use error::{Error, Result};
