//! Peripheral I/O around the clustering engine.
//!
//! - [`reader`]: delimited `id, x, y` rows into [`Point`](crate::cluster::Point)s
//! - [`writer`]: label groups ranked by size, one id-list file per group

pub mod reader;
pub mod writer;

pub use reader::{read_points, read_points_from_path, Delimiter};
pub use writer::{cluster_path, output_base, rank_groups, write_top_clusters, ClusterGroup};
