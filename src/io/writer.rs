//! Cluster writer: groups identifiers by label and writes the largest groups.
//!
//! Noise is ranked like any other group. Group `rank` is written to
//! `{base}_cluster_{rank}.txt`, one identifier per line, in input order.

use std::collections::HashMap;
use std::fmt::Display;
use std::fs::File;
use std::hash::Hash;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::cluster::{Label, LabelMap};
use crate::error::{Error, Result};

/// All identifiers sharing one label.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterGroup<Id> {
    /// The shared label.
    pub label: Label,
    /// Member identifiers, in input order.
    pub members: Vec<Id>,
}

/// Group identifiers by label, largest group first.
///
/// Groups of equal size keep the order in which their labels first appear.
pub fn rank_groups<Id: Clone + Eq + Hash>(labels: &LabelMap<Id>) -> Vec<ClusterGroup<Id>> {
    let mut groups: Vec<ClusterGroup<Id>> = Vec::new();
    let mut slot: HashMap<Label, usize> = HashMap::new();

    for (id, label) in labels.iter() {
        let idx = *slot.entry(label).or_insert_with(|| {
            groups.push(ClusterGroup {
                label,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[idx].members.push(id.clone());
    }

    // Stable, so ties stay in first-appearance order.
    groups.sort_by(|a, b| b.members.len().cmp(&a.members.len()));
    groups
}

/// Write the `n` largest groups of `labels`, returning the files written.
///
/// Fewer than `n` groups (including none) produce fewer files.
pub fn write_top_clusters<Id>(
    labels: &LabelMap<Id>,
    n: usize,
    base: &Path,
) -> Result<Vec<PathBuf>>
where
    Id: Clone + Eq + Hash + Display,
{
    let groups = rank_groups(labels);
    let mut written = Vec::with_capacity(n.min(groups.len()));

    for (rank, group) in groups.iter().take(n).enumerate() {
        let path = cluster_path(base, rank);
        let mut out = BufWriter::new(File::create(&path)?);
        for id in &group.members {
            writeln!(out, "{id}")?;
        }
        out.flush()?;

        log::debug!(
            "wrote label {} ({} points) to {}",
            group.label,
            group.members.len(),
            path.display()
        );
        written.push(path);
    }

    log::info!("wrote {} of {} groups", written.len(), groups.len());
    Ok(written)
}

/// Path of the file holding the group ranked `rank`.
pub fn cluster_path(base: &Path, rank: usize) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!("_cluster_{rank}.txt"));
    PathBuf::from(name)
}

/// Output base derived from an input path: the file name up to its first `.`.
///
/// `data/points.tsv` becomes `data/points`. A name starting with `.` is kept whole.
pub fn output_base(input: &Path) -> Result<PathBuf> {
    let name = input
        .file_name()
        .ok_or_else(|| Error::NoFileName(input.to_path_buf()))?
        .to_string_lossy();

    let stem = match name.split('.').next() {
        Some(stem) if !stem.is_empty() => stem,
        _ => &*name,
    };
    Ok(input.with_file_name(stem))
}
