//! Cluster labels and the label map returned by a scan.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Integer rendering of [`Label::Noise`].
pub const NOISE: i64 = -1;

/// Label assigned to a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Not density-reachable from any core point.
    Noise,
    /// Member of the cluster with this id (ids start at 0).
    Cluster(usize),
}

impl Label {
    /// `true` for [`Label::Noise`].
    pub fn is_noise(self) -> bool {
        matches!(self, Label::Noise)
    }

    /// The cluster id, or `None` for noise.
    pub fn cluster_id(self) -> Option<usize> {
        match self {
            Label::Cluster(id) => Some(id),
            Label::Noise => None,
        }
    }

    /// Integer form: the cluster id, or [`NOISE`].
    pub fn as_i64(self) -> i64 {
        match self {
            Label::Cluster(id) => id as i64,
            Label::Noise => NOISE,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

/// Mapping from point identifier to [`Label`].
///
/// Entries keep the order of the input points. When the same identifier was
/// supplied more than once, the first occurrence owns the key.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMap<Id: Eq + Hash> {
    entries: Vec<(Id, Label)>,
    index: HashMap<Id, usize>,
}

impl<Id: Clone + Eq + Hash> LabelMap<Id> {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
            index: HashMap::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, id: Id, label: Label) {
        if self.index.contains_key(&id) {
            return;
        }
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, label));
    }
}

impl<Id: Eq + Hash> LabelMap<Id> {
    /// Number of labeled points.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no point was labeled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Label of `id`, if present.
    pub fn get(&self, id: &Id) -> Option<Label> {
        self.index.get(id).map(|&i| self.entries[i].1)
    }

    /// `(id, label)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&Id, Label)> {
        self.entries.iter().map(|(id, label)| (id, *label))
    }

    /// Number of distinct clusters (noise excluded).
    pub fn n_clusters(&self) -> usize {
        self.entries
            .iter()
            .filter_map(|(_, label)| label.cluster_id())
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Number of points labeled noise.
    pub fn noise_count(&self) -> usize {
        self.entries.iter().filter(|(_, l)| l.is_noise()).count()
    }

    /// Member count of each cluster, indexed by cluster id.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.n_clusters()];
        for id in self.entries.iter().filter_map(|(_, l)| l.cluster_id()) {
            sizes[id] += 1;
        }
        sizes
    }

    /// Identifiers carrying `label`, in input order.
    pub fn members(&self, label: Label) -> impl Iterator<Item = &Id> {
        self.entries
            .iter()
            .filter(move |(_, l)| *l == label)
            .map(|(id, _)| id)
    }
}

impl<Id: Clone + Eq + Hash> FromIterator<(Id, Label)> for LabelMap<Id> {
    fn from_iter<I: IntoIterator<Item = (Id, Label)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        for (id, label) in iter {
            map.push(id, label);
        }
        map
    }
}
