//! End-to-end runs: text in, labels, id-list files out.

use std::fs;

use dbclust::io::{self, Delimiter};
use dbclust::{Dbscan, Label, LabelMap, Point};
use tempfile::tempdir;

#[test]
fn three_points_one_cluster_one_noise() {
    let points = vec![
        Point::new(1, 0.0, 0.0),
        Point::new(2, 0.0, 0.5),
        Point::new(3, 0.0, 10.0),
    ];
    let map = Dbscan::new(1.0, 2).fit(&points);

    assert_eq!(map.get(&1), Some(Label::Cluster(0)));
    assert_eq!(map.get(&2), Some(Label::Cluster(0)));
    assert_eq!(map.get(&3), Some(Label::Noise));
    assert_eq!(map.get(&3).map(Label::as_i64), Some(-1));
}

#[test]
fn empty_input_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.tsv");
    fs::write(&input, "").unwrap();

    let points = io::read_points_from_path(&input, Delimiter::Tab).unwrap();
    let map = Dbscan::new(1.0, 2).fit(&points);
    assert!(map.is_empty());

    let base = io::output_base(&input).unwrap();
    for n in [0, 1, 5] {
        assert!(io::write_top_clusters(&map, n, &base).unwrap().is_empty());
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn largest_group_written_first() {
    let dir = tempdir().unwrap();
    let map: LabelMap<i64> = [(1, Label::Cluster(0)), (2, Label::Cluster(0)), (3, Label::Noise)]
        .into_iter()
        .collect();

    let written = io::write_top_clusters(&map, 1, &dir.path().join("pts")).unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(fs::read_to_string(&written[0]).unwrap(), "1\n2\n");
}

#[test]
fn file_round_trip_keeps_input_order_in_outputs() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("blobs.txt");
    // Two blobs and an outlier, ids out of numeric order.
    let rows = [
        "20\t5.0\t5.0",
        "4\t0.0\t0.0",
        "21\t5.2\t5.0",
        "99\t50.0\t50.0",
        "3\t0.2\t0.0",
        "22\t5.0\t5.2",
        "2\t0.0\t0.2",
        "1\t0.2\t0.2",
    ];
    fs::write(&input, rows.join("\n")).unwrap();

    let points = io::read_points_from_path(&input, Delimiter::Tab).unwrap();
    let map = Dbscan::new(0.5, 3).fit(&points);

    assert_eq!(map.n_clusters(), 2);
    assert_eq!(map.get(&20), Some(Label::Cluster(0)));
    assert_eq!(map.get(&4), Some(Label::Cluster(1)));
    assert_eq!(map.get(&99), Some(Label::Noise));

    let base = io::output_base(&input).unwrap();
    assert_eq!(base, dir.path().join("blobs"));
    let written = io::write_top_clusters(&map, 3, &base).unwrap();

    assert_eq!(
        written,
        vec![
            dir.path().join("blobs_cluster_0.txt"),
            dir.path().join("blobs_cluster_1.txt"),
            dir.path().join("blobs_cluster_2.txt"),
        ]
    );
    assert_eq!(fs::read_to_string(&written[0]).unwrap(), "4\n3\n2\n1\n");
    assert_eq!(fs::read_to_string(&written[1]).unwrap(), "20\n21\n22\n");
    assert_eq!(fs::read_to_string(&written[2]).unwrap(), "99\n");
}

#[test]
fn malformed_file_is_rejected_before_clustering() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.tsv");
    fs::write(&input, "1\t0.0\t0.0\n2\tx\t0.0\n").unwrap();

    let err = io::read_points_from_path(&input, Delimiter::Tab).unwrap_err();
    assert!(matches!(err, dbclust::Error::MalformedRow { line: 2, .. }));
}
