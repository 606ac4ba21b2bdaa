//! Point reader for headerless, three-column delimited text.
//!
//! Every non-blank line is `id <sep> x <sep> y`, with an integer id and two
//! finite real coordinates. Fields are trimmed before parsing.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::cluster::Point;
use crate::error::{Error, Result};

/// Column separator of the input text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// A single tab character.
    #[default]
    Tab,
    /// A single comma.
    Comma,
    /// Any run of whitespace.
    Whitespace,
}

impl Delimiter {
    fn split<'a>(self, line: &'a str) -> Vec<&'a str> {
        match self {
            Delimiter::Tab => line.split('\t').map(str::trim).collect(),
            Delimiter::Comma => line.split(',').map(str::trim).collect(),
            Delimiter::Whitespace => line.split_whitespace().collect(),
        }
    }
}

/// Read points from a file.
pub fn read_points_from_path(path: &Path, delimiter: Delimiter) -> Result<Vec<Point<i64>>> {
    let file = File::open(path)?;
    let points = read_points(BufReader::new(file), delimiter)?;
    log::info!("read {} points from {}", points.len(), path.display());
    Ok(points)
}

/// Read points from any buffered source, keeping input order.
///
/// Blank lines are skipped. A row with the wrong number of fields, an
/// unparsable id, or a non-numeric coordinate fails with
/// [`Error::MalformedRow`]; a repeated id fails with [`Error::DuplicateId`].
pub fn read_points<R: BufRead>(reader: R, delimiter: Delimiter) -> Result<Vec<Point<i64>>> {
    let mut points = Vec::new();
    let mut seen = HashSet::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let point = parse_row(&line, line_no, delimiter)?;
        if !seen.insert(point.id) {
            return Err(Error::DuplicateId {
                id: point.id.to_string(),
                line: line_no,
            });
        }
        points.push(point);
    }

    Ok(points)
}

fn parse_row(line: &str, line_no: usize, delimiter: Delimiter) -> Result<Point<i64>> {
    let malformed = |reason: String| Error::MalformedRow {
        line: line_no,
        reason,
    };

    let fields = delimiter.split(line);
    let [id, x, y] = fields.as_slice() else {
        return Err(malformed(format!("expected 3 fields, found {}", fields.len())));
    };

    let id = id
        .parse::<i64>()
        .map_err(|_| malformed(format!("invalid id {id:?}")))?;
    let x = parse_coord(x).ok_or_else(|| malformed(format!("invalid x coordinate {x:?}")))?;
    let y = parse_coord(y).ok_or_else(|| malformed(format!("invalid y coordinate {y:?}")))?;

    Ok(Point::new(id, x, y))
}

fn parse_coord(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}
