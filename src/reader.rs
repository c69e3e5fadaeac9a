//! CSV input for the command line tool.
//!
//! Files are plain comma separated numbers. Blank lines and lines starting
//! with `#` are skipped. A first row that does not parse as numbers is taken
//! as a header.

use crate::analysis::{DataPointSet, Histogram1D, Measurement};
use crate::error::{PlotError, Result};
use std::fs;
use std::path::Path;

/// Numeric rows of a CSV file, with their 1-based line numbers.
fn read_rows(path: &Path) -> Result<Vec<(usize, Vec<f64>)>> {
    let text =
        fs::read_to_string(path).map_err(|e| PlotError::file_open(path.to_path_buf(), e))?;
    let mut rows = Vec::new();
    let mut seen_data = false;
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parsed: std::result::Result<Vec<f64>, _> =
            line.split(',').map(|field| field.trim().parse::<f64>()).collect();
        match parsed {
            Ok(values) => {
                rows.push((index + 1, values));
                seen_data = true;
            },
            Err(_) if !seen_data && rows.is_empty() => {
                tracing::debug!("Skipping header in {}: {}", path.display(), line);
                seen_data = true;
            },
            Err(e) => {
                return Err(PlotError::Csv {
                    path: path.to_path_buf(),
                    line: index + 1,
                    message: e.to_string(),
                });
            },
        }
    }
    Ok(rows)
}

fn title_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "data".to_string())
}

/// Load points from columns `x,y[,ey]`, or a single `y` column.
pub fn read_points(path: &Path) -> Result<DataPointSet> {
    let rows = read_rows(path)?;
    let width = rows.first().map(|(_, r)| r.len()).unwrap_or(2);
    let dimension = if width == 1 { 1 } else { 2 };
    let mut set = DataPointSet::new(title_of(path), dimension);

    for (line, row) in rows {
        if row.len() != width {
            return Err(PlotError::Csv {
                path: path.to_path_buf(),
                line,
                message: format!("expected {} columns, found {}", width, row.len()),
            });
        }
        let coordinates = match row.as_slice() {
            [y] => vec![Measurement::new(*y, 0.0)],
            [x, y] => vec![Measurement::new(*x, 0.0), Measurement::new(*y, 0.0)],
            [x, y, ey, ..] => vec![Measurement::new(*x, 0.0), Measurement::new(*y, *ey)],
            [] => continue,
        };
        set.add_measurements(coordinates)?;
    }
    tracing::debug!("Read {} points from {}", set.size(), path.display());
    Ok(set)
}

/// Values of column `column` (0-based).
pub fn read_column(path: &Path, column: usize) -> Result<Vec<f64>> {
    read_rows(path)?
        .into_iter()
        .map(|(line, row)| {
            row.get(column).copied().ok_or_else(|| PlotError::Csv {
                path: path.to_path_buf(),
                line,
                message: format!("no column {}", column),
            })
        })
        .collect()
}

/// Histogram of one column, binned over the range of its values.
pub fn read_histogram(path: &Path, column: usize, bins: usize) -> Result<Histogram1D> {
    let values = read_column(path, column)?;
    let (lo, hi) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let (lo, hi) = if !lo.is_finite() {
        (0.0, 1.0)
    } else if lo == hi {
        (lo - 0.5, hi + 0.5)
    } else {
        // Keep the maximum inside the last bin.
        (lo, hi + (hi - lo) * 1e-9)
    };
    let mut hist = Histogram1D::new(title_of(path), bins, lo, hi)?;
    for v in values {
        hist.fill(v, 1.0);
    }
    Ok(hist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::BaseHistogram;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_points_with_header_and_errors() {
        let file = csv("x,y,ey\n# comment\n1,2,0.5\n\n2,4,0.1\n");
        let set = read_points(file.path()).unwrap();
        assert_eq!(set.dimension(), 2);
        assert_eq!(set.size(), 2);
        let y = set.point(0).unwrap().coordinate(1).unwrap();
        assert_eq!((y.value, y.error_plus), (2.0, 0.5));
    }

    #[test]
    fn single_column_gives_one_dimensional_points() {
        let file = csv("3\n4\n5\n");
        let set = read_points(file.path()).unwrap();
        assert_eq!(set.dimension(), 1);
        assert_eq!(set.size(), 3);
    }

    #[test]
    fn ragged_rows_are_reported_with_line_numbers() {
        let file = csv("1,2\n3\n");
        match read_points(file.path()) {
            Err(PlotError::Csv { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {:?}", other.map(|s| s.size())),
        }
    }

    #[test]
    fn bad_number_after_data_is_an_error() {
        let file = csv("1,2\nfoo,3\n");
        assert!(matches!(
            read_points(file.path()),
            Err(PlotError::Csv { line: 2, .. })
        ));
    }

    #[test]
    fn histogram_covers_all_values() {
        let file = csv("a,b\n0,1\n0,2\n0,3\n0,4\n");
        let hist = read_histogram(file.path(), 1, 3).unwrap();
        assert_eq!(hist.entries(), 4);
        assert_eq!(hist.extra_entries(), 0);
        assert_eq!(hist.axis().lower_edge(), 1.0);
    }

    #[test]
    fn missing_file_is_file_open_error() {
        assert!(matches!(
            read_points(Path::new("/no/such/file.csv")),
            Err(PlotError::FileOpen { .. })
        ));
    }
}
