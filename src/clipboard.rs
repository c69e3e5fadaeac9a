//! Clipboard integration.

use crate::analysis::PlotObject;
use crate::error::Result;
use crate::region::Region;
use arboard::Clipboard;
use std::fmt::Write;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Tab-separated dump of every object plotted in `region`.
///
/// Each object starts with a `# kind: title` line followed by a header row.
pub fn region_to_tsv(region: &Region) -> String {
    let mut out = String::new();
    for entry in region.entries() {
        let object = &entry.object;
        // Writing to a String cannot fail.
        let _ = writeln!(out, "# {}: {}", object.kind(), object.title());
        match object {
            PlotObject::Histogram1D(h) => {
                out.push_str("lower\tupper\theight\terror\tentries\n");
                let axis = h.axis();
                for i in 0..axis.bins() {
                    let _ = writeln!(
                        out,
                        "{}\t{}\t{}\t{}\t{}",
                        axis.bin_lower_edge(i),
                        axis.bin_upper_edge(i),
                        h.bin_height(i),
                        h.bin_error(i),
                        h.bin_entries(i)
                    );
                }
            },
            PlotObject::Histogram2D(h) => {
                out.push_str("x_lower\ty_lower\theight\terror\tentries\n");
                let (xa, ya) = (h.x_axis(), h.y_axis());
                for ix in 0..xa.bins() {
                    for iy in 0..ya.bins() {
                        let _ = writeln!(
                            out,
                            "{}\t{}\t{}\t{}\t{}",
                            xa.bin_lower_edge(ix),
                            ya.bin_lower_edge(iy),
                            h.bin_height(ix, iy),
                            h.bin_error(ix, iy),
                            h.bin_entries(ix, iy)
                        );
                    }
                }
            },
            PlotObject::Function(f) => {
                let _ = writeln!(out, "codelet\t{}", f.kind().codelet());
                for (name, value) in f.parameter_names().iter().zip(f.parameters()) {
                    let _ = writeln!(out, "{}\t{}", name, value);
                }
            },
            PlotObject::DataPointSet(d) => {
                let header: Vec<String> = (0..d.dimension())
                    .flat_map(|i| {
                        [
                            format!("value{}", i),
                            format!("error_plus{}", i),
                            format!("error_minus{}", i),
                        ]
                    })
                    .collect();
                let _ = writeln!(out, "{}", header.join("\t"));
                for point in d.points() {
                    let row: Vec<String> = (0..point.dimension())
                        .filter_map(|i| point.coordinate(i))
                        .flat_map(|m| {
                            [
                                m.value.to_string(),
                                m.error_plus.to_string(),
                                m.error_minus.to_string(),
                            ]
                        })
                        .collect();
                    let _ = writeln!(out, "{}", row.join("\t"));
                }
            },
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{DataPointSet, Function, Histogram1D};
    use crate::region::PlotterRegion;

    #[test]
    fn dumps_histogram_bins() {
        let mut h = Histogram1D::new("h", 2, 0.0, 2.0).unwrap();
        h.fill(0.5, 3.0);
        let mut region = Region::new();
        region.plot(&h, "").unwrap();
        let tsv = region_to_tsv(&region);
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines[0], "# histogram: h");
        assert_eq!(lines[2], "0\t1\t3\t3\t1");
        assert_eq!(lines[3], "1\t2\t0\t0\t0");
    }

    #[test]
    fn dumps_points_and_functions() {
        let mut d = DataPointSet::new("d", 1);
        d.add_point(&[2.5], &[0.5]).unwrap();
        let mut region = Region::new();
        region.plot(&d, "").unwrap();
        region.plot(&Function::gaussian("g", 1.0, 0.0, 2.0), "").unwrap();
        let tsv = region_to_tsv(&region);
        assert!(tsv.contains("value0\terror_plus0\terror_minus0\n2.5\t0.5\t0.5\n"));
        assert!(tsv.contains("codelet\tG\n"));
        assert!(tsv.contains("sigma\t2\n"));
    }

    #[test]
    fn empty_region_dumps_nothing() {
        assert!(region_to_tsv(&Region::new()).is_empty());
    }
}
