// src/report.rs
use crate::header::BtsHeader;
use std::fmt::Write;

/// Render a decoded header as human-readable lines.
///
/// Purely presentational; every value is already decoded. The layout follows
/// the classic BTS inspection output: trailer text first, then one line per
/// group of related fields.
pub fn format_report(header: &BtsHeader) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", header.text);
    let _ = writeln!(out, "file ID: {}", header.id);
    let _ = writeln!(
        out,
        "{} grid points in z, {} grid points in y, {} tower points and {} points in each history.",
        header.z_count, header.y_count, header.tower_count, header.dt_count
    );
    let _ = writeln!(
        out,
        "{:.6} z-spacing, {:.6} y-spacing, {:.6} time step.",
        header.dz, header.dy, header.dt
    );
    let _ = writeln!(
        out,
        "{:.6} mean speed, {:.6} hub height, {:.6} grid bottom height.",
        header.mean_speed, header.hub_height, header.bottom_height
    );
    let [su, sv, sw] = header.slope;
    let _ = writeln!(out, "{su:.6} {sv:.6} {sw:.6} slope.");
    let [iu, iv, iw] = header.intercept;
    let _ = writeln!(out, "{iu:.6} {iv:.6} {iw:.6} intercept.");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines() {
        let header = BtsHeader {
            id: 7,
            z_count: 15,
            y_count: 13,
            tower_count: 4,
            dt_count: 600,
            dz: 5.0,
            dy: 5.0,
            dt: 0.05,
            mean_speed: 12.0,
            hub_height: 90.0,
            bottom_height: 55.0,
            slope: [0.1, 0.2, 0.3],
            intercept: [1.0, 2.0, 3.0],
            text: "TurbSim full-field".to_string(),
        };

        let report = format_report(&header);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "TurbSim full-field");
        assert_eq!(lines[1], "file ID: 7");
        assert_eq!(
            lines[2],
            "15 grid points in z, 13 grid points in y, 4 tower points and 600 points in each history."
        );
        assert_eq!(lines[5], "0.100000 0.200000 0.300000 slope.");
        assert_eq!(lines[6], "1.000000 2.000000 3.000000 intercept.");
    }
}
