// src/header/record.rs

/// Decoded BTS file header.
///
/// The header is the fixed-plus-variable-length metadata block that precedes
/// the wind grid time series: a 70-byte run of fixed-width scalar fields
/// followed by a length-prefixed ASCII trailer. A `BtsHeader` is built in one
/// pass by [`read_header`](crate::header::read_header) and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct BtsHeader {
    /// File format / periodicity identifier. Not validated against a known
    /// set; consumers that care about the version check it themselves.
    pub id: i16,
    /// Grid points in z.
    pub z_count: i32,
    /// Grid points in y.
    pub y_count: i32,
    /// Tower points below the grid.
    pub tower_count: i32,
    /// Samples in each time history.
    pub dt_count: i32,
    /// Grid spacing in z (m).
    pub dz: f32,
    /// Grid spacing in y (m).
    pub dy: f32,
    /// Time step (s).
    pub dt: f32,
    /// Mean hub-height wind speed (m/s).
    pub mean_speed: f32,
    /// Hub height (m).
    pub hub_height: f32,
    /// Height of the grid bottom (m).
    pub bottom_height: f32,
    /// Per-axis scaling slope, one entry per velocity component (u, v, w).
    pub slope: [f32; 3],
    /// Per-axis scaling intercept, paired positionally with `slope`.
    pub intercept: [f32; 3],
    /// Descriptive trailer text.
    pub text: String,
}

impl BtsHeader {
    /// Byte span of the fixed-width fields: 2 + 4*4 + 4*3 + 4*3 + 4*6 + 4.
    pub const FIXED_SPAN: usize = 70;

    /// Total header span in bytes, including the variable-length trailer.
    pub fn total_span(&self) -> usize {
        Self::FIXED_SPAN + self.text.len()
    }
}
