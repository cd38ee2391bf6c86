// src/raw/reader.rs
use crate::error::{BtsError, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;

/// Helper functions for reading fixed-width scalar fields from a binary stream.
///
/// All multi-byte values in the BTS format are little-endian; the format
/// originated on little-endian platforms and the layout never varies with
/// content, so the endianness is fixed here rather than taken from the host.
///
/// Each call consumes exactly `width` bytes on success. If the source is
/// exhausted mid-field the read fails with [`BtsError::TruncatedInput`] and
/// no partial value is returned. Widths outside the supported set are a
/// contract violation ([`BtsError::UnsupportedWidth`]), not a data error.
pub struct RawValueReader;

impl RawValueReader {
    /// Read a signed little-endian integer of `width` bytes (1, 2, 4 or 8).
    ///
    /// # Example
    ///
    /// ```
    /// use bts_rs::raw::RawValueReader;
    /// use std::io::Cursor;
    ///
    /// let mut cursor = Cursor::new(vec![0x2a, 0x00]);
    /// assert_eq!(RawValueReader::read_int(&mut cursor, 2).unwrap(), 42);
    /// ```
    pub fn read_int<R: Read>(reader: &mut R, width: usize) -> Result<i64> {
        match width {
            1 => Ok(i64::from(reader.read_i8()?)),
            2 => Ok(i64::from(reader.read_i16::<LittleEndian>()?)),
            4 => Ok(i64::from(reader.read_i32::<LittleEndian>()?)),
            8 => Ok(reader.read_i64::<LittleEndian>()?),
            _ => Err(BtsError::UnsupportedWidth {
                width,
                mode: "integer",
            }),
        }
    }

    /// Read an IEEE-754 little-endian float of `width` bytes (2, 4 or 8).
    pub fn read_float<R: Read>(reader: &mut R, width: usize) -> Result<f64> {
        match width {
            2 => Ok(f64::from(half_to_f32(reader.read_u16::<LittleEndian>()?))),
            4 => Ok(f64::from(reader.read_f32::<LittleEndian>()?)),
            8 => Ok(reader.read_f64::<LittleEndian>()?),
            _ => Err(BtsError::UnsupportedWidth {
                width,
                mode: "float",
            }),
        }
    }
}

/// Widen an IEEE-754 binary16 bit pattern to f32.
fn half_to_f32(bits: u16) -> f32 {
    let sign = u32::from(bits >> 15) << 31;
    let exponent = u32::from((bits >> 10) & 0x1f);
    let mantissa = u32::from(bits & 0x3ff);

    let magnitude = match (exponent, mantissa) {
        (0, 0) => 0,
        (0, m) => {
            // Subnormal half: exactly m * 2^-24, well inside normal f32 range.
            (m as f32 * 2f32.powi(-24)).to_bits()
        }
        (0x1f, 0) => 0xff << 23,
        (0x1f, m) => (0xff << 23) | (m << 13),
        (e, m) => ((e + 112) << 23) | (m << 13),
    };

    f32::from_bits(sign | magnitude)
}
