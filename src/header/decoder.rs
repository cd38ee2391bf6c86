// src/header/decoder.rs
use crate::error::{BtsError, Result};
use crate::header::BtsHeader;
use crate::raw::RawValueReader;
use crate::utils::decode_ascii;
use std::io::Read;

/// Decode a BTS header from a byte source positioned at the header start.
///
/// The decode is one sequential pass over the fixed field layout, then the
/// length-prefixed trailer. Any failure aborts the whole decode; a partial
/// record is never returned. On success the source is left positioned at the
/// first byte of the grid data.
///
/// The declared trailer length is not pre-validated: a negative or oversized
/// length simply exhausts the source and fails as
/// [`BtsError::TruncatedInput`].
pub fn read_header<R: Read>(reader: &mut R) -> Result<BtsHeader> {
    let id = RawValueReader::read_int(reader, 2)? as i16;

    let z_count = RawValueReader::read_int(reader, 4)? as i32;
    let y_count = RawValueReader::read_int(reader, 4)? as i32;
    let tower_count = RawValueReader::read_int(reader, 4)? as i32;
    let dt_count = RawValueReader::read_int(reader, 4)? as i32;

    let dz = RawValueReader::read_float(reader, 4)? as f32;
    let dy = RawValueReader::read_float(reader, 4)? as f32;
    let dt = RawValueReader::read_float(reader, 4)? as f32;

    let mean_speed = RawValueReader::read_float(reader, 4)? as f32;
    let hub_height = RawValueReader::read_float(reader, 4)? as f32;
    let bottom_height = RawValueReader::read_float(reader, 4)? as f32;

    // Slope and intercept are interleaved per axis in the file, not stored
    // as two contiguous blocks.
    let mut slope = [0f32; 3];
    let mut intercept = [0f32; 3];
    for axis in 0..3 {
        slope[axis] = RawValueReader::read_float(reader, 4)? as f32;
        intercept[axis] = RawValueReader::read_float(reader, 4)? as f32;
    }

    let text = read_trailer(reader)?;

    Ok(BtsHeader {
        id,
        z_count,
        y_count,
        tower_count,
        dt_count,
        dz,
        dy,
        dt,
        mean_speed,
        hub_height,
        bottom_height,
        slope,
        intercept,
        text,
    })
}

fn read_trailer<R: Read>(reader: &mut R) -> Result<String> {
    let declared = RawValueReader::read_int(reader, 4)?;
    if declared == 0 {
        return Ok(String::new());
    }

    // A negative declared length reads as a huge unsigned count; `take`
    // bounds the read so exhaustion surfaces from the read itself rather
    // than from an up-front length check.
    let length = declared as i32 as u32 as u64;
    let mut bytes = Vec::new();
    reader.take(length).read_to_end(&mut bytes)?;
    if (bytes.len() as u64) < length {
        return Err(BtsError::TruncatedInput);
    }

    decode_ascii(&bytes)
}
