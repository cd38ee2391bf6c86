// src/writer.rs
use crate::error::Result;
use crate::header::BtsHeader;
use crate::utils::encode_ascii;
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

/// Encode a header back into its exact binary layout.
///
/// Writing a decoded header reproduces the original header bytes exactly,
/// which makes this the counterpart used to synthesize fixtures and to
/// stamp headers onto newly generated grid files. Fails with
/// [`InvalidEncoding`](crate::BtsError::InvalidEncoding) if the trailer text
/// is not pure ASCII.
pub fn write_header<W: Write>(writer: &mut W, header: &BtsHeader) -> Result<()> {
    let text = encode_ascii(&header.text)?;

    writer.write_i16::<LittleEndian>(header.id)?;

    writer.write_i32::<LittleEndian>(header.z_count)?;
    writer.write_i32::<LittleEndian>(header.y_count)?;
    writer.write_i32::<LittleEndian>(header.tower_count)?;
    writer.write_i32::<LittleEndian>(header.dt_count)?;

    writer.write_f32::<LittleEndian>(header.dz)?;
    writer.write_f32::<LittleEndian>(header.dy)?;
    writer.write_f32::<LittleEndian>(header.dt)?;

    writer.write_f32::<LittleEndian>(header.mean_speed)?;
    writer.write_f32::<LittleEndian>(header.hub_height)?;
    writer.write_f32::<LittleEndian>(header.bottom_height)?;

    for axis in 0..3 {
        writer.write_f32::<LittleEndian>(header.slope[axis])?;
        writer.write_f32::<LittleEndian>(header.intercept[axis])?;
    }

    writer.write_i32::<LittleEndian>(text.len() as i32)?;
    writer.write_all(text)?;

    Ok(())
}
