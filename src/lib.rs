// src/lib.rs
//! # bts-rs
//!
//! A Rust library for reading the binary header of TurbSim full-field
//! ("BTS") wind grid files, the time-series output format produced by
//! NREL's TurbSim simulator.
//!
//! The header is a fixed sequence of little-endian scalar fields — grid
//! dimensions, spacings, physical reference values and per-axis scaling
//! pairs — terminated by a length-prefixed ASCII trailer. There are no
//! delimiters or tags in the stream: every field's width and position is
//! fixed by the format, so the decoder reads them in exact order and fails
//! fast on any structural violation.
//!
//! ## Quick Start
//!
//! ### Decoding a header from a file
//!
//! ```rust,no_run
//! use bts_rs::*;
//!
//! fn main() -> Result<()> {
//!     let reader = BtsReader::open("wind.bts")?;
//!     let header = reader.header();
//!
//!     println!("{} x {} grid, {} samples", header.y_count, header.z_count, header.dt_count);
//!     println!("grid data starts at byte {}", reader.body_offset());
//!     Ok(())
//! }
//! ```
//!
//! ### Decoding from any byte source
//!
//! ```rust
//! use bts_rs::*;
//! use std::io::Cursor;
//!
//! fn decode(bytes: &[u8]) -> Result<BtsHeader> {
//!     read_header(&mut Cursor::new(bytes))
//! }
//! ```

// Modules
pub mod error;
pub mod header;
pub mod raw;
pub mod reader;
pub mod report;
pub mod writer;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{BtsError, Result};

pub use header::{read_header, BtsHeader};
pub use raw::RawValueReader;
pub use reader::BtsReader;
pub use report::format_report;
pub use writer::write_header;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use bts_rs::prelude::*;
    //! ```

    pub use crate::error::{BtsError, Result};
    pub use crate::header::{read_header, BtsHeader};
    pub use crate::reader::BtsReader;
}

/// Byte span of the fixed-width header fields, excluding the trailer.
pub const FIXED_HEADER_SPAN: usize = BtsHeader::FIXED_SPAN;

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert_eq!(FIXED_HEADER_SPAN, 70);
        assert!(!LIBRARY_VERSION.is_empty());
    }
}
