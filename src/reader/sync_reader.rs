// src/reader/sync_reader.rs
use crate::error::Result;
use crate::header::{read_header, BtsHeader};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::Mmap;
#[cfg(feature = "mmap")]
use std::io::Cursor;

/// Trait alias for Read + Seek
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// Synchronous BTS file reader.
///
/// Owns the underlying source for its lifetime: the file is opened here,
/// the header is decoded in one pass, and the handle is released on drop
/// whether or not the decode succeeded. After a successful open the source
/// sits at the first byte of the grid time-series body.
pub struct BtsReader<R: ReadSeek> {
    file: R,
    header: BtsHeader,
    body_offset: u64,
}

/// Constructor for standard file I/O
impl BtsReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_source(BufReader::with_capacity(65536, file))
    }
}

/// Constructor for memory-mapped file I/O (requires "mmap" feature)
#[cfg(feature = "mmap")]
impl BtsReader<Cursor<Mmap>> {
    pub fn open_mmap(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_source(Cursor::new(mmap))
    }
}

impl<R: ReadSeek> BtsReader<R> {
    fn from_source(mut file: R) -> Result<Self> {
        let header = read_header(&mut file)?;
        let body_offset = file.stream_position()?;

        // Diagnostic only: the declared span formula can disagree with actual
        // consumption in malformed files. Never a decode failure.
        if body_offset != header.total_span() as u64 {
            tracing::warn!(
                expected = header.total_span(),
                actual = body_offset,
                "header span mismatch: declared byte count differs from bytes consumed"
            );
        }

        Ok(BtsReader {
            file,
            header,
            body_offset,
        })
    }

    /// The decoded header.
    pub fn header(&self) -> &BtsHeader {
        &self.header
    }

    /// Byte offset of the grid data body, i.e. the header's total span.
    pub fn body_offset(&self) -> u64 {
        self.body_offset
    }

    /// Consume the reader, returning the source positioned at the body start.
    ///
    /// The grid time series itself is outside this crate's scope; callers
    /// that want it take the source from here.
    pub fn into_inner(self) -> R {
        self.file
    }
}
