// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BtsError {
    #[error("IO error: {0}")]
    Io(io::Error),

    #[error("truncated input: the source ended before the field was complete")]
    TruncatedInput,

    #[error("unsupported {mode} field width: {width} bytes")]
    UnsupportedWidth { width: usize, mode: &'static str },

    #[error("invalid encoding: trailer text is not 7-bit ASCII")]
    InvalidEncoding,
}

impl From<io::Error> for BtsError {
    fn from(err: io::Error) -> Self {
        // A short read mid-field is a structural property of the input,
        // distinct from the transport failing outright.
        if err.kind() == io::ErrorKind::UnexpectedEof {
            BtsError::TruncatedInput
        } else {
            BtsError::Io(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, BtsError>;
