// src/raw/mod.rs
mod reader;

pub use reader::RawValueReader;
