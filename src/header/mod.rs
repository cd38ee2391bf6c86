// src/header/mod.rs
mod decoder;
mod record;

pub use decoder::read_header;
pub use record::BtsHeader;
