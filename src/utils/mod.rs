//! Helpers shared by the decode paths.

mod compression;

pub use compression::{compress_gzip, decompress_gzip, decompress_tile};
