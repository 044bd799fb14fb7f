//! Value types passed into and out of a decode call.

mod blob;
mod decoded_tile;
mod options;
mod tile_compression;

pub use blob::Blob;
pub use decoded_tile::DecodedTile;
pub use options::{DecodeOptions, ImageOptions, MvtOptions, RasterFormat};
pub use tile_compression::TileCompression;
