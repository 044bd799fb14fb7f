//! # PMT Loader
//!
//! A thin decoder for PMTiles tile payloads. Given one tile's raw bytes and an
//! options bag, it routes the payload down exactly one path:
//!
//! - **raster** — the bytes are an encoded image; they are decoded into a bitmap,
//! - **vector** — the bytes are a (possibly gzip-compressed) Mapbox Vector Tile;
//!   they are decompressed and forwarded to the MVT parser.
//!
//! All heavy lifting is delegated: protobuf decoding to `geozero`/`prost`, gzip
//! decompression to `flate2`, bitmap decoding to `image`. The crate itself owns
//! only the routing decision, the decompression policy, and the descriptor a host
//! loading framework registers.
//!
//! ## Usage Example
//!
//! ```rust
//! use pmt_loader::{decode_tile_sync, Blob, DecodeOptions, TileCompression};
//!
//! # fn main() -> anyhow::Result<()> {
//! let options = DecodeOptions {
//! 	tile_compression: Some(TileCompression::None),
//! 	..DecodeOptions::default()
//! };
//!
//! // An empty payload is a valid, empty vector tile.
//! let decoded = decode_tile_sync(Blob::new_empty(), &options)?.unwrap();
//! assert!(decoded.is_vector());
//!
//! // Without a raster flag or a compression tag there is nothing to decode.
//! assert!(decode_tile_sync(Blob::new_empty(), &DecodeOptions::default())?.is_none());
//! # Ok(())
//! # }
//! ```

pub mod decode;
pub mod descriptor;
pub mod raster;
pub mod types;
pub mod utils;
pub mod vector;

pub use decode::{decode_tile, decode_tile_sync};
pub use descriptor::{LoaderCategory, LoaderDescriptor, PmtLoader, TileLoader, VERSION, worker_descriptor};
pub use types::{Blob, DecodeOptions, DecodedTile, ImageOptions, MvtOptions, RasterFormat, TileCompression};
