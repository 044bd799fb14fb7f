//! Decompression shim for vector tile payloads.
//!
//! Only whole-buffer operations: a payload either decompresses fully or the call
//! fails. There are no retries and no partial results.
//!
//! ## Usage
//! ```rust
//! use pmt_loader::{Blob, utils::{compress_gzip, decompress_gzip}};
//!
//! let data = Blob::from(vec![1, 2, 3, 4, 5]);
//! let compressed = compress_gzip(&data)?;
//! let decompressed = decompress_gzip(&compressed)?;
//! assert_eq!(data, decompressed);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::types::{Blob, TileCompression};
use anyhow::{Context, Result, bail};
use flate2::bufread::{GzDecoder, GzEncoder};
use log::trace;
use std::io::Read;

/// Applies the payload decompression policy for one tile.
///
/// `None` and `Unknown` tags leave the payload unchanged. `Gzip` payloads are
/// inflated. Every other tag fails; nothing further runs for that tile.
pub fn decompress_tile(blob: Blob, compression: TileCompression) -> Result<Blob> {
	match compression {
		TileCompression::None | TileCompression::Unknown => Ok(blob),
		TileCompression::Gzip => decompress_gzip(&blob),
		unsupported => bail!("unsupported compression method: {unsupported}"),
	}
}

/// Decompresses data that was compressed using Gzip.
pub fn decompress_gzip(blob: &Blob) -> Result<Blob> {
	let mut decoder = GzDecoder::new(blob.as_slice());
	let mut decompressed_data = Vec::new();
	decoder
		.read_to_end(&mut decompressed_data)
		.context("failed to decompress data using Gzip")?;
	trace!("gunzipped {} bytes to {}", blob.len(), decompressed_data.len());
	Ok(Blob::from(decompressed_data))
}

/// Compresses data using Gzip.
///
/// The decoder itself never compresses; hosts and tests use this to produce
/// payloads matching what a Gzip-tagged archive stores.
pub fn compress_gzip(blob: &Blob) -> Result<Blob> {
	let mut encoder = GzEncoder::new(blob.as_slice(), flate2::Compression::best());
	let mut compressed_data = Vec::new();
	encoder
		.read_to_end(&mut compressed_data)
		.context("failed to compress data using Gzip")?;
	Ok(Blob::from(compressed_data))
}
