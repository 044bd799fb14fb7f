//! The tile dispatcher: one routing decision per payload.
//!
//! Given one tile's bytes and a [`DecodeOptions`] bag, exactly one decode path is
//! taken, selected by `raster` and `tile_compression`:
//!
//! 1. `raster == true` — the payload is decoded as an encoded raster image.
//!    `tile_compression` is not inspected on this path.
//! 2. `tile_compression == Some(tag)` — the payload is decompressed according to
//!    the tag, then forwarded to the vector-tile parser.
//! 3. neither — the call yields `Ok(None)`.
//!
//! The dispatcher holds no state; concurrent calls on independent payloads are safe
//! by construction.

use crate::raster::decode_raster;
use crate::types::{Blob, DecodeOptions, DecodedTile};
use crate::utils::decompress_tile;
use crate::vector::parse_vector;
use anyhow::{Context, Result, bail};
use log::debug;

/// Decodes one tile payload.
///
/// Returns `Ok(Some(_))` with the decoded tile, or `Ok(None)` when the options
/// select no decode path (`raster` is false and no compression tag is present).
/// The `Ok(None)` sentinel is deterministic; it is not an error.
///
/// The raster path runs the image decode on a blocking worker, so this future
/// stays responsive while a bitmap is produced.
///
/// # Examples
///
/// ```rust
/// use pmt_loader::{decode_tile, Blob, DecodeOptions, TileCompression};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> anyhow::Result<()> {
/// let options = DecodeOptions {
/// 	tile_compression: Some(TileCompression::None),
/// 	..DecodeOptions::default()
/// };
/// let decoded = decode_tile(Blob::new_empty(), &options).await?.unwrap();
/// assert!(decoded.is_vector());
/// # Ok(())
/// # }
/// ```
pub async fn decode_tile(blob: Blob, options: &DecodeOptions) -> Result<Option<DecodedTile>> {
	if options.raster {
		debug!("dispatching {} bytes to the raster decoder", blob.len());
		let image_options = options.image;
		let image = tokio::task::spawn_blocking(move || decode_raster(blob, &image_options))
			.await
			.context("raster decode task failed")??;
		return Ok(Some(DecodedTile::Raster(image)));
	}
	decode_vector_path(blob, options)
}

/// Synchronous variant of [`decode_tile`].
///
/// Applies the same dispatch logic, but only the vector path is synchronous
/// end-to-end. Raster payloads require the asynchronous image decode step, so
/// `raster == true` is rejected with an error instead of returning a value that
/// secretly still has work pending.
pub fn decode_tile_sync(blob: Blob, options: &DecodeOptions) -> Result<Option<DecodedTile>> {
	if options.raster {
		bail!("raster tiles require the asynchronous decoder");
	}
	decode_vector_path(blob, options)
}

fn decode_vector_path(blob: Blob, options: &DecodeOptions) -> Result<Option<DecodedTile>> {
	let Some(compression) = options.tile_compression else {
		debug!("no decode path selected for {} bytes, yielding no result", blob.len());
		return Ok(None);
	};
	debug!(
		"dispatching {} bytes to the vector parser (compression: {compression})",
		blob.len()
	);
	let decompressed = decompress_tile(blob, compression)?;
	let tile = parse_vector(&decompressed, &options.mvt)?;
	Ok(Some(DecodedTile::Vector(tile)))
}
