//! Delegated raster decoding.
//!
//! Bitmap decoding is handed to the `image` crate. The encoded payload is moved
//! into the call and released on every exit path, success or failure.

use crate::types::{Blob, ImageOptions};
use anyhow::{Context, Result};
use image::DynamicImage;
use log::debug;

/// Decodes an encoded raster payload into a bitmap.
pub fn decode_raster(blob: Blob, options: &ImageOptions) -> Result<DynamicImage> {
	let format = options.format;
	let image = image::load_from_memory_with_format(blob.as_slice(), format.as_image_format())
		.with_context(|| format!("failed to decode {format} raster tile"))?;
	debug!(
		"decoded {format} raster tile ({}x{} pixels from {} bytes)",
		image.width(),
		image.height(),
		blob.len()
	);
	Ok(image)
}
