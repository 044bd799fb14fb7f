//! Option records configuring a single decode call.
//!
//! [`DecodeOptions`] is the options bag a host passes next to a tile payload. It is
//! read-only for the duration of one call; no state is shared between calls. The
//! nested [`MvtOptions`] and [`ImageOptions`] are forwarded to the delegated vector
//! parser and image decoder respectively.
//!
//! All records deserialize with serde, so a host can ship them as part of its
//! configuration:
//!
//! ```rust
//! use pmt_loader::{DecodeOptions, TileCompression};
//!
//! let options: DecodeOptions = serde_json::from_str(r#"{"tile_compression": "gzip"}"#).unwrap();
//! assert_eq!(options.tile_compression, Some(TileCompression::Gzip));
//! assert!(!options.raster);
//! ```

use super::TileCompression;
use image::ImageFormat;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Encoded formats accepted for raster payloads.
///
/// Matches the formats the image stack of this crate is built with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RasterFormat {
	Avif,
	Jpg,
	#[default]
	Png,
	Webp,
}

impl RasterFormat {
	pub fn as_str(&self) -> &str {
		match self {
			RasterFormat::Avif => "avif",
			RasterFormat::Jpg => "jpg",
			RasterFormat::Png => "png",
			RasterFormat::Webp => "webp",
		}
	}

	/// Maps this format onto the delegated image decoder's format type.
	pub fn as_image_format(&self) -> ImageFormat {
		match self {
			RasterFormat::Avif => ImageFormat::Avif,
			RasterFormat::Jpg => ImageFormat::Jpeg,
			RasterFormat::Png => ImageFormat::Png,
			RasterFormat::Webp => ImageFormat::WebP,
		}
	}
}

impl Display for RasterFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Pass-through options for the delegated vector-tile parser.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MvtOptions {
	/// Keep only the named layers after parsing. `None` keeps the tile as parsed.
	pub layers: Option<Vec<String>>,
}

/// Pass-through options for the delegated image decoder.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageOptions {
	/// Encoded format of raster payloads.
	pub format: RasterFormat,
}

/// Options of one decode call.
///
/// Exactly one decode path is taken per call, selected by `raster` and
/// `tile_compression`:
///
/// - `raster == true` selects the raster path (`tile_compression` is ignored),
/// - otherwise `tile_compression == Some(_)` selects the vector path,
/// - otherwise no path is selected and the call yields no result.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
	/// Treat the payload as an encoded raster image.
	pub raster: bool,
	/// Compression tag of a vector payload, as reported by the archive reader.
	pub tile_compression: Option<TileCompression>,
	/// Forwarded to the vector-tile parser.
	pub mvt: MvtOptions,
	/// Forwarded to the image decoder.
	pub image: ImageOptions,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let options = DecodeOptions::default();
		assert!(!options.raster);
		assert_eq!(options.tile_compression, None);
		assert_eq!(options.mvt.layers, None);
		assert_eq!(options.image.format, RasterFormat::Png);
	}

	#[test]
	fn deserialize_partial() {
		let options: DecodeOptions = serde_json::from_str(r#"{"raster": true}"#).unwrap();
		assert!(options.raster);
		assert_eq!(options.tile_compression, None);
		assert_eq!(options.image.format, RasterFormat::Png);
	}

	#[test]
	fn deserialize_nested() {
		let options: DecodeOptions = serde_json::from_str(
			r#"{
				"tile_compression": "none",
				"mvt": {"layers": ["roads"]},
				"image": {"format": "webp"}
			}"#,
		)
		.unwrap();
		assert_eq!(options.tile_compression, Some(TileCompression::None));
		assert_eq!(options.mvt.layers, Some(vec!["roads".to_string()]));
		assert_eq!(options.image.format, RasterFormat::Webp);
	}

	#[test]
	fn raster_format_mapping() {
		assert_eq!(RasterFormat::Png.as_image_format(), ImageFormat::Png);
		assert_eq!(RasterFormat::Jpg.as_image_format(), ImageFormat::Jpeg);
		assert_eq!(RasterFormat::Webp.as_image_format(), ImageFormat::WebP);
		assert_eq!(RasterFormat::Avif.as_image_format(), ImageFormat::Avif);
	}
}
