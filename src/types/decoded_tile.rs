//! The result of one successful decode call.

use geozero::mvt::Tile;
use image::DynamicImage;

/// A decoded tile: either parsed vector geometry or a decoded bitmap.
///
/// The vector variant carries whatever the delegated MVT parser produced; the
/// raster variant carries a bitmap ready for GPU/canvas consumption.
#[derive(Debug, Clone)]
pub enum DecodedTile {
	Vector(Tile),
	Raster(DynamicImage),
}

impl DecodedTile {
	#[must_use]
	pub fn is_vector(&self) -> bool {
		matches!(self, DecodedTile::Vector(_))
	}

	#[must_use]
	pub fn is_raster(&self) -> bool {
		matches!(self, DecodedTile::Raster(_))
	}

	#[must_use]
	pub fn as_vector(&self) -> Option<&Tile> {
		match self {
			DecodedTile::Vector(tile) => Some(tile),
			DecodedTile::Raster(_) => None,
		}
	}

	#[must_use]
	pub fn as_raster(&self) -> Option<&DynamicImage> {
		match self {
			DecodedTile::Vector(_) => None,
			DecodedTile::Raster(image) => Some(image),
		}
	}

	#[must_use]
	pub fn into_vector(self) -> Option<Tile> {
		match self {
			DecodedTile::Vector(tile) => Some(tile),
			DecodedTile::Raster(_) => None,
		}
	}

	#[must_use]
	pub fn into_raster(self) -> Option<DynamicImage> {
		match self {
			DecodedTile::Vector(_) => None,
			DecodedTile::Raster(image) => Some(image),
		}
	}
}
