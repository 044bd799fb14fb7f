//! Loader registration: the descriptor a host loading framework consumes, and the
//! loader type carrying the parse entry points.
//!
//! Two variants are exposed, mirroring how hosts schedule decoders:
//!
//! - [`worker_descriptor`] — descriptor only, no parse entry points attached. A
//!   host that runs decoders off the main execution context supplies the entry
//!   point by convention.
//! - [`PmtLoader`] — the same descriptor with the parse entry points attached via
//!   [`TileLoader`], for direct in-context use.

use crate::decode::{decode_tile, decode_tile_sync};
use crate::types::{Blob, DecodeOptions, DecodedTile};
use anyhow::Result;
use async_trait::async_trait;
use std::fmt::Display;

/// Version string reported in the loader descriptor.
///
/// Resolved at build time from the package version, with an explicit fallback
/// when unresolved.
pub const VERSION: &str = match option_env!("CARGO_PKG_VERSION") {
	Some(version) => version,
	None => "latest",
};

/// Category tag a host framework groups decoders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderCategory {
	Geometry,
	Image,
}

impl LoaderCategory {
	pub fn as_str(&self) -> &str {
		match self {
			LoaderCategory::Geometry => "geometry",
			LoaderCategory::Image => "image",
		}
	}
}

impl Display for LoaderCategory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Identifying fields of a registered tile decoder.
///
/// Consumed by a host loading framework when deciding which decoder handles a
/// payload and where it may run.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderDescriptor {
	pub id: &'static str,
	pub module: &'static str,
	pub name: &'static str,
	pub version: &'static str,
	pub extensions: &'static [&'static str],
	pub mime_types: &'static [&'static str],
	/// Whether the host may run this decoder off the main execution context.
	pub worker: bool,
	pub category: LoaderCategory,
	/// Options applied when the caller provides none.
	pub default_options: DecodeOptions,
}

fn base_descriptor() -> LoaderDescriptor {
	LoaderDescriptor {
		id: "pmt",
		module: "pmt",
		name: "PMTiles",
		version: VERSION,
		extensions: &["pmtiles"],
		mime_types: &["application/x-protobuf"],
		worker: true,
		category: LoaderCategory::Geometry,
		default_options: DecodeOptions::default(),
	}
}

/// Descriptor for off-main-context registration.
///
/// No parse entry points are attached; the host supplies them by convention.
#[must_use]
pub fn worker_descriptor() -> LoaderDescriptor {
	base_descriptor()
}

/// A registered tile decoder with parse entry points attached.
#[async_trait]
pub trait TileLoader {
	fn descriptor(&self) -> &LoaderDescriptor;

	/// Asynchronous parse entry point; handles both tile kinds.
	async fn parse(&self, blob: Blob, options: &DecodeOptions) -> Result<Option<DecodedTile>>;

	/// Synchronous parse entry point; vector payloads only
	/// (see [`decode_tile_sync`](crate::decode::decode_tile_sync)).
	fn parse_sync(&self, blob: Blob, options: &DecodeOptions) -> Result<Option<DecodedTile>>;
}

/// Loader for PMTiles tile payloads, for direct in-context use.
///
/// Both parse shapes delegate to the dispatcher unchanged.
#[derive(Debug, Clone)]
pub struct PmtLoader {
	descriptor: LoaderDescriptor,
}

impl PmtLoader {
	#[must_use]
	pub fn new() -> PmtLoader {
		PmtLoader {
			descriptor: base_descriptor(),
		}
	}
}

impl Default for PmtLoader {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl TileLoader for PmtLoader {
	fn descriptor(&self) -> &LoaderDescriptor {
		&self.descriptor
	}

	async fn parse(&self, blob: Blob, options: &DecodeOptions) -> Result<Option<DecodedTile>> {
		decode_tile(blob, options).await
	}

	fn parse_sync(&self, blob: Blob, options: &DecodeOptions) -> Result<Option<DecodedTile>> {
		decode_tile_sync(blob, options)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::TileCompression;

	#[test]
	fn descriptor_fields() {
		let descriptor = worker_descriptor();
		assert_eq!(descriptor.id, "pmt");
		assert_eq!(descriptor.module, "pmt");
		assert_eq!(descriptor.name, "PMTiles");
		assert_eq!(descriptor.extensions, &["pmtiles"]);
		assert_eq!(descriptor.mime_types, &["application/x-protobuf"]);
		assert!(descriptor.worker);
		assert_eq!(descriptor.category, LoaderCategory::Geometry);
		assert_eq!(descriptor.default_options, DecodeOptions::default());
	}

	#[test]
	fn version_is_resolved() {
		assert!(!VERSION.is_empty());
		assert_eq!(worker_descriptor().version, VERSION);
	}

	#[test]
	fn loader_shares_the_descriptor() {
		let loader = PmtLoader::new();
		assert_eq!(loader.descriptor(), &worker_descriptor());
	}

	#[tokio::test]
	async fn loader_parse_delegates_to_the_dispatcher() -> Result<()> {
		let loader = PmtLoader::new();
		let options = DecodeOptions {
			tile_compression: Some(TileCompression::None),
			..DecodeOptions::default()
		};

		let decoded = loader.parse(Blob::new_empty(), &options).await?.unwrap();
		assert!(decoded.is_vector());

		let decoded = loader.parse_sync(Blob::new_empty(), &options)?.unwrap();
		assert!(decoded.is_vector());

		assert!(loader.parse(Blob::new_empty(), &DecodeOptions::default()).await?.is_none());
		Ok(())
	}
}
