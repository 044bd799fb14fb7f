//! Delegated vector-tile parsing.
//!
//! Protobuf decoding is handed to `geozero`/`prost` in full. The only local step is
//! the optional layer selection carried in the pass-through options.

use crate::types::{Blob, MvtOptions};
use anyhow::{Context, Result};
use geozero::mvt::Tile;
use log::debug;
use prost::Message;

/// Parses a decompressed vector-tile payload.
///
/// Returns whatever the delegated parser produces; parser errors propagate
/// unchanged apart from a context line.
pub fn parse_vector(blob: &Blob, options: &MvtOptions) -> Result<Tile> {
	let mut tile = Tile::decode(blob.as_slice()).context("failed to parse vector tile payload")?;
	if let Some(layers) = &options.layers {
		tile.layers.retain(|layer| layers.iter().any(|name| name == &layer.name));
	}
	debug!("parsed vector tile with {} layers from {} bytes", tile.layers.len(), blob.len());
	Ok(tile)
}

#[cfg(test)]
mod tests {
	use super::*;
	use geozero::mvt::tile::Layer;

	fn test_tile() -> Tile {
		Tile {
			layers: vec![
				Layer {
					name: "roads".to_string(),
					version: 2,
					..Layer::default()
				},
				Layer {
					name: "water".to_string(),
					version: 2,
					..Layer::default()
				},
			],
		}
	}

	fn encode(tile: &Tile) -> Blob {
		Blob::from(tile.encode_to_vec())
	}

	#[test]
	fn parses_encoded_tile() -> Result<()> {
		let tile = test_tile();
		let parsed = parse_vector(&encode(&tile), &MvtOptions::default())?;
		assert_eq!(parsed, tile);
		Ok(())
	}

	#[test]
	fn empty_payload_is_an_empty_tile() -> Result<()> {
		let parsed = parse_vector(&Blob::new_empty(), &MvtOptions::default())?;
		assert_eq!(parsed.layers.len(), 0);
		Ok(())
	}

	#[test]
	fn layer_selection() -> Result<()> {
		let options = MvtOptions {
			layers: Some(vec!["water".to_string()]),
		};
		let parsed = parse_vector(&encode(&test_tile()), &options)?;
		assert_eq!(parsed.layers.len(), 1);
		assert_eq!(parsed.layers[0].name, "water");
		Ok(())
	}

	#[test]
	fn layer_selection_with_no_match_keeps_nothing() -> Result<()> {
		let options = MvtOptions {
			layers: Some(vec!["buildings".to_string()]),
		};
		let parsed = parse_vector(&encode(&test_tile()), &options)?;
		assert!(parsed.layers.is_empty());
		Ok(())
	}

	#[test]
	fn garbage_payload_fails() {
		let result = parse_vector(&Blob::from(&[0xff, 0xff, 0xff, 0xff]), &MvtOptions::default());
		assert!(result.is_err(), "invalid protobuf should fail to parse");
	}
}
