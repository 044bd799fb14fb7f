//! This module defines the `TileCompression` enum, the compression tag attached to a
//! tile payload by the archive it was read from.
//!
//! The numeric values match the tag values stored in a PMTiles header. The tag is
//! produced by an archive-reader collaborator; this crate only interprets it when
//! choosing how to decompress a vector payload.
//!
//! # Examples
//!
//! ```rust
//! use pmt_loader::TileCompression;
//!
//! assert_eq!(TileCompression::from_u8(2).unwrap(), TileCompression::Gzip);
//! assert_eq!(TileCompression::Gzip.to_string(), "gzip");
//! ```

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Compression tag of a tile payload.
///
/// Of these, only `None`, `Unknown` and `Gzip` payloads can be decoded;
/// `Brotli` and `Zstd` are recognized tags without a supported decompressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileCompression {
	Unknown = 0x0,
	None = 0x1,
	Gzip = 0x2,
	Brotli = 0x3,
	Zstd = 0x4,
}

impl TileCompression {
	/// Interprets a raw header tag value.
	pub fn from_u8(value: u8) -> Result<Self> {
		match value {
			0 => Ok(TileCompression::Unknown),
			1 => Ok(TileCompression::None),
			2 => Ok(TileCompression::Gzip),
			3 => Ok(TileCompression::Brotli),
			4 => Ok(TileCompression::Zstd),
			_ => bail!("unknown value {value} for tile compression"),
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			TileCompression::Unknown => "unknown",
			TileCompression::None => "none",
			TileCompression::Gzip => "gzip",
			TileCompression::Brotli => "brotli",
			TileCompression::Zstd => "zstd",
		}
	}
}

impl Display for TileCompression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, TileCompression::Unknown)]
	#[case(1, TileCompression::None)]
	#[case(2, TileCompression::Gzip)]
	#[case(3, TileCompression::Brotli)]
	#[case(4, TileCompression::Zstd)]
	fn from_u8_known_tags(#[case] value: u8, #[case] expected: TileCompression) {
		assert_eq!(TileCompression::from_u8(value).unwrap(), expected);
	}

	#[test]
	fn from_u8_rejects_unassigned_tags() {
		for value in 5..=u8::MAX {
			assert!(TileCompression::from_u8(value).is_err(), "value {value} should be rejected");
		}
	}

	#[test]
	fn display() {
		assert_eq!(TileCompression::None.to_string(), "none");
		assert_eq!(TileCompression::Unknown.to_string(), "unknown");
		assert_eq!(TileCompression::Gzip.to_string(), "gzip");
		assert_eq!(TileCompression::Brotli.to_string(), "brotli");
		assert_eq!(TileCompression::Zstd.to_string(), "zstd");
	}

	#[test]
	fn serde_roundtrip() {
		let json = serde_json::to_string(&TileCompression::Gzip).unwrap();
		assert_eq!(json, "\"gzip\"");
		let parsed: TileCompression = serde_json::from_str(&json).unwrap();
		assert_eq!(parsed, TileCompression::Gzip);
	}
}
