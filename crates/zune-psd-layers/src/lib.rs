//! Photoshop PSD and PSB layer decoding primitives
//!
//! This crate holds the pieces a layer walker needs to pull
//! pixels and names out of a photoshop document
//!
//! - Document validation, confirming the `8BPS` signature and that the version
//!   matches the variant (PSD or PSB) the caller expects
//! - The fixed file header
//! - A PackBits decoder for RLE compressed channels, and a channel decoder
//!   that handles raw, RLE and ZIP channel records
//! - UTF-16 decoding for layer names
//! - Display names for blend modes and color modes
//! - Range and membership checks over integer fields of any width
//!
//! It does not walk resource blocks, layer records or masks, that's
//! left to the caller.
//!
//! # Example
//! - Validating a document and reading its header
//! ```no_run
//! use zune_core::bytestream::{ZCursor, ZReader};
//! use zune_psd_layers::errors::PSDDecodeErrors;
//! use zune_psd_layers::{decode_header, DocumentVariant, PsdDecoderOptions};
//!
//! fn main() -> Result<(), PSDDecodeErrors> {
//!     let data = std::fs::read("layers.psd").unwrap();
//!     let mut stream = ZReader::new(ZCursor::new(&data));
//!     let header = decode_header(
//!         &mut stream,
//!         DocumentVariant::Standard,
//!         &PsdDecoderOptions::default()
//!     )?;
//!     println!("{}x{} {}", header.width, header.height, header.color_mode.name());
//!     Ok(())
//! }
//! ```
//!
//! - Decoding a PackBits stream
//! ```
//! use zune_psd_layers::rle::decode_rle;
//!
//! let pixels = decode_rle(&[0x02, b'A', b'A', b'A', 0xFE, b'B'], 6).unwrap();
//! assert_eq!(&pixels, b"AAABBB");
//! ```
#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;
pub extern crate zune_core;

pub use crate::channel::{decode_channel, read_channel, ChannelInfo};
pub use crate::constants::{ColorModes, CompressionMethod, DocumentVariant};
pub use crate::header::{decode_header, validate_document, PsdHeader};
pub use crate::options::PsdDecoderOptions;
pub use crate::tables::{blend_mode_name, color_mode_name};

pub mod channel;
pub mod constants;
pub mod errors;
pub mod header;
pub mod numeric;
mod options;
pub mod rle;
pub mod tables;
pub mod text;
