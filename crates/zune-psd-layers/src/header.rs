/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Document validation and the fixed file header
//!
//! Every photoshop document starts with a 26 byte header
//!
//! | size | field                               |
//! |------|-------------------------------------|
//! | 4    | signature, always `8BPS`            |
//! | 2    | version, 1 for PSD and 2 for PSB    |
//! | 6    | reserved, zero                      |
//! | 2    | channels, 1 to 56                   |
//! | 4    | height                              |
//! | 4    | width                               |
//! | 2    | depth, 1, 8, 16 or 32               |
//! | 2    | color mode                          |
//!
//! Validation must run before anything else reads the document.
use zune_core::bytestream::{ZByteReaderTrait, ZReader};
use zune_core::log::trace;

use crate::constants::{ColorModes, DocumentVariant, MAX_CHANNELS, PSD_SIGNATURE};
use crate::errors::PSDDecodeErrors;
use crate::numeric::{in_range, value_is};
use crate::options::PsdDecoderOptions;

/// Confirm that `stream` holds a photoshop document of the `declared` variant.
///
/// Reads the four byte signature and, if it matches, the two byte version.
/// On success the stream has advanced by exactly six bytes.
///
/// # Errors
/// - [`PSDDecodeErrors::WrongMagicBytes`]: signature isn't `8BPS`, the version is not read
/// - [`PSDDecodeErrors::UnsupportedVersion`]: version is neither 1 nor 2
/// - [`PSDDecodeErrors::VariantMismatch`]: version belongs to the other variant
/// - [`PSDDecodeErrors::IoErrors`]: fewer than six bytes were available
pub fn validate_document<T: ZByteReaderTrait>(
    stream: &mut ZReader<T>, declared: DocumentVariant
) -> Result<DocumentVariant, PSDDecodeErrors> {
    let magic = stream.read_fixed_bytes_or_error::<4>()?;

    if magic != PSD_SIGNATURE {
        return Err(PSDDecodeErrors::WrongMagicBytes(magic));
    }

    let version = stream.get_u16_be_err()?;

    let found =
        DocumentVariant::from_version(version).ok_or(PSDDecodeErrors::UnsupportedVersion(version))?;

    if found != declared {
        return Err(PSDDecodeErrors::VariantMismatch { declared, found });
    }
    Ok(found)
}

/// The fixed header at the start of every document
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PsdHeader {
    pub variant:    DocumentVariant,
    pub channels:   u16,
    pub height:     usize,
    pub width:      usize,
    pub depth:      u16,
    pub color_mode: ColorModes
}

impl PsdHeader {
    /// Bytes needed to hold one row of a single channel
    pub const fn row_bytes(&self) -> usize {
        row_bytes(self.width, self.depth)
    }

    /// Bytes needed to hold a single decoded channel
    pub const fn channel_bytes(&self) -> usize {
        self.row_bytes().saturating_mul(self.height)
    }
}

/// Bytes needed for `width` samples of `depth` bits, rounded up
/// to a whole byte.
///
/// Saturates at `usize::MAX`, use [`ChannelInfo::row_bytes`](crate::ChannelInfo::row_bytes)
/// when the dimensions come from outside a decoded header.
pub const fn row_bytes(width: usize, depth: u16) -> usize {
    let bits = width.saturating_mul(depth as usize);
    bits / 8 + (bits % 8 != 0) as usize
}

/// Validate the document and decode the rest of its header.
///
/// The stream must be positioned at the start of the document,
/// on success it is positioned right after the color mode field.
pub fn decode_header<T: ZByteReaderTrait>(
    stream: &mut ZReader<T>, declared: DocumentVariant, options: &PsdDecoderOptions
) -> Result<PsdHeader, PSDDecodeErrors> {
    let variant = validate_document(stream, declared)?;

    decode_header_fields(stream, variant, options)
}

/// Decode the header fields that follow the signature and version.
///
/// Use this when [`validate_document`] has already run on `stream`.
pub fn decode_header_fields<T: ZByteReaderTrait>(
    stream: &mut ZReader<T>, variant: DocumentVariant, options: &PsdDecoderOptions
) -> Result<PsdHeader, PSDDecodeErrors> {
    // Skip 6 reserved bytes
    stream.skip(6)?;

    // Read the number of channels (R, G, B, A, etc).
    let channels = stream.get_u16_be_err()?;

    if !in_range(i64::from(channels), 1, i64::from(MAX_CHANNELS)) {
        return Err(PSDDecodeErrors::UnsupportedChannelCount(channels));
    }

    let height = stream.get_u32_be_err()? as usize;
    let width = stream.get_u32_be_err()? as usize;

    if width == 0 || height == 0 {
        return Err(PSDDecodeErrors::ZeroDimensions);
    }

    let max_width = options.get_max_width().min(variant.max_dimensions());
    let max_height = options.get_max_height().min(variant.max_dimensions());

    if width > max_width {
        return Err(PSDDecodeErrors::LargeDimensions(max_width, width));
    }
    if height > max_height {
        return Err(PSDDecodeErrors::LargeDimensions(max_height, height));
    }

    let depth = stream.get_u16_be_err()?;

    if !value_is(i64::from(depth), &[1, 8, 16, 32]) {
        return Err(PSDDecodeErrors::UnsupportedBitDepth(depth));
    }

    let mode = stream.get_u16_be_err()?;

    let color_mode = ColorModes::from_int(mode).ok_or(PSDDecodeErrors::UnsupportedColorFormat(mode))?;

    trace!("Document variant: {:?}", variant);
    trace!("Image width: {}", width);
    trace!("Image height: {}", height);
    trace!("Channels: {}", channels);
    trace!("Bit depth: {}", depth);
    trace!("Color mode: {}", color_mode.name());

    Ok(PsdHeader {
        variant,
        channels,
        height,
        width,
        depth,
        color_mode
    })
}

#[cfg(test)]
mod tests {
    use zune_core::bytestream::{ZCursor, ZReader};

    use crate::constants::DocumentVariant;
    use crate::errors::{ErrorKind, PSDDecodeErrors};
    use crate::header::{row_bytes, validate_document};

    #[test]
    fn test_standard_document() {
        let data = *b"8BPS\x00\x01rest";
        let mut stream = ZReader::new(ZCursor::new(&data[..]));

        let variant = validate_document(&mut stream, DocumentVariant::Standard).unwrap();
        assert_eq!(variant, DocumentVariant::Standard);
        assert_eq!(stream.position().unwrap(), 6);
    }

    #[test]
    fn test_large_document() {
        let data = *b"8BPS\x00\x02";
        let mut stream = ZReader::new(ZCursor::new(&data[..]));

        let variant = validate_document(&mut stream, DocumentVariant::Large).unwrap();
        assert_eq!(variant, DocumentVariant::Large);
    }

    #[test]
    fn test_mismatched_variant() {
        let data = *b"8BPS\x00\x02";
        let mut stream = ZReader::new(ZCursor::new(&data[..]));

        let err = validate_document(&mut stream, DocumentVariant::Standard).unwrap_err();
        assert!(matches!(
            err,
            PSDDecodeErrors::VariantMismatch {
                declared: DocumentVariant::Standard,
                found:    DocumentVariant::Large
            }
        ));
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_unknown_version() {
        let data = *b"8BPS\x00\x03";
        let mut stream = ZReader::new(ZCursor::new(&data[..]));

        let err = validate_document(&mut stream, DocumentVariant::Large).unwrap_err();
        assert!(matches!(err, PSDDecodeErrors::UnsupportedVersion(3)));
    }

    #[test]
    fn test_wrong_signature_stops_reading() {
        let data = *b"8BPX\x00\x01";
        let mut stream = ZReader::new(ZCursor::new(&data[..]));

        let err = validate_document(&mut stream, DocumentVariant::Standard).unwrap_err();
        assert!(matches!(err, PSDDecodeErrors::WrongMagicBytes(m) if &m == b"8BPX"));
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(stream.position().unwrap(), 4);
    }

    #[test]
    fn test_short_input() {
        for len in 0..6 {
            let data = b"8BPS\x00\x01";
            let mut stream = ZReader::new(ZCursor::new(&data[..len]));

            let err = validate_document(&mut stream, DocumentVariant::Standard).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Io, "length {len}");
        }
    }

    #[test]
    fn test_row_bytes() {
        assert_eq!(row_bytes(10, 8), 10);
        assert_eq!(row_bytes(10, 16), 20);
        assert_eq!(row_bytes(10, 32), 40);
        assert_eq!(row_bytes(10, 1), 2);
        assert_eq!(row_bytes(8, 1), 1);
        assert_eq!(row_bytes(usize::MAX, 1), usize::MAX / 8 + 1);
    }
}
