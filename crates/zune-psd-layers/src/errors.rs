/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use zune_core::bytestream::ZByteIoError;
use zune_inflate::errors::InflateDecodeErrors;

use crate::constants::{DocumentVariant, PSD_SIGNATURE};

/// Broad category of a [`PSDDecodeErrors`].
///
/// Walkers use this to decide what to do with a failure,
/// a format error ends the document while a decode error
/// only spoils the channel it came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// The input ran out before the bytes needed were available
    Io,
    /// The document is not something we accept
    Format,
    /// Compressed data is inconsistent with what it claims to hold
    Decode
}

/// PSDDecodeErrors that can occur during PSD decoding
pub enum PSDDecodeErrors {
    /// The first four bytes were not `8BPS`
    WrongMagicBytes([u8; 4]),
    /// Version field is neither 1 nor 2
    UnsupportedVersion(u16),
    /// Version is valid but belongs to the other variant
    VariantMismatch {
        declared: DocumentVariant,
        found:    DocumentVariant
    },
    UnsupportedChannelCount(u16),
    UnsupportedBitDepth(u16),
    UnsupportedColorFormat(u16),
    /// maximum allowed, found
    LargeDimensions(usize, usize),
    ZeroDimensions,
    UnknownCompression(u16),
    /// A run would overflow the expected output, or the stream
    /// ended on a run boundary before the output was full
    BadRle,
    /// A run needs more bytes than the input holds
    RleOverrun {
        needed:    usize,
        available: usize
    },
    ZipError(InflateDecodeErrors),
    Generic(&'static str),
    IoErrors(ZByteIoError)
}

impl PSDDecodeErrors {
    /// Category of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            PSDDecodeErrors::IoErrors(_) | PSDDecodeErrors::RleOverrun { .. } => ErrorKind::Io,
            PSDDecodeErrors::WrongMagicBytes(_)
            | PSDDecodeErrors::UnsupportedVersion(_)
            | PSDDecodeErrors::VariantMismatch { .. }
            | PSDDecodeErrors::UnsupportedChannelCount(_)
            | PSDDecodeErrors::UnsupportedBitDepth(_)
            | PSDDecodeErrors::UnsupportedColorFormat(_)
            | PSDDecodeErrors::LargeDimensions(..)
            | PSDDecodeErrors::ZeroDimensions => ErrorKind::Format,
            PSDDecodeErrors::UnknownCompression(_)
            | PSDDecodeErrors::BadRle
            | PSDDecodeErrors::ZipError(_)
            | PSDDecodeErrors::Generic(_) => ErrorKind::Decode
        }
    }
}

impl Debug for PSDDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PSDDecodeErrors::Generic(reason) => {
                writeln!(f, "{reason}")
            }
            PSDDecodeErrors::WrongMagicBytes(bytes) => {
                writeln!(
                    f,
                    "Signature mismatch, expected {:?} but found {:?}, not a PSD document",
                    PSD_SIGNATURE, bytes
                )
            }
            PSDDecodeErrors::UnsupportedVersion(version) => {
                writeln!(
                    f,
                    "Unsupported file version {version:?}, known versions are 1 and 2"
                )
            }
            PSDDecodeErrors::VariantMismatch { declared, found } => {
                writeln!(
                    f,
                    "Version mismatch, expected a {declared:?} document (version {}) but found a {found:?} one (version {})",
                    declared.version(),
                    found.version()
                )
            }
            PSDDecodeErrors::UnsupportedChannelCount(channels) => {
                writeln!(f, "Unsupported channel count {channels:?}")
            }
            PSDDecodeErrors::UnsupportedBitDepth(depth) => {
                writeln!(
                    f,
                    "Unsupported bit depth {depth:?}, supported depths are 1, 8, 16 and 32"
                )
            }
            PSDDecodeErrors::UnsupportedColorFormat(color) => {
                writeln!(f, "Unknown color mode {color}")
            }
            PSDDecodeErrors::LargeDimensions(supported, found) => {
                writeln!(
                    f,
                    "Too large dimensions, supported {supported} but found {found}"
                )
            }
            PSDDecodeErrors::ZeroDimensions => {
                writeln!(f, "Zero found where not expected")
            }
            PSDDecodeErrors::UnknownCompression(method) => {
                writeln!(f, "Unknown compression format {method}")
            }
            PSDDecodeErrors::BadRle => {
                writeln!(f, "Corrupt run-length stream")
            }
            PSDDecodeErrors::RleOverrun { needed, available } => {
                writeln!(
                    f,
                    "Run-length stream overrun, run needs {needed} bytes but only {available} remain"
                )
            }
            PSDDecodeErrors::ZipError(e) => {
                writeln!(f, "Zip error :{:?}", e)
            }
            PSDDecodeErrors::IoErrors(e) => {
                writeln!(f, "I/O error :{:?}", e)
            }
        }
    }
}

impl Display for PSDDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PSDDecodeErrors {}

impl From<&'static str> for PSDDecodeErrors {
    fn from(r: &'static str) -> Self {
        Self::Generic(r)
    }
}

impl From<ZByteIoError> for PSDDecodeErrors {
    fn from(r: ZByteIoError) -> Self {
        Self::IoErrors(r)
    }
}

impl From<InflateDecodeErrors> for PSDDecodeErrors {
    fn from(r: InflateDecodeErrors) -> Self {
        Self::ZipError(r)
    }
}
