/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::upper_case_acronyms)]

use crate::tables::{color_mode_name, COMPRESSION_METHODS};

/// `8BPS` as it appears on disk
pub const PSD_SIGNATURE: [u8; 4] = *b"8BPS";

/// Version field of a standard (`.psd`) document
pub const PSD_VERSION: u16 = 1;

/// Version field of a large (`.psb`) document
pub const PSB_VERSION: u16 = 2;

/// Largest width or height a standard document may declare
pub const PSD_MAX_DIMENSIONS: usize = 30_000;

/// Largest width or height a large document may declare
pub const PSB_MAX_DIMENSIONS: usize = 300_000;

/// Highest channel count the file header allows
pub const MAX_CHANNELS: u16 = 56;

/// The two size classes of a photoshop document.
///
/// The variant a caller expects is declared up front and
/// then confirmed against the version field of the document.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DocumentVariant {
    /// Version 1 documents, usually with a `.psd` extension
    Standard,
    /// Version 2 documents, usually with a `.psb` extension
    Large
}

impl DocumentVariant {
    /// The version field a document of this variant carries
    pub const fn version(self) -> u16 {
        match self {
            DocumentVariant::Standard => PSD_VERSION,
            DocumentVariant::Large => PSB_VERSION
        }
    }

    /// Map a version field back to its variant
    pub const fn from_version(version: u16) -> Option<DocumentVariant> {
        match version {
            PSD_VERSION => Some(DocumentVariant::Standard),
            PSB_VERSION => Some(DocumentVariant::Large),
            _ => None
        }
    }

    /// Guess the variant from a file extension (`psd` or `psb`,
    /// with or without the leading dot, any case).
    ///
    /// This is a convenience for callers that have a file name,
    /// the variant is still confirmed against the document bytes.
    pub fn from_extension(extension: &str) -> Option<DocumentVariant> {
        let extension = extension.strip_prefix('.').unwrap_or(extension);

        if extension.eq_ignore_ascii_case("psd") {
            Some(DocumentVariant::Standard)
        } else if extension.eq_ignore_ascii_case("psb") {
            Some(DocumentVariant::Large)
        } else {
            None
        }
    }

    /// Maximum width or height allowed for this variant
    pub const fn max_dimensions(self) -> usize {
        match self {
            DocumentVariant::Standard => PSD_MAX_DIMENSIONS,
            DocumentVariant::Large => PSB_MAX_DIMENSIONS
        }
    }

    /// Size in bytes of a single RLE row byte count
    pub const fn rle_count_size(self) -> usize {
        match self {
            DocumentVariant::Standard => 2,
            DocumentVariant::Large => 4
        }
    }
}

/// Color mode stored in the file header
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ColorModes {
    Bitmap = 0,
    Grayscale = 1,
    IndexedColor = 2,
    RGB = 3,
    CYMK = 4,
    MultiChannel = 7,
    DuoTone = 8,
    LabColor = 9
}

impl ColorModes {
    /// Map the header's color mode field, `None` for unknown modes
    pub fn from_int(int: u16) -> Option<ColorModes> {
        use crate::constants::ColorModes::{
            Bitmap, DuoTone, Grayscale, IndexedColor, LabColor, MultiChannel, CYMK, RGB
        };

        match int {
            0 => Some(Bitmap),
            1 => Some(Grayscale),
            2 => Some(IndexedColor),
            3 => Some(RGB),
            4 => Some(CYMK),
            7 => Some(MultiChannel),
            8 => Some(DuoTone),
            9 => Some(LabColor),
            _ => None
        }
    }

    /// Human readable name of the color mode
    pub fn name(self) -> &'static str {
        // every variant has an entry in the table
        color_mode_name(self as i16).unwrap_or("")
    }
}

/// Compression of a channel's image data
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CompressionMethod {
    NoCompression = 0,
    RLE = 1,
    Zip = 2,
    ZipPrediction = 3
}

impl CompressionMethod {
    /// Map a channel's compression field, `None` for unknown methods
    pub fn from_int(int: u16) -> Option<CompressionMethod> {
        match int {
            0 => Some(Self::NoCompression),
            1 => Some(Self::RLE),
            2 => Some(Self::Zip),
            3 => Some(Self::ZipPrediction),
            _ => None
        }
    }

    /// Human readable name of the compression method
    pub fn name(self) -> &'static str {
        COMPRESSION_METHODS[self as usize].1
    }
}
