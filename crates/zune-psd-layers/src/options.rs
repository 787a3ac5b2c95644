/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Options that influence header and channel decoding

use crate::constants::PSB_MAX_DIMENSIONS;

/// Decoder options
///
/// The defaults accept anything the format itself allows and
/// tolerate RLE rows whose byte counts disagree with their content.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PsdDecoderOptions {
    max_width:   usize,
    max_height:  usize,
    strict_mode: bool
}

impl Default for PsdDecoderOptions {
    fn default() -> Self {
        PsdDecoderOptions {
            max_width:   PSB_MAX_DIMENSIONS,
            max_height:  PSB_MAX_DIMENSIONS,
            strict_mode: false
        }
    }
}

impl PsdDecoderOptions {
    /// Options that refuse anything suspicious, including
    /// RLE rows that do not consume exactly their declared byte count
    pub fn new_strict() -> PsdDecoderOptions {
        PsdDecoderOptions::default().set_strict_mode(true)
    }

    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder
    /// should not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// The variant limit (30,000 or 300,000) still applies on top of this
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in strict mode
    ///
    /// In strict mode every RLE row must end exactly where its
    /// row byte count says it ends, otherwise the channel is rejected.
    /// Outside of strict mode a mismatch is only logged with a warning and
    /// the next row still starts at its declared byte count, unless that
    /// count runs past the end of the data.
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}
