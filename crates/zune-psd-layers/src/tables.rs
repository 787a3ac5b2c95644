/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Display names for codes stored in photoshop documents
//!
//! The tables are plain statics, they are never written to
//! and can be read from any number of threads.
//!
//! A lookup miss returns `None`, newer photoshop releases keep adding
//! blend modes and callers should not paper over that with a default name.

/// Blend mode keys as they appear in layer records, and their names.
///
/// Keys are always four bytes on disk, shorter names are padded with spaces.
pub static BLEND_MODES: [([u8; 4], &str); 28] = [
    (*b"pass", "Pass through"),
    (*b"norm", "Normal"),
    (*b"diss", "Dissolve"),
    (*b"dark", "Darken"),
    (*b"mul ", "Multiply"),
    (*b"idiv", "Color burn"),
    (*b"lbrn", "Linear burn"),
    (*b"dkCl", "Darker color"),
    (*b"lite", "Lighten"),
    (*b"scrn", "Screen"),
    (*b"div ", "Color dodge"),
    (*b"lddg", "Linear dodge"),
    (*b"lgCl", "Lighter color"),
    (*b"over", "Overlay"),
    (*b"sLit", "Soft light"),
    (*b"hLit", "Hard light"),
    (*b"vLit", "Vivid light"),
    (*b"lLit", "Linear light"),
    (*b"pLit", "Pin light"),
    (*b"hMix", "Hard mix"),
    (*b"diff", "Difference"),
    (*b"smud", "Exclusion"),
    (*b"fsub", "Subtract"),
    (*b"fdiv", "Divide"),
    (*b"hue ", "Hue"),
    (*b"sat ", "Saturation"),
    (*b"colr", "Color"),
    (*b"lum ", "Luminosity")
];

/// Color mode field of the file header and its name
pub static COLOR_MODES: [(i16, &str); 8] = [
    (0, "Bitmap"),
    (1, "Grayscale"),
    (2, "Indexed"),
    (3, "RGB"),
    (4, "CMYK"),
    (7, "Multichannel"),
    (8, "Duotone"),
    (9, "Lab")
];

/// Compression field of channel image data and its name.
///
/// Indexed by the code itself.
pub static COMPRESSION_METHODS: [(u16, &str); 4] = [
    (0, "Raw"),
    (1, "RLE"),
    (2, "ZIP"),
    (3, "ZIP with prediction")
];

/// Look up the name of a blend mode from its raw four byte key
pub fn blend_mode_name_from_key(key: [u8; 4]) -> Option<&'static str> {
    BLEND_MODES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
}

/// Look up the name of a blend mode from its textual key.
///
/// Keys shorter than four bytes are padded with spaces the same
/// way photoshop writes them, so `"mul"` and `"mul "` both resolve
/// to `Multiply`.
pub fn blend_mode_name(key: &str) -> Option<&'static str> {
    let bytes = key.as_bytes();

    if bytes.is_empty() || bytes.len() > 4 {
        return None;
    }
    let mut padded = [b' '; 4];
    padded[..bytes.len()].copy_from_slice(bytes);

    blend_mode_name_from_key(padded)
}

/// Look up the name of a color mode
pub fn color_mode_name(code: i16) -> Option<&'static str> {
    COLOR_MODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Look up the name of a compression method
pub fn compression_name(code: u16) -> Option<&'static str> {
    COMPRESSION_METHODS
        .get(usize::from(code))
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use crate::tables::{
        blend_mode_name, blend_mode_name_from_key, color_mode_name, compression_name,
        BLEND_MODES, COLOR_MODES
    };

    #[test]
    fn test_short_key_is_padded() {
        assert_eq!(blend_mode_name("mul"), Some("Multiply"));
        assert_eq!(blend_mode_name("mul "), Some("Multiply"));
        assert_eq!(blend_mode_name_from_key(*b"mul "), Some("Multiply"));
    }

    #[test]
    fn test_unknown_blend_mode() {
        assert_eq!(blend_mode_name("zzzz"), None);
        assert_eq!(blend_mode_name(""), None);
        assert_eq!(blend_mode_name("normal"), None);
        // keys are case sensitive
        assert_eq!(blend_mode_name("NORM"), None);
    }

    #[test]
    fn test_keys_and_names_are_unique() {
        for (i, (key, name)) in BLEND_MODES.iter().enumerate() {
            assert!(!name.is_empty());
            for (other_key, other_name) in &BLEND_MODES[i + 1..] {
                assert_ne!(key, other_key);
                assert_ne!(name, other_name);
            }
        }
    }

    #[test]
    fn test_color_modes() {
        assert_eq!(color_mode_name(3), Some("RGB"));
        assert_eq!(color_mode_name(9), Some("Lab"));
        assert_eq!(color_mode_name(5), None);
        assert_eq!(color_mode_name(6), None);
        assert_eq!(color_mode_name(-1), None);
        assert_eq!(COLOR_MODES.len(), 8);
    }

    #[test]
    fn test_compression_names() {
        assert_eq!(compression_name(1), Some("RLE"));
        assert_eq!(compression_name(4), None);
    }
}
