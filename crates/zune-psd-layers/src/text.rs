/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Layer name decoding
//!
//! Names are metadata, so nothing here fails on bad text,
//! malformed code units come out as U+FFFD.
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use zune_core::bit_depth::ByteEndian;
use zune_core::bytestream::{ZByteReaderTrait, ZReader};

use crate::errors::PSDDecodeErrors;

/// Units reserved up front when reading a unicode string
const MAX_PREALLOCATED_UNITS: usize = 256;

/// Decode `bytes` as UTF-16 code units in the given byte order.
///
/// Surrogate pairs are combined, unpaired surrogates become
/// [`char::REPLACEMENT_CHARACTER`]. If `bytes` has an odd length the
/// dangling byte is not read, its slot becomes one replacement character.
pub fn decode_utf16(bytes: &[u8], endian: ByteEndian) -> String {
    let chunks = bytes.chunks_exact(2);
    let dangling = !chunks.remainder().is_empty();

    let units = chunks.map(|pair| {
        let pair = [pair[0], pair[1]];
        match endian {
            ByteEndian::LE => u16::from_le_bytes(pair),
            _ => u16::from_be_bytes(pair)
        }
    });

    let mut out: String = char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();

    if dangling {
        out.push(char::REPLACEMENT_CHARACTER);
    }
    out
}

/// Decode big endian UTF-16, the byte order used throughout photoshop documents
pub fn decode_utf16_be(bytes: &[u8]) -> String {
    decode_utf16(bytes, ByteEndian::BE)
}

/// Read a photoshop unicode string, a `u32` count of code units
/// followed by the units themselves.
///
/// Trailing NUL units, which some writers include in the count, are removed.
pub fn read_unicode_string<T: ZByteReaderTrait>(
    stream: &mut ZReader<T>
) -> Result<String, PSDDecodeErrors> {
    let units = stream.get_u32_be_err()? as usize;

    // the count is untrusted, grow the buffer as units actually arrive
    let mut bytes = Vec::with_capacity(units.min(MAX_PREALLOCATED_UNITS) * 2);

    for _ in 0..units {
        let unit = stream.read_fixed_bytes_or_error::<2>()?;
        bytes.extend_from_slice(&unit);
    }

    let mut name = decode_utf16_be(&bytes);
    let trimmed = name.trim_end_matches('\0').len();
    name.truncate(trimmed);

    Ok(name)
}

/// Read a pascal string, a length byte followed by that many bytes,
/// padded so the whole field is a multiple of `alignment` bytes.
///
/// Layer records store their legacy name this way with an alignment of 4.
/// Bytes are mapped to the code point of the same value.
pub fn read_pascal_string<T: ZByteReaderTrait>(
    stream: &mut ZReader<T>, alignment: usize
) -> Result<String, PSDDecodeErrors> {
    let [length] = stream.read_fixed_bytes_or_error::<1>()?;
    let length = usize::from(length);

    let mut bytes = vec![0; length];
    stream.read_exact_bytes(&mut bytes)?;

    let field = length + 1;
    if alignment > 1 && field % alignment != 0 {
        stream.skip(alignment - field % alignment)?;
    }

    Ok(bytes.iter().map(|b| char::from(*b)).collect())
}
