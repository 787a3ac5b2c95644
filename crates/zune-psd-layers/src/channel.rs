/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Channel image data
//!
//! Each channel of a layer is stored as a two byte compression
//! method followed by the channel pixels, one row after the other.
//!
//! RLE channels carry a table with the compressed size of every row
//! before the rows themselves, entries are two bytes wide in PSD documents
//! and four bytes wide in PSB documents.
use alloc::vec;
use alloc::vec::Vec;

use zune_core::bytestream::{ZByteReaderTrait, ZCursor, ZReader};
use zune_core::log::{trace, warn};
use zune_inflate::{DeflateDecoder, DeflateOptions};

use crate::constants::{CompressionMethod, DocumentVariant};
use crate::errors::PSDDecodeErrors;
use crate::options::PsdDecoderOptions;
use crate::rle::decode_rle_into;

/// Dimensions and sample layout of the channel being decoded
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ChannelInfo {
    pub width:   usize,
    pub height:  usize,
    /// Bits per sample, 1, 8, 16 or 32
    pub depth:   u16,
    pub variant: DocumentVariant
}

impl ChannelInfo {
    /// Size of one decoded row in bytes, rounded up to a whole byte
    pub fn row_bytes(&self) -> Result<usize, PSDDecodeErrors> {
        self.width
            .checked_mul(usize::from(self.depth))
            .map(|bits| bits / 8 + usize::from(bits % 8 != 0))
            .ok_or(PSDDecodeErrors::Generic("Channel dimensions overflow"))
    }

    /// Size of the decoded channel in bytes
    pub fn output_size(&self) -> Result<usize, PSDDecodeErrors> {
        self.row_bytes()?
            .checked_mul(self.height)
            .ok_or(PSDDecodeErrors::Generic("Channel dimensions overflow"))
    }
}

/// Read `length` bytes of channel data from `stream` and decode them.
///
/// `length` is the channel length recorded in the layer record, it
/// includes the two byte compression method.
pub fn read_channel<T: ZByteReaderTrait>(
    stream: &mut ZReader<T>, length: usize, info: &ChannelInfo, options: &PsdDecoderOptions
) -> Result<Vec<u8>, PSDDecodeErrors> {
    let mut data = vec![0; length];
    stream.read_exact_bytes(&mut data)?;

    decode_channel(&data, info, options)
}

/// Decode one channel record, compression method included.
///
/// Returns exactly [`ChannelInfo::output_size`] bytes, samples wider
/// than a byte are kept in big endian order.
pub fn decode_channel(
    data: &[u8], info: &ChannelInfo, options: &PsdDecoderOptions
) -> Result<Vec<u8>, PSDDecodeErrors> {
    let mut stream = ZReader::new(ZCursor::new(data));

    let method = stream.get_u16_be_err()?;
    let compression =
        CompressionMethod::from_int(method).ok_or(PSDDecodeErrors::UnknownCompression(method))?;

    let size = info.output_size()?;

    trace!(
        "Channel {}x{} depth {} compression {}",
        info.width,
        info.height,
        info.depth,
        compression.name()
    );

    match compression {
        CompressionMethod::NoCompression => {
            let mut out = vec![0; size];
            stream.read_exact_bytes(&mut out)?;
            Ok(out)
        }
        CompressionMethod::RLE => decode_rle_rows(&mut stream, data, info, options),
        CompressionMethod::Zip => inflate(&data[2..], size),
        CompressionMethod::ZipPrediction => {
            let mut out = inflate(&data[2..], size)?;
            undo_prediction(&mut out, info)?;
            Ok(out)
        }
    }
}

fn decode_rle_rows(
    stream: &mut ZReader<ZCursor<&[u8]>>, data: &[u8], info: &ChannelInfo,
    options: &PsdDecoderOptions
) -> Result<Vec<u8>, PSDDecodeErrors> {
    let row_len = info.row_bytes()?;

    let mut counts = Vec::with_capacity(info.height.min(data.len()));

    for _ in 0..info.height {
        let count = match info.variant.rle_count_size() {
            2 => usize::from(stream.get_u16_be_err()?),
            _ => stream.get_u32_be_err()? as usize
        };
        counts.push(count);
    }

    // every read above succeeded, so the position is within data
    let start = (stream.position()? as usize).min(data.len());
    let payload = &data[start..];

    let mut out = vec![0; info.output_size()?];
    let mut offset = 0;

    for (row, (count, out_row)) in counts
        .iter()
        .zip(out.chunks_exact_mut(row_len.max(1)))
        .enumerate()
    {
        let remaining = payload.get(offset..).unwrap_or(&[]);

        if options.get_strict_mode() {
            let row_data = remaining.get(..*count).ok_or(PSDDecodeErrors::RleOverrun {
                needed:    *count,
                available: remaining.len()
            })?;
            let consumed = decode_rle_into(row_data, out_row)?;

            if consumed != *count {
                return Err(PSDDecodeErrors::BadRle);
            }
            offset += count;
        } else {
            let consumed = decode_rle_into(remaining, out_row)?;

            if consumed != *count {
                warn!(
                    "Row {} declares {} bytes but its stream used {}",
                    row,
                    count,
                    consumed
                );
            }
            // the next row starts where the table says, unless the table
            // points past the end of the data
            offset += if *count <= remaining.len() { *count } else { consumed };
        }
    }
    Ok(out)
}

fn inflate(data: &[u8], size: usize) -> Result<Vec<u8>, PSDDecodeErrors> {
    let options = DeflateOptions::default()
        .set_size_hint(size)
        .set_limit(size);

    let out = DeflateDecoder::new_with_options(data, options).decode_zlib()?;

    if out.len() != size {
        return Err(PSDDecodeErrors::Generic(
            "Zip channel data does not match the channel size"
        ));
    }
    Ok(out)
}

/// Undo the horizontal delta filter of zip with prediction channels.
///
/// Each sample is stored as the difference to its left neighbour,
/// 16 bit samples are differenced as big endian words.
fn undo_prediction(out: &mut [u8], info: &ChannelInfo) -> Result<(), PSDDecodeErrors> {
    let row_len = info.row_bytes()?;

    if row_len == 0 {
        return Ok(());
    }

    match info.depth {
        8 => {
            for row in out.chunks_exact_mut(row_len) {
                for x in 1..row.len() {
                    row[x] = row[x].wrapping_add(row[x - 1]);
                }
            }
        }
        16 => {
            for row in out.chunks_exact_mut(row_len) {
                let mut previous = 0_u16;

                for sample in row.chunks_exact_mut(2) {
                    let value = u16::from_be_bytes([sample[0], sample[1]]).wrapping_add(previous);
                    sample.copy_from_slice(&value.to_be_bytes());
                    previous = value;
                }
            }
        }
        _ => {
            return Err(PSDDecodeErrors::Generic(
                "Zip with prediction is only supported for 8 and 16 bit channels"
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::channel::{decode_channel, undo_prediction, ChannelInfo};
    use crate::constants::DocumentVariant;
    use crate::errors::PSDDecodeErrors;
    use crate::options::PsdDecoderOptions;

    fn info(width: usize, height: usize, depth: u16) -> ChannelInfo {
        ChannelInfo {
            width,
            height,
            depth,
            variant: DocumentVariant::Standard
        }
    }

    #[test]
    fn test_raw_channel() {
        let data = [0, 0, 1, 2, 3, 4, 5, 6, 0xFF];
        let out = decode_channel(&data, &info(3, 2, 8), &PsdDecoderOptions::default()).unwrap();
        assert_eq!(out, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_raw_channel_too_short() {
        let data = [0, 0, 1, 2, 3];
        let err = decode_channel(&data, &info(3, 2, 8), &PsdDecoderOptions::default());
        assert!(matches!(err, Err(PSDDecodeErrors::IoErrors(_))));
    }

    #[test]
    fn test_unknown_compression() {
        let err = decode_channel(&[0, 9], &info(1, 1, 8), &PsdDecoderOptions::default());
        assert!(matches!(err, Err(PSDDecodeErrors::UnknownCompression(9))));
    }

    #[test]
    fn test_missing_compression() {
        let err = decode_channel(&[0], &info(1, 1, 8), &PsdDecoderOptions::default());
        assert!(matches!(err, Err(PSDDecodeErrors::IoErrors(_))));
    }

    #[test]
    fn test_prediction_8bit() {
        let mut data = vec![1, 1, 1, 10, 255, 2];
        undo_prediction(&mut data, &info(3, 2, 8)).unwrap();
        assert_eq!(data, vec![1, 2, 3, 10, 9, 11]);
    }

    #[test]
    fn test_prediction_16bit() {
        let mut data: Vec<u8> = [0x0100_u16, 0x0001, 0xFFFF]
            .iter()
            .flat_map(|x| x.to_be_bytes())
            .collect();
        undo_prediction(&mut data, &info(3, 1, 16)).unwrap();
        assert_eq!(data, vec![0x01, 0x00, 0x01, 0x01, 0x01, 0x00]);
    }

    #[test]
    fn test_prediction_32bit_unsupported() {
        let mut data = vec![0; 8];
        assert!(undo_prediction(&mut data, &info(2, 1, 32)).is_err());
    }

    #[test]
    fn test_output_size() {
        assert_eq!(info(3, 2, 8).output_size().unwrap(), 6);
        assert_eq!(info(3, 2, 16).output_size().unwrap(), 12);
        assert_eq!(info(9, 2, 1).output_size().unwrap(), 4);
        assert!(info(usize::MAX, 2, 16).output_size().is_err());
        assert!(info(usize::MAX, 1, 1).output_size().is_err());
    }

    #[test]
    fn test_row_bytes_rounds_up() {
        assert_eq!(info(9, 1, 1).row_bytes().unwrap(), 2);
        assert_eq!(info(8, 1, 1).row_bytes().unwrap(), 1);
        assert_eq!(info(usize::MAX / 8, 1, 8).row_bytes().unwrap(), usize::MAX / 8);
        assert!(info(usize::MAX, 1, 8).row_bytes().is_err());
    }

    #[test]
    fn test_huge_width_is_reported() {
        let options = PsdDecoderOptions::default();

        for method in [0_u8, 1, 2, 3] {
            let err = decode_channel(&[0, method, 0, 0], &info(usize::MAX, 1, 1), &options);
            assert!(matches!(err, Err(PSDDecodeErrors::Generic(_))));
        }
    }
}
