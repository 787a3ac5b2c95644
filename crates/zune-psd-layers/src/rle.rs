/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PackBits decoding
//!
//! Loop until you get the number of unpacked bytes you are expecting:
//!     Read the next source byte into n.
//!     If n is between 0 and 127 inclusive, copy the next n+1 bytes
//!     literally. Else if n is between -127 and -1 inclusive, copy the next
//!     byte -n+1 times. Else if n is -128, noop.
//! Endloop
//!
//! Decoding is driven by the size of the output, some writers pad
//! their streams so input left over once the output is full is not an error.
use alloc::vec;
use alloc::vec::Vec;

use crate::errors::PSDDecodeErrors;

/// Decode a PackBits stream into `output`, filling it completely.
///
/// # Returns
/// - `Ok(usize)`: number of bytes consumed from `input`, this may be less than
///   `input.len()` when the stream carries trailing padding
/// - `Err(PSDDecodeErrors::BadRle)`: a run overflows `output` or `input` ends
///   before `output` is full
/// - `Err(PSDDecodeErrors::RleOverrun)`: a run needs more bytes than `input` holds
pub fn decode_rle_into(input: &[u8], output: &mut [u8]) -> Result<usize, PSDDecodeErrors> {
    let target = output.len();
    let mut in_pos = 0;
    let mut out_pos = 0;

    while out_pos < target {
        let Some(&control) = input.get(in_pos) else {
            return Err(PSDDecodeErrors::BadRle);
        };
        in_pos += 1;

        let n = control as i8;

        if n >= 0 {
            // copy next n+1 bytes literally
            let len = usize::from(control) + 1;

            if out_pos + len > target {
                return Err(PSDDecodeErrors::BadRle);
            }
            let available = input.len() - in_pos;

            if len > available {
                return Err(PSDDecodeErrors::RleOverrun {
                    needed: len,
                    available
                });
            }
            output[out_pos..out_pos + len].copy_from_slice(&input[in_pos..in_pos + len]);

            in_pos += len;
            out_pos += len;
        } else if n != -128 {
            // next -n+1 bytes in the dest are replicated from next source byte.
            let len = usize::from(n.unsigned_abs()) + 1;

            if out_pos + len > target {
                return Err(PSDDecodeErrors::BadRle);
            }
            let Some(&value) = input.get(in_pos) else {
                return Err(PSDDecodeErrors::RleOverrun {
                    needed:    1,
                    available: 0
                });
            };
            in_pos += 1;

            output[out_pos..out_pos + len].fill(value);
            out_pos += len;
        }
    }
    Ok(in_pos)
}

/// Decode a PackBits stream into a new buffer of exactly `length` bytes.
///
/// See [`decode_rle_into`] for the error conditions.
pub fn decode_rle(input: &[u8], length: usize) -> Result<Vec<u8>, PSDDecodeErrors> {
    let mut output = vec![0; length];
    decode_rle_into(input, &mut output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::errors::{ErrorKind, PSDDecodeErrors};
    use crate::rle::{decode_rle, decode_rle_into};

    #[test]
    fn test_literal_then_replicate() {
        let input = [0x02, b'A', b'A', b'A', 0xFE, b'B'];
        let output = decode_rle(&input, 6).unwrap();
        assert_eq!(&output, b"AAABBB");
    }

    #[test]
    fn test_every_literal_length() {
        for n in 0..=127_u8 {
            let len = usize::from(n) + 1;
            let mut input = vec![n];
            input.extend((0..len).map(|x| x as u8));

            let output = decode_rle(&input, len).unwrap();
            assert_eq!(output.len(), len);
            assert_eq!(&output[..], &input[1..]);
        }
    }

    #[test]
    fn test_every_replicate_length() {
        for n in -127..=-1_i8 {
            let len = usize::from(n.unsigned_abs()) + 1;
            let input = [n as u8, 0x7f];

            let output = decode_rle(&input, len).unwrap();
            assert_eq!(output.len(), len);
            assert!(output.iter().all(|x| *x == 0x7f));
        }
    }

    #[test]
    fn test_noop_control_is_skipped() {
        let input = [0x80, 0x00, b'x', 0x80, 0xFF, b'y'];
        let output = decode_rle(&input, 3).unwrap();
        assert_eq!(&output, b"xyy");
    }

    #[test]
    fn test_trailing_padding_is_left_alone() {
        let input = [0xFD, 0x10, 0x00, 0x00];
        let mut output = [0; 4];
        let consumed = decode_rle_into(&input, &mut output).unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(output, [0x10; 4]);
    }

    #[test]
    fn test_exact_fit_consumes_everything() {
        let input = [0x01, 1, 2, 0xFF, 3];
        let mut output = [0; 4];
        let consumed = decode_rle_into(&input, &mut output).unwrap();
        assert_eq!(consumed, input.len());
        assert_eq!(output, [1, 2, 3, 3]);
    }

    #[test]
    fn test_target_larger_than_stream() {
        let input = [0x02, b'A', b'A', b'A', 0xFE, b'B'];
        let err = decode_rle(&input, 10).unwrap_err();
        assert!(matches!(err, PSDDecodeErrors::BadRle));
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_run_past_target() {
        // literal of 3 into a 2 byte buffer
        let err = decode_rle(&[0x02, 1, 2, 3], 2).unwrap_err();
        assert!(matches!(err, PSDDecodeErrors::BadRle));
        // replicate of 3 into a 2 byte buffer
        let err = decode_rle(&[0xFE, 1], 2).unwrap_err();
        assert!(matches!(err, PSDDecodeErrors::BadRle));
    }

    #[test]
    fn test_literal_overrun() {
        let err = decode_rle(&[0x05, 1, 2], 6).unwrap_err();
        assert!(matches!(
            err,
            PSDDecodeErrors::RleOverrun {
                needed:    6,
                available: 2
            }
        ));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_replicate_overrun() {
        let err = decode_rle(&[0xFE], 3).unwrap_err();
        assert!(matches!(err, PSDDecodeErrors::RleOverrun { .. }));
    }

    #[test]
    fn test_empty_target() {
        assert_eq!(decode_rle(&[], 0).unwrap(), Vec::<u8>::new());
        let mut output = [0; 0];
        assert_eq!(decode_rle_into(&[0x00, 1], &mut output).unwrap(), 0);
    }

    #[test]
    fn test_deterministic() {
        let input = [0x00, 9, 0xF0, 4, 0x01, 7, 8];
        let a = decode_rle(&input, 20).unwrap();
        let b = decode_rle(&input, 20).unwrap();
        assert_eq!(a, b);
    }
}
