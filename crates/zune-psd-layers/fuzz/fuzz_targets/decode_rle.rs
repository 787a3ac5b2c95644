#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // first two bytes pick the output size, the rest is the stream
    let length = usize::from(u16::from_be_bytes([data[0], data[1]]));

    if let Ok(out) = zune_psd_layers::rle::decode_rle(&data[2..], length) {
        assert_eq!(out.len(), length);
    }
});
