#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use zune_psd_layers::zune_core::bytestream::{ZCursor, ZReader};
    use zune_psd_layers::{decode_header, DocumentVariant, PsdDecoderOptions};

    for variant in [DocumentVariant::Standard, DocumentVariant::Large] {
        let mut stream = ZReader::new(ZCursor::new(data));
        let _ = decode_header(&mut stream, variant, &PsdDecoderOptions::default());
    }
});
