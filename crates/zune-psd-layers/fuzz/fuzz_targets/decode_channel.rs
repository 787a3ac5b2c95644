#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use zune_psd_layers::{decode_channel, ChannelInfo, DocumentVariant, PsdDecoderOptions};

    if data.len() < 3 {
        return;
    }
    let info = ChannelInfo {
        width:   usize::from(data[0]),
        height:  usize::from(data[1]),
        depth:   if data[2] & 1 == 0 { 8 } else { 16 },
        variant: if data[2] & 2 == 0 {
            DocumentVariant::Standard
        } else {
            DocumentVariant::Large
        }
    };
    let options = PsdDecoderOptions::default().set_strict_mode(data[2] & 4 != 0);

    if let Ok(out) = decode_channel(&data[3..], &info, &options) {
        assert_eq!(out.len(), info.output_size().unwrap());
    }
});
