#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the input
    let _ = ppmrw::decode(data, enough::Unstoppable);
    let _ = ppmrw::DecodeRequest::new(data)
        .strict_trailing(true)
        .decode(enough::Unstoppable);
    let _ = ppmrw::ImageInfo::from_bytes(data);
});
