#![no_main]
use libfuzzer_sys::fuzz_target;
use ppmrw::*;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must survive a trip through both encodings
    let Ok(decoded) = decode(data, enough::Unstoppable) else {
        return;
    };

    for target in [PpmEncoding::Text, PpmEncoding::Binary] {
        let Ok(reencoded) = EncodeRequest::new(target).encode_to_vec(&decoded, enough::Unstoppable)
        else {
            panic!("encoding a decoded image to {target} failed");
        };
        let Ok(decoded2) = decode(&reencoded[..], enough::Unstoppable) else {
            panic!("re-encoded {target} data failed to decode");
        };
        assert_eq!(decoded, decoded2, "roundtrip mismatch through {target}");
        assert_eq!(decoded2.encoding(), target);
    }
});
