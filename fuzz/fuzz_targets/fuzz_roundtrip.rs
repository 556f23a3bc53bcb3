#![no_main]

use huffpack::{compress_bytes, decompress_bytes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Compression accepts any byte sequence and must reproduce it exactly
    let (artifact, _) = compress_bytes(data).expect("compression cannot fail on in-memory input");
    let recovered = decompress_bytes(&artifact).expect("own artifact must decompress");
    assert_eq!(recovered, data);
});
