#![no_main]

use huffpack::decompress_bytes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decompressing arbitrary bytes may fail - that's OK
    // We're looking for panics/crashes, not errors
    let _ = decompress_bytes(data);
});
