#![no_main]

use libfuzzer_sys::fuzz_target;
use bytesep::{concat, total_length};

fuzz_target!(|parts: Vec<Vec<u8>>| {
    let out = concat(&parts);

    // Verify: length matches
    assert_eq!(out.len(), total_length(&parts));

    // Verify: every part sits at its running offset
    let mut offset = 0usize;
    for part in &parts {
        assert_eq!(&out[offset..offset + part.len()], &part[..]);
        offset += part.len();
    }
    assert_eq!(offset, out.len());
});
