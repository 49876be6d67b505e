#![no_main]

use libfuzzer_sys::fuzz_target;
use bytesep::{index_of, index_of_in};

fuzz_target!(|input: (Vec<u8>, Vec<u8>, usize, usize)| {
    let (haystack, needle, from, to) = input;

    // Arbitrary indices must never panic, only error
    let bounded = index_of_in(&haystack, from, to, &needle);
    if from > to || to > haystack.len() {
        assert!(bounded.is_err());
        return;
    }
    let bounded = bounded.unwrap();

    // Verify: a match lies inside the range and equals the needle
    if let Some(i) = bounded {
        assert!(i >= from);
        assert!(i + needle.len() <= to);
        assert_eq!(&haystack[i..i + needle.len()], &needle[..]);
    }

    // Verify: the full range agrees with the unbounded search
    let full = index_of_in(&haystack, 0, haystack.len(), &needle).unwrap();
    assert_eq!(full, index_of(&haystack, &needle));

    // Verify: a bounded match is never earlier than the first match overall
    if let (Some(i), Some(first)) = (bounded, full) {
        assert!(first <= i);
    }
});
