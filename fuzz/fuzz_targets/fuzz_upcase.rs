#![no_main]

use libfuzzer_sys::fuzz_target;
use zbuf_upcase::{term_len, upper_latin1, upper_utf8};

fuzz_target!(|data: &[u8]| {
    let Some((&sel, text)) = data.split_first() else {
        return;
    };

    // First byte picks the capacity; zero means "unspecified".
    let maxlen = match sel {
        0 => None,
        n => Some(n as usize),
    };

    let original = text.to_vec();

    let mut buf = original.clone();
    upper_utf8(&mut buf, maxlen);
    check(&original, &buf, maxlen.unwrap_or(term_len(&original) + 1));

    let mut buf = original.clone();
    upper_latin1(&mut buf, maxlen);
    check(&original, &buf, maxlen.unwrap_or(term_len(&original)));
});

/// After a fold the buffer is terminated inside the effective capacity
/// and untouched beyond it.
fn check(original: &[u8], folded: &[u8], capacity: usize) {
    let cap = capacity.min(folded.len());
    if cap > 0 {
        assert!(folded[..cap].contains(&0));
    }
    assert_eq!(&folded[cap..], &original[cap..]);
}
