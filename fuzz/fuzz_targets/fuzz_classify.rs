#![no_main]

use libfuzzer_sys::fuzz_target;
use zbuf_upcase::{is_multibyte_utf8, term_len};

fuzz_target!(|data: &[u8]| {
    let verdict = is_multibyte_utf8(data);

    // The verdict only ever depends on bytes before the terminator.
    let text = &data[..term_len(data)];
    assert_eq!(verdict, is_multibyte_utf8(text));

    // Pure 7-bit input can never classify as multi-byte UTF-8.
    if text.iter().all(|&c| c < 0x80) {
        assert!(!verdict);
    }
});
