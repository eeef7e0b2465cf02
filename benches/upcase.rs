//! Benchmarks for the uppercase folds.

use zbuf_upcase::{upper_latin1, upper_utf8};

fn main() {
    divan::main();
}

#[divan::bench]
fn bench_upper_latin1_ascii(bencher: divan::Bencher) {
    bencher.bench_local(|| {
        let mut buf = *b"the quick brown fox jumps over the lazy dog\0";
        upper_latin1(divan::black_box(&mut buf), None);
        divan::black_box(buf)
    });
}

#[divan::bench]
fn bench_upper_latin1_accented(bencher: divan::Bencher) {
    bencher.bench_local(|| {
        let mut buf = *b"b\xE9ni soit l'\xC9ternel, \xE0 jamais\0";
        upper_latin1(divan::black_box(&mut buf), None);
        divan::black_box(buf)
    });
}

#[divan::bench]
fn bench_upper_utf8_ascii(bencher: divan::Bencher) {
    bencher.bench_local(|| {
        let mut buf = *b"the quick brown fox jumps over the lazy dog\0";
        upper_utf8(divan::black_box(&mut buf), None);
        divan::black_box(buf)
    });
}

#[divan::bench]
fn bench_upper_utf8_multibyte(bencher: divan::Bencher) {
    bencher.bench_local(|| {
        let mut buf = *b"b\xC3\xA9ni soit l'\xC3\x89ternel, \xC3\xA0 jamais\0";
        upper_utf8(divan::black_box(&mut buf), None);
        divan::black_box(buf)
    });
}
