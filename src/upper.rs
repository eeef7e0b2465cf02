//! In-place uppercase folds over zero-terminated buffers.

use crate::latin1::latin1_upper_in_place;
use crate::zbuf::term_len;

#[cfg(feature = "alloc")]
use crate::classify::is_multibyte_utf8;
#[cfg(feature = "alloc")]
use crate::zbuf::copy_z;

#[cfg(feature = "alloc")]
use alloc::borrow::Cow;
#[cfg(feature = "alloc")]
use alloc::string::String;

/// Whether the fold entry points understand Unicode input.
///
/// Always `true`; callers use this to pick a behavior path.
#[inline]
pub const fn supports_unicode() -> bool {
    true
}

/// Uppercase the zero-terminated contents of `buf` in place, detecting
/// the encoding first.
///
/// `maxlen` is the usable capacity in bytes, terminator included.
/// `None` means "whatever is in the buffer": the content length plus
/// one for the terminator. Passing `Some(0)` is a contract violation
/// and trips a debug assertion; release builds do nothing. A capacity
/// of 1 clears the buffer to an empty string without looking at it.
///
/// With room to work in, the contents are classified with
/// [`is_multibyte_utf8`]. Multi-byte UTF-8 gets the full Unicode
/// uppercase mapping (malformed sequences are replaced on decode);
/// anything else is folded byte-wise as Latin-1. The result is cut to
/// `maxlen - 1` content bytes and terminated at `maxlen - 1`.
/// Truncation counts bytes, not characters, and can land inside a
/// multi-byte sequence, leaving a partial code point right before the
/// terminator.
///
/// The effective capacity never exceeds `buf.len()`; writes stay inside
/// the slice no matter what `maxlen` says. Returns `buf` for chaining.
#[cfg(feature = "alloc")]
pub fn upper_utf8(buf: &mut [u8], maxlen: Option<usize>) -> &mut [u8] {
    debug_assert!(maxlen != Some(0), "zero capacity");

    let max = maxlen.unwrap_or_else(|| term_len(buf) + 1).min(buf.len());

    if max > 1 {
        let max = max - 1;
        let len = term_len(buf);

        if is_multibyte_utf8(buf) {
            let upper = decode_utf8(&buf[..len]).to_uppercase();
            copy_z(buf, upper.as_bytes(), max);
        } else {
            let len = len.min(max);
            latin1_upper_in_place(&mut buf[..len]);
            buf[len..=max].fill(0);
        }
    } else if max == 1 {
        buf[0] = 0;
    }

    buf
}

/// Uppercase the zero-terminated contents of `buf` in place as Latin-1.
///
/// Same capacity handling as [`upper_utf8`], with one deliberate
/// difference: the `None` default counts only the content bytes, not
/// the terminator, so the final content byte falls off. Callers rely on
/// that asymmetry; pass an explicit `maxlen` to keep the whole string.
///
/// No classification or decoding happens here, only the Latin-1 byte
/// map. Returns `buf` for chaining.
pub fn upper_latin1(buf: &mut [u8], maxlen: Option<usize>) -> &mut [u8] {
    debug_assert!(maxlen != Some(0), "zero capacity");

    let max = maxlen.unwrap_or_else(|| term_len(buf)).min(buf.len());

    if max > 1 {
        let max = max - 1;
        let len = term_len(buf).min(max);
        latin1_upper_in_place(&mut buf[..len]);
        buf[len..=max].fill(0);
    } else if max == 1 {
        buf[0] = 0;
    }

    buf
}

/// Decode `bytes` as UTF-8, substituting replacement characters for
/// anything malformed.
///
/// Uses simdutf8 for the all-valid fast path.
#[cfg(feature = "alloc")]
fn decode_utf8(bytes: &[u8]) -> Cow<'_, str> {
    #[cfg(not(miri))]
    if let Ok(s) = simdutf8::basic::from_utf8(bytes) {
        return Cow::Borrowed(s);
    }

    String::from_utf8_lossy(bytes)
}
