//! Byte-level text encoding classification.
//!
//! Decides whether a zero-terminated buffer holds multi-byte UTF-8 text
//! or single-byte legacy text. The walk is a heuristic, not a strict
//! validator: a buffer that ends in the middle of a sequence is
//! tolerated, and all 7-bit input is reported as not UTF-8 so callers
//! can fall back to a single-byte encoding.

use crate::zbuf::term_len;

#[cfg(feature = "simd")]
use bytemuck::pod_read_unaligned;
#[cfg(feature = "simd")]
use wide::u8x16;

/// Text class of a single byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteClass {
    /// Never appears in text.
    Never,
    /// Appears in plain ASCII text.
    Ascii,
    /// Appears in ISO-8859 text.
    Iso,
    /// Appears in non-ISO extended ASCII (Mac, IBM PC).
    Ext,
}

/// Text classes indexed by byte value.
static TEXT_CHARS: [ByteClass; 256] = text_chars();

const fn text_chars() -> [ByteClass; 256] {
    let mut table = [ByteClass::Never; 256];

    // Control characters allowed in plain text: BEL BS HT LF FF CR ESC.
    // VT and DEL stay out.
    table[0x07] = ByteClass::Ascii;
    table[0x08] = ByteClass::Ascii;
    table[0x09] = ByteClass::Ascii;
    table[0x0A] = ByteClass::Ascii;
    table[0x0C] = ByteClass::Ascii;
    table[0x0D] = ByteClass::Ascii;
    table[0x1B] = ByteClass::Ascii;

    let mut c = 0x20;
    while c < 0x7F {
        table[c] = ByteClass::Ascii;
        c += 1;
    }

    // 0x80-0x9F shows up in Mac and IBM PC text; NEL is ordinary text.
    let mut c = 0x80;
    while c < 0xA0 {
        table[c] = ByteClass::Ext;
        c += 1;
    }
    table[0x85] = ByteClass::Ascii;

    let mut c = 0xA0;
    while c < 0x100 {
        table[c] = ByteClass::Iso;
        c += 1;
    }

    table
}

/// Check whether the zero-terminated contents of `buf` look like
/// multi-byte UTF-8 text.
///
/// Scans up to the terminator (or the end of the slice). Returns `true`
/// only if at least one complete multi-byte sequence was seen and no
/// byte contradicts UTF-8 structure:
///
/// - A 7-bit byte must be in the plain-text class; disallowed control
///   characters fail the whole buffer.
/// - A continuation byte in lead position fails the buffer.
/// - A lead byte must be followed by its declared number of
///   continuation bytes. Hitting the terminator mid-sequence ends the
///   scan without failing; the verdict then rests on what came before.
///
/// All-ASCII input yields `false`: with nothing multi-byte present
/// there is no evidence for UTF-8 over a single-byte encoding.
pub fn is_multibyte_utf8(buf: &[u8]) -> bool {
    let text = &buf[..term_len(buf)];

    // No byte with the high bit set means no multi-byte sequence, so
    // the verdict is already settled.
    if !has_high_bit(text) {
        return false;
    }

    let mut got_multibyte = false;
    let mut i = 0;
    while i < text.len() {
        let c = text[i];

        if c & 0x80 == 0 {
            // Plain ASCII. Reject buffers that use weird control
            // characters even when every multi-byte sequence is well
            // formed.
            if TEXT_CHARS[c as usize] != ByteClass::Ascii {
                return false;
            }
        } else if c & 0x40 == 0 {
            // 10xxxxxx is never a first byte.
            return false;
        } else {
            // 11xxxxxx opens a multi-byte sequence; the run of leading
            // ones gives the continuation count.
            let following = if c & 0x20 == 0 {
                1
            } else if c & 0x10 == 0 {
                2
            } else if c & 0x08 == 0 {
                3
            } else if c & 0x04 == 0 {
                4
            } else if c & 0x02 == 0 {
                5
            } else {
                return false;
            };

            for _ in 0..following {
                i += 1;
                let Some(&c) = text.get(i) else {
                    // Terminator inside the sequence: truncated but
                    // acceptable as far as it went.
                    return got_multibyte;
                };
                if c & 0xC0 != 0x80 {
                    return false;
                }
            }
            got_multibyte = true;
        }

        i += 1;
    }

    got_multibyte
}

/// Check whether any byte has the high bit set.
#[inline]
fn has_high_bit(text: &[u8]) -> bool {
    #[cfg(feature = "simd")]
    {
        has_high_bit_simd(text)
    }

    #[cfg(not(feature = "simd"))]
    {
        has_high_bit_scalar(text)
    }
}

/// Scalar implementation of has_high_bit.
#[inline]
fn has_high_bit_scalar(text: &[u8]) -> bool {
    text.iter().any(|&c| c & 0x80 != 0)
}

/// SIMD implementation of has_high_bit.
///
/// Accumulates 16-byte lanes, leaving the tail to the scalar path.
#[cfg(feature = "simd")]
#[inline]
fn has_high_bit_simd(text: &[u8]) -> bool {
    let mut chunks = text.chunks_exact(16);
    let mut acc = u8x16::ZERO;

    for chunk in chunks.by_ref() {
        acc |= u8x16::new(pod_read_unaligned(chunk));
    }

    acc.to_array().iter().any(|&c| c & 0x80 != 0) || has_high_bit_scalar(chunks.remainder())
}
