//! # zbuf-upcase
//!
//! A `no_std` compatible crate for in-place uppercasing of zero-terminated
//! text buffers, with detection of multi-byte UTF-8 content.
//!
//! Text arrives in a caller-owned buffer terminated by a zero byte. The
//! crate decides whether the bytes form multi-byte UTF-8 or a single-byte
//! Latin-1 style encoding, uppercases them accordingly, and writes the
//! result back into the same buffer, truncated to a caller-supplied
//! capacity and always terminated.
//!
//! ## Features
//!
//! - `no_std` compatible by default
//! - Latin-1 folding is zero-allocation and works without `alloc`
//! - The UTF-8 aware fold needs the `alloc` feature for its Unicode
//!   uppercase scratch (enabled by default through `std`)
//! - Optional `simd` feature for a vectorized classifier prescan
//!
//! ## Example
//!
//! ```
//! use zbuf_upcase::upper_utf8;
//!
//! let mut buf = *b"gr\xC3\xBC\xC3\x9Fe\0";
//! upper_utf8(&mut buf, None);
//! assert_eq!(&buf, b"GR\xC3\x9CSSE\0");
//! ```

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

mod classify;
mod latin1;
mod upper;
mod zbuf;

pub use classify::is_multibyte_utf8;
pub use latin1::{latin1_to_upper, latin1_upper_in_place};
#[cfg(feature = "alloc")]
pub use upper::upper_utf8;
pub use upper::{supports_unicode, upper_latin1};
pub use zbuf::term_len;
