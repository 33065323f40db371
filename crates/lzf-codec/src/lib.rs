// SPDX-License-Identifier: ISC
//! Pure Rust LZF compression and decompression.
//!
//! # Overview
//!
//! LZF is a byte-oriented LZ77 codec built for throughput. This crate
//! provides:
//!
//! - A single-pass greedy compressor (`compress`) backed by a 2^14-slot hash
//!   table that lives on the stack for the duration of one call.
//! - A decompressor (`decompress`) that validates every token and never reads
//!   or writes outside the slices it is given.
//! - `compress_bound`, an upper bound on compressed size.
//!
//! The compressed form is a bare token stream: no header, no length prefix,
//! no checksum. Callers must know (or bound) the decompressed size.
//!
//! # Format
//!
//! Every token starts with a control byte `c`:
//!
//! | `c` | token | follow-up bytes |
//! |---|---|---|
//! | `0x00..=0x1F` | literal run of `c + 1` bytes | the literal bytes |
//! | `0x20..=0xDF` | back-reference, length `(c >> 5) + 2` | offset low byte |
//! | `0xE0..=0xFF` | back-reference, length `e + 9` | `e`, offset low byte |
//!
//! The back-reference distance is `((c & 0x1F) << 8 | low) + 1`.
//!
//! # Features
//!
//! - `std` (default): implements `std::error::Error` through `thiserror/std`.
//! - `encoder` (default): enables the compression APIs.
//!
//! Without `std` the crate is `no_std` and needs only `alloc`.
//!
//! # Examples
//!
//! ```
//! use lzf_codec::{compress, compress_bound, decompress};
//!
//! let input = b"hello hello hello hello";
//! let mut compressed = vec![0u8; compress_bound(input.len())];
//! let n = compress(input, &mut compressed).unwrap();
//! compressed.truncate(n);
//!
//! let mut out = vec![0u8; input.len()];
//! let m = decompress(&compressed, &mut out).unwrap();
//! assert_eq!(m, input.len());
//! assert_eq!(&out, input);
//! ```
//!
//! # Safety
//!
//! This crate forbids `unsafe` code.
//!
//! # License
//!
//! - `src/raw/encoder.rs`: `BSD-2-Clause` (derived from liblzf encoder logic).
//! - Remaining sources: `ISC`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod raw;

/// Crate error and result types.
pub use error::{CODE_DATA_CORRUPTION, CODE_INSUFFICIENT_BUFFER, Error, Result};
#[cfg(feature = "encoder")]
#[cfg_attr(docsrs, doc(cfg(feature = "encoder")))]
/// Raw LZF encoder APIs.
pub use raw::{compress, compress_into_vec, compress_nonempty};
/// Raw LZF decoder APIs.
pub use raw::{decompress, decompress_into_vec};

/// Maximum literal run size in the LZF format.
pub const MAX_LITERAL_LEN: usize = 1 << 5;

/// Maximum backwards distance in the LZF format.
pub const MAX_OFFSET: usize = 1 << 13;

/// Maximum match length in the LZF format.
pub const MAX_MATCH_LEN: usize = (1 << 8) + (1 << 3);

/// Shortest match the compressor emits.
pub const MIN_MATCH_LEN: usize = 3;

/// Computes a guaranteed upper bound for compressed output size.
///
/// The bound is `⌊input_len · 1.04⌋ + 1`, which covers the worst case of an
/// all-literal encoding (one control byte per 32 input bytes).
///
/// ```
/// assert_eq!(lzf_codec::compress_bound(0), 1);
/// assert_eq!(lzf_codec::compress_bound(100), 105);
/// ```
#[inline]
pub const fn compress_bound(input_len: usize) -> usize {
    input_len.saturating_add(input_len / 25).saturating_add(1)
}
