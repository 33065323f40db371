// SPDX-License-Identifier: ISC
//! Raw LZF token encoder/decoder.
//!
//! The token stream has no header, footer, or length prefix; it ends where
//! the input slice ends.
mod decoder;
#[cfg(feature = "encoder")]
mod encoder;

pub use decoder::{decompress, decompress_into_vec};
#[cfg(feature = "encoder")]
pub use encoder::{compress, compress_into_vec, compress_nonempty};
