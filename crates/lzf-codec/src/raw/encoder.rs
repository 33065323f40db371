// SPDX-License-Identifier: BSD-2-Clause
// Derived from liblzf encoder logic by Stefan Traby and Marc Lehmann.
use alloc::vec;
use alloc::vec::Vec;

use crate::{
    Error, MAX_LITERAL_LEN, MAX_MATCH_LEN, MAX_OFFSET, MIN_MATCH_LEN, Result, compress_bound,
};

/// log2 of the match-finder table size.
const HASH_LOG: usize = 14;
const HASH_SIZE: usize = 1 << HASH_LOG;

/// Longest back-reference that still fits the short (two byte) form.
const MAX_SHORT_MATCH_LEN: usize = 8;

/// Hashes the three bytes at `index` into a table slot.
///
/// Multiply-and-shift over a big-endian 3-byte load; the top `HASH_LOG` bits
/// of the 32-bit product select the slot.
#[inline]
fn hash3(input: &[u8], index: usize) -> usize {
    let v = (u32::from(input[index]) << 16)
        | (u32::from(input[index + 1]) << 8)
        | u32::from(input[index + 2]);
    (v.wrapping_mul(0x1e35_a7bd) >> (32 - HASH_LOG)) as usize
}

/// Match-finder scratch table.
///
/// Each slot holds `offset + 1` of the most recent position that hashed to
/// it; `0` marks an empty slot.
struct HashTable {
    slots: [u32; HASH_SIZE],
}

impl HashTable {
    fn new() -> Self {
        Self { slots: [0; HASH_SIZE] }
    }

    /// Records `pos` in its slot and returns the position previously stored there.
    #[inline]
    fn replace(&mut self, input: &[u8], pos: usize) -> Option<usize> {
        let slot = &mut self.slots[hash3(input, pos)];
        let prev = *slot as usize;
        *slot = (pos + 1) as u32;
        prev.checked_sub(1)
    }
}

#[inline]
fn emit_literals(
    input: &[u8],
    out: &mut [u8],
    op: &mut usize,
    start: usize,
    end: usize,
) -> Result<()> {
    for chunk in input[start..end].chunks(MAX_LITERAL_LEN) {
        let needed = 1 + chunk.len();
        if out.len() - *op < needed {
            return Err(Error::InsufficientBuffer);
        }

        out[*op] = (chunk.len() - 1) as u8;
        *op += 1;
        out[*op..*op + chunk.len()].copy_from_slice(chunk);
        *op += chunk.len();
    }
    Ok(())
}

/// Writes a back-reference token for `distance` in `1..=MAX_OFFSET` and
/// `len` in `MIN_MATCH_LEN..=MAX_MATCH_LEN`.
#[inline]
fn emit_backref(out: &mut [u8], op: &mut usize, distance: usize, len: usize) -> Result<()> {
    debug_assert!((1..=MAX_OFFSET).contains(&distance));
    debug_assert!((MIN_MATCH_LEN..=MAX_MATCH_LEN).contains(&len));

    let off = distance - 1;
    let off_hi = (off >> 8) as u8;
    let needed = if len <= MAX_SHORT_MATCH_LEN { 2 } else { 3 };
    if out.len() - *op < needed {
        return Err(Error::InsufficientBuffer);
    }

    if len <= MAX_SHORT_MATCH_LEN {
        out[*op] = (((len - 2) as u8) << 5) | off_hi;
        *op += 1;
    } else {
        out[*op] = (7u8 << 5) | off_hi;
        out[*op + 1] = (len - 9) as u8;
        *op += 2;
    }

    out[*op] = (off & 0xff) as u8;
    *op += 1;
    Ok(())
}

/// Compresses `input` into `output` using the raw LZF token format.
///
/// Returns the number of bytes written to `output`. An empty `input` yields
/// `Ok(0)`.
///
/// Returns `Error::InsufficientBuffer` if `output` cannot hold the encoded
/// stream. A buffer of [`compress_bound`]`(input.len())` bytes always
/// suffices.
///
/// # Example
///
/// ```
/// use lzf_codec::{compress, compress_bound};
///
/// let input = [0x61u8; 10_000];
/// let mut compressed = vec![0u8; compress_bound(input.len())];
/// let n = compress(&input, &mut compressed).unwrap();
/// assert!(n < 150);
/// ```
pub fn compress(input: &[u8], output: &mut [u8]) -> Result<usize> {
    if input.is_empty() {
        return Ok(0);
    }

    let mut table = HashTable::new();
    let mut op = 0usize;
    let mut anchor = 0usize;
    let mut pos = 0usize;

    // A match needs its 3-byte prefix plus at least one byte after it.
    while pos + MIN_MATCH_LEN < input.len() {
        let candidate = table.replace(input, pos).filter(|&r| {
            r < pos
                && pos - r <= MAX_OFFSET
                && input[r] == input[pos]
                && input[r + 1] == input[pos + 1]
                && input[r + 2] == input[pos + 2]
        });

        let Some(r) = candidate else {
            pos += 1;
            continue;
        };

        emit_literals(input, output, &mut op, anchor, pos)?;

        let max_len = (input.len() - pos).min(MAX_MATCH_LEN);
        let mut len = MIN_MATCH_LEN;
        while len < max_len && input[r + len] == input[pos + len] {
            len += 1;
        }

        emit_backref(output, &mut op, pos - r, len)?;

        let end = pos + len;
        let mut scan = pos + 1;
        while scan + MIN_MATCH_LEN <= end {
            table.replace(input, scan);
            scan += 1;
        }

        pos = end;
        anchor = pos;
    }

    emit_literals(input, output, &mut op, anchor, input.len())?;
    Ok(op)
}

/// Compresses `input`, reporting an empty input as `Error::EmptyInput`.
///
/// Identical to [`compress`] otherwise. Use this when a zero-length result
/// must never be mistaken for a successful encoding.
///
/// ```
/// use lzf_codec::{Error, compress_nonempty};
///
/// let mut out = [0u8; 16];
/// assert_eq!(compress_nonempty(b"", &mut out), Err(Error::EmptyInput));
/// assert_eq!(compress_nonempty(b"abc", &mut out[..1]), Err(Error::InsufficientBuffer));
/// ```
pub fn compress_nonempty(input: &[u8], output: &mut [u8]) -> Result<usize> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }
    compress(input, output)
}

/// Compresses `input` into a freshly allocated, exactly sized `Vec<u8>`.
pub fn compress_into_vec(input: &[u8]) -> Result<Vec<u8>> {
    let mut output = vec![0u8; compress_bound(input.len())];
    let written = compress(input, &mut output)?;
    output.truncate(written);
    Ok(output)
}
