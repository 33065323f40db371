// SPDX-License-Identifier: ISC
use alloc::vec;
use alloc::vec::Vec;

use crate::{Error, Result};

/// Decompresses raw LZF `input` into `output`.
///
/// Returns the number of bytes written to `output`. An empty `input` yields
/// `Ok(0)`. Bytes of `output` past the returned count are left untouched.
///
/// Returns:
/// - `Error::DataCorruption` when the token stream is malformed: a token is
///   truncated or a back-reference reaches before the start of the output.
/// - `Error::InsufficientBuffer` when `output` is too small for the decoded data.
///
/// # Example
///
/// ```
/// use lzf_codec::{compress, compress_bound, decompress};
///
/// let input = b"raw decoder example, raw decoder example";
/// let mut compressed = vec![0u8; compress_bound(input.len())];
/// let clen = compress(input, &mut compressed).unwrap();
/// compressed.truncate(clen);
///
/// let mut out = vec![0u8; input.len()];
/// let written = decompress(&compressed, &mut out).unwrap();
/// assert_eq!(written, input.len());
/// assert_eq!(out, input);
/// ```
pub fn decompress(input: &[u8], output: &mut [u8]) -> Result<usize> {
    let mut ip = 0usize;
    let mut op = 0usize;

    while ip < input.len() {
        let ctrl = input[ip];
        ip += 1;

        if ctrl < 32 {
            let len = usize::from(ctrl) + 1;
            if input.len() - ip < len {
                return Err(Error::DataCorruption);
            }
            if output.len() - op < len {
                return Err(Error::InsufficientBuffer);
            }
            output[op..op + len].copy_from_slice(&input[ip..ip + len]);
            ip += len;
            op += len;
            continue;
        }

        let mut len = usize::from(ctrl >> 5);
        if len == 7 {
            let Some(&ext) = input.get(ip) else {
                return Err(Error::DataCorruption);
            };
            len += usize::from(ext);
            ip += 1;
        }
        let copy_len = len + 2;

        let Some(&off_lo) = input.get(ip) else {
            return Err(Error::DataCorruption);
        };
        ip += 1;

        let distance = ((usize::from(ctrl & 0x1f) << 8) | usize::from(off_lo)) + 1;
        if distance > op {
            return Err(Error::DataCorruption);
        }
        if output.len() - op < copy_len {
            return Err(Error::InsufficientBuffer);
        }

        let src = op - distance;
        if distance >= copy_len {
            output.copy_within(src..src + copy_len, op);
        } else {
            // Source overlaps the bytes being written: copy forward one byte
            // at a time so the run repeats.
            for i in 0..copy_len {
                output[op + i] = output[src + i];
            }
        }
        op += copy_len;
    }

    Ok(op)
}

/// Decompresses raw LZF `input` into a fresh `Vec<u8>` of `output_len` bytes.
///
/// Returns `Error::DataCorruption` if the stream decodes to fewer than
/// `output_len` bytes and `Error::InsufficientBuffer` if it decodes to more.
pub fn decompress_into_vec(input: &[u8], output_len: usize) -> Result<Vec<u8>> {
    let mut output = vec![0u8; output_len];
    let written = decompress(input, &mut output)?;
    if written != output_len {
        return Err(Error::DataCorruption);
    }
    Ok(output)
}
