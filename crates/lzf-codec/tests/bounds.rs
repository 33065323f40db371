// SPDX-License-Identifier: ISC
use lzf_codec::{
    CODE_DATA_CORRUPTION, CODE_INSUFFICIENT_BUFFER, Error, compress, compress_bound,
    compress_into_vec, decompress,
};

const GUARD: u8 = 0xa5;
const GUARD_LEN: usize = 64;

fn pattern_data(size: usize) -> Vec<u8> {
    let mut out = vec![0u8; size];
    for (i, b) in out.iter_mut().enumerate() {
        *b = ((i * 17) ^ (i >> 3) ^ 0x5a) as u8;
    }
    out
}

/// Buffer of `len` usable bytes followed by a guard band.
fn guarded(len: usize) -> Vec<u8> {
    vec![GUARD; len + GUARD_LEN]
}

fn assert_guard_intact(buf: &[u8], len: usize) {
    assert!(buf[len..].iter().all(|&b| b == GUARD), "write past end of {len}-byte output");
}

#[test]
fn bound_matches_formula() {
    assert_eq!(compress_bound(0), 1);
    assert_eq!(compress_bound(1), 2);
    assert_eq!(compress_bound(24), 25);
    assert_eq!(compress_bound(25), 27);
    assert_eq!(compress_bound(1 << 20), (1 << 20) + (1 << 20) / 25 + 1);
    assert_eq!(compress_bound(usize::MAX), usize::MAX);
}

#[test]
fn bound_covers_all_literal_encoding() {
    for n in 0..2048usize {
        assert!(compress_bound(n) >= n + n.div_ceil(32), "n = {n}");
    }
}

#[test]
fn compress_fits_exact_output_and_fails_one_short() {
    for size in [1usize, 5, 31, 32, 33, 1000, 9000] {
        let input = pattern_data(size);
        let expected = compress_into_vec(&input).expect("compress");
        assert!(expected.len() <= compress_bound(input.len()));

        let mut exact = guarded(expected.len());
        let n = compress(&input, &mut exact[..expected.len()]).expect("exact fit");
        assert_eq!(&exact[..n], &expected[..]);
        assert_guard_intact(&exact, expected.len());

        let short_len = expected.len() - 1;
        let mut short = guarded(short_len);
        let err = compress(&input, &mut short[..short_len]).expect_err("one byte short");
        assert_eq!(err, Error::InsufficientBuffer);
        assert_guard_intact(&short, short_len);
    }
}

#[test]
fn compress_into_one_byte_fails() {
    let input: Vec<u8> = (0..=255u8).cycle().take(256 * 100).collect();
    let mut out = guarded(1);
    assert_eq!(compress(&input, &mut out[..1]), Err(Error::InsufficientBuffer));
    assert_guard_intact(&out, 1);
}

#[test]
fn decompress_into_small_output_fails() {
    let input = pattern_data(1000);
    let compressed = compress_into_vec(&input).expect("compress");

    let mut out = guarded(10);
    assert_eq!(decompress(&compressed, &mut out[..10]), Err(Error::InsufficientBuffer));
    assert_guard_intact(&out, 10);

    for len in [0usize, 1, 500, 999] {
        let mut out = guarded(len);
        assert_eq!(decompress(&compressed, &mut out[..len]), Err(Error::InsufficientBuffer));
        assert_guard_intact(&out, len);
    }
}

#[test]
fn decompress_leaves_unused_suffix_untouched() {
    let input = pattern_data(300);
    let compressed = compress_into_vec(&input).expect("compress");

    let mut out = guarded(input.len());
    let n = decompress(&compressed, &mut out).expect("decompress");
    assert_eq!(n, input.len());
    assert_eq!(&out[..n], &input[..]);
    assert_guard_intact(&out, n);
}

#[test]
fn error_codes_roundtrip() {
    assert_eq!(Error::InsufficientBuffer.code(), CODE_INSUFFICIENT_BUFFER);
    assert_eq!(Error::DataCorruption.code(), CODE_DATA_CORRUPTION);
    assert_eq!(Error::from_code(CODE_INSUFFICIENT_BUFFER), Error::InsufficientBuffer);
    assert_eq!(Error::from_code(CODE_DATA_CORRUPTION), Error::DataCorruption);
    assert_eq!(Error::from_code(-3), Error::Unknown(-3));
    assert_eq!(Error::Unknown(-3).code(), -3);
    assert_eq!(Error::EmptyInput.code(), CODE_INSUFFICIENT_BUFFER);
}

#[test]
fn error_messages() {
    assert_eq!(Error::InsufficientBuffer.to_string(), "insufficient output buffer");
    assert_eq!(Error::DataCorruption.to_string(), "invalid compressed data");
    assert_eq!(Error::EmptyInput.to_string(), "empty input");
    assert_eq!(Error::Unknown(5).to_string(), "unknown error (code 5)");
}
