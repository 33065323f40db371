// SPDX-License-Identifier: ISC
use thiserror::Error;

/// Result type used by this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Status code reported when the output buffer is too small (`E2BIG`).
pub const CODE_INSUFFICIENT_BUFFER: i32 = 7;

/// Status code reported for a malformed token stream (`EINVAL`).
pub const CODE_DATA_CORRUPTION: i32 = 22;

/// Error type for LZF encode/decode operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Output buffer is too small for the encoded or decoded data.
    #[error("insufficient output buffer")]
    InsufficientBuffer,
    /// Input is not a valid LZF token stream.
    #[error("invalid compressed data")]
    DataCorruption,
    /// Input was empty where a non-empty input was required.
    ///
    /// Only returned by [`compress_nonempty`](crate::compress_nonempty).
    #[error("empty input")]
    EmptyInput,
    /// Unrecognised status code.
    ///
    /// The contained value is the raw code.
    #[error("unknown error (code {0})")]
    Unknown(i32),
}

impl Error {
    /// Maps an errno-style status code onto an error.
    ///
    /// `E2BIG` and `EINVAL` map to [`Error::InsufficientBuffer`] and
    /// [`Error::DataCorruption`]; anything else becomes [`Error::Unknown`].
    pub const fn from_code(code: i32) -> Self {
        match code {
            CODE_INSUFFICIENT_BUFFER => Self::InsufficientBuffer,
            CODE_DATA_CORRUPTION => Self::DataCorruption,
            other => Self::Unknown(other),
        }
    }

    /// Returns the errno-style status code for this error.
    ///
    /// `EmptyInput` has no dedicated code and reports `E2BIG`, the code a
    /// zero-length compression result carries.
    pub const fn code(&self) -> i32 {
        match self {
            Self::InsufficientBuffer | Self::EmptyInput => CODE_INSUFFICIENT_BUFFER,
            Self::DataCorruption => CODE_DATA_CORRUPTION,
            Self::Unknown(code) => *code,
        }
    }
}
