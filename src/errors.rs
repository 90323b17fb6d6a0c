//! Error types.

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by the RSA transform and the OAEP codec.
///
/// Note that [`Error::LabelMismatch`] and [`Error::MalformedPadding`] are
/// deliberately distinguishable. A real decryption oracle must not reveal
/// which structural check failed; this crate is a teaching tool and makes no
/// oracle-safety claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The modulus is negative or zero.
    #[error("invalid key: modulus must be positive")]
    InvalidKey,

    /// The integer value of the input is not smaller than the modulus.
    #[error("data too large for the modulus")]
    DataTooLarge,

    /// The plaintext does not fit the OAEP capacity of the key size.
    #[error("message too long for the given key size")]
    MessageTooLarge,

    /// The block handed to `unpad` is not exactly the key size in bytes.
    #[error("block length does not match the key size")]
    SizeMismatch,

    /// The label hash recovered from the data block is not the hash of the
    /// empty label.
    #[error("label hash mismatch")]
    LabelMismatch,

    /// No `0x01` delimiter after the zero padding, or the padding ran off
    /// the end of the data block.
    #[error("malformed padding")]
    MalformedPadding,
}
