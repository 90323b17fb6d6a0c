//! The raw RSA transform: modular exponentiation over byte blocks.
//!
//! Encryption and decryption are the same operation with different exponents;
//! no padding is applied here. Feed OAEP blocks through [`crate::oaep`] first
//! to encrypt arbitrary messages safely.

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::Zero;

use crate::errors::{Error, Result};

/// Raises the integer value of `data` to `exponent` modulo `modulus`.
///
/// `data` is interpreted as a big-endian *signed* integer, exactly like the
/// two's-complement byte conversion of common big-integer libraries: a first
/// byte of `0x80` or above makes the value negative. This is a textbook
/// simplification, not a safe wire format: it changes which inputs trip the
/// size check below, and negative values do not survive a round trip (the
/// result is always the canonical non-negative residue).
///
/// Fails with [`Error::InvalidKey`] if the modulus is negative or zero, and
/// with [`Error::DataTooLarge`] if the value is not smaller than the modulus.
/// The result uses the minimal-length signed encoding, which may be shorter
/// than the modulus; callers wanting fixed-width blocks re-pad with
/// [`left_pad`].
pub fn transform(data: &[u8], modulus: &BigInt, exponent: &BigInt) -> Result<Vec<u8>> {
    if modulus.sign() == Sign::Minus {
        return Err(Error::InvalidKey);
    }
    if modulus.is_zero() {
        return Err(Error::InvalidKey);
    }

    let value = BigInt::from_signed_bytes_be(data);
    if value >= *modulus {
        return Err(Error::DataTooLarge);
    }

    let exponent = exponent.to_biguint().ok_or(Error::InvalidKey)?;
    let base = value
        .mod_floor(modulus)
        .to_biguint()
        .expect("residue mod a positive modulus is non-negative");
    let n = modulus
        .to_biguint()
        .expect("modulus validated as positive");

    let result = base.modpow(&exponent, &n);
    Ok(BigInt::from_biguint(Sign::Plus, result).to_signed_bytes_be())
}

/// Encrypts one block with the public exponent. Alias of [`transform`].
pub fn encrypt(data: &[u8], modulus: &BigInt, public_exponent: &BigInt) -> Result<Vec<u8>> {
    transform(data, modulus, public_exponent)
}

/// Decrypts one block with the private exponent. Alias of [`transform`].
pub fn decrypt(data: &[u8], modulus: &BigInt, private_exponent: &BigInt) -> Result<Vec<u8>> {
    transform(data, modulus, private_exponent)
}

/// Returns `input` left-padded with zeros to `padded_len` bytes.
///
/// Restores the fixed block width that the minimal-length output of
/// [`transform`] drops. Fails with [`Error::SizeMismatch`] if `input` is
/// already longer than `padded_len`.
pub fn left_pad(input: &[u8], padded_len: usize) -> Result<Vec<u8>> {
    if input.len() > padded_len {
        return Err(Error::SizeMismatch);
    }

    let mut out = vec![0u8; padded_len];
    out[padded_len - input.len()..].copy_from_slice(input);
    Ok(out)
}
