//! OAEP padding and unpadding, per [RFC 8017 §7.1] with a fixed empty label
//! and SHA-1 as the one digest used throughout.
//!
//! [`pad`] turns a short message into a full-width block laid out as
//! `0x00 || maskedSeed || maskedDB`; [`unpad`] reverses it. The two masks
//! come from [`crate::mgf::mgf1`] and chain through each other, so flipping
//! any bit of the block scrambles the recovered data block and fails the
//! structural checks (with overwhelming probability).
//!
//! Whether unpadding failed on the label hash or on the `0x01` delimiter is
//! reported as two different errors. That distinction is a padding oracle in
//! any adversarial setting; it is kept here because the crate is a teaching
//! tool, not a hardened implementation.
//!
//! [RFC 8017 §7.1]: https://datatracker.ietf.org/doc/html/rfc8017#section-7.1

use digest::Digest;
use rand_core::CryptoRngCore;
use sha1::Sha1;
use zeroize::Zeroizing;

use crate::convert::to_hex;
use crate::errors::{Error, Result};
use crate::mgf::mgf1_xor;
use crate::trace::{trace_enter, trace_exit, trace_note, NoTrace, TraceSink};

/// Longest message that fits a block of `key_size_bytes`, or `None` when the
/// key is too small to hold the OAEP framing at all.
pub fn max_message_len(key_size_bytes: usize) -> Option<usize> {
    let h_len = Sha1::output_size();
    key_size_bytes.checked_sub(2 * h_len + 2)
}

/// Pads `message` into a block of exactly `key_size_bytes` bytes.
///
/// A fresh random seed is drawn from `rng` on every call, so padding the same
/// message twice produces unrelated blocks. Fails with
/// [`Error::MessageTooLarge`] if the message exceeds
/// [`max_message_len`], including for keys too small for any message.
pub fn pad<R: CryptoRngCore + ?Sized>(
    message: &[u8],
    key_size_bytes: usize,
    rng: &mut R,
) -> Result<Vec<u8>> {
    pad_with_trace(message, key_size_bytes, rng, &mut NoTrace)
}

/// [`pad`], reporting sizes, the seed and the masked intermediates to `trace`.
pub fn pad_with_trace<R, T>(
    message: &[u8],
    key_size_bytes: usize,
    rng: &mut R,
    trace: &mut T,
) -> Result<Vec<u8>>
where
    R: CryptoRngCore + ?Sized,
    T: TraceSink + ?Sized,
{
    trace_enter!(trace, "pad({} bytes)", message.len());
    let res = pad_inner(message, key_size_bytes, rng, trace);
    trace_exit!(trace);
    res
}

fn pad_inner<R, T>(
    message: &[u8],
    key_size_bytes: usize,
    rng: &mut R,
    trace: &mut T,
) -> Result<Vec<u8>>
where
    R: CryptoRngCore + ?Sized,
    T: TraceSink + ?Sized,
{
    let h_len = Sha1::output_size();
    trace_note!(trace, "key size", "{} bytes", key_size_bytes);
    trace_note!(trace, "hash size", "{} bytes", h_len);

    if message.len() + 2 * h_len + 2 > key_size_bytes {
        return Err(Error::MessageTooLarge);
    }

    let mut block = vec![0u8; key_size_bytes];
    let (_, payload) = block.split_at_mut(1);
    let (seed, db) = payload.split_at_mut(h_len);

    // DB = lHash || PS || 0x01 || M
    let db_len = key_size_bytes - h_len - 1;
    let l_hash = Sha1::digest(b"");
    trace_note!(trace, "label hash", "{}", to_hex(&l_hash));
    db[..h_len].copy_from_slice(&l_hash);
    db[db_len - message.len() - 1] = 0x01;
    db[db_len - message.len()..].copy_from_slice(message);

    rng.fill_bytes(seed);
    trace_note!(trace, "seed", "{}", to_hex(seed));

    let mut digest = Sha1::new();
    mgf1_xor(db, &mut digest, seed);
    trace_note!(trace, "masked db", "{}", to_hex(db));
    mgf1_xor(seed, &mut digest, db);
    trace_note!(trace, "masked seed", "{}", to_hex(seed));

    Ok(block)
}

/// Recovers the message from a block produced by [`pad`].
///
/// The block must be exactly `key_size_bytes` long ([`Error::SizeMismatch`]
/// otherwise). Structural failures surface as [`Error::LabelMismatch`] or
/// [`Error::MalformedPadding`]; see the module docs for why these are
/// distinguishable.
pub fn unpad(block: &[u8], key_size_bytes: usize) -> Result<Vec<u8>> {
    unpad_with_trace(block, key_size_bytes, &mut NoTrace)
}

/// [`unpad`], reporting the recovered seed and data block to `trace`.
pub fn unpad_with_trace<T>(block: &[u8], key_size_bytes: usize, trace: &mut T) -> Result<Vec<u8>>
where
    T: TraceSink + ?Sized,
{
    trace_enter!(trace, "unpad({} bytes)", block.len());
    let res = unpad_inner(block, key_size_bytes, trace);
    trace_exit!(trace);
    res
}

fn unpad_inner<T>(block: &[u8], key_size_bytes: usize, trace: &mut T) -> Result<Vec<u8>>
where
    T: TraceSink + ?Sized,
{
    let h_len = Sha1::output_size();
    trace_note!(trace, "key size", "{} bytes", key_size_bytes);

    if block.len() != key_size_bytes {
        return Err(Error::SizeMismatch);
    }
    // A block this small cannot contain the framing at all.
    if key_size_bytes < 2 * h_len + 2 {
        return Err(Error::MalformedPadding);
    }

    let mut buf = Zeroizing::new(block.to_vec());
    // The leading byte is not inspected.
    let (_, payload) = buf.split_at_mut(1);
    let (seed, db) = payload.split_at_mut(h_len);

    let mut digest = Sha1::new();
    mgf1_xor(seed, &mut digest, db);
    trace_note!(trace, "seed", "{}", to_hex(seed));
    mgf1_xor(db, &mut digest, seed);
    trace_note!(trace, "db", "{}", to_hex(db));

    let l_hash = Sha1::digest(b"");
    if db[..h_len] != l_hash[..] {
        return Err(Error::LabelMismatch);
    }

    // Skip the zero padding; the message starts right after the 0x01 marker.
    let mut index = h_len;
    while index < db.len() && db[index] == 0x00 {
        index += 1;
    }
    if index == db.len() || db[index] != 0x01 {
        return Err(Error::MalformedPadding);
    }

    Ok(db[index + 1..].to_vec())
}
