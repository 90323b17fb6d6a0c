//! MGF1 mask generation, shared by the pad and unpad directions of OAEP.

use digest::{Digest, FixedOutputReset};
use sha1::Sha1;

/// XORs `out` with the MGF1 stream derived from `seed`.
///
/// The stream is the concatenation of `H(seed || counter)` for a 4-byte
/// big-endian counter starting at zero, truncated to `out.len()`. Each block
/// uses a fresh digest invocation; no digest state is carried over.
///
/// Panics if `out` is larger than 2^32 blocks worth of output, in accordance
/// with RFC 8017 B.2.1.
pub(crate) fn mgf1_xor<D>(out: &mut [u8], digest: &mut D, seed: &[u8])
where
    D: Digest + FixedOutputReset,
{
    const MAX_LEN: u64 = u32::MAX as u64 + 1;
    assert!(out.len() as u64 <= MAX_LEN);

    let mut counter = [0u8; 4];
    let mut i = 0;

    while i < out.len() {
        Digest::update(digest, seed);
        Digest::update(digest, counter);

        let block = digest.finalize_reset();
        let mut j = 0;
        while j < block.len() && i < out.len() {
            out[i] ^= block[j];
            j += 1;
            i += 1;
        }
        inc_counter(&mut counter);
    }
}

fn inc_counter(counter: &mut [u8; 4]) {
    for i in (0..4).rev() {
        counter[i] = counter[i].wrapping_add(1);
        if counter[i] != 0 {
            return;
        }
    }
}

/// Materializes `len` bytes of the MGF1-SHA1 stream for `seed`.
///
/// Deterministic: the same seed and length always produce the same mask.
pub fn mgf1(seed: &[u8], len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    let mut digest = Sha1::new();
    mgf1_xor(&mut out, &mut digest, seed);
    out
}
