//! Generation of random primes.

use num_bigint::BigUint;
use rand_core::CryptoRngCore;

use crate::prime::is_prime_with_trace;
use crate::trace::{trace_enter, trace_exit, trace_note, NoTrace, TraceSink};

/// Extension trait generating random primes from any cryptographic RNG.
///
/// # Example
/// ```
/// use rand::thread_rng;
/// use textbook_rsa::RandPrime;
///
/// let p = thread_rng().gen_prime(128);
/// assert_eq!(p.bits(), 128);
/// ```
pub trait RandPrime {
    /// Generates a random prime with exactly `bit_size` significant bits.
    ///
    /// The top two bits of every candidate are set, so the product of two
    /// generated primes always has exactly twice as many bits; the low bit is
    /// set so candidates are odd. Candidates are drawn fresh and tested until
    /// one passes the primality check. There is no retry bound, so callers
    /// needing a timeout must impose one around the call.
    ///
    /// Panics if `bit_size < 2`.
    fn gen_prime(&mut self, bit_size: usize) -> BigUint;

    /// [`RandPrime::gen_prime`], reporting each candidate to `trace`.
    fn gen_prime_with_trace<T: TraceSink + ?Sized>(
        &mut self,
        bit_size: usize,
        trace: &mut T,
    ) -> BigUint;
}

impl<R: CryptoRngCore + ?Sized> RandPrime for R {
    fn gen_prime(&mut self, bit_size: usize) -> BigUint {
        self.gen_prime_with_trace(bit_size, &mut NoTrace)
    }

    fn gen_prime_with_trace<T: TraceSink + ?Sized>(
        &mut self,
        bit_size: usize,
        trace: &mut T,
    ) -> BigUint {
        assert!(bit_size >= 2, "prime size must be at least 2-bit");

        trace_enter!(trace, "gen_prime({})", bit_size);
        let mut candidates = 0usize;
        loop {
            let candidate = random_candidate(self, bit_size);
            candidates += 1;
            if is_prime_with_trace(&candidate, self, trace) {
                trace_note!(trace, "candidates", "{} tested", candidates);
                trace_note!(trace, "prime", "{}", candidate);
                trace_exit!(trace);
                return candidate;
            }
        }
    }
}

/// Draws a uniformly random `bit_size`-bit integer with the top two bits and
/// the low bit forced to one.
fn random_candidate<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> BigUint {
    let mut b = bit_size % 8;
    if b == 0 {
        b = 8;
    }

    let bytes_len = (bit_size + 7) / 8;
    let mut bytes = vec![0u8; bytes_len];
    rng.fill_bytes(&mut bytes);

    // Trim the first byte so the candidate has at most `bit_size` bits.
    bytes[0] &= ((1u32 << b) - 1) as u8;

    // Set the two most significant bits. When only one of them lives in the
    // first byte, the second one is the high bit of the next byte.
    if b >= 2 {
        bytes[0] |= 3u8.wrapping_shl(b as u32 - 2);
    } else {
        bytes[0] |= 1;
        bytes[1] |= 0x80;
    }

    // Even numbers this large are certainly not prime.
    bytes[bytes_len - 1] |= 1;

    BigUint::from_bytes_be(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prime::is_prime;
    use num_integer::Integer;
    use num_traits::FromPrimitive;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    #[test]
    fn gen_prime_128_is_exact_and_prime() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        for _ in 0..100 {
            let p = rng.gen_prime(128);
            assert_eq!(p.bits(), 128);
            assert!(is_prime(&p, &mut rng), "{}", p);
        }
    }

    #[test]
    fn small_sizes_force_the_expected_bits() {
        let mut rng = ChaCha8Rng::from_seed([7; 32]);
        for bits in 2..=16 {
            let p = rng.gen_prime(bits);
            assert_eq!(p.bits(), bits);
            assert!(p.is_odd());
            // Top two bits set.
            assert_eq!(&p >> (bits - 2), BigUint::from_u64(3).unwrap());
        }
    }

    #[test]
    fn cross_byte_top_bits() {
        // 9-bit candidates put the two forced bits in different bytes.
        let mut rng = ChaCha8Rng::from_seed([3; 32]);
        for _ in 0..10 {
            let p = rng.gen_prime(9);
            assert_eq!(p.bits(), 9);
            assert_eq!(&p >> 7, BigUint::from_u64(3).unwrap());
        }
    }

    #[test]
    #[should_panic(expected = "at least 2-bit")]
    fn one_bit_primes_are_rejected() {
        let mut rng = ChaCha8Rng::from_seed([0; 32]);
        let _ = rng.gen_prime(1);
    }
}
