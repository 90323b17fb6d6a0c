//! Key setup shared by the integration tests: derive a keypair from two
//! generated primes and the fixed public exponent.

use num_bigint::{BigInt, BigUint, IntoBigUint, ModInverse, Sign};
use num_traits::{FromPrimitive, One};
use rand_core::CryptoRngCore;
use textbook_rsa::RandPrime;

pub struct KeyPair {
    pub n: BigInt,
    pub e: BigInt,
    pub d: BigInt,
    pub size_bytes: usize,
}

pub fn gen_keypair<R: CryptoRngCore>(rng: &mut R, bits: usize) -> KeyPair {
    let e = BigUint::from_u64(65537).unwrap();
    loop {
        let p = rng.gen_prime(bits / 2);
        let q = rng.gen_prime(bits / 2);
        if p == q {
            continue;
        }

        let n = &p * &q;
        let totient = (&p - BigUint::one()) * (&q - BigUint::one());

        // Retry with new primes when e is not invertible mod the totient.
        if let Some(d) = e
            .clone()
            .mod_inverse(&totient)
            .and_then(IntoBigUint::into_biguint)
        {
            return KeyPair {
                n: BigInt::from_biguint(Sign::Plus, n),
                e: BigInt::from_biguint(Sign::Plus, e),
                d: BigInt::from_biguint(Sign::Plus, d),
                size_bytes: bits / 8,
            };
        }
    }
}
