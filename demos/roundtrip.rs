//! Full walkthrough: key setup from two generated primes, OAEP padding, the
//! RSA transform in both directions, and the recorded step tree.
//!
//! Run with `RUST_LOG=debug` to also see the trace through the logger.

use num_bigint::{BigInt, BigUint, IntoBigUint, ModInverse, Sign};
use num_traits::{FromPrimitive, One};
use rand::thread_rng;
use textbook_rsa::{convert, oaep, transform, RandPrime, StepTree};

fn main() {
    env_logger::init();

    let mut rng = thread_rng();
    let mut tree = StepTree::new("rsa walkthrough");

    // Key setup is the caller's job: two primes, their product, and the
    // inverse of the public exponent mod the totient. Prime generation is
    // left untraced here; the full trial-by-trial firehose is better viewed
    // through `LogTrace` than printed in one tree.
    let e = BigUint::from_u64(65537).unwrap();
    let (n, d) = loop {
        let p = rng.gen_prime(256);
        let q = rng.gen_prime(256);
        if p == q {
            continue;
        }
        let totient = (&p - BigUint::one()) * (&q - BigUint::one());
        if let Some(d) = e
            .clone()
            .mod_inverse(&totient)
            .and_then(IntoBigUint::into_biguint)
        {
            break (&p * &q, d);
        }
    };

    let key_size_bytes = n.bits() / 8;
    let n = BigInt::from_biguint(Sign::Plus, n);
    let e = BigInt::from_biguint(Sign::Plus, e);
    let d = BigInt::from_biguint(Sign::Plus, d);

    let message = b"hello";
    let block = oaep::pad_with_trace(message, key_size_bytes, &mut rng, &mut tree)
        .expect("message fits a 512-bit key");

    let ciphertext = transform::encrypt(&block, &n, &e).expect("block is below the modulus");
    println!("ciphertext: {}", convert::to_hex(&ciphertext));

    let decrypted = transform::decrypt(&ciphertext, &n, &d).expect("ciphertext is below the modulus");
    let decrypted = transform::left_pad(&decrypted, key_size_bytes).expect("fits the block width");

    let recovered = oaep::unpad_with_trace(&decrypted, key_size_bytes, &mut tree)
        .expect("block round-trips");
    assert_eq!(recovered, message);
    println!("recovered:  {}", String::from_utf8_lossy(&recovered));

    println!("\n{tree}");
}
