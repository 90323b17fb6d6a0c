//! Probabilistic primality checking.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{FromPrimitive, One, ToPrimitive};
use rand_core::CryptoRngCore;

use crate::trace::{trace_enter, trace_exit, trace_note, NoTrace, TraceSink};

/// Largest value resolved by deterministic trial division. Anything bigger
/// goes through Miller-Rabin.
const EXACT_CHECK_MAX: u64 = 10_000_000_000;

/// Number of independent Miller-Rabin trials per verdict.
const MILLER_RABIN_TRIALS: usize = 50;

/// Reports whether `n` is (probably) prime.
///
/// Values up to 10^10 are decided exactly by trial division. Larger values
/// run 50 Miller-Rabin trials with random bases and take the majority
/// verdict, so composites slip through only with negligible probability.
/// `rng` supplies the trial bases; pass a seeded generator for reproducible
/// runs.
pub fn is_prime<R: CryptoRngCore + ?Sized>(n: &BigUint, rng: &mut R) -> bool {
    is_prime_with_trace(n, rng, &mut NoTrace)
}

/// [`is_prime`], reporting each step to `trace`.
pub fn is_prime_with_trace<R, T>(n: &BigUint, rng: &mut R, trace: &mut T) -> bool
where
    R: CryptoRngCore + ?Sized,
    T: TraceSink + ?Sized,
{
    trace_enter!(trace, "is_prime({})", n);
    let verdict = match n.to_u64() {
        Some(small) if small <= EXACT_CHECK_MAX => {
            trace_note!(trace, "method", "trial division, n <= 10^10");
            is_prime_u64(small, trace)
        }
        _ if n.is_even() => {
            trace_note!(trace, "factor", "n is even");
            false
        }
        _ => miller_rabin(n, rng, trace),
    };
    trace_note!(trace, "verdict", "{}", verdict);
    trace_exit!(trace);
    verdict
}

/// Exact check by trial division over odd divisors up to `sqrt(n)`.
fn is_prime_u64<T: TraceSink + ?Sized>(n: u64, trace: &mut T) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        trace_note!(trace, "factor", "{} is divisible by 2", n);
        return false;
    }
    let mut i = 3u64;
    while i * i <= n {
        if n % i == 0 {
            trace_note!(trace, "factor", "{} is divisible by {}", n, i);
            return false;
        }
        i += 2;
    }
    true
}

/// Miller-Rabin with majority voting over [`MILLER_RABIN_TRIALS`] random
/// bases. Precondition: `n` is odd and larger than [`EXACT_CHECK_MAX`].
fn miller_rabin<R, T>(n: &BigUint, rng: &mut R, trace: &mut T) -> bool
where
    R: CryptoRngCore + ?Sized,
    T: TraceSink + ?Sized,
{
    let two = BigUint::from_u64(2).unwrap();
    let n_minus_one = n - &BigUint::one();

    // n - 1 = 2^s * m with m odd.
    let s = n_minus_one.trailing_zeros().expect("n > 1");
    let m = &n_minus_one >> s;
    trace_note!(trace, "decompose", "n - 1 = 2^{} * {}", s, m);

    // Bases come from [2, min(n, i64::MAX) - 2). Clamping to the native
    // signed maximum is not uniform sampling over [2, n - 2] for huge n and
    // is weaker than textbook Miller-Rabin; documented behavior, not a bug.
    let max_base = if n.bits() > 63 {
        i64::MAX as u64
    } else {
        n.to_u64().expect("fits in 63 bits")
    };
    let base_span = BigUint::from_u64(max_base - 4).unwrap();

    let mut prime_votes = 0usize;
    let mut composite_votes = 0usize;

    for trial in 0..MILLER_RABIN_TRIALS {
        trace_enter!(trace, "trial {}", trial);
        let a = rng.gen_biguint_below(&base_span) + &two;
        trace_note!(trace, "base", "a = {}", a);

        let mut r = a.modpow(&m, n);
        trace_note!(trace, "power", "a^m mod n = {}", r);

        if r.is_one() || r == n_minus_one {
            trace_note!(trace, "vote", "prime");
            prime_votes += 1;
            trace_exit!(trace);
            continue;
        }

        let mut vote = None;
        for j in 1..s {
            r = r.modpow(&two, n);
            trace_note!(trace, "power", "a^(2^{} * m) mod n = {}", j, r);
            if r.is_one() {
                // A nontrivial square root of 1 exists, so n is composite.
                vote = Some(false);
                break;
            }
            if r == n_minus_one {
                vote = Some(true);
                break;
            }
        }

        if vote == Some(true) {
            trace_note!(trace, "vote", "prime");
            prime_votes += 1;
        } else {
            trace_note!(trace, "vote", "composite");
            composite_votes += 1;
        }
        trace_exit!(trace);
    }

    trace_note!(
        trace,
        "tally",
        "{} of {} trials voted prime",
        prime_votes,
        MILLER_RABIN_TRIALS
    );
    prime_votes > composite_votes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    const PRIMES: &[&str] = &[
        "2",
        "3",
        "5",
        "7",
        "11",
        "104513",
        // Largest prime below the trial-division cutoff.
        "9999999967",
        // Smallest prime above it, so the first Miller-Rabin customer.
        "10000000019",
        // 128-bit prime.
        "269432034627817064305613273322054264967",
        // 2^255 - 19.
        "57896044618658097711785492504343953926634992332820282019728792003956564819949",
    ];

    const COMPOSITES: &[&str] = &[
        "0",
        "1",
        "4",
        "9",
        "104511",
        "10000000000",
        "10000000018",
        "82793403787388584738507275144194252681",
        "6084766654921918907427900243509372380954290099172559290432744450051395395951",
        // Strong pseudoprime to all prime bases up to 29; random bases
        // overwhelmingly witness its compositeness.
        "1195068768795265792518361315725116351898245581",
    ];

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::from_seed([42; 32])
    }

    #[test]
    fn known_primes() {
        let mut rng = rng();
        for prime in PRIMES {
            let p = BigUint::parse_bytes(prime.as_bytes(), 10).unwrap();
            assert!(is_prime(&p, &mut rng), "{} is prime", prime);
        }
    }

    #[test]
    fn known_composites() {
        let mut rng = rng();
        for comp in COMPOSITES {
            let c = BigUint::parse_bytes(comp.as_bytes(), 10).unwrap();
            assert!(!is_prime(&c, &mut rng), "{} is composite", comp);
        }
    }

    #[test]
    fn small_evens_are_composite() {
        let mut rng = rng();
        for n in [4u64, 6, 100, 4096] {
            assert!(!is_prime(&BigUint::from_u64(n).unwrap(), &mut rng));
        }
    }

    #[test]
    fn odd_small_range_matches_sieve() {
        // Cross-check the trial-division path against a sieve of the first
        // thousand integers.
        let mut sieve = vec![true; 1000];
        sieve[0] = false;
        sieve[1] = false;
        for i in 2..1000 {
            if sieve[i] {
                for j in (i * i..1000).step_by(i) {
                    sieve[j] = false;
                }
            }
        }

        let mut rng = rng();
        for (i, &expected) in sieve.iter().enumerate() {
            let n = BigUint::from_u64(i as u64).unwrap();
            assert_eq!(is_prime(&n, &mut rng), expected, "n = {}", i);
        }
    }

    #[test]
    fn trace_records_the_verdict() {
        use crate::trace::StepTree;

        let mut rng = rng();
        let mut tree = StepTree::new("primality");
        let n = BigUint::from_u64(104513).unwrap();
        assert!(is_prime_with_trace(&n, &mut rng, &mut tree));

        let root = tree.root();
        assert_eq!(root.children.len(), 1);
        let scope = &root.children[0];
        assert!(scope.label.contains("is_prime(104513)"));
        assert!(scope
            .children
            .iter()
            .any(|child| child.label == "verdict: true"));
    }
}
