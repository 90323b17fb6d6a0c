#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Educational textbook RSA.
//!
//! This crate implements the algorithmic core of an RSA teaching tool on top
//! of an arbitrary-precision integer library:
//!
//! - [`prime`]: a primality oracle, using deterministic trial division for
//!   small values and majority-vote Miller-Rabin above 10^10.
//! - [`prime_rand`]: random prime generation of an exact bit length, via the
//!   [`RandPrime`] extension trait.
//! - [`transform`]: the raw RSA transform (modular exponentiation over byte
//!   blocks), identical in shape for encryption and decryption.
//! - [`oaep`]: OAEP padding with SHA-1 and an empty label, plus the
//!   [`mgf`] mask generation it builds on.
//! - [`trace`]: optional structured trace events, so a visualizer or logger
//!   can follow every step of the algorithms.
//!
//! Key setup (multiplying two generated primes and inverting the public
//! exponent) is left to the caller; every operation takes the modulus and
//! exponent it needs directly.
//!
//! # ⚠️ Security Warning
//!
//! This is a teaching implementation. It is not constant-time, it makes no
//! attempt at side-channel resistance, and the unpadding errors deliberately
//! reveal which check failed. Do not protect real data with it.
//!
//! # Example
//!
//! ```
//! use rand::thread_rng;
//! use textbook_rsa::{oaep, RandPrime};
//!
//! let mut rng = thread_rng();
//!
//! let p = rng.gen_prime(64);
//! assert_eq!(p.bits(), 64);
//!
//! // 512-bit key -> 64-byte blocks.
//! let block = oaep::pad(b"hello", 64, &mut rng).unwrap();
//! assert_eq!(block.len(), 64);
//! assert_eq!(oaep::unpad(&block, 64).unwrap(), b"hello");
//! ```

pub use num_bigint::{BigInt, BigUint};
pub use rand_core;

pub mod convert;
pub mod errors;
pub mod mgf;
pub mod oaep;
pub mod prime;
pub mod prime_rand;
pub mod trace;
pub mod transform;

pub use crate::errors::{Error, Result};
pub use crate::prime::is_prime;
pub use crate::prime_rand::RandPrime;
pub use crate::trace::{LogTrace, NoTrace, StepTree, TraceEvent, TraceSink};
