//! # Proof-of-Work Algorithm Registry
//!
//! Maps pool algorithm identifiers (`"scrypt"`, `"scrypt-n"`, `"keccak"`,
//! ...) to hash-function constructors and per-algorithm difficulty metadata:
//! work multipliers, fixed maximum targets, and cost-factor knobs. The hash
//! computations themselves are performed by external primitive crates; this
//! crate is the configuration and dispatch layer a share validator sits
//! behind.
//!
//! ## Usage
//!
//! A pool resolves each coin's algorithm once at startup, builds the hash
//! function from the coin's options, and calls it for every submitted
//! share:
//!
//! ```rust
//! use stratum_algos::{CoinOptions, difficulty_to_target, lookup, meets_target};
//!
//! let spec = lookup("scrypt").unwrap();
//! let hasher = spec.hash_factory(&CoinOptions::default()).unwrap();
//!
//! let digest = hasher.hash(b"serialized block header", 0);
//! let target = difficulty_to_target(16.0, spec.multiplier());
//! let _accepted = meets_target(&digest, &target);
//! ```
//!
//! ## Properties
//!
//! - The registry is a static table: lookup is lock-free and hash functions
//!   are `Send + Sync`, safe to call from any number of validation workers.
//! - Configuration is validated when the hash function is built, so the
//!   share path never parses, allocates configuration, or errors.
//! - Time-dependent cost schedules (scrypt-n) are evaluated once at
//!   construction; time-keyed algorithms (odo, keccak normal hashing) take
//!   the share timestamp per call and stay deterministic for a given
//!   `(data, n_time)` pair.

mod config;
mod error;
mod params;
mod primitives;
mod registry;

pub use config::CoinOptions;
pub use error::AlgoError;
pub use params::*;
pub use primitives::Digest32;
pub use registry::{
    Algorithm, AlgorithmSpec, HashFn, all, difficulty_to_target, lookup, meets_target,
};
