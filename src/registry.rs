//! Algorithm descriptors, lookup, and hash-function construction
//!
//! The registry is a static table mapping each supported proof-of-work
//! algorithm to its difficulty metadata and a factory for ready-to-call
//! hash functions. A pool looks an algorithm up once per coin definition,
//! builds the hash function from the coin's options, and invokes it for
//! every submitted share. All configuration parsing, parameter validation,
//! and schedule evaluation happen in the factory; the returned function
//! never errors, parses, or reads the clock on the share path.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use primitive_types::U256;
use tracing::debug;

use crate::config::CoinOptions;
use crate::error::AlgoError;
use crate::params::*;
use crate::primitives::{self, Digest32};

/// Closed set of supported proof-of-work algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sha256,
    Sha256d,
    Scrypt,
    ScryptOg,
    ScryptN,
    Keccak,
    Groestl,
    Skein,
    Blake2s,
    Blake3,
    Odo,
    Argon2d,
}

impl Algorithm {
    /// Registry key for this algorithm, as written in pool coin configs.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha256d => "sha256d",
            Algorithm::Scrypt => "scrypt",
            Algorithm::ScryptOg => "scrypt-og",
            Algorithm::ScryptN => "scrypt-n",
            Algorithm::Keccak => "keccak",
            Algorithm::Groestl => "groestl",
            Algorithm::Skein => "skein",
            Algorithm::Blake2s => "blake2s",
            Algorithm::Blake3 => "blake3",
            Algorithm::Odo => "odo",
            Algorithm::Argon2d => "argon2d",
        }
    }
}

/// One registry entry: static metadata plus a hash-function constructor.
#[derive(Debug)]
pub struct AlgorithmSpec {
    algo: Algorithm,
    multiplier: u64,
    fixed_difficulty: Option<U256>,
}

static REGISTRY: [AlgorithmSpec; 12] = [
    AlgorithmSpec {
        algo: Algorithm::Sha256,
        multiplier: 1,
        fixed_difficulty: None,
    },
    AlgorithmSpec {
        algo: Algorithm::Sha256d,
        multiplier: 1,
        fixed_difficulty: None,
    },
    AlgorithmSpec {
        algo: Algorithm::Scrypt,
        multiplier: 1 << 16,
        fixed_difficulty: None,
    },
    AlgorithmSpec {
        algo: Algorithm::ScryptOg,
        multiplier: 1 << 16,
        fixed_difficulty: None,
    },
    AlgorithmSpec {
        algo: Algorithm::ScryptN,
        multiplier: 1 << 16,
        fixed_difficulty: None,
    },
    AlgorithmSpec {
        algo: Algorithm::Keccak,
        multiplier: 1 << 8,
        fixed_difficulty: None,
    },
    AlgorithmSpec {
        algo: Algorithm::Groestl,
        multiplier: 1 << 8,
        fixed_difficulty: None,
    },
    AlgorithmSpec {
        algo: Algorithm::Skein,
        multiplier: 1,
        fixed_difficulty: None,
    },
    AlgorithmSpec {
        algo: Algorithm::Blake2s,
        multiplier: 1 << 8,
        fixed_difficulty: None,
    },
    AlgorithmSpec {
        algo: Algorithm::Blake3,
        multiplier: 1,
        fixed_difficulty: None,
    },
    AlgorithmSpec {
        algo: Algorithm::Odo,
        multiplier: 1,
        fixed_difficulty: None,
    },
    AlgorithmSpec {
        algo: Algorithm::Argon2d,
        multiplier: 1 << 16,
        fixed_difficulty: Some(ARGON2D_MAX_TARGET),
    },
];

/// Look up an algorithm descriptor by its registry key.
///
/// Names are case-sensitive. Unregistered names reject the coin definition
/// with [`AlgoError::UnknownAlgorithm`].
pub fn lookup(name: &str) -> Result<&'static AlgorithmSpec, AlgoError> {
    REGISTRY
        .iter()
        .find(|spec| spec.algo.name() == name)
        .ok_or_else(|| AlgoError::UnknownAlgorithm(name.to_string()))
}

/// All registered descriptors, in registration order.
pub fn all() -> &'static [AlgorithmSpec] {
    &REGISTRY
}

/// A ready-to-call hash function bound to one coin's configuration.
///
/// The variants are the registry's call signatures: most algorithms hash
/// the raw share data, time-keyed ones additionally take the share
/// timestamp. [`HashFn::hash`] dispatches uniformly and plain algorithms
/// ignore the timestamp, so share validators need a single call site.
pub enum HashFn {
    /// `(data) -> digest`
    Data(Box<dyn Fn(&[u8]) -> Digest32 + Send + Sync>),
    /// `(data, n_time) -> digest`
    DataTime(Box<dyn Fn(&[u8], u32) -> Digest32 + Send + Sync>),
}

impl HashFn {
    /// Hash one share submission.
    pub fn hash(&self, data: &[u8], n_time: u32) -> Digest32 {
        match self {
            HashFn::Data(f) => f(data),
            HashFn::DataTime(f) => f(data, n_time),
        }
    }
}

impl AlgorithmSpec {
    pub fn algorithm(&self) -> Algorithm {
        self.algo
    }

    pub fn name(&self) -> &'static str {
        self.algo.name()
    }

    /// Scale factor reconciling this algorithm's native output range into
    /// the difficulty-1 convention. Always at least 1.
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// Precomputed maximum target overriding the standard difficulty-1
    /// computation, for algorithms that declare one.
    pub fn fixed_difficulty(&self) -> Option<U256> {
        self.fixed_difficulty
    }

    /// Maximum target for share difficulty: the declared override when
    /// present, [`DIFF1`] otherwise.
    pub fn max_target(&self) -> U256 {
        self.fixed_difficulty.unwrap_or(DIFF1)
    }

    /// Construct the hash function for one coin.
    ///
    /// Reads the wall clock once for schedule-driven algorithms. Call once
    /// per coin definition, not per share; see
    /// [`AlgorithmSpec::hash_factory_at`] for the deterministic form.
    pub fn hash_factory(&self, options: &CoinOptions) -> Result<HashFn, AlgoError> {
        self.hash_factory_at(options, unix_now())
    }

    /// Construct the hash function, evaluating any time schedule against
    /// the supplied unix timestamp instead of the wall clock.
    ///
    /// Schedule lookup happens exactly once, here. Re-constructing a
    /// factory later re-evaluates the schedule; pools construct at startup
    /// so every share in a session sees the same cost factor.
    pub fn hash_factory_at(
        &self,
        options: &CoinOptions,
        now_unix: u64,
    ) -> Result<HashFn, AlgoError> {
        match self.algo {
            Algorithm::Sha256 | Algorithm::Sha256d => {
                Ok(HashFn::Data(Box::new(primitives::sha256d)))
            }
            Algorithm::Scrypt => scrypt_factory("scrypt", options, SCRYPT_DEFAULT_N),
            Algorithm::ScryptOg => scrypt_factory("scrypt-og", options, SCRYPT_OG_DEFAULT_N),
            Algorithm::ScryptN => {
                let table = options
                    .time_table
                    .clone()
                    .unwrap_or_else(default_time_table);
                let factor = select_n_factor(&table, now_unix)?;
                debug!(factor, now_unix, "scrypt-n cost factor selected");
                let r = options.r_value.unwrap_or(SCRYPT_DEFAULT_R);
                let params = primitives::scrypt_params("scrypt-n", factor, r)?;
                Ok(HashFn::Data(Box::new(move |data: &[u8]| {
                    primitives::scrypt_hash(data, &params)
                })))
            }
            Algorithm::Keccak => {
                if options.normal_hashing {
                    Ok(HashFn::DataTime(Box::new(|data: &[u8], n_time: u32| {
                        let mut buf = Vec::with_capacity(data.len() + 4);
                        buf.extend_from_slice(data);
                        buf.extend_from_slice(&timestamp_bytes(n_time));
                        primitives::keccak256(&primitives::keccak256(&buf))
                    })))
                } else {
                    Ok(HashFn::Data(Box::new(primitives::keccak256)))
                }
            }
            Algorithm::Groestl => Ok(HashFn::Data(Box::new(primitives::groestl256))),
            Algorithm::Skein => Ok(HashFn::Data(Box::new(primitives::skein512))),
            Algorithm::Blake2s => Ok(HashFn::Data(Box::new(primitives::blake2s))),
            Algorithm::Blake3 => Ok(HashFn::Data(Box::new(primitives::blake3_256))),
            Algorithm::Odo => {
                let interval = options.shapechange_interval.ok_or_else(|| {
                    AlgoError::InvalidAlgorithmConfig {
                        algo: "odo",
                        reason: "shapechangeInterval is required".into(),
                    }
                })?;
                if interval == 0 {
                    return Err(AlgoError::InvalidAlgorithmConfig {
                        algo: "odo",
                        reason: "shapechangeInterval must be nonzero".into(),
                    });
                }
                Ok(HashFn::DataTime(Box::new(move |data: &[u8], n_time: u32| {
                    primitives::blake3_keyed(data, odo_key(n_time, interval))
                })))
            }
            Algorithm::Argon2d => {
                let params = primitives::argon2d_params(
                    options.memory_kib.unwrap_or(ARGON2D_MEMORY_KIB),
                    options.passes.unwrap_or(ARGON2D_PASSES),
                    options.lanes.unwrap_or(ARGON2D_LANES),
                )?;
                Ok(HashFn::Data(Box::new(move |data: &[u8]| {
                    primitives::argon2d_hash(data, &params)
                })))
            }
        }
    }
}

fn scrypt_factory(
    name: &'static str,
    options: &CoinOptions,
    default_n: u32,
) -> Result<HashFn, AlgoError> {
    let n = options.n_value.unwrap_or(default_n);
    if !n.is_power_of_two() || n < 2 {
        return Err(AlgoError::InvalidAlgorithmConfig {
            algo: name,
            reason: format!("cost factor N must be a power of two >= 2, got {n}"),
        });
    }
    let r = options.r_value.unwrap_or(SCRYPT_DEFAULT_R);
    debug!(algo = name, n, r, "scrypt cost parameters resolved");
    let params = primitives::scrypt_params(name, n.trailing_zeros() as u8, r)?;
    Ok(HashFn::Data(Box::new(move |data: &[u8]| {
        primitives::scrypt_hash(data, &params)
    })))
}

/// Select the scrypt-n cost-factor exponent from an unlock schedule.
///
/// Thresholds are compared numerically, descending; the largest N whose
/// unlock time has arrived wins and `factor = log2(N)`.
pub(crate) fn select_n_factor(
    table: &BTreeMap<u64, u64>,
    now_unix: u64,
) -> Result<u8, AlgoError> {
    let n = table
        .iter()
        .rev()
        .find(|(_, unlock)| **unlock <= now_unix)
        .map(|(n, _)| *n)
        .ok_or_else(|| AlgoError::InvalidAlgorithmConfig {
            algo: "scrypt-n",
            reason: format!("no cost factor unlocked at {now_unix}"),
        })?;
    if !n.is_power_of_two() {
        return Err(AlgoError::InvalidAlgorithmConfig {
            algo: "scrypt-n",
            reason: format!("cost factor N must be a power of two, got {n}"),
        });
    }
    Ok(n.trailing_zeros() as u8)
}

/// Round a share timestamp down to its shape-change bucket:
/// `key = n_time - (n_time % interval)`.
pub(crate) fn odo_key(n_time: u32, interval: u32) -> u32 {
    n_time - n_time % interval
}

/// Minimal big-endian encoding of a share timestamp, as appended to the
/// input under keccak normal hashing.
pub(crate) fn timestamp_bytes(n_time: u32) -> Vec<u8> {
    let bytes = n_time.to_be_bytes();
    let skip = bytes.iter().take_while(|b| **b == 0).count();
    bytes[skip..].to_vec()
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Convert a requested share difficulty into its acceptance target:
/// `target = diff1 / (difficulty * multiplier)`, computed in 2^24 fixed
/// point so fractional pool difficulties stay exact enough for share
/// comparison. Non-positive difficulties yield the easiest possible target.
pub fn difficulty_to_target(difficulty: f64, multiplier: u64) -> U256 {
    const SHIFT: u32 = 24;
    let scaled = difficulty * f64::from(1u32 << SHIFT);
    if !(scaled >= 1.0) {
        return U256::MAX;
    }
    let divisor = U256::from(scaled as u128) * U256::from(multiplier);
    (DIFF1 << SHIFT) / divisor
}

/// Check a digest against an acceptance target. Digests compare as
/// big-endian integers; a share is valid when `hash <= target`.
pub fn meets_target(digest: &Digest32, target: &U256) -> bool {
    U256::from_big_endian(digest) <= *target
}
