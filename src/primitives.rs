//! Bindings to the external hash primitives
//!
//! One thin wrapper per algorithm family, each with the single contract the
//! registry relies on: bytes in, 32-byte digest out, deterministic, no
//! shared state between calls. Cost parameters are validated here once, at
//! factory-construction time, so the per-share wrappers stay infallible.

use blake2::Blake2s256;
use digest::Digest;
use digest::consts::U32;
use groestl::Groestl256;
use sha2::Sha256;
use sha3::Keccak256;
use skein::Skein512;

use crate::error::AlgoError;
use crate::params::DIGEST_SIZE;

/// Digest produced by every registered algorithm
pub type Digest32 = [u8; DIGEST_SIZE];

/// Double SHA-256, the Bitcoin block-header hash
pub fn sha256d(data: &[u8]) -> Digest32 {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// Single Keccak-256 pass
pub fn keccak256(data: &[u8]) -> Digest32 {
    Keccak256::digest(data).into()
}

/// Grøstl-256
pub fn groestl256(data: &[u8]) -> Digest32 {
    Groestl256::digest(data).into()
}

/// Skein-512 with a 256-bit output
pub fn skein512(data: &[u8]) -> Digest32 {
    Skein512::<U32>::digest(data).into()
}

/// BLAKE2s-256
pub fn blake2s(data: &[u8]) -> Digest32 {
    Blake2s256::digest(data).into()
}

/// BLAKE3
pub fn blake3_256(data: &[u8]) -> Digest32 {
    blake3::hash(data).into()
}

/// Keyed BLAKE3; the shape-change key occupies the key prefix
pub fn blake3_keyed(data: &[u8], key: u32) -> Digest32 {
    let mut key_bytes = [0u8; 32];
    key_bytes[..4].copy_from_slice(&key.to_le_bytes());
    blake3::keyed_hash(&key_bytes, data).into()
}

/// Build scrypt parameters from a cost-factor exponent, converting parameter
/// errors into configuration errors for the named algorithm.
pub fn scrypt_params(
    algo: &'static str,
    log_n: u8,
    r: u32,
) -> Result<scrypt::Params, AlgoError> {
    scrypt::Params::new(log_n, r, 1, DIGEST_SIZE).map_err(|e| {
        AlgoError::InvalidAlgorithmConfig {
            algo,
            reason: e.to_string(),
        }
    })
}

/// scrypt with the block header doubling as its own salt
pub fn scrypt_hash(data: &[u8], params: &scrypt::Params) -> Digest32 {
    let mut out = [0u8; DIGEST_SIZE];
    // 32-byte output is always valid once params have been checked
    scrypt::scrypt(data, data, params, &mut out).expect("digest-sized scrypt output");
    out
}

/// Build Argon2d parameters, converting parameter errors into configuration
/// errors.
pub fn argon2d_params(
    memory_kib: u32,
    passes: u32,
    lanes: u32,
) -> Result<argon2::Params, AlgoError> {
    // The primitive needs at least 8 KiB of memory per lane
    if memory_kib < lanes.saturating_mul(8) {
        return Err(AlgoError::InvalidAlgorithmConfig {
            algo: "argon2d",
            reason: format!("memory cost {memory_kib} KiB below 8 KiB per lane ({lanes} lanes)"),
        });
    }
    argon2::Params::new(memory_kib, passes, lanes, Some(DIGEST_SIZE)).map_err(|e| {
        AlgoError::InvalidAlgorithmConfig {
            algo: "argon2d",
            reason: e.to_string(),
        }
    })
}

/// Argon2d over the block header. The salt is the header's SHA-256 so inputs
/// of any length are accepted.
pub fn argon2d_hash(data: &[u8], params: &argon2::Params) -> Digest32 {
    let salt: Digest32 = Sha256::digest(data).into();
    let ctx = argon2::Argon2::new(
        argon2::Algorithm::Argon2d,
        argon2::Version::V0x13,
        params.clone(),
    );
    let mut out = [0u8; DIGEST_SIZE];
    ctx.hash_password_into(data, &salt, &mut out)
        .expect("parameters validated at construction");
    out
}
