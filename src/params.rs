//! Registry-wide constants
//!
//! Difficulty baselines and per-algorithm cost defaults. Coin configurations
//! may override the cost values; the difficulty constants are fixed by
//! convention across pools.

use std::collections::BTreeMap;

use primitive_types::U256;

/// Canonical difficulty-1 target for the double-SHA256 family:
/// `0x00000000ffff0000...0000`. Per-share targets are derived from it as
/// `diff1 / (difficulty * multiplier)`.
pub const DIFF1: U256 = U256([0, 0, 0, 0x0000_0000_ffff_0000]);

/// Maximum target for the Argon2d family, whose native output range sits
/// well below the generic 256-bit hash space: `0x0007ffff...ffff`.
pub const ARGON2D_MAX_TARGET: U256 = U256([
    u64::MAX,
    u64::MAX,
    u64::MAX,
    0x0007_ffff_ffff_ffff,
]);

/// Digest size shared by every registered algorithm
pub const DIGEST_SIZE: usize = 32;

/// Default scrypt cost factor N
pub const SCRYPT_DEFAULT_N: u32 = 1024;

/// Default scrypt-og cost factor N
pub const SCRYPT_OG_DEFAULT_N: u32 = 64;

/// Default scrypt block-mix factor r
pub const SCRYPT_DEFAULT_R: u32 = 1;

/// Default Argon2d memory cost in KiB (32 MiB)
pub const ARGON2D_MEMORY_KIB: u32 = 32 * 1024;

/// Default Argon2d pass count
pub const ARGON2D_PASSES: u32 = 1;

/// Default Argon2d lane count
pub const ARGON2D_LANES: u32 = 1;

/// Default scrypt-n unlock schedule: cost factor N mapped to the unix time
/// at which it activates. The highest unlocked N wins.
pub fn default_time_table() -> BTreeMap<u64, u64> {
    BTreeMap::from([
        (2048, 1_389_306_217),
        (4096, 1_456_415_081),
        (8192, 1_506_746_729),
        (16384, 1_557_078_377),
        (32768, 1_657_741_673),
        (65536, 1_859_068_265),
        (131072, 2_060_394_857),
        (262144, 1_722_307_603),
        (524288, 1_769_642_992),
    ])
}
