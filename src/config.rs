//! Per-coin configuration surface
//!
//! All fields are optional with documented defaults; a coin definition only
//! sets the knobs its algorithm reads. Field names follow the camelCase keys
//! used in pool coin files, so a coin's `algorithm` options block
//! deserializes directly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Algorithm-specific tunables supplied per coin definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoinOptions {
    /// scrypt-family cost factor N (must be a power of two)
    pub n_value: Option<u32>,

    /// scrypt-family block-mix factor r
    pub r_value: Option<u32>,

    /// scrypt-n unlock schedule: cost factor N mapped to the unix time at
    /// which it activates
    pub time_table: Option<BTreeMap<u64, u64>>,

    /// odo shape-change interval in seconds; the effective key changes once
    /// per interval
    pub shapechange_interval: Option<u32>,

    /// keccak: hash twice with the share timestamp appended to the input
    pub normal_hashing: bool,

    /// Argon2d memory cost in KiB
    pub memory_kib: Option<u32>,

    /// Argon2d pass count
    pub passes: Option<u32>,

    /// Argon2d lane count
    pub lanes: Option<u32>,
}
