//! Shared utilities for the lottery contracts.
//!
//! - [`Window`]: the half-open entry window `[opened_at, opened_at + duration)`
//!   evaluated against the ledger timestamp.
//! - [`ledger_seed`]: pseudo-entropy derived from ledger material. It is
//!   predictable by whoever controls ledger close time, so it must not be
//!   used where unbiased randomness is required.
#![no_std]
#![allow(unexpected_cfgs)]

use soroban_sdk::{Bytes, BytesN, Env};

/// A time window measured in ledger seconds.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Window {
    pub opened_at: u64,
    pub duration: u64,
}

impl Window {
    pub fn new(opened_at: u64, duration: u64) -> Self {
        Self { opened_at, duration }
    }

    /// First timestamp outside the window. Saturates at `u64::MAX`.
    pub fn closes_at(&self) -> u64 {
        self.opened_at.saturating_add(self.duration)
    }

    pub fn is_open(&self, now: u64) -> bool {
        now < self.closes_at()
    }

    /// Seconds left until the window closes, zero once it has.
    pub fn remaining(&self, now: u64) -> u64 {
        self.closes_at().saturating_sub(now)
    }
}

/// Derive a 64-bit seed from the current ledger and a caller-supplied salt.
///
/// Preimage (16 bytes): timestamp (8 BE) || sequence (4 BE) || salt (4 BE).
/// The seed is the first 8 bytes of its SHA-256 digest, read big-endian.
pub fn ledger_seed(env: &Env, salt: u32) -> u64 {
    let mut preimage = [0u8; 16];
    preimage[..8].copy_from_slice(&env.ledger().timestamp().to_be_bytes());
    preimage[8..12].copy_from_slice(&env.ledger().sequence().to_be_bytes());
    preimage[12..].copy_from_slice(&salt.to_be_bytes());

    let digest: BytesN<32> = env.crypto().sha256(&Bytes::from_slice(env, &preimage)).into();
    let arr = digest.to_array();
    u64::from_be_bytes([arr[0], arr[1], arr[2], arr[3], arr[4], arr[5], arr[6], arr[7]])
}
