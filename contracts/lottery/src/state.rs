//! Lottery data model.
//!
//! `LotteryConfig` is written once by `init` and never changes. `LotteryState`
//! is the single mutable value of a round; the contract loads it, hands it to
//! the engine and commits it back. Nothing else writes it.

use shared::Window;
use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::error::Error;

/// Storage keys.
///
/// Instance: `Config` (fixed after init).
/// Persistent: `State`, bumped on every write.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    State,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LotteryConfig {
    /// The only address allowed to call `pick_winner`.
    pub owner: Address,
    /// SEP-41 token used for stakes and the prize.
    pub token: Address,
    pub min_entry_fee: i128,
    pub max_participants: u32,
    /// Window length in seconds, counted from `LotteryState::created_at`.
    pub duration: u64,
}

impl LotteryConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.min_entry_fee <= 0 || self.max_participants == 0 {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    Open = 0,
    Closed = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LotteryState {
    /// One slot per accepted entry, in entry order. Duplicates allowed.
    pub participants: Vec<Address>,
    /// Sum of all accepted stakes while Open; zero once Closed.
    pub balance: i128,
    pub created_at: u64,
    pub phase: Phase,
    pub winner: Option<Address>,
}

impl LotteryState {
    pub fn open(env: &Env, created_at: u64) -> Self {
        Self {
            participants: Vec::new(env),
            balance: 0,
            created_at,
            phase: Phase::Open,
            winner: None,
        }
    }

    pub fn entry_count(&self) -> u32 {
        self.participants.len()
    }

    pub fn is_closed(&self) -> bool {
        self.phase == Phase::Closed
    }

    pub fn window(&self, config: &LotteryConfig) -> Window {
        Window::new(self.created_at, config.duration)
    }

    pub fn remaining_capacity(&self, config: &LotteryConfig) -> u32 {
        config.max_participants.saturating_sub(self.entry_count())
    }

    pub fn time_until_close(&self, config: &LotteryConfig, now: u64) -> u64 {
        self.window(config).remaining(now)
    }

    /// Append one entry. The balance is computed before anything is written,
    /// so an overflow leaves the state untouched.
    pub(crate) fn record_entry(&mut self, participant: &Address, stake: i128) -> Result<(), Error> {
        let balance = self.balance.checked_add(stake).ok_or(Error::Overflow)?;
        self.participants.push_back(participant.clone());
        self.balance = balance;
        Ok(())
    }

    /// Record the winner, empty the pool and close the round. Returns the
    /// prize, i.e. the balance held just before closing.
    pub(crate) fn close(&mut self, winner: Address) -> i128 {
        let prize = self.balance;
        self.winner = Some(winner);
        self.balance = 0;
        self.phase = Phase::Closed;
        prize
    }
}
