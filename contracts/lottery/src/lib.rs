//! Basic Lottery Contract
//!
//! A single-round, fee-gated lottery. Participants pay at least
//! `min_entry_fee` of a SEP-41 token to join a roster of at most
//! `max_participants` entries while the entry window is open. Once the window
//! has elapsed the owner draws one entry, and that participant receives the
//! whole pool.
//!
//! ## Round Flow
//! 1. Owner calls `init` → config stored, round opens at the current ledger
//!    timestamp for `duration` seconds.
//! 2. Participants call `enter` → stake transferred in, entry appended.
//!    Entries are refused once the window has elapsed, even before the draw.
//! 3. Owner calls `pick_winner` after the window → winner drawn, round closed,
//!    pool transferred to the winner.
//!
//! ## Selection
//! The drawn index is `seed % entry_count`, with `seed` derived from the
//! ledger timestamp, ledger sequence and entry count (see
//! [`shared::ledger_seed`]). Validators and the owner, who chooses when to
//! call `pick_winner`, can predict or steer it. The draw is operator-triggered
//! and environment-seeded; it is not a source of verifiable randomness.
//!
//! ## Storage Strategy
//! - `instance()`: `Config`. Written once by `init`.
//! - `persistent()`: `State`, the whole round as one value, TTL bumped on
//!   every write.
//!
//! ## Invariants
//! - `balance` equals the sum of accepted stakes while the round is open, and
//!   is zero once it is closed.
//! - The round closes once and never reopens.
//! - The closed round is committed to storage before the prize transfer is
//!   invoked. If the transfer fails the call returns `PayoutFailed` and the
//!   host discards every write made during the invocation.
#![no_std]
#![allow(unexpected_cfgs)]

use soroban_sdk::{contract, contractimpl, log, token::TokenClient, Address, Env, Vec};

pub mod engine;
pub mod error;
pub mod events;
pub mod state;

pub use error::Error;
pub use state::{DataKey, LotteryConfig, LotteryState, Phase};

use engine::Payout;
use events::{Initialized, ParticipantEntered, WinnerPicked};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Persistent storage TTL in ledgers (~30 days at 5 s/ledger).
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

#[contract]
pub struct BasicLottery;

#[contractimpl]
impl BasicLottery {
    // -----------------------------------------------------------------------
    // init
    // -----------------------------------------------------------------------

    /// Open the round. May only be called once.
    ///
    /// `owner` becomes the only address allowed to draw the winner and cannot
    /// be changed afterwards. `token` is the SEP-41 contract in which stakes
    /// are paid and the prize is transferred.
    pub fn init(
        env: Env,
        owner: Address,
        token: Address,
        min_entry_fee: i128,
        max_participants: u32,
        duration: u64,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        let config = LotteryConfig {
            owner: owner.clone(),
            token: token.clone(),
            min_entry_fee,
            max_participants,
            duration,
        };
        config.validate()?;

        let state = LotteryState::open(&env, env.ledger().timestamp());
        let closes_at = state.window(&config).closes_at();

        env.storage().instance().set(&DataKey::Config, &config);
        save_state(&env, &state);

        Initialized {
            owner,
            token,
            min_entry_fee,
            max_participants,
            closes_at,
        }
        .publish(&env);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // enter
    // -----------------------------------------------------------------------

    /// Join the round with `stake` tokens, transferred from `participant`
    /// into the contract.
    ///
    /// Any stake at or above `min_entry_fee` is pooled in full. The same
    /// participant may enter several times; each call is a separate entry.
    pub fn enter(env: Env, participant: Address, stake: i128) -> Result<(), Error> {
        let config = load_config(&env)?;
        participant.require_auth();

        let mut state = load_state(&env)?;
        engine::enter(
            &config,
            &mut state,
            &participant,
            stake,
            env.ledger().timestamp(),
        )?;

        TokenClient::new(&env, &config.token).transfer(
            &participant,
            env.current_contract_address(),
            &stake,
        );
        save_state(&env, &state);

        ParticipantEntered {
            participant,
            amount: stake,
        }
        .publish(&env);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // pick_winner
    // -----------------------------------------------------------------------

    /// Draw the winner and transfer the whole pool to them. Owner only.
    ///
    /// Fails with `LotteryStillOpen` until the entry window has elapsed and
    /// with `LotteryClosed` once a winner has been drawn. Returns the winner.
    pub fn pick_winner(env: Env, caller: Address) -> Result<Address, Error> {
        let config = load_config(&env)?;
        caller.require_auth();

        let mut state = load_state(&env)?;
        let seed = shared::ledger_seed(&env, state.entry_count());
        let mut payout = TokenPayout {
            env: &env,
            token: &config.token,
        };

        let draw = engine::pick_winner(
            &config,
            &mut state,
            &caller,
            env.ledger().timestamp(),
            seed,
            &mut payout,
        )?;

        WinnerPicked {
            winner: draw.winner.clone(),
            amount: draw.amount,
        }
        .publish(&env);

        Ok(draw.winner)
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn get_participants(env: Env) -> Result<Vec<Address>, Error> {
        Ok(load_state(&env)?.participants)
    }

    /// Entry at `index`, in entry order.
    pub fn get_participant(env: Env, index: u32) -> Result<Address, Error> {
        load_state(&env)?
            .participants
            .get(index)
            .ok_or(Error::IndexOutOfRange)
    }

    /// Pooled stakes held for the current round. Zero once closed.
    pub fn get_balance(env: Env) -> Result<i128, Error> {
        Ok(load_state(&env)?.balance)
    }

    pub fn min_entry_fee(env: Env) -> Result<i128, Error> {
        Ok(load_config(&env)?.min_entry_fee)
    }

    pub fn max_participants(env: Env) -> Result<u32, Error> {
        Ok(load_config(&env)?.max_participants)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        Ok(load_config(&env)?.owner)
    }

    pub fn get_config(env: Env) -> Result<LotteryConfig, Error> {
        load_config(&env)
    }

    /// Point-in-time snapshot of the whole round.
    pub fn get_state(env: Env) -> Result<LotteryState, Error> {
        load_state(&env)
    }

    pub fn get_phase(env: Env) -> Result<Phase, Error> {
        Ok(load_state(&env)?.phase)
    }

    pub fn get_winner(env: Env) -> Result<Option<Address>, Error> {
        Ok(load_state(&env)?.winner)
    }

    pub fn remaining_capacity(env: Env) -> Result<u32, Error> {
        let config = load_config(&env)?;
        Ok(load_state(&env)?.remaining_capacity(&config))
    }

    /// Seconds until entries stop being accepted; zero once the window has
    /// elapsed.
    pub fn time_until_close(env: Env) -> Result<u64, Error> {
        let config = load_config(&env)?;
        let now = env.ledger().timestamp();
        Ok(load_state(&env)?.time_until_close(&config, now))
    }
}

// ---------------------------------------------------------------------------
// Payout
// ---------------------------------------------------------------------------

/// Pays the prize out of the contract's token balance.
struct TokenPayout<'a> {
    env: &'a Env,
    token: &'a Address,
}

impl Payout for TokenPayout<'_> {
    fn transfer(
        &mut self,
        state: &LotteryState,
        winner: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        // Commit the closed, emptied round before any funds move.
        save_state(self.env, state);

        let from = self.env.current_contract_address();
        match TokenClient::new(self.env, self.token).try_transfer(&from, winner, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "prize transfer of {} rejected", amount);
                Err(Error::PayoutFailed)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn load_config(env: &Env) -> Result<LotteryConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

fn load_state(env: &Env) -> Result<LotteryState, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::State)
        .ok_or(Error::NotInitialized)
}

fn save_state(env: &Env, state: &LotteryState) {
    env.storage().persistent().set(&DataKey::State, state);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::State, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
