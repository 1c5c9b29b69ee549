//! Lottery transitions.
//!
//! Both operations take the round as an explicit `&mut LotteryState` and
//! either apply every change or none: all checks run before the first write,
//! and a failed payout restores the value as it was on entry.
//!
//! ## Payout ordering
//! `pick_winner` closes the round (winner recorded, balance zeroed, phase
//! `Closed`) BEFORE calling [`Payout::transfer`]. The transfer is the only
//! point where control leaves the engine, so anything it observes, including
//! a nested `enter` or `pick_winner`, sees a closed, empty round.

use soroban_sdk::Address;

use crate::error::Error;
use crate::state::{LotteryConfig, LotteryState, Phase};

/// Moves the prize to the winner's external account.
///
/// `state` is the round as already closed. An implementation may persist it
/// before moving funds.
pub trait Payout {
    fn transfer(&mut self, state: &LotteryState, winner: &Address, amount: i128)
        -> Result<(), Error>;
}

/// Outcome of a successful draw.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Draw {
    pub index: u32,
    pub winner: Address,
    pub amount: i128,
}

/// Accept one entry of `stake` from `participant` at ledger time `now`.
pub fn enter(
    config: &LotteryConfig,
    state: &mut LotteryState,
    participant: &Address,
    stake: i128,
    now: u64,
) -> Result<(), Error> {
    if state.phase != Phase::Open || !state.window(config).is_open(now) {
        return Err(Error::LotteryClosed);
    }
    if stake < config.min_entry_fee {
        return Err(Error::InsufficientEntryFee);
    }
    if state.entry_count() >= config.max_participants {
        return Err(Error::LotteryFull);
    }

    state.record_entry(participant, stake)
}

/// Close the round and pay the whole pool to the participant at
/// `seed % entry_count`.
///
/// The seed comes from the caller's environment. Whoever can influence it can
/// influence the outcome; this function adds no fairness of its own.
pub fn pick_winner<P: Payout>(
    config: &LotteryConfig,
    state: &mut LotteryState,
    caller: &Address,
    now: u64,
    seed: u64,
    payout: &mut P,
) -> Result<Draw, Error> {
    if caller != &config.owner {
        return Err(Error::Unauthorized);
    }
    if state.is_closed() {
        return Err(Error::LotteryClosed);
    }
    if state.window(config).is_open(now) {
        return Err(Error::LotteryStillOpen);
    }

    let count = state.entry_count();
    if count == 0 {
        return Err(Error::NoParticipants);
    }

    // `select_index` keeps the index below `count`, so the lookup cannot miss.
    let index = select_index(seed, count);
    let winner = state
        .participants
        .get(index)
        .ok_or(Error::IndexOutOfRange)?;

    let before = state.clone();
    let amount = state.close(winner.clone());

    if payout.transfer(state, &winner, amount).is_err() {
        *state = before;
        return Err(Error::PayoutFailed);
    }

    Ok(Draw { index, winner, amount })
}

/// Reduce `seed` into `[0, count)`. `count` must be non-zero.
pub fn select_index(seed: u64, count: u32) -> u32 {
    (seed % count as u64) as u32
}
