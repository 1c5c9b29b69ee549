use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized   = 1,
    NotInitialized       = 2,
    /// `min_entry_fee <= 0` or `max_participants == 0` at init.
    InvalidConfig        = 3,
    Overflow             = 4,
    /// Stake attached to `enter` is below `min_entry_fee`.
    InsufficientEntryFee = 5,
    /// Roster already holds `max_participants` entries.
    LotteryFull          = 6,
    /// The round is closed, or its entry window has elapsed.
    LotteryClosed        = 7,
    /// `pick_winner` was called before the entry window elapsed.
    LotteryStillOpen     = 8,
    NoParticipants       = 9,
    /// Caller of an owner-only operation is not the owner.
    Unauthorized         = 10,
    /// The prize transfer to the winner failed; nothing was committed.
    PayoutFailed         = 11,
    IndexOutOfRange      = 12,
}
