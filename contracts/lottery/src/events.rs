use soroban_sdk::{contractevent, Address};

#[contractevent]
pub struct Initialized {
    #[topic]
    pub owner: Address,
    pub token: Address,
    pub min_entry_fee: i128,
    pub max_participants: u32,
    pub closes_at: u64,
}

#[contractevent]
pub struct ParticipantEntered {
    #[topic]
    pub participant: Address,
    pub amount: i128,
}

/// `amount` is the full pool transferred to `winner`.
#[contractevent]
pub struct WinnerPicked {
    #[topic]
    pub winner: Address,
    pub amount: i128,
}
