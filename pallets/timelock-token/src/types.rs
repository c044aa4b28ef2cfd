use codec::{Decode, Encode, MaxEncodedLen};
use sp_runtime::RuntimeDebug;
use scale_info::TypeInfo;

/// A queued admin mint, credited once `unlock_time` has passed.
///
/// The request's position in the queue is its storage key, not a field: a
/// removal moves the last request into the freed slot, so positions only stay
/// meaningful until the next release or cancel.
#[derive(Clone, Encode, Decode, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct MintRequest<AccountId> {
    pub recipient: AccountId,
    pub amount: u128,
    /// Unix time in seconds.
    pub unlock_time: u64,
}

impl<AccountId> MintRequest<AccountId> {
    pub fn is_due(&self, now: u64) -> bool {
        now >= self.unlock_time
    }
}

/// What a caller is allowed to do, resolved once per call.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum Role {
    /// Instant mint, pause, cancel, burn, reclaim, admin rotation.
    Owner,
    /// Admin1 or Admin2: queued mints and freezes.
    Admin,
    Other,
}

/// One of the two admin seats.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum AdminSeat {
    First,
    Second,
}

impl AdminSeat {
    pub fn other(self) -> Self {
        match self {
            AdminSeat::First => AdminSeat::Second,
            AdminSeat::Second => AdminSeat::First,
        }
    }
}
