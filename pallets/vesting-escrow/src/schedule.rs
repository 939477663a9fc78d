//! Cliff-then-linear release curve.
//!
//! Everything here is a pure function of the grant and a clock reading, so the
//! phase is never stored and can never go stale.

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{helpers_128bit::multiply_by_rational_with_rounding, Rounding, RuntimeDebug};

const DAY: u64 = 24 * 60 * 60;

/// Default schedule constants, in seconds.
pub mod constants {
    use super::DAY;

    /// Nothing vests before this much time has passed since the start.
    pub const CLIFF_DURATION: u64 = 180 * DAY;
    /// Span of the linear phase that follows the cliff.
    pub const RELEASE_DURATION: u64 = 540 * DAY;
    /// Cliff plus linear phase.
    pub const TOTAL_LOCK: u64 = CLIFF_DURATION + RELEASE_DURATION;
}

/// Immutable parameters of the single grant held by the escrow.
#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct VestingGrant<AccountId> {
    pub beneficiary: AccountId,
    pub total_amount: u128,
    /// Unix seconds at creation.
    pub start: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum VestingPhase {
    Cliff,
    Linear,
    Released,
}

/// Durations of the two phases, in seconds.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub struct Curve {
    pub cliff: u64,
    pub release: u64,
}

impl Curve {
    pub fn cliff_end(&self, start: u64) -> u64 {
        start.saturating_add(self.cliff)
    }

    pub fn vesting_end(&self, start: u64) -> u64 {
        self.cliff_end(start).saturating_add(self.release)
    }

    pub fn phase(&self, start: u64, now: u64) -> VestingPhase {
        if now < self.cliff_end(start) {
            VestingPhase::Cliff
        } else if now < self.vesting_end(start) {
            VestingPhase::Linear
        } else {
            VestingPhase::Released
        }
    }

    /// Amount vested at `now`. Linear amounts round down; the dust is paid
    /// out once the curve reaches `Released`.
    pub fn vested(&self, total: u128, start: u64, now: u64) -> u128 {
        match self.phase(start, now) {
            VestingPhase::Cliff => 0,
            VestingPhase::Released => total,
            VestingPhase::Linear => {
                let elapsed = now - self.cliff_end(start);
                // `elapsed < release` here, so the result is below `total`.
                multiply_by_rational_with_rounding(
                    total,
                    elapsed as u128,
                    self.release as u128,
                    Rounding::Down,
                )
                .unwrap_or(0)
            },
        }
    }
}
