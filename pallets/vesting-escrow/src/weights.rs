//! Weights for pallet-vesting-escrow.
//!
//! Hand-set placeholders until `benchmarking.rs` is run on reference hardware.
//! `release` and `emergency_withdraw` include the nested ledger transfer.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::weights::{constants::RocksDbWeight, Weight};

pub trait WeightInfo {
    fn create_schedule() -> Weight;
    fn release() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn emergency_withdraw() -> Weight;
    fn transfer_ownership() -> Weight;
    fn renounce_ownership() -> Weight;
}

impl WeightInfo for () {
    fn create_schedule() -> Weight {
        Weight::from_parts(15_000_000, 1_526)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
    // Reads: CallLock, Grant, Paused, Released, Timestamp + ledger transfer.
    // Writes: CallLock x2, Released + ledger transfer.
    fn release() -> Weight {
        Weight::from_parts(45_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(10))
            .saturating_add(RocksDbWeight::get().writes(5))
    }
    fn pause() -> Weight {
        Weight::from_parts(9_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(9_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn emergency_withdraw() -> Weight {
        Weight::from_parts(40_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(8))
            .saturating_add(RocksDbWeight::get().writes(4))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(10_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn renounce_ownership() -> Weight {
        Weight::from_parts(9_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
}
