//! Weights for pallet-guarded-token.
//!
//! Hand-set placeholders until `benchmarking.rs` is run on reference hardware.
//! Storage costs follow the reads/writes each call performs.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::weights::{constants::RocksDbWeight, Weight};

pub trait WeightInfo {
    fn transfer() -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn burn() -> Weight;
    fn burn_from() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn blacklist() -> Weight;
    fn unblacklist() -> Weight;
    fn transfer_ownership() -> Weight;
    fn renounce_ownership() -> Weight;
}

impl WeightInfo for () {
    // Reads: Paused, Blacklist x2, Balances x2. Writes: Balances x2.
    fn transfer() -> Weight {
        Weight::from_parts(20_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(5))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(25_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(6))
            .saturating_add(RocksDbWeight::get().writes(3))
    }
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn burn() -> Weight {
        Weight::from_parts(18_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
    fn burn_from() -> Weight {
        Weight::from_parts(24_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(6))
            .saturating_add(RocksDbWeight::get().writes(3))
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
    fn blacklist() -> Weight {
        Weight::from_parts(11_000_000, 3_509)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn unblacklist() -> Weight {
        Weight::from_parts(11_000_000, 3_509)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(10_000_000, 3_509)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn renounce_ownership() -> Weight {
        Weight::from_parts(9_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
}
