//! Weights for pallet-timelock-token.
//!
//! The `()` implementation carries placeholder figures until the benchmarks in
//! `benchmarking.rs` are run against reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn initialize() -> Weight;
    fn change_admin() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn freeze_account() -> Weight;
    fn unfreeze_account() -> Weight;
    fn mint_instant() -> Weight;
    fn mint_hold() -> Weight;
    fn cancel_hold_mint() -> Weight;
    fn release_mint_at_index() -> Weight;
    fn release_mint(n: u32) -> Weight;
    fn transfer() -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn burn_from() -> Weight;
    fn reclaim_tokens() -> Weight;
    fn transfer_ownership() -> Weight;
}

/// Weights for a runtime that uses its own `frame_system::Config::DbWeight`.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn initialize() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 7))
    }
    fn change_admin() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(3, 1))
    }
    fn pause() -> Weight {
        Weight::from_parts(7_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(7_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn freeze_account() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(4, 1))
    }
    fn unfreeze_account() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(4, 1))
    }
    fn mint_instant() -> Weight {
        Weight::from_parts(14_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(5, 2))
    }
    fn mint_hold() -> Weight {
        Weight::from_parts(16_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(6, 2))
    }
    fn cancel_hold_mint() -> Weight {
        Weight::from_parts(13_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(3, 3))
    }
    fn release_mint_at_index() -> Weight {
        Weight::from_parts(18_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(5, 5))
    }
    fn release_mint(n: u32) -> Weight {
        Weight::from_parts(6_000_000, 0)
            .saturating_add(Weight::from_parts(18_000_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads((5_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes((5_u64).saturating_mul(n.into())))
    }
    fn transfer() -> Weight {
        Weight::from_parts(15_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(5, 2))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(19_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(6, 3))
    }
    fn approve() -> Weight {
        Weight::from_parts(8_000_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }
    fn burn_from() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
    fn reclaim_tokens() -> Weight {
        Weight::from_parts(14_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(4, 2))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(8_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn initialize() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 7))
    }
    fn change_admin() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
    fn pause() -> Weight {
        Weight::from_parts(7_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(7_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn freeze_account() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(4, 1))
    }
    fn unfreeze_account() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(4, 1))
    }
    fn mint_instant() -> Weight {
        Weight::from_parts(14_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(5, 2))
    }
    fn mint_hold() -> Weight {
        Weight::from_parts(16_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(6, 2))
    }
    fn cancel_hold_mint() -> Weight {
        Weight::from_parts(13_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 3))
    }
    fn release_mint_at_index() -> Weight {
        Weight::from_parts(18_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(5, 5))
    }
    fn release_mint(n: u32) -> Weight {
        Weight::from_parts(6_000_000, 0)
            .saturating_add(Weight::from_parts(18_000_000, 0).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads((5_u64).saturating_mul(n.into())))
            .saturating_add(RocksDbWeight::get().writes((5_u64).saturating_mul(n.into())))
    }
    fn transfer() -> Weight {
        Weight::from_parts(15_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(5, 2))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(19_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(6, 3))
    }
    fn approve() -> Weight {
        Weight::from_parts(8_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn burn_from() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn reclaim_tokens() -> Weight {
        Weight::from_parts(14_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(4, 2))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(8_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
}
