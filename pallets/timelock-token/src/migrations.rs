//! Storage migrations for pallet-timelock-token.
//!
//! A runtime upgrade swaps the token's code while its storage stays in place,
//! so every layout change must ship with a versioned migration here. Each
//! migration checks the on-chain `StorageVersion` first and runs exactly once.
//!
//! Wire migrations into the runtime's `Executive` type, in order:
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     (pallet_timelock_token::migrations::v1::MigrateToV1<Runtime>,),
//! >;
//! ```
//!
//! Run `try-runtime` against a fork of live state before enacting an upgrade;
//! `post_upgrade` re-checks the ledger invariants via `do_try_state`.

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Initialized, Owner, Pallet, LOG_TARGET};

/// Version 0 stored roles and metadata without the single-shot `Initialized`
/// flag. Left as is, a v0 token with an owner could be initialized a second
/// time and have its roles overwritten.
pub mod v1 {
    use super::*;

    /// Seals the initialization guard on tokens that already have an owner.
    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 1 {
                let seal = Owner::<T>::exists() && !Initialized::<T>::get();
                if seal {
                    Initialized::<T>::put(true);
                }
                StorageVersion::new(1).put::<Pallet<T>>();

                log::info!(
                    target: LOG_TARGET,
                    "Migrated storage v0 → v1, initialization guard sealed: {seal}"
                );

                // version, owner, flag reads; version (+ flag) writes
                T::DbWeight::get().reads_writes(3, if seal { 2 } else { 1 })
            } else {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );
                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: on-chain storage version is {:?}",
                on_chain_version
            );
            Ok((on_chain_version, Owner::<T>::exists()).encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let (pre_version, had_owner): (StorageVersion, bool) = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;
            let post_version = Pallet::<T>::on_chain_storage_version();

            if pre_version < 1 {
                ensure!(post_version >= 1, "Migration to v1 did not complete");
                if had_owner {
                    ensure!(Initialized::<T>::get(), "Owned token left without init guard");
                }
            }

            Pallet::<T>::do_try_state()
        }
    }
}
