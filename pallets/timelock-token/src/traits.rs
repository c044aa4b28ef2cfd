//! Boundary trait for the token ledger.
//!
//! Other pallets and runtime glue should depend on [`TokenLedger`] rather than
//! on `Pallet<T>`, so the backing implementation can be swapped by a runtime
//! upgrade without touching its callers. The caller's identity is passed
//! explicitly because there is no dispatch origin at this boundary.

use frame_support::{dispatch::DispatchResult, storage::with_storage_layer};
use sp_runtime::DispatchError;

use crate::{
    Admin1, Admin2, AdminSeat, Allowances, Balances, Config, Frozen, MintRequest, Owner, Pallet,
    Paused, TotalMintHoldTransactions, TotalSupply,
};

pub trait TokenLedger<AccountId> {
    fn total_supply() -> u128;
    fn balance_of(who: &AccountId) -> u128;
    fn allowance(owner: &AccountId, spender: &AccountId) -> u128;
    fn owner() -> Option<AccountId>;
    fn admins() -> (Option<AccountId>, Option<AccountId>);
    fn is_frozen(who: &AccountId) -> bool;
    fn is_paused() -> bool;
    fn total_mint_hold_transactions() -> u32;
    fn hold_mint(index: u32) -> Option<MintRequest<AccountId>>;

    fn change_admin1(caller: &AccountId, new: Option<AccountId>) -> DispatchResult;
    fn change_admin2(caller: &AccountId, new: Option<AccountId>) -> DispatchResult;
    fn pause(caller: &AccountId) -> DispatchResult;
    fn unpause(caller: &AccountId) -> DispatchResult;
    fn freeze_account(caller: &AccountId, account: &AccountId) -> DispatchResult;
    fn unfreeze_account(caller: &AccountId, account: &AccountId) -> DispatchResult;
    fn mint(caller: &AccountId, to: &AccountId, amount: u128) -> DispatchResult;
    fn cancel_hold_mint(caller: &AccountId, index: u32) -> DispatchResult;
    /// Returns whether the request was credited.
    fn release_mint_at_index(index: u32) -> Result<bool, DispatchError>;
    /// Returns how many requests were credited.
    fn release_mint(n: u32) -> Result<u32, DispatchError>;
    fn transfer(caller: &AccountId, to: &AccountId, amount: u128) -> DispatchResult;
    fn transfer_from(
        caller: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: u128,
    ) -> DispatchResult;
    fn approve(caller: &AccountId, spender: &AccountId, amount: u128) -> DispatchResult;
    fn burn_from(caller: &AccountId, account: &AccountId, amount: u128) -> DispatchResult;
    fn reclaim_tokens(caller: &AccountId, account: &AccountId, amount: u128) -> DispatchResult;
}

// Writes run in their own storage layer: callers outside a dispatchable must
// not observe a half-applied failure.
impl<T: Config> TokenLedger<T::AccountId> for Pallet<T> {
    fn total_supply() -> u128 {
        TotalSupply::<T>::get()
    }

    fn balance_of(who: &T::AccountId) -> u128 {
        Balances::<T>::get(who)
    }

    fn allowance(owner: &T::AccountId, spender: &T::AccountId) -> u128 {
        Allowances::<T>::get(owner, spender)
    }

    fn owner() -> Option<T::AccountId> {
        Owner::<T>::get()
    }

    fn admins() -> (Option<T::AccountId>, Option<T::AccountId>) {
        (Admin1::<T>::get(), Admin2::<T>::get())
    }

    fn is_frozen(who: &T::AccountId) -> bool {
        Frozen::<T>::get(who)
    }

    fn is_paused() -> bool {
        Paused::<T>::get()
    }

    fn total_mint_hold_transactions() -> u32 {
        TotalMintHoldTransactions::<T>::get()
    }

    fn hold_mint(index: u32) -> Option<MintRequest<T::AccountId>> {
        crate::HoldMints::<T>::get(index)
    }

    fn change_admin1(caller: &T::AccountId, new: Option<T::AccountId>) -> DispatchResult {
        with_storage_layer(|| Self::do_change_admin(caller, AdminSeat::First, new))
    }

    fn change_admin2(caller: &T::AccountId, new: Option<T::AccountId>) -> DispatchResult {
        with_storage_layer(|| Self::do_change_admin(caller, AdminSeat::Second, new))
    }

    fn pause(caller: &T::AccountId) -> DispatchResult {
        with_storage_layer(|| Self::do_set_paused(caller, true))
    }

    fn unpause(caller: &T::AccountId) -> DispatchResult {
        with_storage_layer(|| Self::do_set_paused(caller, false))
    }

    fn freeze_account(caller: &T::AccountId, account: &T::AccountId) -> DispatchResult {
        with_storage_layer(|| Self::do_freeze(caller, account.clone()))
    }

    fn unfreeze_account(caller: &T::AccountId, account: &T::AccountId) -> DispatchResult {
        with_storage_layer(|| Self::do_unfreeze(caller, account.clone()))
    }

    fn mint(caller: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        with_storage_layer(|| Self::do_mint(caller, to.clone(), amount))
    }

    fn cancel_hold_mint(caller: &T::AccountId, index: u32) -> DispatchResult {
        with_storage_layer(|| Self::do_cancel_hold_mint(caller, index))
    }

    fn release_mint_at_index(index: u32) -> Result<bool, DispatchError> {
        with_storage_layer(|| Self::do_release_at(index))
    }

    fn release_mint(n: u32) -> Result<u32, DispatchError> {
        with_storage_layer(|| Self::do_release_sweep(n))
    }

    fn transfer(caller: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        with_storage_layer(|| Self::do_transfer(caller.clone(), to.clone(), amount))
    }

    fn transfer_from(
        caller: &T::AccountId,
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        with_storage_layer(|| Self::do_transfer_from(caller, from.clone(), to.clone(), amount))
    }

    fn approve(caller: &T::AccountId, spender: &T::AccountId, amount: u128) -> DispatchResult {
        with_storage_layer(|| Self::do_approve(caller.clone(), spender.clone(), amount))
    }

    fn burn_from(caller: &T::AccountId, account: &T::AccountId, amount: u128) -> DispatchResult {
        with_storage_layer(|| Self::do_burn_from(caller, account.clone(), amount))
    }

    fn reclaim_tokens(caller: &T::AccountId, account: &T::AccountId, amount: u128) -> DispatchResult {
        with_storage_layer(|| Self::do_reclaim(caller.clone(), account.clone(), amount))
    }
}
