#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are kept for the read surface until callers move to the storage types directly
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # Timelock Token Pallet
//!
//! A pausable, freezable fungible token with two tiers of minting authority:
//!
//! - the **owner** mints instantly;
//! - **admin1** and **admin2** may only queue a hold-mint that becomes
//!   releasable `HoldDuration` seconds later.
//!
//! Queued mints live in a dense queue keyed `0..TotalMintHoldTransactions`.
//! Releasing or cancelling a request moves the last request into the freed
//! position, so a position is not a permanent request id.
//!
//! Every call is dispatched transactionally: a failing call leaves balances,
//! allowances, the frozen set, the queue and the pause flag untouched.

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{EnsureOrigin, UnixTime},
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;
pub use traits::TokenLedger;
pub use types::{AdminSeat, MintRequest, Role};
pub use weights::WeightInfo;

pub mod migrations;
pub mod traits;
pub mod types;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "runtime::timelock-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Clock used to stamp and check hold-mint unlock times.
        type Time: UnixTime;

        /// Seconds an admin mint waits before it can be released.
        #[pallet::constant]
        type HoldDuration: Get<u64>;

        /// Maximum number of pending hold-mints.
        #[pallet::constant]
        type MaxHoldMints: Get<u32>;

        /// Origin allowed to run the one-time `initialize` call.
        type InitializeOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "EINR")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Set by the first successful `initialize`; never cleared.
    #[pallet::storage]
    #[pallet::getter(fn is_initialized)]
    pub type Initialized<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// First admin seat. `None` means the seat was renounced.
    #[pallet::storage]
    #[pallet::getter(fn admin1)]
    pub type Admin1<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Second admin seat. Never holds the same account as `Admin1`.
    #[pallet::storage]
    #[pallet::getter(fn admin2)]
    pub type Admin2<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Total token supply, always the sum of `Balances`.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending allowances, keyed by (owner, spender).
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Frozen accounts (cannot send, receive, or be minted to)
    #[pallet::storage]
    #[pallet::getter(fn is_frozen)]
    pub type Frozen<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Pending hold-mints. Keys are always exactly `0..TotalMintHoldTransactions`.
    #[pallet::storage]
    #[pallet::getter(fn hold_mint)]
    pub type HoldMints<T: Config> =
        StorageMap<_, Twox64Concat, u32, MintRequest<T::AccountId>, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn total_mint_hold_transactions)]
    pub type TotalMintHoldTransactions<T> = StorageValue<_, u32, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Token metadata and roles were set
        Initialized { owner: T::AccountId },
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Spender allowance set by an account
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Owner minted tokens instantly
        Minted { to: T::AccountId, amount: u128 },
        /// Admin queued a mint at `index`, releasable from `unlock_time`
        HoldMintQueued { index: u32, to: T::AccountId, amount: u128, unlock_time: u64 },
        /// A due hold-mint was credited and left the queue
        HoldMintReleased { index: u32, to: T::AccountId, amount: u128 },
        /// Owner dropped a hold-mint without crediting it
        HoldMintCanceled { index: u32, to: T::AccountId, amount: u128 },
        Burned { from: T::AccountId, amount: u128 },
        /// Owner swept tokens out of an account
        Reclaimed { from: T::AccountId, to: T::AccountId, amount: u128 },
        Frozen { account: T::AccountId },
        Unfrozen { account: T::AccountId },
        Paused,
        Unpaused,
        Admin1Changed { old: Option<T::AccountId>, new: Option<T::AccountId> },
        Admin2Changed { old: Option<T::AccountId>, new: Option<T::AccountId> },
        OwnershipTransferred { previous: Option<T::AccountId>, new: Option<T::AccountId> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the owner
        NotOwner,
        /// Caller is neither the owner nor an admin
        NotOwnerOrAdmin,
        /// The account already holds the other admin seat
        AdminAlreadyAssigned,
        TokenPaused,
        AccountFrozen,
        AlreadyFrozen,
        NotFrozen,
        ZeroAmount,
        InsufficientBalance,
        InsufficientAllowance,
        Overflow,
        /// No pending hold-mint at this position
        IndexOutOfBounds,
        /// The hold-mint queue is at `MaxHoldMints`
        TooManyHoldMints,
        AlreadyInitialized,
        NameTooLong,
        SymbolTooLong,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Set token metadata and roles. Succeeds at most once.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::initialize())]
        pub fn initialize(
            origin: OriginFor<T>,
            name: Vec<u8>,
            symbol: Vec<u8>,
            decimals: u8,
            owner: T::AccountId,
            admin1: Option<T::AccountId>,
            admin2: Option<T::AccountId>,
        ) -> DispatchResult {
            T::InitializeOrigin::ensure_origin(origin)?;
            Self::do_initialize(name, symbol, decimals, owner, admin1, admin2)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::change_admin())]
        pub fn change_admin1(origin: OriginFor<T>, new: Option<T::AccountId>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_change_admin(&who, AdminSeat::First, new)
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::change_admin())]
        pub fn change_admin2(origin: OriginFor<T>, new: Option<T::AccountId>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_change_admin(&who, AdminSeat::Second, new)
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_set_paused(&who, true)
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_set_paused(&who, false)
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::freeze_account())]
        pub fn freeze_account(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_freeze(&who, account)
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::unfreeze_account())]
        pub fn unfreeze_account(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_unfreeze(&who, account)
        }

        /// Owner mints instantly; an admin queues a hold-mint.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::mint_instant().max(T::WeightInfo::mint_hold()))]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_mint(&who, to, amount)
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::cancel_hold_mint())]
        pub fn cancel_hold_mint(origin: OriginFor<T>, index: u32) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_cancel_hold_mint(&who, index)
        }

        /// Credit the hold-mint at `index` if it is due. A request that is not
        /// yet due, or whose recipient is frozen, is left in place.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::release_mint_at_index())]
        pub fn release_mint_at_index(origin: OriginFor<T>, index: u32) -> DispatchResult {
            ensure_signed(origin)?;
            Self::do_release_at(index).map(|_| ())
        }

        /// Attempt a release at positions `0..n`, in order. Each visited
        /// position must be live when it is reached or the whole call fails.
        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::release_mint(*n))]
        pub fn release_mint(origin: OriginFor<T>, n: u32) -> DispatchResult {
            ensure_signed(origin)?;
            Self::do_release_sweep(n).map(|_| ())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(sender, to, amount)
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::do_transfer_from(&spender, from, to, amount)
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_approve(owner, spender, amount)
        }

        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::burn_from())]
        pub fn burn_from(origin: OriginFor<T>, account: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_burn_from(&who, account, amount)
        }

        /// Move `amount` from `account` to the owner without an allowance.
        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::reclaim_tokens())]
        pub fn reclaim_tokens(
            origin: OriginFor<T>,
            account: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_reclaim(who, account, amount)
        }

        #[pallet::call_index(16)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_set_owner(&who, Some(new_owner))
        }

        /// Leave the token without an owner. Owner-only calls become unreachable.
        #[pallet::call_index(17)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn renounce_ownership(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_set_owner(&who, None)
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Initializes the token when set; `initialize` can then never be called.
        pub owner: Option<T::AccountId>,
        pub admin1: Option<T::AccountId>,
        pub admin2: Option<T::AccountId>,
        /// Initial token mints (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(ref owner) = self.owner {
                Pallet::<T>::do_initialize(
                    self.token_name.clone(),
                    self.token_symbol.clone(),
                    self.decimals,
                    owner.clone(),
                    self.admin1.clone(),
                    self.admin2.clone(),
                )
                .expect("Invalid token genesis config");
            }

            for (account, amount) in &self.initial_balances {
                Pallet::<T>::credit(account, *amount).expect("Genesis balances overflow u128");
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Resolve what `who` may do. The owner seat wins over an admin seat.
    pub fn role_of(who: &T::AccountId) -> Role {
        if Owner::<T>::get().as_ref() == Some(who) {
            Role::Owner
        } else if Self::is_admin(who) {
            Role::Admin
        } else {
            Role::Other
        }
    }

    pub fn is_owner(who: &T::AccountId) -> bool {
        Owner::<T>::get().as_ref() == Some(who)
    }

    pub fn is_admin(who: &T::AccountId) -> bool {
        Admin1::<T>::get().as_ref() == Some(who) || Admin2::<T>::get().as_ref() == Some(who)
    }

    pub fn is_owner_or_admin(who: &T::AccountId) -> bool {
        Self::role_of(who) != Role::Other
    }

    fn ensure_owner(who: &T::AccountId) -> DispatchResult {
        ensure!(Self::is_owner(who), Error::<T>::NotOwner);
        Ok(())
    }

    fn ensure_owner_or_admin(who: &T::AccountId) -> Result<Role, DispatchError> {
        match Self::role_of(who) {
            Role::Other => Err(Error::<T>::NotOwnerOrAdmin.into()),
            role => Ok(role),
        }
    }

    fn ensure_not_paused() -> DispatchResult {
        ensure!(!Paused::<T>::get(), Error::<T>::TokenPaused);
        Ok(())
    }

    fn ensure_movable(from: &T::AccountId, to: &T::AccountId) -> DispatchResult {
        ensure!(!Frozen::<T>::get(from), Error::<T>::AccountFrozen);
        ensure!(!Frozen::<T>::get(to), Error::<T>::AccountFrozen);
        Ok(())
    }

    fn now() -> u64 {
        T::Time::now().as_secs()
    }

    pub(crate) fn do_initialize(
        name: Vec<u8>,
        symbol: Vec<u8>,
        decimals: u8,
        owner: T::AccountId,
        admin1: Option<T::AccountId>,
        admin2: Option<T::AccountId>,
    ) -> DispatchResult {
        ensure!(!Initialized::<T>::get(), Error::<T>::AlreadyInitialized);
        let name: BoundedVec<u8, ConstU32<64>> =
            name.try_into().map_err(|_| Error::<T>::NameTooLong)?;
        let symbol: BoundedVec<u8, ConstU32<16>> =
            symbol.try_into().map_err(|_| Error::<T>::SymbolTooLong)?;
        if let (Some(a), Some(b)) = (&admin1, &admin2) {
            ensure!(a != b, Error::<T>::AdminAlreadyAssigned);
        }

        TokenName::<T>::put(name);
        TokenSymbol::<T>::put(symbol);
        Decimals::<T>::put(decimals);
        Owner::<T>::put(owner.clone());
        Admin1::<T>::set(admin1);
        Admin2::<T>::set(admin2);
        Initialized::<T>::put(true);

        Self::deposit_event(Event::Initialized { owner });
        Ok(())
    }

    pub(crate) fn do_change_admin(
        who: &T::AccountId,
        seat: AdminSeat,
        new: Option<T::AccountId>,
    ) -> DispatchResult {
        Self::ensure_owner(who)?;
        if let Some(ref account) = new {
            ensure!(
                Self::admin_at(seat.other()).as_ref() != Some(account),
                Error::<T>::AdminAlreadyAssigned
            );
        }

        let old = Self::admin_at(seat);
        match seat {
            AdminSeat::First => {
                Admin1::<T>::set(new.clone());
                Self::deposit_event(Event::Admin1Changed { old, new });
            }
            AdminSeat::Second => {
                Admin2::<T>::set(new.clone());
                Self::deposit_event(Event::Admin2Changed { old, new });
            }
        }
        Ok(())
    }

    fn admin_at(seat: AdminSeat) -> Option<T::AccountId> {
        match seat {
            AdminSeat::First => Admin1::<T>::get(),
            AdminSeat::Second => Admin2::<T>::get(),
        }
    }

    pub(crate) fn do_set_owner(who: &T::AccountId, new: Option<T::AccountId>) -> DispatchResult {
        Self::ensure_owner(who)?;
        Owner::<T>::set(new.clone());
        Self::deposit_event(Event::OwnershipTransferred { previous: Some(who.clone()), new });
        Ok(())
    }

    pub(crate) fn do_set_paused(who: &T::AccountId, paused: bool) -> DispatchResult {
        Self::ensure_owner(who)?;
        Paused::<T>::put(paused);
        if paused {
            Self::deposit_event(Event::Paused);
        } else {
            Self::deposit_event(Event::Unpaused);
        }
        Ok(())
    }

    pub(crate) fn do_freeze(who: &T::AccountId, account: T::AccountId) -> DispatchResult {
        Self::ensure_owner_or_admin(who)?;
        ensure!(!Frozen::<T>::get(&account), Error::<T>::AlreadyFrozen);
        Frozen::<T>::insert(&account, true);
        Self::deposit_event(Event::Frozen { account });
        Ok(())
    }

    pub(crate) fn do_unfreeze(who: &T::AccountId, account: T::AccountId) -> DispatchResult {
        Self::ensure_owner_or_admin(who)?;
        ensure!(Frozen::<T>::get(&account), Error::<T>::NotFrozen);
        Frozen::<T>::remove(&account);
        Self::deposit_event(Event::Unfrozen { account });
        Ok(())
    }

    pub(crate) fn do_mint(who: &T::AccountId, to: T::AccountId, amount: u128) -> DispatchResult {
        let role = Self::ensure_owner_or_admin(who)?;
        ensure!(amount > 0, Error::<T>::ZeroAmount);
        Self::ensure_not_paused()?;
        ensure!(!Frozen::<T>::get(&to), Error::<T>::AccountFrozen);

        match role {
            Role::Owner => {
                Self::credit(&to, amount)?;
                Self::deposit_event(Event::Minted { to, amount });
                Ok(())
            }
            Role::Admin => Self::enqueue_hold_mint(to, amount),
            Role::Other => Err(Error::<T>::NotOwnerOrAdmin.into()),
        }
    }

    fn enqueue_hold_mint(to: T::AccountId, amount: u128) -> DispatchResult {
        let index = TotalMintHoldTransactions::<T>::get();
        ensure!(index < T::MaxHoldMints::get(), Error::<T>::TooManyHoldMints);
        let unlock_time =
            Self::now().checked_add(T::HoldDuration::get()).ok_or(Error::<T>::Overflow)?;

        HoldMints::<T>::insert(
            index,
            MintRequest { recipient: to.clone(), amount, unlock_time },
        );
        TotalMintHoldTransactions::<T>::put(index + 1);

        log::debug!(target: LOG_TARGET, "hold-mint queued at {index}, unlocks at {unlock_time}");
        Self::deposit_event(Event::HoldMintQueued { index, to, amount, unlock_time });
        Ok(())
    }

    /// Remove the request at `index` by moving the last request into its slot.
    fn remove_hold_mint(index: u32) -> Result<MintRequest<T::AccountId>, DispatchError> {
        let count = TotalMintHoldTransactions::<T>::get();
        ensure!(index < count, Error::<T>::IndexOutOfBounds);
        let removed = HoldMints::<T>::take(index).ok_or(Error::<T>::IndexOutOfBounds)?;

        let last = count - 1;
        if index != last {
            if let Some(moved) = HoldMints::<T>::take(last) {
                HoldMints::<T>::insert(index, moved);
            }
        }
        TotalMintHoldTransactions::<T>::put(last);
        Ok(removed)
    }

    pub(crate) fn do_cancel_hold_mint(who: &T::AccountId, index: u32) -> DispatchResult {
        Self::ensure_owner(who)?;
        let request = Self::remove_hold_mint(index)?;
        Self::deposit_event(Event::HoldMintCanceled {
            index,
            to: request.recipient,
            amount: request.amount,
        });
        Ok(())
    }

    /// Returns whether the request at `index` was credited.
    pub(crate) fn do_release_at(index: u32) -> Result<bool, DispatchError> {
        ensure!(index < TotalMintHoldTransactions::<T>::get(), Error::<T>::IndexOutOfBounds);
        let request = HoldMints::<T>::get(index).ok_or(Error::<T>::IndexOutOfBounds)?;

        let now = Self::now();
        if !request.is_due(now) {
            log::debug!(
                target: LOG_TARGET,
                "hold-mint {index} not due until {}, now {now}",
                request.unlock_time
            );
            return Ok(false);
        }
        if Frozen::<T>::get(&request.recipient) {
            log::debug!(target: LOG_TARGET, "hold-mint {index} kept, recipient frozen");
            return Ok(false);
        }

        Self::credit(&request.recipient, request.amount)?;
        Self::remove_hold_mint(index)?;
        Self::deposit_event(Event::HoldMintReleased {
            index,
            to: request.recipient,
            amount: request.amount,
        });
        Ok(true)
    }

    /// Returns how many requests were credited.
    pub(crate) fn do_release_sweep(n: u32) -> Result<u32, DispatchError> {
        let mut released = 0u32;
        for index in 0..n {
            if Self::do_release_at(index)? {
                released += 1;
            }
        }
        Ok(released)
    }

    pub(crate) fn do_transfer(from: T::AccountId, to: T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_not_paused()?;
        Self::ensure_movable(&from, &to)?;
        Self::move_balance(&from, &to, amount)?;
        Self::deposit_event(Event::Transferred { from, to, amount });
        Ok(())
    }

    pub(crate) fn do_transfer_from(
        spender: &T::AccountId,
        from: T::AccountId,
        to: T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        Self::ensure_not_paused()?;
        Self::ensure_movable(&from, &to)?;
        let allowance = Allowances::<T>::get(&from, spender);
        ensure!(allowance >= amount, Error::<T>::InsufficientAllowance);

        Self::move_balance(&from, &to, amount)?;
        Allowances::<T>::insert(&from, spender, allowance - amount);
        Self::deposit_event(Event::Transferred { from, to, amount });
        Ok(())
    }

    pub(crate) fn do_approve(
        owner: T::AccountId,
        spender: T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        Allowances::<T>::insert(&owner, &spender, amount);
        Self::deposit_event(Event::Approval { owner, spender, amount });
        Ok(())
    }

    pub(crate) fn do_burn_from(who: &T::AccountId, account: T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_owner(who)?;
        let balance = Balances::<T>::get(&account);
        ensure!(balance >= amount, Error::<T>::InsufficientBalance);
        let supply = TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::Overflow)?;

        Balances::<T>::insert(&account, balance - amount);
        TotalSupply::<T>::put(supply);
        Self::deposit_event(Event::Burned { from: account, amount });
        Ok(())
    }

    pub(crate) fn do_reclaim(who: T::AccountId, account: T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_owner(&who)?;
        Self::ensure_not_paused()?;
        Self::move_balance(&account, &who, amount)?;
        Self::deposit_event(Event::Reclaimed { from: account, to: who, amount });
        Ok(())
    }

    /// Add `amount` to `who` and to the total supply.
    pub(crate) fn credit(who: &T::AccountId, amount: u128) -> DispatchResult {
        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
        let balance = Balances::<T>::get(who).checked_add(amount).ok_or(Error::<T>::Overflow)?;
        TotalSupply::<T>::put(supply);
        Balances::<T>::insert(who, balance);
        Ok(())
    }

    /// Move `amount` between accounts; the total supply is unchanged.
    fn move_balance(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        let from_balance = Balances::<T>::get(from);
        ensure!(from_balance >= amount, Error::<T>::InsufficientBalance);
        if from == to {
            return Ok(());
        }
        let to_balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        Balances::<T>::insert(from, from_balance - amount);
        Balances::<T>::insert(to, to_balance);
        Ok(())
    }

    /// Check the ledger's storage invariants.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or("sum of balances overflows")?;
        ensure!(sum == TotalSupply::<T>::get(), "total supply does not match sum of balances");

        let count = TotalMintHoldTransactions::<T>::get();
        ensure!(
            HoldMints::<T>::iter_keys().count() == count as usize,
            "hold-mint counter does not match queue length"
        );
        for index in 0..count {
            ensure!(HoldMints::<T>::contains_key(index), "hold-mint queue has a gap");
        }

        if let (Some(a), Some(b)) = (Admin1::<T>::get(), Admin2::<T>::get()) {
            ensure!(a != b, "both admin seats hold the same account");
        }
        Ok(())
    }
}
