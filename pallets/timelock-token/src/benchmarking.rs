//! Benchmarking setup for pallet-timelock-token

use super::*;

#[allow(unused)]
use crate::Pallet as Token;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn set_owner<T: Config>() -> T::AccountId {
    let owner: T::AccountId = whitelisted_caller();
    Owner::<T>::put(owner.clone());
    owner
}

fn set_admin<T: Config>() -> T::AccountId {
    let admin: T::AccountId = account("admin", 0, 0);
    Admin1::<T>::put(admin.clone());
    admin
}

/// Fill the queue with `n` requests that are already due.
fn queue_due<T: Config>(n: u32) {
    for index in 0..n {
        let recipient: T::AccountId = account("recipient", index, 0);
        HoldMints::<T>::insert(index, MintRequest { recipient, amount: 1_000, unlock_time: 0 });
    }
    TotalMintHoldTransactions::<T>::put(n);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn initialize() {
        let owner: T::AccountId = account("owner", 0, 0);
        let admin1: T::AccountId = account("admin", 1, 0);
        let admin2: T::AccountId = account("admin", 2, 0);
        let origin = T::InitializeOrigin::try_successful_origin().expect("Initialize origin");

        #[extrinsic_call]
        _(
            origin as T::RuntimeOrigin,
            [b'n'; 64].to_vec(),
            [b's'; 16].to_vec(),
            18,
            owner.clone(),
            Some(admin1),
            Some(admin2),
        );

        assert_eq!(Owner::<T>::get(), Some(owner));
    }

    #[benchmark]
    fn change_admin() {
        let owner = set_owner::<T>();
        let other: T::AccountId = account("admin", 2, 0);
        Admin2::<T>::put(other);
        let new: T::AccountId = account("admin", 1, 0);

        #[extrinsic_call]
        change_admin1(RawOrigin::Signed(owner), Some(new.clone()));

        assert_eq!(Admin1::<T>::get(), Some(new));
    }

    #[benchmark]
    fn pause() {
        let owner = set_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert!(Paused::<T>::get());
    }

    #[benchmark]
    fn unpause() {
        let owner = set_owner::<T>();
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert!(!Paused::<T>::get());
    }

    #[benchmark]
    fn freeze_account() {
        set_owner::<T>();
        let admin = set_admin::<T>();
        let target: T::AccountId = account("target", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), target.clone());

        assert!(Frozen::<T>::get(&target));
    }

    #[benchmark]
    fn unfreeze_account() {
        set_owner::<T>();
        let admin = set_admin::<T>();
        let target: T::AccountId = account("target", 0, 0);
        Frozen::<T>::insert(&target, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), target.clone());

        assert!(!Frozen::<T>::get(&target));
    }

    #[benchmark]
    fn mint_instant() {
        let owner = set_owner::<T>();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        mint(RawOrigin::Signed(owner), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn mint_hold() {
        set_owner::<T>();
        let admin = set_admin::<T>();
        let recipient: T::AccountId = account("recipient", 0, 0);
        queue_due::<T>(T::MaxHoldMints::get() - 1);

        #[extrinsic_call]
        mint(RawOrigin::Signed(admin), recipient, 1_000_000);

        assert_eq!(TotalMintHoldTransactions::<T>::get(), T::MaxHoldMints::get());
    }

    #[benchmark]
    fn cancel_hold_mint() {
        let owner = set_owner::<T>();
        queue_due::<T>(2);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), 0);

        assert_eq!(TotalMintHoldTransactions::<T>::get(), 1);
    }

    #[benchmark]
    fn release_mint_at_index() {
        let caller: T::AccountId = whitelisted_caller();
        queue_due::<T>(2);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), 0);

        assert_eq!(TotalMintHoldTransactions::<T>::get(), 1);
    }

    #[benchmark]
    fn release_mint(n: Linear<1, 32>) {
        let caller: T::AccountId = whitelisted_caller();
        // Each release shrinks the queue, so a sweep over `n` needs `2n` live requests
        queue_due::<T>(2 * n);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), n);

        assert_eq!(TotalMintHoldTransactions::<T>::get(), n);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        Pallet::<T>::credit(&caller, 10_000_000).expect("fund caller");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        Pallet::<T>::credit(&holder, 10_000_000).expect("fund holder");
        Allowances::<T>::insert(&holder, &spender, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender), holder, recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000);
    }

    #[benchmark]
    fn burn_from() {
        let owner = set_owner::<T>();
        let holder: T::AccountId = account("holder", 0, 0);
        Pallet::<T>::credit(&holder, 1_000).expect("fund holder");

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), holder.clone(), 1_000);

        assert_eq!(Balances::<T>::get(&holder), 0);
    }

    #[benchmark]
    fn reclaim_tokens() {
        let owner = set_owner::<T>();
        let holder: T::AccountId = account("holder", 0, 0);
        Pallet::<T>::credit(&holder, 1_000).expect("fund holder");

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), holder, 1_000);

        assert_eq!(Balances::<T>::get(&owner), 1_000);
    }

    #[benchmark]
    fn transfer_ownership() {
        let owner = set_owner::<T>();
        let new_owner: T::AccountId = account("owner", 1, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    impl_benchmark_test_suite!(Token, crate::mock::new_uninitialized_ext(), crate::mock::Test);
}
