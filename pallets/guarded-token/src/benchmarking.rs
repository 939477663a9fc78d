//! Benchmarking setup for pallet-guarded-token

use super::*;

#[allow(unused)]
use crate::Pallet as Token;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn set_owner<T: Config>() -> T::AccountId {
    let owner: T::AccountId = account("owner", 0, 0);
    Owner::<T>::put(&owner);
    owner
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        Balances::<T>::insert(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn transfer_from() {
        let holder: T::AccountId = account("holder", 0, 0);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        Balances::<T>::insert(&holder, 10_000_000);
        Allowances::<T>::insert(&holder, &spender, 10_000_000);

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
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1_000_000);

        assert_eq!(TotalSupply::<T>::get(), 9_000_000);
    }

    #[benchmark]
    fn burn_from() {
        let holder: T::AccountId = account("holder", 0, 0);
        let spender: T::AccountId = whitelisted_caller();
        Balances::<T>::insert(&holder, 10_000_000);
        Allowances::<T>::insert(&holder, &spender, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender), holder.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&holder), 9_000_000);
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
    fn blacklist() {
        let owner = set_owner::<T>();
        let account: T::AccountId = account("target", 0, 1);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), account.clone());

        assert!(Blacklist::<T>::get(&account));
    }

    #[benchmark]
    fn unblacklist() {
        let owner = set_owner::<T>();
        let account: T::AccountId = account("target", 0, 1);
        Blacklist::<T>::insert(&account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), account.clone());

        assert!(!Blacklist::<T>::get(&account));
    }

    #[benchmark]
    fn transfer_ownership() {
        let owner = set_owner::<T>();
        let new_owner: T::AccountId = account("new-owner", 0, 1);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    #[benchmark]
    fn renounce_ownership() {
        let owner = set_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert_eq!(Owner::<T>::get(), None);
    }

    impl_benchmark_test_suite!(Token, crate::mock::new_test_ext(), crate::mock::Test);
}
