//! Benchmarking setup for pallet-vesting-escrow

use super::*;

#[allow(unused)]
use crate::Pallet as Vesting;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const GRANT: u128 = 1_000_000_000;

fn set_owner<T: Config>() -> T::AccountId {
    let owner: T::AccountId = account("owner", 0, 0);
    Owner::<T>::put(&owner);
    owner
}

/// Funded grant that started at the epoch, so any real clock sees it fully vested.
/// The escrow is funded from existing holders; nothing is minted.
fn vested_grant<T: Config>() -> Result<T::AccountId, BenchmarkError> {
    let beneficiary: T::AccountId = whitelisted_caller();
    Grant::<T>::put(VestingGrant { beneficiary: beneficiary.clone(), total_amount: GRANT, start: 0 });
    T::Token::fund(&Vesting::<T>::account_id(), GRANT)
        .map_err(|_| BenchmarkError::Stop("no holder can fund the escrow"))?;
    Ok(beneficiary)
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_schedule() -> Result<(), BenchmarkError> {
        let origin =
            T::ScheduleOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
        let beneficiary: T::AccountId = account("beneficiary", 0, 0);

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, beneficiary.clone(), GRANT);

        assert_eq!(Grant::<T>::get().map(|g| g.beneficiary), Some(beneficiary));
        Ok(())
    }

    #[benchmark]
    fn release() -> Result<(), BenchmarkError> {
        let beneficiary = vested_grant::<T>()?;

        #[extrinsic_call]
        _(RawOrigin::Signed(beneficiary.clone()));

        assert_eq!(Released::<T>::get(), GRANT);
        assert_eq!(T::Token::balance(&beneficiary), GRANT);
        Ok(())
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
    fn emergency_withdraw() -> Result<(), BenchmarkError> {
        let owner = set_owner::<T>();
        vested_grant::<T>()?;

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), GRANT);

        assert_eq!(T::Token::balance(&owner), GRANT);
        Ok(())
    }

    #[benchmark]
    fn transfer_ownership() {
        let owner = set_owner::<T>();
        let new_owner: T::AccountId = account("new_owner", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    #[benchmark]
    fn renounce_ownership() {
        let owner = set_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert!(Owner::<T>::get().is_none());
    }

    impl_benchmark_test_suite!(Vesting, crate::mock::new_test_ext(), crate::mock::Test);
}
