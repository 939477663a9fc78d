//! # Vesting Escrow Pallet
//!
//! Holds a pre-funded allocation in a pallet-owned account and releases it to
//! a single beneficiary on a cliff-then-linear schedule.
//!
//! - Nothing vests during the cliff (`CliffDuration` after creation).
//! - The amount then grows linearly over `ReleaseDuration`, rounding down.
//! - Once both have elapsed the full grant is vested, dust included.
//!
//! The phase is never stored; every reader derives it from the clock. The
//! escrow has its own owner and pause flag, independent of the ledger's.
//!
//! `emergency_withdraw` lets the owner pull tokens out without touching the
//! released counter. Later releases may then compute an amount the escrow no
//! longer holds and fail at the ledger transfer step.

#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` is deprecated upstream but kept for the public read API.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{EnsureOrigin, UnixTime},
    PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use pallet_guarded_token::{is_zero_account, GuardedLedger};
use sp_runtime::{traits::AccountIdConversion, PerThing, Percent, Rounding};

pub use pallet::*;
pub use schedule::{constants, Curve, VestingGrant, VestingPhase};
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

mod guard;
pub mod schedule;
pub mod weights;

use guard::CallGuard;

/// Log target for this pallet.
pub const LOG_TARGET: &str = "runtime::vesting-escrow";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Progress of the grant at a given instant.
#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo)]
pub struct VestingProgress {
    pub vested: u128,
    pub released: u128,
    pub releasable: u128,
    /// Not yet released, whether vested or not.
    pub remaining: u128,
    pub percent_vested: Percent,
}

/// Schedule landmarks, in unix seconds.
#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo)]
pub struct TimeInfo {
    pub start: u64,
    pub cliff_end: u64,
    pub vesting_end: u64,
    pub until_cliff: u64,
    pub until_end: u64,
}

/// Static description of the escrow.
#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo)]
pub struct EscrowInfo<AccountId> {
    pub escrow_account: AccountId,
    pub escrow_balance: u128,
    pub grant: Option<VestingGrant<AccountId>>,
    pub released: u128,
    pub cliff_duration: u64,
    pub release_duration: u64,
    pub owner: Option<AccountId>,
    pub paused: bool,
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Ledger the escrowed tokens live in.
        type Token: GuardedLedger<Self::AccountId>;

        /// Clock read by every vesting computation.
        type UnixTime: UnixTime;

        /// Derives the escrow account.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Seconds after creation before anything vests.
        #[pallet::constant]
        type CliffDuration: Get<u64>;

        /// Seconds of linear release following the cliff. Must be non-zero.
        #[pallet::constant]
        type ReleaseDuration: Get<u64>;

        /// Who may create the grant. The returned account becomes the escrow owner.
        type ScheduleOrigin: EnsureOrigin<Self::RuntimeOrigin, Success = Self::AccountId>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// The grant. Written once, never removed.
    #[pallet::storage]
    #[pallet::getter(fn grant)]
    pub type Grant<T: Config> = StorageValue<_, VestingGrant<T::AccountId>, OptionQuery>;

    /// Amount already paid out to the beneficiary.
    #[pallet::storage]
    #[pallet::getter(fn released)]
    pub type Released<T> = StorageValue<_, u128, ValueQuery>;

    /// Escrow pause flag, gates `release` only
    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Escrow owner. `None` once ownership has been renounced.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Set while `release` or `emergency_withdraw` is executing.
    #[pallet::storage]
    pub type CallLock<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Grant created; vesting starts at `start`
        ScheduleCreated { beneficiary: T::AccountId, total_amount: u128, start: u64 },
        /// Vested tokens paid out to the beneficiary
        TokensReleased { beneficiary: T::AccountId, amount: u128, timestamp: u64 },
        /// Owner pulled tokens out of the escrow, bypassing the schedule
        EmergencyWithdrawal { to: T::AccountId, amount: u128 },
        /// Releases paused by the owner
        Paused { account: T::AccountId },
        /// Releases resumed by the owner
        Unpaused { account: T::AccountId },
        /// Ownership moved; `new_owner` is `None` after a renounce
        OwnershipTransferred { previous_owner: Option<T::AccountId>, new_owner: Option<T::AccountId> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The zero address is not a valid argument.
        ZeroAddress,
        /// Amount must be greater than zero.
        ZeroAmount,
        /// The grant has already been created.
        ScheduleAlreadyExists,
        /// No grant has been created yet.
        NoSchedule,
        /// Caller is not the owner.
        NotOwner,
        /// Caller is not the beneficiary.
        NotBeneficiary,
        /// Nothing is releasable right now.
        NothingToRelease,
        /// The escrow holds less than requested.
        InsufficientBalance,
        /// Releases are paused.
        ReleasePaused,
        /// Escrow is already paused.
        AlreadyPaused,
        /// Escrow is not paused.
        NotPaused,
        /// Account already owns the escrow.
        AlreadyOwner,
        /// A guarded call is already executing.
        ReentrantCall,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(T::ReleaseDuration::get() > 0, "ReleaseDuration must be non-zero");
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create the grant. Vesting starts now; funding the escrow account is
        /// a separate transfer.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_schedule())]
        pub fn create_schedule(
            origin: OriginFor<T>,
            beneficiary: T::AccountId,
            total_amount: u128,
        ) -> DispatchResult {
            let owner = T::ScheduleOrigin::ensure_origin(origin)?;
            ensure!(!Grant::<T>::exists(), Error::<T>::ScheduleAlreadyExists);
            ensure!(!is_zero_account(&beneficiary), Error::<T>::ZeroAddress);
            ensure!(!is_zero_account(&owner), Error::<T>::ZeroAddress);
            ensure!(total_amount > 0, Error::<T>::ZeroAmount);

            let start = Self::now();
            Grant::<T>::put(VestingGrant { beneficiary: beneficiary.clone(), total_amount, start });
            Owner::<T>::put(&owner);

            log::info!(
                target: LOG_TARGET,
                "grant of {} for {:?} created at {}, owner {:?}",
                total_amount,
                beneficiary,
                start,
                owner
            );
            Self::deposit_event(Event::ScheduleCreated { beneficiary, total_amount, start });
            Ok(())
        }

        /// Pay out everything vested and not yet released.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::release())]
        pub fn release(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let _guard = CallGuard::<T>::acquire()?;

            let grant = Grant::<T>::get().ok_or(Error::<T>::NoSchedule)?;
            ensure!(who == grant.beneficiary, Error::<T>::NotBeneficiary);
            ensure!(!Paused::<T>::get(), Error::<T>::ReleasePaused);

            let now = Self::now();
            let amount = Self::releasable_for(&grant, now);
            ensure!(amount > 0, Error::<T>::NothingToRelease);

            // Book the release before handing control to the ledger.
            let released = Released::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
            frame_support::storage::with_storage_layer(|| -> DispatchResult {
                Released::<T>::put(released);
                T::Token::transfer(&Self::account_id(), &grant.beneficiary, amount)
            })?;

            log::debug!(
                target: LOG_TARGET,
                "released {} at {} ({} of {} total)",
                amount,
                now,
                released,
                grant.total_amount
            );
            Self::deposit_event(Event::TokensReleased {
                beneficiary: grant.beneficiary,
                amount,
                timestamp: now,
            });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            ensure!(!Paused::<T>::get(), Error::<T>::AlreadyPaused);

            Paused::<T>::put(true);
            log::info!(target: LOG_TARGET, "escrow paused by {:?}", owner);
            Self::deposit_event(Event::Paused { account: owner });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            ensure!(Paused::<T>::get(), Error::<T>::NotPaused);

            Paused::<T>::put(false);
            log::info!(target: LOG_TARGET, "escrow unpaused by {:?}", owner);
            Self::deposit_event(Event::Unpaused { account: owner });
            Ok(())
        }

        /// Move `amount` from the escrow to the owner, bypassing the schedule.
        /// The released counter is left untouched.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::emergency_withdraw())]
        pub fn emergency_withdraw(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            let _guard = CallGuard::<T>::acquire()?;

            ensure!(amount > 0, Error::<T>::ZeroAmount);
            let escrow = Self::account_id();
            ensure!(amount <= T::Token::balance(&escrow), Error::<T>::InsufficientBalance);

            T::Token::transfer(&escrow, &owner, amount)?;

            log::warn!(target: LOG_TARGET, "emergency withdrawal of {} to {:?}", amount, owner);
            Self::deposit_event(Event::EmergencyWithdrawal { to: owner, amount });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            ensure!(!is_zero_account(&new_owner), Error::<T>::ZeroAddress);
            ensure!(new_owner != owner, Error::<T>::AlreadyOwner);

            Owner::<T>::put(&new_owner);
            log::info!(target: LOG_TARGET, "ownership {:?} -> {:?}", owner, new_owner);
            Self::deposit_event(Event::OwnershipTransferred {
                previous_owner: Some(owner),
                new_owner: Some(new_owner),
            });
            Ok(())
        }

        /// Drop ownership for good: pause, unpause and emergency withdrawals
        /// become unreachable.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::renounce_ownership())]
        pub fn renounce_ownership(origin: OriginFor<T>) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;

            Owner::<T>::kill();
            log::info!(target: LOG_TARGET, "ownership renounced by {:?}", owner);
            Self::deposit_event(Event::OwnershipTransferred {
                previous_owner: Some(owner),
                new_owner: None,
            });
            Ok(())
        }
    }
}

impl<T: Config> Pallet<T> {
    /// The account holding the escrowed tokens.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    /// Current clock reading in unix seconds.
    pub fn now() -> u64 {
        T::UnixTime::now().as_secs()
    }

    pub fn curve() -> Curve {
        Curve { cliff: T::CliffDuration::get(), release: T::ReleaseDuration::get() }
    }

    pub fn vested_amount() -> u128 {
        Self::vested_amount_at(Self::now())
    }

    /// Vested amount at `now`; zero before the grant exists.
    pub fn vested_amount_at(now: u64) -> u128 {
        Grant::<T>::get()
            .map(|grant| Self::curve().vested(grant.total_amount, grant.start, now))
            .unwrap_or(0)
    }

    pub fn releasable_amount() -> u128 {
        Self::releasable_amount_at(Self::now())
    }

    pub fn releasable_amount_at(now: u64) -> u128 {
        Grant::<T>::get().map(|grant| Self::releasable_for(&grant, now)).unwrap_or(0)
    }

    pub fn vesting_phase_at(now: u64) -> Option<VestingPhase> {
        Grant::<T>::get().map(|grant| Self::curve().phase(grant.start, now))
    }

    pub fn vesting_info() -> Option<VestingProgress> {
        Self::vesting_info_at(Self::now())
    }

    pub fn vesting_info_at(now: u64) -> Option<VestingProgress> {
        let grant = Grant::<T>::get()?;
        let vested = Self::curve().vested(grant.total_amount, grant.start, now);
        let released = Released::<T>::get();
        Some(VestingProgress {
            vested,
            released,
            releasable: vested.saturating_sub(released),
            remaining: grant.total_amount.saturating_sub(released),
            // `vested <= total_amount` and `total_amount > 0`, so this cannot fail.
            percent_vested: Percent::from_rational_with_rounding(
                vested,
                grant.total_amount,
                Rounding::Down,
            )
            .unwrap_or(Percent::from_percent(100)),
        })
    }

    pub fn time_info() -> Option<TimeInfo> {
        Self::time_info_at(Self::now())
    }

    pub fn time_info_at(now: u64) -> Option<TimeInfo> {
        let grant = Grant::<T>::get()?;
        let curve = Self::curve();
        let cliff_end = curve.cliff_end(grant.start);
        let vesting_end = curve.vesting_end(grant.start);
        Some(TimeInfo {
            start: grant.start,
            cliff_end,
            vesting_end,
            until_cliff: cliff_end.saturating_sub(now),
            until_end: vesting_end.saturating_sub(now),
        })
    }

    pub fn contract_info() -> EscrowInfo<T::AccountId> {
        let escrow_account = Self::account_id();
        let curve = Self::curve();
        EscrowInfo {
            escrow_balance: T::Token::balance(&escrow_account),
            escrow_account,
            grant: Grant::<T>::get(),
            released: Released::<T>::get(),
            cliff_duration: curve.cliff,
            release_duration: curve.release,
            owner: Owner::<T>::get(),
            paused: Paused::<T>::get(),
        }
    }

    fn releasable_for(grant: &VestingGrant<T::AccountId>, now: u64) -> u128 {
        Self::curve()
            .vested(grant.total_amount, grant.start, now)
            .saturating_sub(Released::<T>::get())
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::NotOwner);
        Ok(who)
    }
}
