//! # Guarded Token Pallet
//!
//! A fixed-supply fungible token. The whole supply is minted once at genesis,
//! split 40/30/20/10 across four allocation accounts, and can afterwards only
//! shrink through burns.
//!
//! Every balance mutation funnels through [`Pallet::update`], which first runs
//! [`Pallet::ensure_can_move`]: the ledger must not be paused and neither side
//! of the movement may be blacklisted. Approvals are outside that gate:
//! allowances can still be set while the ledger is paused.
//!
//! Administration (pause, blacklist, ownership) is reserved to a single owner
//! account stored on-chain. Renouncing ownership leaves every owner-gated call
//! permanently unreachable.

#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` is deprecated upstream but kept for the public read API.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use codec::Encode;
use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

/// Log target for this pallet.
pub const LOG_TARGET: &str = "runtime::guarded-token";

/// Fractional digits of one whole token.
pub const DECIMALS: u8 = 18;

/// Hard ceiling of the supply, minted in full at genesis.
pub const MAX_SUPPLY: u128 = 1_000_000 * 10u128.pow(DECIMALS as u32);

/// Percent of [`MAX_SUPPLY`] minted to each genesis allocation, in order.
pub const ALLOCATION_SHARES: [u128; 4] = [40, 30, 20, 10];

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Returns `true` if `who` encodes to nothing but zero bytes.
pub fn is_zero_account<AccountId: Encode>(who: &AccountId) -> bool {
    who.using_encoded(|bytes| bytes.iter().all(|b| *b == 0))
}

/// Balance movements other pallets may perform on behalf of their own accounts.
///
/// Implementations must route through the same pause/blacklist checks as the
/// user-facing `transfer` call and must be all-or-nothing.
pub trait GuardedLedger<AccountId> {
    /// Current balance of `who`.
    fn balance(who: &AccountId) -> u128;

    /// Moves `amount` from `from` to `to`.
    fn transfer(from: &AccountId, to: &AccountId, amount: u128) -> DispatchResult;

    /// Moves `amount` to `who` from any holder that has it, bypassing the
    /// guards. Total supply is unchanged.
    #[cfg(feature = "runtime-benchmarks")]
    fn fund(who: &AccountId, amount: u128) -> DispatchResult;
}

/// Read-only snapshot of the token's public state.
#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo)]
pub struct TokenInfo<AccountId> {
    pub name: Vec<u8>,
    pub symbol: Vec<u8>,
    pub decimals: u8,
    pub total_supply: u128,
    pub max_supply: u128,
    pub owner: Option<AccountId>,
    pub paused: bool,
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Guarded Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "GRD")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Total token supply. Fixed at genesis, only decreases afterwards.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending allowances, keyed by (holder, spender).
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

    /// Blacklisted accounts (can neither send, receive nor burn)
    #[pallet::storage]
    #[pallet::getter(fn is_blacklisted)]
    pub type Blacklist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Ledger-wide pause flag
    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Owner account. `None` once ownership has been renounced.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Allowance set for a spender
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Tokens destroyed, reducing total supply
        Burned { from: T::AccountId, amount: u128 },
        /// Ledger paused by the owner
        Paused { account: T::AccountId },
        /// Ledger unpaused by the owner
        Unpaused { account: T::AccountId },
        /// Account added to the blacklist
        Blacklisted { account: T::AccountId },
        /// Account removed from the blacklist
        Unblacklisted { account: T::AccountId },
        /// Ownership moved; `new_owner` is `None` after a renounce
        OwnershipTransferred { previous_owner: Option<T::AccountId>, new_owner: Option<T::AccountId> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The zero address is not a valid argument.
        ZeroAddress,
        /// Amount must be greater than zero.
        ZeroAmount,
        /// Genesis needs exactly one account per allocation share.
        InvalidAllocationCount,
        /// The same account appears twice in the genesis allocations.
        DuplicateAllocation,
        /// Genesis allocations do not add up to the max supply.
        SupplyMismatch,
        /// Caller is not the owner.
        NotOwner,
        /// Balance too low.
        InsufficientBalance,
        /// Allowance too low.
        InsufficientAllowance,
        /// Ledger is already paused.
        AlreadyPaused,
        /// Ledger is not paused.
        NotPaused,
        /// Account is already blacklisted.
        AlreadyBlacklisted,
        /// Account is not blacklisted.
        NotBlacklisted,
        /// The owner can never be blacklisted.
        CannotBlacklistOwner,
        /// Account already owns the ledger.
        AlreadyOwner,
        /// Balance movements are paused.
        TransfersPaused,
        /// A party to the movement is blacklisted.
        AccountBlacklisted,
        Overflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let from = ensure_signed(origin)?;
            Self::do_transfer(&from, &to, amount)
        }

        /// Move `amount` from `from` to `to`, spending the caller's allowance.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            frame_support::storage::with_storage_layer(|| {
                Self::spend_allowance(&from, &spender, amount)?;
                Self::do_transfer(&from, &to, amount)
            })
        }

        /// Set the caller's allowance for `spender`. Not gated by pause.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            ensure!(!is_zero_account(&spender), Error::<T>::ZeroAddress);

            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let holder = ensure_signed(origin)?;
            Self::do_burn(&holder, amount)
        }

        /// Burn `amount` of `holder`'s tokens, spending the caller's allowance.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::burn_from())]
        pub fn burn_from(origin: OriginFor<T>, holder: T::AccountId, amount: u128) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            ensure!(!Blacklist::<T>::get(&spender), Error::<T>::AccountBlacklisted);
            ensure!(amount > 0, Error::<T>::ZeroAmount);

            frame_support::storage::with_storage_layer(|| {
                Self::spend_allowance(&holder, &spender, amount)?;
                Self::do_burn(&holder, amount)
            })
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            ensure!(!Paused::<T>::get(), Error::<T>::AlreadyPaused);

            Paused::<T>::put(true);
            log::info!(target: LOG_TARGET, "ledger paused by {:?}", owner);
            Self::deposit_event(Event::Paused { account: owner });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            ensure!(Paused::<T>::get(), Error::<T>::NotPaused);

            Paused::<T>::put(false);
            log::info!(target: LOG_TARGET, "ledger unpaused by {:?}", owner);
            Self::deposit_event(Event::Unpaused { account: owner });
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::blacklist())]
        pub fn blacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            Self::ensure_listable(&owner, &account)?;
            ensure!(!Blacklist::<T>::get(&account), Error::<T>::AlreadyBlacklisted);

            Blacklist::<T>::insert(&account, true);
            log::info!(target: LOG_TARGET, "blacklisted {:?}", account);
            Self::deposit_event(Event::Blacklisted { account });
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::unblacklist())]
        pub fn unblacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            Self::ensure_listable(&owner, &account)?;
            ensure!(Blacklist::<T>::get(&account), Error::<T>::NotBlacklisted);

            Blacklist::<T>::remove(&account);
            log::info!(target: LOG_TARGET, "removed {:?} from blacklist", account);
            Self::deposit_event(Event::Unblacklisted { account });
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            ensure!(!is_zero_account(&new_owner), Error::<T>::ZeroAddress);
            ensure!(new_owner != owner, Error::<T>::AlreadyOwner);
            // The owner and the blacklist stay disjoint.
            ensure!(!Blacklist::<T>::get(&new_owner), Error::<T>::AccountBlacklisted);

            Owner::<T>::put(&new_owner);
            log::info!(target: LOG_TARGET, "ownership {:?} -> {:?}", owner, new_owner);
            Self::deposit_event(Event::OwnershipTransferred {
                previous_owner: Some(owner),
                new_owner: Some(new_owner),
            });
            Ok(())
        }

        /// Drop ownership for good. Every owner-gated call becomes unreachable.
        #[pallet::call_index(10)]
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

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial owner
        pub owner: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Exactly four distinct, non-zero accounts receiving the
        /// 40/30/20/10 split of the max supply, in that order
        pub allocations: Vec<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            if let Some(ref owner) = self.owner {
                assert!(!is_zero_account(owner), "Token owner cannot be the zero address");
                Owner::<T>::put(owner);
            }

            let allocations = match Pallet::<T>::genesis_allocations(&self.allocations) {
                Ok(allocations) => allocations,
                Err(e) => panic!("Invalid genesis allocation: {}", <&'static str>::from(e)),
            };

            let mut total: u128 = 0;
            for (account, amount) in allocations {
                Balances::<T>::insert(&account, amount);
                total = total.saturating_add(amount);
            }
            TotalSupply::<T>::put(total);
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Snapshot of name, symbol, decimals, supply figures, owner and pause flag.
    pub fn token_info() -> TokenInfo<T::AccountId> {
        TokenInfo {
            name: TokenName::<T>::get().into_inner(),
            symbol: TokenSymbol::<T>::get().into_inner(),
            decimals: DECIMALS,
            total_supply: TotalSupply::<T>::get(),
            max_supply: MAX_SUPPLY,
            owner: Owner::<T>::get(),
            paused: Paused::<T>::get(),
        }
    }

    /// Pairs the genesis accounts with their share of [`MAX_SUPPLY`].
    ///
    /// Fails on a wrong number of accounts, a zero or repeated account, or a
    /// split that does not add up to exactly [`MAX_SUPPLY`].
    pub fn genesis_allocations(
        accounts: &[T::AccountId],
    ) -> Result<Vec<(T::AccountId, u128)>, Error<T>> {
        ensure!(accounts.len() == ALLOCATION_SHARES.len(), Error::<T>::InvalidAllocationCount);
        for (i, account) in accounts.iter().enumerate() {
            ensure!(!is_zero_account(account), Error::<T>::ZeroAddress);
            ensure!(!accounts[..i].contains(account), Error::<T>::DuplicateAllocation);
        }

        let allocations: Vec<(T::AccountId, u128)> = accounts
            .iter()
            .cloned()
            .zip(ALLOCATION_SHARES.iter().map(|share| MAX_SUPPLY / 100 * share))
            .collect();

        let total = allocations
            .iter()
            .try_fold(0u128, |acc, (_, amount)| acc.checked_add(*amount))
            .ok_or(Error::<T>::Overflow)?;
        ensure!(total == MAX_SUPPLY, Error::<T>::SupplyMismatch);

        Ok(allocations)
    }

    /// Transfer without an origin, used by the `transfer` call and by
    /// [`GuardedLedger`] callers.
    pub fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(!is_zero_account(to), Error::<T>::ZeroAddress);
        Self::update(Some(from), Some(to), amount)?;

        Self::deposit_event(Event::Transferred { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    fn do_burn(holder: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(amount > 0, Error::<T>::ZeroAmount);
        Self::update(Some(holder), None, amount)?;

        Self::deposit_event(Event::Burned { from: holder.clone(), amount });
        Ok(())
    }

    /// Checks every balance movement has to pass: the ledger is live and
    /// neither party is blacklisted.
    pub fn ensure_can_move(from: Option<&T::AccountId>, to: Option<&T::AccountId>) -> DispatchResult {
        ensure!(!Paused::<T>::get(), Error::<T>::TransfersPaused);
        for who in [from, to].into_iter().flatten() {
            ensure!(!Blacklist::<T>::get(who), Error::<T>::AccountBlacklisted);
        }
        Ok(())
    }

    /// The single place balances change. `to == None` burns.
    ///
    /// Runs in its own storage layer so callers outside a dispatchable still
    /// get all-or-nothing semantics.
    fn update(from: Option<&T::AccountId>, to: Option<&T::AccountId>, amount: u128) -> DispatchResult {
        Self::ensure_can_move(from, to)?;

        frame_support::storage::with_storage_layer(|| -> DispatchResult {
            if let Some(from) = from {
                let balance = Balances::<T>::get(from);
                ensure!(balance >= amount, Error::<T>::InsufficientBalance);
                Balances::<T>::insert(from, balance - amount);
            }

            match to {
                Some(to) => {
                    let balance =
                        Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
                    Balances::<T>::insert(to, balance);
                },
                None => {
                    let supply =
                        TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::Overflow)?;
                    TotalSupply::<T>::put(supply);
                },
            }
            Ok(())
        })
    }

    fn spend_allowance(holder: &T::AccountId, spender: &T::AccountId, amount: u128) -> DispatchResult {
        let current = Allowances::<T>::get(holder, spender);
        // Max allowance never runs down.
        if current == u128::MAX {
            return Ok(());
        }
        let remaining = current.checked_sub(amount).ok_or(Error::<T>::InsufficientAllowance)?;
        Allowances::<T>::insert(holder, spender, remaining);
        Ok(())
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::NotOwner);
        Ok(who)
    }

    fn ensure_listable(owner: &T::AccountId, account: &T::AccountId) -> DispatchResult {
        ensure!(!is_zero_account(account), Error::<T>::ZeroAddress);
        ensure!(account != owner, Error::<T>::CannotBlacklistOwner);
        Ok(())
    }
}

impl<T: Config> GuardedLedger<T::AccountId> for Pallet<T> {
    fn balance(who: &T::AccountId) -> u128 {
        Balances::<T>::get(who)
    }

    fn transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::do_transfer(from, to, amount)
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn fund(who: &T::AccountId, amount: u128) -> DispatchResult {
        let (source, balance) = Balances::<T>::iter()
            .find(|(_, balance)| *balance >= amount)
            .ok_or(Error::<T>::InsufficientBalance)?;
        Balances::<T>::insert(&source, balance - amount);
        let credited = Balances::<T>::get(who).checked_add(amount).ok_or(Error::<T>::Overflow)?;
        Balances::<T>::insert(who, credited);
        Ok(())
    }
}
