use crate as pallet_vesting_escrow;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
    PalletId,
};
use pallet_guarded_token::GuardedLedger;
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage, DispatchResult,
};
use std::cell::RefCell;

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Token: pallet_guarded_token,
        Vesting: pallet_vesting_escrow,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<1>;
    type WeightInfo = ();
}

impl pallet_guarded_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

parameter_types! {
    pub const EscrowPalletId: PalletId = PalletId(*b"py/vestx");
    pub const DeployerAccount: u64 = DEPLOYER;
}

pub struct EnsureDeployer;
impl frame_support::traits::EnsureOrigin<RuntimeOrigin> for EnsureDeployer {
    type Success = u64;

    fn try_origin(o: RuntimeOrigin) -> Result<Self::Success, RuntimeOrigin> {
        match o.clone().into() {
            Ok(frame_system::RawOrigin::Signed(account)) if account == DeployerAccount::get() => {
                Ok(account)
            },
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<RuntimeOrigin, ()> {
        Ok(RuntimeOrigin::signed(DeployerAccount::get()))
    }
}

impl pallet_vesting_escrow::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Token = HookedLedger;
    type UnixTime = Timestamp;
    type PalletId = EscrowPalletId;
    type CliffDuration = ConstU64<{ crate::constants::CLIFF_DURATION }>;
    type ReleaseDuration = ConstU64<{ crate::constants::RELEASE_DURATION }>;
    type ScheduleOrigin = EnsureDeployer;
    type WeightInfo = ();
}

/// A call the ledger hook makes back into the escrow mid-transfer.
#[derive(Clone, Copy, Debug)]
pub enum Reentry {
    Release(u64),
    EmergencyWithdraw(u64, u128),
}

thread_local! {
    static REENTRY: RefCell<Option<Reentry>> = const { RefCell::new(None) };
    static REENTRY_RESULT: RefCell<Option<DispatchResult>> = const { RefCell::new(None) };
}

/// Arm the hook: the next ledger transfer first runs `call`.
pub fn reenter_on_next_transfer(call: Reentry) {
    REENTRY.with(|r| *r.borrow_mut() = Some(call));
}

/// Outcome of the last re-entrant call, if the hook fired.
pub fn take_reentry_result() -> Option<DispatchResult> {
    REENTRY_RESULT.with(|r| r.borrow_mut().take())
}

/// The real ledger, plus a hook standing in for recipient-controlled code
/// that runs before the transfer returns.
pub struct HookedLedger;

impl GuardedLedger<u64> for HookedLedger {
    fn balance(who: &u64) -> u128 {
        <Token as GuardedLedger<u64>>::balance(who)
    }

    fn transfer(from: &u64, to: &u64, amount: u128) -> DispatchResult {
        if let Some(call) = REENTRY.with(|r| r.borrow_mut().take()) {
            let result = match call {
                Reentry::Release(who) => Vesting::release(RuntimeOrigin::signed(who)),
                Reentry::EmergencyWithdraw(who, amount) => {
                    Vesting::emergency_withdraw(RuntimeOrigin::signed(who), amount)
                },
            };
            REENTRY_RESULT.with(|r| *r.borrow_mut() = Some(result));
        }
        <Token as GuardedLedger<u64>>::transfer(from, to, amount)
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn fund(who: &u64, amount: u128) -> DispatchResult {
        <Token as GuardedLedger<u64>>::fund(who, amount)
    }
}

/// Owns both the ledger and the escrow.
pub const DEPLOYER: u64 = 1;
pub const TREASURY: u64 = 2;
pub const TEAM: u64 = 3;
pub const ECOSYSTEM: u64 = 4;
pub const RESERVE: u64 = 5;
pub const BENEFICIARY: u64 = 7;
pub const OUTSIDER: u64 = 9;

/// One whole token.
pub const UNIT: u128 = 1_000_000_000_000_000_000;
/// Size of the grant; equal to the team allocation that funds it.
pub const GRANT: u128 = 300_000 * UNIT;
/// Unix seconds at which every test starts.
pub const START: u64 = 1_700_000_000;
pub const DAY: u64 = 24 * 60 * 60;

/// Move the mock clock to `secs` unix seconds.
pub fn set_now(secs: u64) {
    Timestamp::set_timestamp(secs * 1_000);
}

pub fn escrow() -> u64 {
    Vesting::account_id()
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_guarded_token::GenesisConfig::<Test> {
        owner: Some(DEPLOYER),
        token_name: b"Guarded Token".to_vec(),
        token_symbol: b"GRD".to_vec(),
        allocations: vec![TREASURY, TEAM, ECOSYSTEM, RESERVE],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        set_now(START);
    });
    ext
}

/// Grant created at `START` and funded with one allocation's worth of tokens.
pub fn funded_test_ext() -> sp_io::TestExternalities {
    let mut ext = new_test_ext();
    ext.execute_with(|| {
        Vesting::create_schedule(RuntimeOrigin::signed(DEPLOYER), BENEFICIARY, GRANT).unwrap();
        Token::transfer(RuntimeOrigin::signed(TEAM), escrow(), GRANT).unwrap();
    });
    ext
}
