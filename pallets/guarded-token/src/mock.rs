use crate as pallet_guarded_token;
use frame_support::{
    derive_impl,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Token: pallet_guarded_token,
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

impl pallet_guarded_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

pub const OWNER: u64 = 1;
pub const TREASURY: u64 = 2;
pub const TEAM: u64 = 3;
pub const ECOSYSTEM: u64 = 4;
pub const RESERVE: u64 = 5;
/// An account with no genesis balance.
pub const OUTSIDER: u64 = 9;

/// One whole token.
pub const UNIT: u128 = 1_000_000_000_000_000_000;

pub fn genesis_allocations() -> Vec<u64> {
    vec![TREASURY, TEAM, ECOSYSTEM, RESERVE]
}

/// Build test externalities for the given owner and allocation accounts.
pub fn ext_with(owner: Option<u64>, allocations: Vec<u64>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_guarded_token::GenesisConfig::<Test> {
        owner,
        token_name: b"Guarded Token".to_vec(),
        token_symbol: b"GRD".to_vec(),
        allocations,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    ext_with(Some(OWNER), genesis_allocations())
}
