use crate as pallet_timelock_token;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use frame_system::EnsureRoot;
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

pub const OWNER: u64 = 1;
pub const ADMIN1: u64 = 2;
pub const ADMIN2: u64 = 3;
pub const USER1: u64 = 4;
pub const USER2: u64 = 5;
pub const NEW_ADMIN: u64 = 6;
/// Holds runtime-upgrade rights outside the pallet; has no token role.
pub const UPGRADE_KEY: u64 = 7;

pub const HOLD_DURATION: u64 = 12 * 60 * 60;
/// Genesis wall clock, in milliseconds.
pub const START_MS: u64 = 1_700_000_000_000;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Token: pallet_timelock_token,
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

parameter_types! {
    pub const HoldDuration: u64 = HOLD_DURATION;
    pub const MaxHoldMints: u32 = 8;
}

impl pallet_timelock_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Time = Timestamp;
    type HoldDuration = HoldDuration;
    type MaxHoldMints = MaxHoldMints;
    type InitializeOrigin = EnsureRoot<u64>;
    type WeightInfo = ();
}

fn build(token: pallet_timelock_token::GenesisConfig<Test>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    token.assimilate_storage(&mut t).unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        Timestamp::set_timestamp(START_MS);
    });
    ext
}

// Build genesis storage according to the mock runtime: an initialized token
// with zero supply, owner and both admin seats filled.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build(pallet_timelock_token::GenesisConfig::<Test> {
        token_name: b"EINR".to_vec(),
        token_symbol: b"EINR".to_vec(),
        decimals: 18,
        owner: Some(OWNER),
        admin1: Some(ADMIN1),
        admin2: Some(ADMIN2),
        initial_balances: vec![],
    })
}

/// A token whose `initialize` has not run yet.
pub fn new_uninitialized_ext() -> sp_io::TestExternalities {
    build(pallet_timelock_token::GenesisConfig::<Test>::default())
}

/// Move the wall clock forward by `secs` seconds.
pub fn advance_time(secs: u64) {
    let now = pallet_timestamp::Now::<Test>::get();
    Timestamp::set_timestamp(now + secs * 1_000);
}

/// Current wall clock in whole seconds.
pub fn now_secs() -> u64 {
    pallet_timestamp::Now::<Test>::get() / 1_000
}
