//! Constants used in the integration tests

/// The default hostport that the Anvil devnet node runs on
pub(crate) const DEFAULT_DEVNET_HOSTPORT: &str = "http://localhost:8545";

/// The default private key that the Anvil devnet is seeded with
pub(crate) const DEFAULT_DEVNET_PKEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The NFT implementation address passed as the factory's first constructor
/// argument
pub(crate) const TEST_NFT_IMPLEMENTATION_ADDRESS: &str =
    "0xdD2FD4581271e230360230F9337D5c0430Bf44C0";

/// The marketplace address passed as the factory's second constructor argument
pub(crate) const TEST_MARKETPLACE_ADDRESS: &str = "0x8626f6940E2eb28930eFb4CeF49B2d1F2C9C1199";

/// The id of the brand onboarded in the onboarding test
pub(crate) const TEST_BRAND_ID: &str = "1";

/// The name of the brand onboarded in the onboarding test
pub(crate) const TEST_BRAND_NAME: &str = "Nike";

/// The admin address of the brand onboarded in the onboarding test
pub(crate) const TEST_BRAND_ADMIN_ADDRESS: &str = "0xbDA5747bFD65F08deb54cb465eB87D40e51B197E";

/// The royalty recipient address of the brand onboarded in the onboarding test
pub(crate) const TEST_BRAND_ROYALTY_RECIPIENT_ADDRESS: &str =
    "0xbDA5747bFD65F08deb54cb465eB87D40e51B197E";
