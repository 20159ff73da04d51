//! Solidity ABI definitions for the contracts used in integration tests

use ethers::prelude::abigen;

abigen!(
    FactoryContract,
    r#"[
        function onboardBrand(string memory id, string memory name, address admin, address royaltyRecipient) external returns (address)
        function brandNft(string memory id) external view returns (address)
    ]"#
);
