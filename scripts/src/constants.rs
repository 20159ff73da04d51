//! Constants used in the deploy scripts

/// The ABI of the brand Factory contract
pub const FACTORY_ABI: &str = include_str!("../artifacts/Factory.abi");

/// The bytecode of the brand Factory contract
pub const FACTORY_BYTECODE: &str = include_str!("../artifacts/Factory.bin");

/// The number of confirmations to wait for the factory deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: usize = 1;

/// The factory contract key in the `deployments.json` file
pub const FACTORY_CONTRACT_KEY: &str = "factory_contract";
