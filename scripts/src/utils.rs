//! Utilities for the deploy scripts.

use std::{fs, path::Path, str::FromStr, sync::Arc};

use ethers::{
    abi::Address,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
};
use serde_json::{json, Value};

use crate::errors::ScriptError;

/// A client signing with a local wallet over an HTTP provider
pub type LocalWalletHttpClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Sets up the client with which to deploy & interact with the contracts,
/// reading in the private key and RPC url.
pub async fn setup_client(
    priv_key: &str,
    rpc_url: &str,
) -> Result<Arc<LocalWalletHttpClient>, ScriptError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = LocalWallet::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .as_u64();

    Ok(Arc::new(SignerMiddleware::new(
        provider,
        wallet.with_chain_id(chain_id),
    )))
}

/// Parses the address deployed under the given key from the deployments file
pub fn parse_addr_from_deployments_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    let deployments = read_deployments_file(file_path)?;

    let addr_str = deployments
        .get(contract_key)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ScriptError::DeploymentsFile(format!("no `{}` entry in {}", contract_key, file_path))
        })?;

    Address::from_str(addr_str).map_err(|e| ScriptError::DeploymentsFile(e.to_string()))
}

/// Records the deployed address under the given key in the deployments file,
/// creating the file if it does not yet exist
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    let mut deployments = if Path::new(file_path).exists() {
        read_deployments_file(file_path)?
    } else {
        json!({})
    };

    deployments
        .as_object_mut()
        .ok_or_else(|| {
            ScriptError::DeploymentsFile(format!("{} is not a JSON object", file_path))
        })?
        .insert(contract_key.to_string(), json!(format!("{:#x}", address)));

    let serialized = serde_json::to_string_pretty(&deployments)
        .map_err(|e| ScriptError::DeploymentsFile(e.to_string()))?;

    fs::write(file_path, serialized).map_err(|e| ScriptError::DeploymentsFile(e.to_string()))
}

fn read_deployments_file(file_path: &str) -> Result<Value, ScriptError> {
    let raw =
        fs::read_to_string(file_path).map_err(|e| ScriptError::DeploymentsFile(e.to_string()))?;

    serde_json::from_str(&raw).map_err(|e| ScriptError::DeploymentsFile(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use ethers::abi::Address;

    use super::{parse_addr_from_deployments_file, write_deployed_address};
    use crate::{constants::FACTORY_CONTRACT_KEY, errors::ScriptError};

    #[test]
    fn test_deployments_file_round_trip() {
        let path = env::temp_dir().join("deployments_round_trip.json");
        let path = path.to_str().unwrap();
        let address = Address::from_low_u64_be(0xdef);

        write_deployed_address(path, FACTORY_CONTRACT_KEY, address).unwrap();
        let parsed = parse_addr_from_deployments_file(path, FACTORY_CONTRACT_KEY).unwrap();
        assert_eq!(parsed, address);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_deployments_file_preserves_existing_entries() {
        let path = env::temp_dir().join("deployments_existing_entries.json");
        let path = path.to_str().unwrap();
        fs::write(
            path,
            r#"{ "marketplace_contract": "0x8626f6940e2eb28930efb4cef49b2d1f2c9c1199" }"#,
        )
        .unwrap();

        let address = Address::from_low_u64_be(0xdef);
        write_deployed_address(path, FACTORY_CONTRACT_KEY, address).unwrap();

        let factory_addr = parse_addr_from_deployments_file(path, FACTORY_CONTRACT_KEY).unwrap();
        let marketplace_addr =
            parse_addr_from_deployments_file(path, "marketplace_contract").unwrap();
        assert_eq!(factory_addr, address);
        assert!(!marketplace_addr.is_zero());

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_contract_key() {
        let path = env::temp_dir().join("deployments_missing_key.json");
        let path = path.to_str().unwrap();
        fs::write(path, "{}").unwrap();

        let err = parse_addr_from_deployments_file(path, FACTORY_CONTRACT_KEY).unwrap_err();
        assert!(matches!(err, ScriptError::DeploymentsFile(_)));

        fs::remove_file(path).unwrap();
    }
}
