//! Definitions of errors that can occur during deployment of the contracts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors raised by the deploy scripts. The underlying SDK error is carried
/// verbatim in the variant payload.
#[derive(Debug)]
pub enum ScriptError {
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error parsing the contract artifacts
    ArtifactParsing(String),
    /// Error constructing contract calldata
    CalldataConstruction(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error interacting with a deployed contract
    ContractInteraction(String),
    /// Error reading from or writing to the deployments file
    DeploymentsFile(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(e) => write!(f, "error initializing client: {}", e),
            ScriptError::ArtifactParsing(e) => write!(f, "error parsing artifacts: {}", e),
            ScriptError::CalldataConstruction(e) => write!(f, "error constructing calldata: {}", e),
            ScriptError::ContractDeployment(e) => write!(f, "error deploying contract: {}", e),
            ScriptError::ContractInteraction(e) => {
                write!(f, "error interacting with contract: {}", e)
            }
            ScriptError::DeploymentsFile(e) => {
                write!(f, "error accessing deployments file: {}", e)
            }
        }
    }
}

impl Error for ScriptError {}

#[cfg(test)]
mod tests {
    use super::ScriptError;

    /// The underlying SDK error must surface verbatim in the display output
    #[test]
    fn test_underlying_error_surfaces_verbatim() {
        let err = ScriptError::ContractDeployment("insufficient funds".to_string());
        assert_eq!(err.to_string(), "error deploying contract: insufficient funds");
    }
}
