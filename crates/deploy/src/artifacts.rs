//! Compiled contract artifact loading
//!
//! The Solidity build is external; the deploy tool consumes its artifact
//! JSON. Both hardhat-style (`"bytecode": "0x..."`) and foundry-style
//! (`"bytecode": {"object": "0x..."}`) files are accepted.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// The contract names the deploy tool expects, in dependency order
pub const CONTRACT_NAMES: [&str; 4] = ["Profiles", "Posts", "Comments", "Follow"];

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BytecodeField {
    Plain(String),
    Object { object: String },
}

impl BytecodeField {
    fn hex(&self) -> &str {
        match self {
            Self::Plain(s) => s,
            Self::Object { object } => object,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawArtifact {
    bytecode: BytecodeField,
}

/// A loaded contract artifact, ready to deploy
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    /// Contract name (matches the artifact file stem)
    pub name: String,
    /// Creation bytecode
    pub bytecode: Vec<u8>,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON text
    pub fn from_json(name: &str, json: &str) -> Result<Self> {
        let raw: RawArtifact = serde_json::from_str(json)
            .with_context(|| format!("Failed to parse {} artifact", name))?;

        let hex_str = raw.bytecode.hex().trim_start_matches("0x");
        if hex_str.is_empty() {
            return Err(anyhow!("{} artifact has empty bytecode", name));
        }
        let bytecode = hex::decode(hex_str)
            .with_context(|| format!("{} artifact bytecode is not valid hex", name))?;

        Ok(Self {
            name: name.to_string(),
            bytecode,
        })
    }

    /// Load `<dir>/<name>.json`
    pub fn load(dir: &Path, name: &str) -> Result<Self> {
        let path = dir.join(format!("{}.json", name));
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read artifact {}", path.display()))?;
        Self::from_json(name, &json)
    }
}

/// Load all four BaseLine artifacts from a directory
pub fn load_all(dir: &Path) -> Result<Vec<ContractArtifact>> {
    CONTRACT_NAMES
        .iter()
        .map(|name| ContractArtifact::load(dir, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hardhat_style_bytecode() {
        let artifact =
            ContractArtifact::from_json("Posts", r#"{"abi": [], "bytecode": "0x6080604052"}"#)
                .unwrap();
        assert_eq!(artifact.name, "Posts");
        assert_eq!(artifact.bytecode, vec![0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn test_foundry_style_bytecode() {
        let artifact = ContractArtifact::from_json(
            "Follow",
            r#"{"bytecode": {"object": "0x60806040", "sourceMap": ""}}"#,
        )
        .unwrap();
        assert_eq!(artifact.bytecode, vec![0x60, 0x80, 0x60, 0x40]);
    }

    #[test]
    fn test_empty_bytecode_rejected() {
        assert!(ContractArtifact::from_json("Posts", r#"{"bytecode": "0x"}"#).is_err());
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert!(ContractArtifact::from_json("Posts", r#"{"bytecode": "0xzz"}"#).is_err());
    }
}
