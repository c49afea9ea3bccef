//! Compiled contract artifacts as written by the contract build step.
//!
//! Both the Foundry layout (`bytecode.object`) and the flat Hardhat/Truffle
//! layout (`bytecode` as a hex string) are accepted.

use {
    alloy::{
        json_abi::JsonAbi,
        primitives::{Bytes, hex},
    },
    serde::Deserialize,
    std::path::{Path, PathBuf},
};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse artifact")]
    Json(#[from] serde_json::Error),
    #[error("artifact abi is empty")]
    EmptyAbi,
    #[error("artifact bytecode is empty")]
    EmptyBytecode,
    #[error("artifact bytecode is not valid hex, it might contain unlinked libraries")]
    InvalidBytecode(#[from] hex::FromHexError),
}

/// Interface description and creation bytecode of a compiled contract.
#[derive(Debug, Clone)]
pub struct Artifact {
    abi: JsonAbi,
    bytecode: Bytes,
}

#[derive(Deserialize)]
struct RawArtifact {
    abi: JsonAbi,
    bytecode: RawBytecode,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Object { object: String },
    Hex(String),
}

impl RawBytecode {
    fn as_str(&self) -> &str {
        match self {
            Self::Object { object } => object,
            Self::Hex(hex) => hex,
        }
    }
}

impl Artifact {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let json = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let raw: RawArtifact = serde_json::from_str(json)?;
        if raw.abi.is_empty() {
            return Err(ArtifactError::EmptyAbi);
        }
        let bytecode = hex::decode(raw.bytecode.as_str().trim())?;
        if bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode);
        }
        Ok(Self {
            abi: raw.abi,
            bytecode: bytecode.into(),
        })
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }
}
