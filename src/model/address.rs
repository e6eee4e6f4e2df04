use std::{fmt, str::FromStr};

use crypto::{digest::Digest, sha2::Sha256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

type Byte = u8;
const LEN: usize = 32;

#[derive(Error, PartialEq, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum AddressError {
    #[error("Invalid format")]
    InvalidFormat,
    #[error("Invalid length")]
    InvalidLength,
}

/// Wallet address: 32 bytes, hex encoded on the wire.
///
/// The all-zero address is the sender of coinbase transactions.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Address([Byte; LEN]);

impl Address {
    /// Derives the wallet address a login keyword maps to (SHA-256 of the keyword).
    pub fn from_keyword(keyword: &str) -> Address {
        let mut digest = [0u8; LEN];
        let mut hasher = Sha256::new();

        hasher.input_str(keyword);
        hasher.result(&mut digest);

        Address(digest)
    }

    pub fn is_coinbase(&self) -> bool {
        self.0.iter().all(|byte| *byte == 0)
    }
}

impl TryFrom<Vec<Byte>> for Address {
    type Error = AddressError;

    fn try_from(vec: Vec<Byte>) -> Result<Self, Self::Error> {
        let byte_array: [Byte; LEN] = vec
            .as_slice()
            .try_into()
            .map_err(|_| AddressError::InvalidLength)?;

        Ok(Address(byte_array))
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        let decoded = hex::decode(string.trim()).map_err(|_| AddressError::InvalidFormat)?;
        decoded.try_into()
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Address::try_from(string.to_string())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl From<Address> for String {
    fn from(account: Address) -> Self {
        account.to_string()
    }
}
