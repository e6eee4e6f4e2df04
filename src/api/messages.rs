use serde::{Deserialize, Serialize};

use crate::model::{Address, Block, BlockVec};

use super::error::ApiError;

/// Body of `GET /getInfo` (also served as `/info`).
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WalletInfoResponse {
    pub wallet: String,
    pub amount: u64,
}

/// The wallet page sends the amount as typed, so both `10` and `"10"` are accepted.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AmountValue {
    Number(u64),
    Text(String),
}

impl AmountValue {
    pub fn parse(&self) -> Result<u64, ApiError> {
        let amount = match self {
            AmountValue::Number(amount) => *amount,
            AmountValue::Text(text) => text
                .trim()
                .parse::<u64>()
                .map_err(|_| ApiError::InvalidAmount(text.clone()))?,
        };

        if amount == 0 {
            return Err(ApiError::InvalidAmount("0".to_string()));
        }

        Ok(amount)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRequest {
    pub sender: String,
    pub recipient: String,
    pub amount: AmountValue,
}

impl TransactionRequest {
    pub fn sender_address(&self) -> Result<Address, ApiError> {
        parse_address("sender", &self.sender)
    }

    pub fn recipient_address(&self) -> Result<Address, ApiError> {
        parse_address("recipient", &self.recipient)
    }
}

fn parse_address(field: &'static str, value: &str) -> Result<Address, ApiError> {
    value
        .parse()
        .map_err(|source| ApiError::InvalidAddress { field, source })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub keyword: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub wallet: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddressResponse {
    pub pubkey: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChainResponse {
    pub chain: BlockVec,
    pub length: usize,
}

impl ChainResponse {
    pub fn new(chain: BlockVec) -> ChainResponse {
        let length = chain.len();
        ChainResponse { chain, length }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterNodesRequest {
    pub nodes: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterNodesResponse {
    pub message: String,
    pub total_nodes: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResolveResponse {
    Replaced { message: String, new_chain: Vec<Block> },
    Authoritative { message: String, chain: Vec<Block> },
}
