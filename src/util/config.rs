extern crate dotenv;

use std::{env, str::FromStr};

use dotenv::dotenv;

use crate::model::Address;

type StringVec = Vec<String>;

pub const DEFAULT_INFO_PATH: &str = "/getInfo";

pub struct Config {
    // Network settings
    pub port: u16,

    // Peer settings
    pub peers: StringVec,
    pub peer_sync_ms: u64,

    // Miner settings
    pub max_blocks: u64,
    pub max_nonce: u64,
    pub difficulty: u32,
    pub transaction_waiting_ms: u64,
    pub miner_address: Address,

    // Wallet settings
    pub wallet_keyword: Option<String>,
}

/// Settings of the wallet page client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub node_url: String,
    pub info_path: String,
}

pub fn read_envvar<T: FromStr>(key: &str, default_value: T) -> T {
    match env::var(key) {
        Ok(value) => value.trim().parse::<T>().unwrap_or(default_value),
        Err(_) => default_value,
    }
}

pub fn read_vec_envvar(key: &str, separator: &str, default_value: StringVec) -> StringVec {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .split_terminator(separator)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
        Err(_) => default_value,
    }
}

/// Blank values count as unset.
pub fn read_optional_envvar(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    pub fn read() -> Config {
        dotenv().ok();

        Config {
            // Network settings
            port: read_envvar::<u16>("PORT", 8000),

            // Peer settings
            peers: read_vec_envvar("PEERS", ",", StringVec::default()),
            peer_sync_ms: read_envvar("PEER_SYNC_MS", 10000),

            // Miner settings
            max_blocks: read_envvar("MAX_BLOCKS", 0),
            max_nonce: read_envvar("MAX_NONCE", 1_000_000),
            difficulty: read_envvar("DIFFICULTY", 10),
            transaction_waiting_ms: read_envvar("TRANSACTION_WAITING_MS", 10000),
            miner_address: read_envvar("MINER_ADDRESS", Address::default()),

            // Wallet settings
            wallet_keyword: read_optional_envvar("WALLET_KEYWORD"),
        }
    }

    pub fn self_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

impl ClientConfig {
    pub fn new(node_url: &str, info_path: &str) -> ClientConfig {
        let info_path = info_path.trim();
        let info_path = if info_path.starts_with('/') {
            info_path.to_string()
        } else {
            format!("/{}", info_path)
        };

        ClientConfig {
            node_url: node_url.trim().trim_end_matches('/').to_string(),
            info_path,
        }
    }

    pub fn read() -> ClientConfig {
        dotenv().ok();

        let node_url = read_envvar("NODE_URL", "http://localhost:8000".to_string());
        let info_path = read_envvar("INFO_PATH", DEFAULT_INFO_PATH.to_string());

        ClientConfig::new(&node_url, &info_path)
    }

    pub fn info_url(&self) -> String {
        format!("{}{}", self.node_url, self.info_path)
    }

    pub fn transactions_url(&self) -> String {
        format!("{}/transactions/new", self.node_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::new("http://localhost:8000", DEFAULT_INFO_PATH)
    }
}
