use std::sync::{Arc, Mutex};

use crate::util::lock;

use super::address::Address;

/// The single wallet a node serves to its wallet page.
///
/// Empty until someone logs in with a keyword; a new login replaces the
/// previous wallet.
#[derive(Debug, Clone, Default)]
pub struct NodeWallet {
    address: Arc<Mutex<Option<Address>>>,
}

impl NodeWallet {
    pub fn new() -> NodeWallet {
        NodeWallet::default()
    }

    pub fn from_keyword(keyword: Option<&str>) -> NodeWallet {
        let wallet = NodeWallet::new();

        if let Some(keyword) = keyword {
            wallet.login(keyword);
        }

        wallet
    }

    pub fn login(&self, keyword: &str) -> Address {
        let address = Address::from_keyword(keyword);
        *lock(&self.address) = Some(address.clone());

        info!("Wallet {} logged in", address);

        address
    }

    pub fn address(&self) -> Option<Address> {
        lock(&self.address).clone()
    }
}
