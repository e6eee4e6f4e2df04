use serde::{Deserialize, Serialize};

use super::address::Address;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub sender: Address,
    pub recipient: Address,
    pub amount: u64,
}

impl Transaction {
    pub fn new(sender: Address, recipient: Address, amount: u64) -> Transaction {
        Transaction {
            sender,
            recipient,
            amount,
        }
    }

    /// Newly minted coins, sent from the zero address.
    pub fn coinbase(recipient: Address, amount: u64) -> Transaction {
        Transaction::new(Address::default(), recipient, amount)
    }
}
