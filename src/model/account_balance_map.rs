use std::collections::HashMap;

use anyhow::Result;
use thiserror::Error;

use super::address::Address;

#[derive(Error, PartialEq, Debug)]
pub enum AccountBalanceMapError {
    #[error("Sender account does not exist")]
    SenderAccountDoesNotExist,

    #[error("Insufficient funds")]
    InsufficientFunds,
}

#[derive(Debug, Default, Clone)]
pub struct AccountBalanceMap(HashMap<Address, u64>);

impl AccountBalanceMap {
    pub fn add_amount(&mut self, recipient: &Address, amount: u64) {
        let balance = self.get_recipient_balance(recipient);
        self.update_balance(recipient, balance + amount);
    }

    pub fn transfer(&mut self, sender: &Address, recipient: &Address, amount: u64) -> Result<()> {
        let sender_balance = self.get_sender_balance(sender)?;

        if sender_balance < amount {
            return Err(AccountBalanceMapError::InsufficientFunds.into());
        }

        self.update_balance(sender, sender_balance - amount);
        self.add_amount(recipient, amount);

        Ok(())
    }

    /// Balance of an account, zero for accounts never credited.
    pub fn balance_of(&self, account: &Address) -> u64 {
        self.get_recipient_balance(account)
    }

    fn update_balance(&mut self, account: &Address, new_balance: u64) {
        self.0.insert(account.clone(), new_balance);
    }

    fn get_sender_balance(&self, sender: &Address) -> Result<u64> {
        match self.0.get(sender) {
            Some(balance) => Ok(*balance),
            None => Err(AccountBalanceMapError::SenderAccountDoesNotExist.into()),
        }
    }

    fn get_recipient_balance(&self, recipient: &Address) -> u64 {
        self.0.get(recipient).copied().unwrap_or(0)
    }
}
