use std::{
    slice::Iter,
    sync::{Arc, Mutex},
};

use anyhow::Result;
use thiserror::Error;

use crate::util::lock;

use super::{
    account_balance_map::AccountBalanceMap,
    address::Address,
    block::{Block, BlockHash},
    transaction::Transaction,
};

pub type BlockVec = Vec<Block>;

type SyncedBlockVec = Arc<Mutex<BlockVec>>;
type SyncedAccountBalanceVec = Arc<Mutex<AccountBalanceMap>>;

pub const BLOCK_SUBSIDY: u64 = 100;

#[derive(Error, PartialEq, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum BlockchainError {
    #[error("Invalid index")]
    InvalidIndex,

    #[error("Invalid previous_hash")]
    InvalidPreviousHash,

    #[error("Invalid hash")]
    InvalidHash,

    #[error("Invalid difficulty")]
    InvalidDifficulty,

    #[error("Coinbase transaction not found")]
    CoinbaseTransactionNotFound,

    #[error("Invalid coinbase amount")]
    InvalidCoinbaseAmount,

    #[error("Invalid genesis block")]
    InvalidGenesisBlock,
}

#[derive(Debug, Clone)]
pub struct Blockchain {
    pub difficulty: u32,
    blocks: SyncedBlockVec,
    account_balances: SyncedAccountBalanceVec,
}

impl Blockchain {
    fn create_genesis_block() -> Block {
        let mut block = Block::new(0, 0, BlockHash::default(), Vec::new());

        block.timestamp = 0;
        block.hash = block.calculate_hash();

        block
    }

    pub fn new(difficulty: u32) -> Blockchain {
        let blocks = vec![Blockchain::create_genesis_block()];

        Blockchain {
            difficulty,
            blocks: Arc::new(Mutex::new(blocks)),
            account_balances: SyncedAccountBalanceVec::default(),
        }
    }

    pub fn get_last_block(&self) -> Block {
        let blocks = lock(&self.blocks);

        blocks[blocks.len() - 1].clone()
    }

    pub fn get_all_blocks(&self) -> BlockVec {
        lock(&self.blocks).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.blocks).len()
    }

    pub fn get_balance(&self, account: &Address) -> u64 {
        lock(&self.account_balances).balance_of(account)
    }

    fn process_coinbase(
        account_balances: &mut AccountBalanceMap,
        coinbase: Option<&Transaction>,
    ) -> Result<()> {
        let coinbase = match coinbase {
            Some(transaction) => transaction,
            None => return Err(BlockchainError::CoinbaseTransactionNotFound.into()),
        };

        if coinbase.amount != BLOCK_SUBSIDY {
            return Err(BlockchainError::InvalidCoinbaseAmount.into());
        }

        account_balances.add_amount(&coinbase.recipient, coinbase.amount);

        Ok(())
    }

    fn process_transfers(
        account_balances: &mut AccountBalanceMap,
        transaction_iter: Iter<Transaction>,
    ) -> Result<()> {
        for transaction in transaction_iter {
            account_balances.transfer(
                &transaction.sender,
                &transaction.recipient,
                transaction.amount,
            )?
        }

        Ok(())
    }

    fn calculate_new_account_balance(
        account_balances: &AccountBalanceMap,
        block: &Block,
    ) -> Result<AccountBalanceMap> {
        let mut new_account_balances = account_balances.clone();

        Blockchain::process_coinbase(&mut new_account_balances, block.coinbase())?;
        Blockchain::process_transfers(&mut new_account_balances, block.transfers().iter())?;

        Ok(new_account_balances)
    }

    fn validate_next_block(&self, last: &Block, block: &Block) -> Result<()> {
        if block.index != last.index + 1 {
            return Err(BlockchainError::InvalidIndex.into());
        }

        if block.previous_hash != last.hash {
            return Err(BlockchainError::InvalidPreviousHash.into());
        }

        if block.hash != block.calculate_hash() {
            return Err(BlockchainError::InvalidHash.into());
        }

        if block.hash.leading_zeros() < self.difficulty {
            return Err(BlockchainError::InvalidDifficulty.into());
        }

        Ok(())
    }

    pub fn add_block(&self, block: Block) -> Result<()> {
        let mut blocks = lock(&self.blocks);
        self.validate_next_block(&blocks[blocks.len() - 1], &block)?;

        let mut account_balances = lock(&self.account_balances);
        let new_account_balances =
            Blockchain::calculate_new_account_balance(&account_balances, &block)?;

        *account_balances = new_account_balances;
        blocks.push(block);

        Ok(())
    }

    /// Keeps the transfers that can be applied in order on top of the current
    /// balances once `coinbase` is credited. The rest are dropped.
    pub fn select_spendable(
        &self,
        coinbase: &Transaction,
        transactions: Vec<Transaction>,
    ) -> Vec<Transaction> {
        let mut balances = lock(&self.account_balances).clone();
        balances.add_amount(&coinbase.recipient, coinbase.amount);

        transactions
            .into_iter()
            .filter(|transaction| {
                let applied =
                    balances.transfer(&transaction.sender, &transaction.recipient, transaction.amount);

                if let Err(err) = &applied {
                    warn!(
                        "Dropping transaction of {} from {}: {}",
                        transaction.amount, transaction.sender, err
                    );
                }

                applied.is_ok()
            })
            .collect()
    }

    /// Replaces the local chain with `chain` when it is longer and valid from
    /// genesis onwards. Returns whether a replacement happened.
    pub fn replace_chain(&self, chain: &[Block]) -> Result<bool> {
        if chain.len() <= self.len() {
            return Ok(false);
        }

        let candidate = Blockchain::new(self.difficulty);
        match chain.first() {
            Some(genesis) if *genesis == candidate.get_last_block() => {}
            _ => return Err(BlockchainError::InvalidGenesisBlock.into()),
        }

        for block in &chain[1..] {
            candidate.add_block(block.clone())?;
        }

        let mut blocks = lock(&self.blocks);
        if chain.len() <= blocks.len() {
            return Ok(false);
        }

        let mut account_balances = lock(&self.account_balances);
        *blocks = candidate.get_all_blocks();
        *account_balances = lock(&candidate.account_balances).clone();

        Ok(true)
    }
}
