use anyhow::Result;
use thiserror::Error;

use crate::{
    model::{
        Address, Block, BlockHash, Blockchain, Transaction, TransactionPool, TransactionVec,
        BLOCK_SUBSIDY,
    },
    util::{
        execution::{sleep_millis, Runnable},
        Context,
    },
};

#[derive(Error, Debug)]
pub enum MinerError {
    #[error("No valid block was mined at index `{0}`")]
    BlockNotMined(u64),
}

/// Seals pending transactions into proof-of-work blocks paying the miner
/// a coinbase of [`BLOCK_SUBSIDY`].
pub struct Miner {
    miner_address: Address,
    max_blocks: u64,
    max_nonce: u64,
    transaction_waiting_ms: u64,
    blockchain: Blockchain,
    pool: TransactionPool,
    target: BlockHash,
}

impl Runnable for Miner {
    fn run(&self) -> Result<()> {
        self.start()
    }
}

impl Miner {
    fn create_target(difficulty: u32) -> BlockHash {
        BlockHash::MAX >> difficulty
    }

    pub fn new(context: &Context) -> Miner {
        Miner {
            miner_address: context.config.miner_address.clone(),
            max_blocks: context.config.max_blocks,
            max_nonce: context.config.max_nonce,
            transaction_waiting_ms: context.config.transaction_waiting_ms,
            blockchain: context.blockchain.clone(),
            pool: context.pool.clone(),
            target: Self::create_target(context.config.difficulty),
        }
    }

    fn must_stop_mining(&self, block_counter: u64) -> bool {
        self.max_blocks > 0 && block_counter >= self.max_blocks
    }

    fn create_coinbase_transaction(&self) -> Transaction {
        Transaction::coinbase(self.miner_address.clone(), BLOCK_SUBSIDY)
    }

    fn create_next_block(
        &self,
        last_block: &Block,
        transactions: TransactionVec,
        nonce: u64,
    ) -> Block {
        Block::new(last_block.index + 1, nonce, last_block.hash, transactions)
    }

    fn mine_block(&self, last_block: &Block, transactions: TransactionVec) -> Option<Block> {
        let coinbase = self.create_coinbase_transaction();
        let mut block_transactions = self.blockchain.select_spendable(&coinbase, transactions);
        block_transactions.insert(0, coinbase);

        (0..self.max_nonce)
            .map(|nonce| self.create_next_block(last_block, block_transactions.clone(), nonce))
            .find(|block| block.hash < self.target)
    }

    pub fn start(&self) -> Result<()> {
        info!("Start mining with difficulty {}", self.blockchain.difficulty);

        let mut block_counter = 0;

        loop {
            if self.must_stop_mining(block_counter) {
                info!("Block limit reached, stopping mining");

                return Ok(());
            }

            let transactions = self.pool.pop();

            if transactions.is_empty() {
                sleep_millis(self.transaction_waiting_ms);

                continue;
            }

            let last_block = self.blockchain.get_last_block();

            if self.mine_and_append(&last_block, transactions)? {
                block_counter += 1;
            }
        }
    }

    /// Mines the next block on top of `last_block` and appends it. When the
    /// chain moved on meanwhile, its transfers go back to the pool and
    /// `false` is returned.
    fn mine_and_append(&self, last_block: &Block, transactions: TransactionVec) -> Result<bool> {
        let block = match self.mine_block(last_block, transactions) {
            Some(block) => block,
            None => {
                let index = last_block.index + 1;
                error!("No valid block was found for index {}", index);

                return Err(MinerError::BlockNotMined(index).into());
            }
        };

        let index = block.index;
        let transfers = block.transfers().to_vec();

        // a peer chain or a posted block may have landed while we were mining
        if let Err(err) = self.blockchain.add_block(block) {
            warn!("Mined block {} was not added: {}", index, err);
            self.pool.requeue(transfers);

            return Ok(false);
        }

        info!("Valid block found for index {}", index);

        Ok(true)
    }
}
