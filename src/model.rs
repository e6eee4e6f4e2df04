mod account_balance_map;
mod address;
mod block;
mod blockchain;
mod node_registry;
mod transaction;
mod transaction_pool;
mod wallet;

pub use account_balance_map::AccountBalanceMapError;
pub use address::{Address, AddressError};
pub use block::{Block, BlockHash};
pub use blockchain::{BlockVec, Blockchain, BlockchainError, BLOCK_SUBSIDY};
pub use node_registry::NodeRegistry;
pub use transaction::Transaction;
pub use transaction_pool::{TransactionPool, TransactionVec};
pub use wallet::NodeWallet;

#[cfg(test)]
pub use address::test_person_util;
