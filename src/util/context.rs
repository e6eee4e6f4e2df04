use crate::model::{Blockchain, NodeRegistry, NodeWallet, TransactionPool};

use super::config::Config;

/// State shared by the miner, the API and the peer sync of one node.
pub struct Context {
    pub config: Config,
    pub blockchain: Blockchain,
    pub pool: TransactionPool,
    pub wallet: NodeWallet,
    pub nodes: NodeRegistry,
}

impl Context {
    pub fn new(config: Config) -> Context {
        let blockchain = Blockchain::new(config.difficulty);
        let wallet = NodeWallet::from_keyword(config.wallet_keyword.as_deref());
        let nodes = NodeRegistry::new(&config.peers);

        Context {
            config,
            blockchain,
            pool: TransactionPool::new(),
            wallet,
            nodes,
        }
    }
}
