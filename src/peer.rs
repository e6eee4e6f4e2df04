use anyhow::Result;
use isahc::ReadResponseExt;
use thiserror::Error;

use crate::{
    api::ChainResponse,
    model::{BlockVec, Blockchain, NodeRegistry},
    util::{
        execution::{sleep_millis, Runnable},
        Context,
    },
};

#[derive(Error, Debug)]
pub enum PeerError {
    #[error("Peer `{0}` answered with status {1}")]
    UnexpectedStatus(String, u16),
}

/// Periodically adopts the longest valid chain among the registered peers.
pub struct Peer {
    self_url: String,
    peer_sync_ms: u64,
    blockchain: Blockchain,
    nodes: NodeRegistry,
}

impl Runnable for Peer {
    fn run(&self) -> Result<()> {
        self.start()
    }
}

impl Peer {
    pub fn new(context: &Context) -> Peer {
        Peer {
            self_url: context.config.self_url(),
            peer_sync_ms: context.config.peer_sync_ms,
            blockchain: context.blockchain.clone(),
            nodes: context.nodes.clone(),
        }
    }

    pub fn start(&self) -> Result<()> {
        info!("Start peer sync every {} ms", self.peer_sync_ms);

        loop {
            resolve_conflicts(&self.blockchain, &self.nodes, &self.self_url);
            sleep_millis(self.peer_sync_ms);
        }
    }
}

fn fetch_chain(node: &str) -> Result<BlockVec> {
    let mut response = isahc::get(format!("{}/chain", node))?;

    let status = response.status().as_u16();
    if status != 200 {
        return Err(PeerError::UnexpectedStatus(node.to_string(), status).into());
    }

    let raw_body = response.text()?;
    let chain: ChainResponse = serde_json::from_str(&raw_body)?;

    Ok(chain.chain)
}

/// Replaces the local chain with the longest valid peer chain that is longer
/// than ours. Unreachable peers and invalid chains are skipped.
pub fn resolve_conflicts(blockchain: &Blockchain, nodes: &NodeRegistry, self_url: &str) -> bool {
    let mut candidates: Vec<(String, BlockVec)> = nodes
        .all()
        .into_iter()
        .filter(|node| node != self_url)
        .filter_map(|node| match fetch_chain(&node) {
            Ok(chain) => Some((node, chain)),
            Err(err) => {
                warn!("Could not fetch chain from {}: {}", node, err);
                None
            }
        })
        .collect();

    candidates.sort_by(|(_, a), (_, b)| b.len().cmp(&a.len()));

    for (node, chain) in candidates {
        match blockchain.replace_chain(&chain) {
            Ok(true) => {
                info!("Added new peer block {} from {}", chain.len() - 1, node);
                return true;
            }
            // candidates are sorted, nothing shorter can win
            Ok(false) => return false,
            Err(err) => warn!("Rejected chain from {}: {}", node, err),
        }
    }

    false
}
