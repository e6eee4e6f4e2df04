use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Wallet as reported by the wallet-info endpoint. The balance is kept as
/// the JSON number the node sent, integral or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub wallet: String,
    pub amount: Number,
}

/// What the page knows about its wallet. Loaded once per page load.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WalletState {
    #[default]
    Unloaded,
    Loaded(WalletInfo),
}

impl WalletState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, WalletState::Loaded(_))
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Loaded(info) => Some(&info.wallet),
            WalletState::Unloaded => None,
        }
    }
}

/// Body of `POST /transactions/new`. Recipient and amount are sent exactly as typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub sender: String,
    pub recipient: String,
    pub amount: String,
}
