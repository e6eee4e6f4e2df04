//! Wallet page client: renders the node's wallet and submits transfers.

mod backend;
mod controller;
mod error;
mod state;
pub mod view;

pub use backend::{HttpBackend, WalletBackend};
pub use controller::{WalletController, NOT_LOADED_NOTICE, SUBMITTED_NOTICE};
pub use error::ClientError;
pub use state::{TransferRequest, WalletInfo, WalletState};
pub use view::{PageView, WalletView};
