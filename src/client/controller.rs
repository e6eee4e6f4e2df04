use super::{
    backend::WalletBackend,
    error::ClientError,
    state::{TransferRequest, WalletState},
    view::WalletView,
};

/// Shown once a transfer has been accepted; the node mines it in the background.
pub const SUBMITTED_NOTICE: &str = "reload after 30seconds";

pub const NOT_LOADED_NOTICE: &str = "wallet not loaded yet";

/// Binds a wallet page to a node: loads the wallet when the page is ready and
/// submits a transfer on every click of `#send`.
pub struct WalletController<B, V> {
    backend: B,
    view: V,
    state: WalletState,
}

impl<B: WalletBackend, V: WalletView> WalletController<B, V> {
    pub fn new(backend: B, view: V) -> WalletController<B, V> {
        WalletController {
            backend,
            view,
            state: WalletState::Unloaded,
        }
    }

    pub fn state(&self) -> &WalletState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Page ready: fetch the wallet and render it. On failure the display
    /// fields stay blank and the wallet stays unloaded.
    pub async fn initialize(&mut self) -> Result<(), ClientError> {
        match self.backend.fetch_info().await {
            Ok(info) => {
                debug!("Loaded wallet {} with {}", info.wallet, info.amount);

                self.view.show_address(&info.wallet);
                self.view.show_balance(&info.amount);
                self.view.limit_amount(&info.amount);
                self.state = WalletState::Loaded(info);

                Ok(())
            }

            Err(err) => {
                warn!("Could not load wallet: {}", err);
                self.view.show_alert(&format!("wallet unavailable: {}", err));

                Err(err)
            }
        }
    }

    /// `#send` clicked. Every call sends its own request.
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        let sender = match self.state.address() {
            Some(address) => address.to_string(),
            None => {
                self.view.show_alert(NOT_LOADED_NOTICE);
                return Err(ClientError::WalletNotLoaded);
            }
        };

        let request = TransferRequest {
            sender,
            recipient: self.view.recipient_input(),
            amount: self.view.amount_input(),
        };
        debug!("Sending {} to {}", request.amount, request.recipient);

        match self.backend.submit_transfer(&request).await {
            Ok(()) => {
                self.view.show_alert(SUBMITTED_NOTICE);
                Ok(())
            }

            Err(err) => {
                warn!("Transfer failed: {}", err);
                self.view.show_alert(&format!("transaction failed: {}", err));
                Err(err)
            }
        }
    }
}
