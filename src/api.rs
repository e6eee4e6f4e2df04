mod error;
mod handlers;
mod messages;

use actix_web::{rt::System, web, App, HttpServer};
use anyhow::Result;

use crate::{
    model::{Blockchain, NodeRegistry, NodeWallet, TransactionPool},
    util::{execution::Runnable, Context},
};

pub use error::ApiError;
pub use messages::{ChainResponse, TransactionRequest, WalletInfoResponse};

/// Handles shared with every request handler.
#[derive(Clone)]
pub struct ApiState {
    pub blockchain: Blockchain,
    pub pool: TransactionPool,
    pub wallet: NodeWallet,
    pub nodes: NodeRegistry,
    pub self_url: String,
}

pub struct Api {
    port: u16,
    state: ApiState,
}

impl Runnable for Api {
    fn run(&self) -> Result<()> {
        let system = System::new();
        system.block_on(self.start())?;

        Ok(())
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::InvalidBody(err.to_string()).into())
}

impl Api {
    pub fn new(context: &Context) -> Api {
        Api {
            port: context.config.port,
            state: ApiState {
                blockchain: context.blockchain.clone(),
                pool: context.pool.clone(),
                wallet: context.wallet.clone(),
                nodes: context.nodes.clone(),
                self_url: context.config.self_url(),
            },
        }
    }

    async fn start(&self) -> std::io::Result<()> {
        let state = web::Data::new(self.state.clone());

        info!("Starting API on port {}", self.port);

        HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .app_data(json_config())
                .configure(handlers::configure)
        })
        .bind(("0.0.0.0", self.port))?
        .run()
        .await
    }
}
