use anyhow::Result;
use block_wallet::{
    client::{view, HttpBackend, PageView, WalletController},
    util::{initialize_logger, ClientConfig},
};
use clap::{Parser, Subcommand};
use futures::executor::block_on;

/// Terminal wallet page for a block_wallet node.
#[derive(Parser)]
#[command(name = "wallet", version)]
struct Cli {
    /// Node base URL, overrides NODE_URL
    #[arg(long)]
    node: Option<String>,

    /// Wallet-info route, overrides INFO_PATH
    #[arg(long)]
    info_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the wallet address and balance
    Info,

    /// Send coins from the node's wallet
    Send {
        #[arg(long)]
        recipient: String,

        #[arg(long)]
        amount: String,
    },
}

fn main() -> Result<()> {
    initialize_logger();

    let cli = Cli::parse();

    let defaults = ClientConfig::read();
    let config = ClientConfig::new(
        cli.node.as_deref().unwrap_or(&defaults.node_url),
        cli.info_path.as_deref().unwrap_or(&defaults.info_path),
    );

    let mut page = PageView::new();
    if let Command::Send { recipient, amount } = &cli.command {
        page.fill(view::AMOUNT, amount);
        page.fill(view::RECIPIENT, recipient);
    }

    let mut controller = WalletController::new(HttpBackend::new(config)?, page);

    let outcome = block_on(async {
        let loaded = controller.initialize().await;

        match cli.command {
            Command::Send { .. } if loaded.is_ok() => controller.submit().await,
            _ => loaded,
        }
    });

    print!("{}", controller.view().render());

    Ok(outcome?)
}
