use anyhow::Result;
use block_wallet::{
    api::Api,
    miner::Miner,
    peer::Peer,
    util::{execution, initialize_logger, termination, Config, Context},
};

#[macro_use]
extern crate log;

fn main() -> Result<()> {
    initialize_logger();

    info!("Starting up");

    termination::set_ctrlc_handler();

    let context = Context::new(Config::read());

    match context.wallet.address() {
        Some(address) => info!("Serving wallet {}", address),
        None => info!("No wallet configured, waiting for a login"),
    }

    let miner = Miner::new(&context);
    let api = Api::new(&context);
    let peer = Peer::new(&context);

    execution::run_supervised(vec![&miner, &api, &peer], termination::exit_on_failure)
}
