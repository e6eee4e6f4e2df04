use std::process;

use anyhow::Error;

pub fn set_ctrlc_handler() {
    let result = ctrlc::set_handler(move || {
        info!("Received termination signal, shutting down");
        process::exit(0);
    });

    if let Err(err) = result {
        warn!("Could not install termination handler: {}", err);
    }
}

/// Stops the whole node once one of its runnables has failed.
pub fn exit_on_failure(err: &Error) {
    error!("Shutting down after failure: {:#}", err);
    process::exit(1);
}
