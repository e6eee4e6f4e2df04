#[macro_use]
extern crate log;

pub mod api;
pub mod client;
pub mod miner;
pub mod model;
pub mod peer;
pub mod util;
