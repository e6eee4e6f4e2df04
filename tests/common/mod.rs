mod api;
mod server;

#[allow(unused_imports)]
pub use api::{Api, ALICE, BOB};
#[allow(unused_imports)]
pub use server::{Server, ServerBuilder};
