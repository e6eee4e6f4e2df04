pub mod config;
pub mod context;
pub mod execution;
pub mod logger;
pub mod sync;
pub mod termination;

pub use config::{ClientConfig, Config};
pub use context::Context;
pub use logger::initialize_logger;
pub use sync::lock;
