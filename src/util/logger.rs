use env_logger::{Builder, Target};

/// Logs to stdout at info level unless `RUST_LOG` says otherwise.
pub fn initialize_logger() {
    let mut builder = Builder::from_default_env();
    builder.target(Target::Stdout);

    if std::env::var("RUST_LOG").is_err() {
        builder.filter(None, log::LevelFilter::Info);
    }

    let _ = builder.try_init();
}
