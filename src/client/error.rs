use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("wallet not loaded yet")]
    WalletNotLoaded,

    #[error("node unreachable: {0}")]
    Http(#[from] isahc::Error),

    #[error("invalid request: {0}")]
    Request(#[from] isahc::http::Error),

    #[error("node answered {0}: {1}")]
    Status(u16, String),

    #[error("unreadable response: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
}
