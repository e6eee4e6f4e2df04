use isahc::{AsyncBody, AsyncReadResponseExt, HttpClient, Request, Response};
use serde::Deserialize;

use crate::util::ClientConfig;

use super::{
    error::ClientError,
    state::{TransferRequest, WalletInfo},
};

/// The two node calls the wallet page makes.
#[allow(async_fn_in_trait)]
pub trait WalletBackend {
    async fn fetch_info(&self) -> Result<WalletInfo, ClientError>;

    /// Succeeds on any 2xx answer; the body is not inspected.
    async fn submit_transfer(&self, request: &TransferRequest) -> Result<(), ClientError>;
}

/// Reads a wallet-info body. Any JSON number is accepted as the balance.
pub fn parse_info(raw_body: &str) -> Result<WalletInfo, ClientError> {
    Ok(serde_json::from_str(raw_body)?)
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct HttpBackend {
    config: ClientConfig,
    client: HttpClient,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Result<HttpBackend, ClientError> {
        Ok(HttpBackend {
            config,
            client: HttpClient::new()?,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn check_status(
        mut response: Response<AsyncBody>,
    ) -> Result<Response<AsyncBody>, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let raw_body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&raw_body)
            .map(|body| body.message)
            .unwrap_or(raw_body);

        Err(ClientError::Status(status.as_u16(), message))
    }
}

impl WalletBackend for HttpBackend {
    async fn fetch_info(&self) -> Result<WalletInfo, ClientError> {
        let uri = self.config.info_url();
        debug!("GET {}", uri);

        let response = self.client.get_async(uri).await?;
        let mut response = HttpBackend::check_status(response).await?;

        let raw_body = response.text().await?;

        parse_info(&raw_body)
    }

    async fn submit_transfer(&self, request: &TransferRequest) -> Result<(), ClientError> {
        let uri = self.config.transactions_url();
        let body = serde_json::to_string(request)?;
        debug!("POST {} {}", uri, body);

        let request = Request::post(uri)
            .header("Content-Type", "application/json")
            .body(body)?;

        let response = self.client.send_async(request).await?;
        HttpBackend::check_status(response).await?;

        Ok(())
    }
}
