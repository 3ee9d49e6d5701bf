use reqwest::Response;
use url::Url;

use crate::core::StockClient;

/// Why a GET did not yield a successful response.
#[derive(Debug)]
pub(crate) enum Failure {
    /// No response was received at all.
    Transport(reqwest::Error),
    /// A response arrived with a non-success status. `body` is `None` when it could not be read.
    Status { status: u16, body: Option<String> },
}

/// Issues exactly one GET and returns the response only when its status is a success.
pub(crate) async fn get(client: &StockClient, url: Url, accept: &str) -> Result<Response, Failure> {
    #[cfg(feature = "tracing")]
    tracing::debug!(%url, "GET");

    let resp = client
        .http()
        .get(url.clone())
        .header(reqwest::header::ACCEPT, accept)
        .send()
        .await
        .map_err(Failure::Transport)?;

    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(%url, status = status.as_u16(), "non-success status");

    Err(Failure::Status {
        status: status.as_u16(),
        body: resp.text().await.ok(),
    })
}
