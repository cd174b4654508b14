use reqwest::{Client, Method};
use serde_json::Value;

use crate::error::PanelError;

/// HTTP client for the automation backend.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, PanelError> {
        let client = Client::builder()
            .user_agent(format!("deploy-panel/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request and decode the reply body as JSON.
    ///
    /// The HTTP status is not inspected: error replies carry JSON bodies the
    /// caller interprets like any other.
    pub async fn call(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        params: &[(&str, &str)],
    ) -> Result<Value, PanelError> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::info!(%method, %url, ?params, ?body, "Backend request");

        let mut req = self.client.request(method, &url);
        if !params.is_empty() {
            req = req.query(params);
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        let value: Value = serde_json::from_slice(&bytes)?;
        tracing::debug!(%status, response = %value, "Backend response");
        Ok(value)
    }
}
