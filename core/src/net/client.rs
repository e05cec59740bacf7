//! Authenticated catalog client.
//!
//! One GET per call, no retries. The body is streamed chunk by chunk into a
//! [`ResponseBuffer`] and decoded only after the status was checked and the
//! stream ended.

use reqwest::header::{AUTHORIZATION, HeaderValue};

use romm_shared::{Catalog, PLATFORMS_PATH, Platform, ROMS_PATH, Rom};

use super::auth::basic_authorization;
use super::response::ResponseBuffer;
use crate::catalog::{decode_platforms, decode_roms};
use crate::config::{NetworkConfig, ServerConfig};
use crate::error::CatalogError;

/// Bytes of an undecodable body echoed to the debug log.
const DIAGNOSTIC_PREFIX: usize = 256;

/// Client for the catalog endpoints of one server.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    authorization: HeaderValue,
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl CatalogClient {
    /// Creates a client for `server`.
    ///
    /// Fails before any network I/O if the URL is empty or the credential
    /// cannot be encoded.
    pub fn new(server: &ServerConfig, network: &NetworkConfig) -> Result<Self, CatalogError> {
        if server.url.is_empty() {
            return Err(CatalogError::EmptyServerUrl);
        }
        let authorization = basic_authorization(&server.username, &server.password)?;

        let http = reqwest::Client::builder()
            .connect_timeout(network.connect_timeout())
            .timeout(network.request_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: server.url.trim_end_matches('/').to_string(),
            authorization,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches and decodes every platform.
    pub async fn fetch_platforms(&self) -> Result<Catalog<Platform>, CatalogError> {
        let body = self.get(PLATFORMS_PATH).await?;
        let platforms = decode_platforms(body.content()).inspect_err(|_| log_body(&body))?;
        tracing::info!("Fetched {} platforms", platforms.len());
        Ok(Catalog::new(platforms))
    }

    /// Fetches and decodes the ROMs of one platform.
    pub async fn fetch_roms(&self, platform_id: i64) -> Result<Catalog<Rom>, CatalogError> {
        let path = format!("{}?platform_id={}", ROMS_PATH, platform_id);
        let body = self.get(&path).await?;
        let roms = decode_roms(body.content()).inspect_err(|_| log_body(&body))?;
        tracing::info!("Fetched {} ROMs for platform {}", roms.len(), platform_id);
        Ok(Catalog::new(roms))
    }

    async fn get(&self, path: &str) -> Result<ResponseBuffer, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let mut response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, self.authorization.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("GET {} failed with HTTP {}", url, status);
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let mut body = ResponseBuffer::new()?;
        while let Some(chunk) = response.chunk().await? {
            body.append(&chunk)?;
        }
        tracing::debug!("GET {} returned {} bytes", url, body.size());
        Ok(body)
    }
}

/// Start of an undecodable body, cut at a character boundary.
fn body_prefix(body: &ResponseBuffer) -> String {
    body.as_text().chars().take(DIAGNOSTIC_PREFIX).collect()
}

fn log_body(body: &ResponseBuffer) {
    tracing::debug!(
        "Undecodable body ({} bytes): {:?}",
        body.size(),
        body_prefix(body)
    );
}

/// Fetches every platform from `server_base_url` with Basic-Auth.
pub async fn fetch_platforms(
    server_base_url: &str,
    username: &str,
    password: &str,
) -> Result<Catalog<Platform>, CatalogError> {
    let server = ServerConfig {
        url: server_base_url.to_string(),
        username: username.to_string(),
        password: password.to_string(),
    };
    CatalogClient::new(&server, &NetworkConfig::default())?
        .fetch_platforms()
        .await
}

/// Blocking form of [`fetch_platforms`].
///
/// Runs the request on a private current-thread runtime. Must not be called
/// from inside another tokio runtime.
pub fn fetch_platforms_blocking(
    server_base_url: &str,
    username: &str,
    password: &str,
) -> Result<Catalog<Platform>, CatalogError> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CatalogError::Runtime)?;

    rt.block_on(fetch_platforms(server_base_url, username, password))
}
