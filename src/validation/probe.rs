use async_trait::async_trait;
use reqwest::redirect::Policy;

use crate::config::Config;
use crate::core::constants::error_messages;
use crate::core::error::{LinkCheckError, Result};
use crate::core::types::LinkStatus;
use crate::reporting::logging;

/// Liveness check for a single, already well-formed link.
///
/// Implementations must never fail the scan: every outcome, including
/// transport failures, is folded into a [`LinkStatus`].
#[async_trait]
pub trait ProbeLink: Send + Sync {
    async fn probe(&self, url: &str) -> LinkStatus;
}

/// Probes links with one HTTP `HEAD` request each, following redirects.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    /// Build a probe from configuration (timeout, redirects, proxy, TLS).
    pub fn from_config(config: &Config) -> Result<Self> {
        let redirect_policy = match config.redirect_limit() {
            0 => Policy::none(),
            n => Policy::limited(n),
        };

        let mut client_builder = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(redirect_policy)
            .user_agent(config.user_agent_or_default());

        if config.skip_ssl_verification.unwrap_or(false) {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_url) = config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| {
                LinkCheckError::Config(format!("Invalid proxy URL '{proxy_url}': {e}"))
            })?;
            client_builder = client_builder.proxy(proxy);
        }

        let client = client_builder.build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn describe_error(err: &reqwest::Error) -> String {
        // hyper wraps the OS error in several generic layers; the last source says what happened
        let description = std::iter::successors(std::error::Error::source(err), |e| e.source())
            .last()
            .map(|e| e.to_string())
            .unwrap_or_else(|| err.to_string());

        if description.trim().is_empty() {
            error_messages::UNKNOWN_ERROR.to_string()
        } else {
            description
        }
    }
}

#[async_trait]
impl ProbeLink for HttpProbe {
    async fn probe(&self, url: &str) -> LinkStatus {
        match self.client.head(url.trim()).send().await {
            Ok(response) => {
                let code = response.status().as_u16();
                logging::log_probe_response(url, code);
                LinkStatus::from_status_code(code)
            }
            Err(err) => {
                let description = Self::describe_error(&err);
                logging::log_probe_failure(url, &description);
                LinkStatus::TransportError(description)
            }
        }
    }
}
