// API client module: contains a small blocking HTTP client that talks to
// the remote annotate endpoint. It is intentionally small and synchronous;
// a run makes exactly one token exchange and one annotate call.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::auth::{self, ServiceAccountKey};
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::feature::Feature;
use crate::images::ImagePayload;
use crate::vision::{AnnotateImageResponse, BatchAnnotateRequest, BatchAnnotateResponse};

/// Fixed application name sent on every outgoing call.
const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client bound to the annotate endpoint, holding the bearer token for
/// the lifetime of a run.
#[derive(Debug)]
pub struct VisionClient {
    client: Client,
    base_url: String,
    token: String,
}

impl VisionClient {
    /// Authenticate with the service-account key named by `config` and
    /// return a ready client.
    ///
    /// Requests carrying large images fail server-side when the body is
    /// compressed, so the client is built with compression disabled.
    pub fn connect(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .no_gzip()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let key = ServiceAccountKey::from_file(&config.credentials_path)?;
        let token = auth::fetch_access_token(&client, &key, auth::VISION_SCOPES)?;
        Ok(VisionClient {
            client,
            base_url: config.base_url.clone(),
            token: token.access_token,
        })
    }

    /// Helper to build the Authorization header map for the stored token.
    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let val = format!("Bearer {}", self.token);
        let val = HeaderValue::from_str(&val).map_err(|e| Error::Credential {
            message: format!("token is not a valid header value: {}", e),
        })?;
        headers.insert(AUTHORIZATION, val);
        Ok(headers)
    }

    /// Send one image with one feature as a single-element batch and
    /// return the first per-image result.
    pub fn annotate(&self, image: ImagePayload, feature: Feature) -> Result<AnnotateImageResponse> {
        let url = format!("{}/images:annotate", self.base_url);
        let body = BatchAnnotateRequest::single(image, feature);
        debug!("POST {} ({:?})", url, feature.kind);

        let res = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .json(&body)
            .send()?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            return Err(Error::Api {
                message: format!("annotate failed: {} - {}", status, txt),
            });
        }

        let batch: BatchAnnotateResponse = res.json()?;
        let first = batch.responses.into_iter().next().ok_or_else(|| Error::Api {
            message: "annotate response contained no results".into(),
        })?;
        if let Some(status) = first.error {
            return Err(Error::Api {
                message: format!("annotate rejected: {} (code {})", status.message, status.code),
            });
        }
        Ok(first)
    }
}
