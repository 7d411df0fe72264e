//! HTTP transport for the scanner API

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::ScannerConfig;
use crate::error::ScannerError;
use crate::services::transport::Transport;

const API_POSTFIX: &str = "scan";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=utf-8";

pub struct ScannerClient {
    http: Client,
    endpoint: Url,
    timeout: Duration,
    user_agent: String,
    debug: bool,
}

impl ScannerClient {
    pub fn new(config: &ScannerConfig) -> Result<Self, ScannerError> {
        Self::with_client(config, Client::new())
    }

    /// Use a preconfigured `reqwest::Client`. The exchange is still bounded
    /// by `config.timeout`.
    pub fn with_client(config: &ScannerConfig, http: Client) -> Result<Self, ScannerError> {
        let endpoint = Url::parse(&config.base_url)?
            .join(&format!("{}/", config.screener))?
            .join(API_POSTFIX)?;

        Ok(Self {
            http,
            endpoint,
            timeout: config.timeout,
            user_agent: config.user_agent.clone(),
            debug: config.debug,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn execute(&self, method: Method, payload: String) -> Result<Vec<u8>, ScannerError> {
        if self.debug {
            debug!(url = %self.endpoint, method = %method, body = %payload, "dumpReq");
        }

        let mut request = self
            .http
            .request(method.clone(), self.endpoint.clone())
            .header("DNT", "1")
            .header(USER_AGENT, &self.user_agent);
        if method == Method::POST || method == Method::PUT {
            request = request.header(CONTENT_TYPE, FORM_CONTENT_TYPE);
        }

        let response = request.body(payload).send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if self.debug {
            debug!(
                status = %status,
                body = %String::from_utf8_lossy(&body),
                "dumpResponse"
            );
        }

        if status != StatusCode::OK && status != StatusCode::CREATED {
            return Err(ScannerError::Status { status, body });
        }

        Ok(body)
    }
}

#[async_trait]
impl Transport for ScannerClient {
    async fn send(
        &self,
        method: Method,
        payload: String,
        auth_needed: bool,
    ) -> Result<Vec<u8>, ScannerError> {
        if auth_needed {
            debug!("Scanner endpoint is public, ignoring authentication request");
        }

        match tokio::time::timeout(self.timeout, self.execute(method, payload)).await {
            Ok(result) => result,
            Err(_) => Err(ScannerError::Timeout(self.timeout)),
        }
    }
}
