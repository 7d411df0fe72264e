//! Transport seam between the orchestrator and the network.

use async_trait::async_trait;
use reqwest::Method;

use crate::error::ScannerError;

/// Sends one serialized payload to the scanner and returns the raw body.
///
/// Implementations enforce their own timeout and never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: Method,
        payload: String,
        auth_needed: bool,
    ) -> Result<Vec<u8>, ScannerError>;
}
