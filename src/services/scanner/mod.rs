//! Scanner API client: HTTP transport and query orchestration.

pub mod client;
pub mod provider;

pub use client::ScannerClient;
pub use provider::{ticker, Scanner};
