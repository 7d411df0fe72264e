//! Unit tests for logging defaults

use tracing_subscriber::EnvFilter;
use tvscanner::logging::DEFAULT_LOG_FILTER;

#[test]
fn test_default_filter_targets_this_crate() {
    assert!(DEFAULT_LOG_FILTER.contains("tvscanner=info"));
    assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
}
