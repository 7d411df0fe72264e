pub mod scanner;
pub mod transport;

pub use scanner::{Scanner, ScannerClient};
pub use transport::Transport;
