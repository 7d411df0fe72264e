pub mod columns;
pub mod rating;
pub mod registry;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use columns::*;
pub use rating::*;
pub use registry::*;
