//! Trend indicators: moving averages, ADX, Parabolic SAR

pub mod adx;
pub mod moving_average;
pub mod parabolic_sar;

pub use adx::*;
pub use moving_average::*;
pub use parabolic_sar::*;
