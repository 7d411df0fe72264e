//! Momentum oscillators: RSI, Stochastic, CCI, AO, Momentum, MACD

pub mod awesome_oscillator;
pub mod cci;
pub mod macd;
pub mod mom;
pub mod rsi;
pub mod stochastic;

pub use awesome_oscillator::*;
pub use cci::*;
pub use macd::*;
pub use mom::*;
pub use rsi::*;
pub use stochastic::*;
