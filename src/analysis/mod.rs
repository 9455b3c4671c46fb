// Indicator, signal and backtest computations over the close column
pub mod backtest;
pub mod moving_average;
pub mod signals;
pub mod summary;

pub use signals::Transition;
pub use summary::BacktestSummary;
