// Data models
pub mod strategy_frame;
pub mod timeseries;

// Re-export commonly used types
pub use strategy_frame::{StrategyFrame, TransitionRow};
pub use timeseries::OhlcvTimeSeries;
