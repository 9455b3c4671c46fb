// Domain types and value objects
pub mod candle;
pub mod market_request;
pub mod strategy_params;

// Re-export commonly used types
pub use candle::Candle;
pub use market_request::MarketRequest;
pub use strategy_params::{ParamsError, StrategyParams};
