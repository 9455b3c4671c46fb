//! Configuration module for the crossover backtester.

pub mod strategy;
pub mod yahoo;

mod debug; // Private: use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod plot;

// Re-export commonly used items
pub use plot::PLOT_CONFIG;
pub use strategy::STRATEGY;
pub use yahoo::{YAHOO, YahooApiConfig};
