#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

use std::path::PathBuf;

// Re-export commonly used types
pub use analysis::BacktestSummary;
pub use data::{FetchError, fetch_ticker_data};
pub use domain::{Candle, MarketRequest, ParamsError, StrategyParams};
pub use models::{OhlcvTimeSeries, StrategyFrame};
pub use ui::BacktestApp;

use config::STRATEGY;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Backtest a simple moving average crossover on daily prices", long_about = None)]
pub struct Cli {
    /// Ticker symbol to backtest
    #[arg(long, default_value = STRATEGY.market.ticker)]
    pub ticker: String,

    /// First day of the range, inclusive (YYYY-MM-DD)
    #[arg(long, default_value = STRATEGY.market.start_date)]
    pub start: String,

    /// Last day of the range, exclusive (YYYY-MM-DD)
    #[arg(long, default_value = STRATEGY.market.end_date)]
    pub end: String,

    /// Short moving average window, in trading days
    #[arg(long, default_value_t = STRATEGY.windows.short_window)]
    pub short_window: usize,

    /// Long moving average window, in trading days
    #[arg(long, default_value_t = STRATEGY.windows.long_window)]
    pub long_window: usize,

    /// Read prices from a Yahoo-layout CSV file (Date,Open,High,Low,Close,Adj Close,Volume)
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// With --csv, try the API first and fall back to the file
    #[arg(long, default_value_t = false)]
    pub prefer_api: bool,

    /// Use unadjusted prices instead of dividend/split adjusted ones
    #[arg(long, default_value_t = false)]
    pub raw_close: bool,

    /// Print the console report and exit without opening chart windows
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,

    /// Number of rows printed per console table
    #[arg(long, value_name = "N", default_value_t = STRATEGY.report.head_rows)]
    pub show_rows: usize,
}

impl Cli {
    /// Validate the arguments before any network traffic.
    pub fn to_params(&self) -> Result<StrategyParams, ParamsError> {
        StrategyParams::new(
            &self.ticker,
            &self.start,
            &self.end,
            self.short_window,
            self.long_window,
            !self.raw_close,
        )
    }
}

/// Log filter read from `filter_var` (`RUST_LOG` in the binary), `info` when unset.
pub fn log_env(filter_var: &str) -> env_logger::Env<'_> {
    env_logger::Env::new().filter_or(filter_var, "info")
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    frame: StrategyFrame,
    summary: BacktestSummary,
    request: MarketRequest,
    data_source: &'static str,
) -> Box<dyn eframe::App> {
    let app = ui::BacktestApp::new(cc, frame, summary, request, data_source);
    Box::new(app)
}
