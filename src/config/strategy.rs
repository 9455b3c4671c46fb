//! Strategy and report defaults. Every value here can be overridden from the command line.

/// Which instrument and period to study
pub struct MarketSelection {
    pub ticker: &'static str,
    /// ISO `YYYY-MM-DD`, inclusive
    pub start_date: &'static str,
    /// ISO `YYYY-MM-DD`, exclusive (provider convention)
    pub end_date: &'static str,
}

/// Moving average lookbacks, in trading days
pub struct WindowSettings {
    pub short_window: usize,
    pub long_window: usize,
}

/// Console output
pub struct ReportSettings {
    /// Rows printed from the head of the raw table and of the signal table
    pub head_rows: usize,
}

/// The Master Strategy Configuration
pub struct StrategyConfig {
    pub market: MarketSelection,
    pub windows: WindowSettings,
    pub report: ReportSettings,
}

pub const STRATEGY: StrategyConfig = StrategyConfig {
    market: MarketSelection {
        ticker: "AAPL",
        start_date: "2018-01-01",
        end_date: "2023-01-01",
    },
    windows: WindowSettings {
        short_window: 40,
        long_window: 100,
    },
    report: ReportSettings { head_rows: 5 },
};
