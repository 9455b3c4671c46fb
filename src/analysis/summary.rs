use statrs::statistics::Statistics;

use crate::analysis::signals::Transition;
use crate::models::StrategyFrame;

/// Headline numbers for the console report and status bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestSummary {
    pub trading_days: usize,
    pub final_market_growth: f64,
    pub final_strategy_growth: f64,
    pub buys: usize,
    pub sells: usize,
    /// Share of days with the signal set, in percent
    pub days_in_market_pct: f64,
    pub market_daily_mean: f64,
    pub market_daily_std_dev: f64,
    pub strategy_daily_mean: f64,
    pub strategy_daily_std_dev: f64,
}

impl BacktestSummary {
    pub fn from_frame(frame: &StrategyFrame) -> Self {
        let count = |wanted: Transition| {
            frame
                .position
                .iter()
                .filter(|p| Transition::from_position(**p) == Some(wanted))
                .count()
        };

        let market: Vec<f64> = frame.daily_return.iter().flatten().copied().collect();
        let strategy: Vec<f64> = frame.strategy_return.iter().flatten().copied().collect();
        let in_market = frame.signal.iter().filter(|s| **s == 1).count();

        Self {
            trading_days: frame.len(),
            final_market_growth: frame.cumulative_market.last().copied().unwrap_or(1.0),
            final_strategy_growth: frame.cumulative_strategy.last().copied().unwrap_or(1.0),
            buys: count(Transition::Buy),
            sells: count(Transition::Sell),
            days_in_market_pct: percent(in_market, frame.len()),
            market_daily_mean: market.iter().mean(),
            market_daily_std_dev: market.iter().std_dev(),
            strategy_daily_mean: strategy.iter().mean(),
            strategy_daily_std_dev: strategy.iter().std_dev(),
        }
    }

    pub fn market_total_return_pct(&self) -> f64 {
        (self.final_market_growth - 1.0) * 100.0
    }

    pub fn strategy_total_return_pct(&self) -> f64 {
        (self.final_strategy_growth - 1.0) * 100.0
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::strategy_frame::tests::series_from_closes;

    #[test]
    fn test_summary_counts_and_growth() {
        // Up, down, up: short window 1 vs long window 2 crosses twice each way
        let closes = [10.0, 11.0, 12.0, 11.0, 10.0, 11.0, 12.0];
        let frame = StrategyFrame::build(&series_from_closes(&closes), 1, 2);
        let summary = BacktestSummary::from_frame(&frame);

        assert_eq!(summary.trading_days, 7);
        assert_eq!(frame.signal, vec![0, 1, 1, 0, 0, 1, 1]);
        assert_eq!(summary.buys, 2);
        assert_eq!(summary.sells, 1);
        assert!((summary.final_market_growth - 1.2).abs() < 1e-12);
        assert!((summary.market_total_return_pct() - 20.0).abs() < 1e-9);
        assert!((summary.days_in_market_pct - 4.0 / 7.0 * 100.0).abs() < 1e-9);
        assert!(summary.market_daily_std_dev > 0.0);
    }

    #[test]
    fn test_flat_prices_summary() {
        let frame = StrategyFrame::build(&series_from_closes(&[100.0; 10]), 3, 5);
        let summary = BacktestSummary::from_frame(&frame);
        assert_eq!(summary.final_market_growth, 1.0);
        assert_eq!(summary.final_strategy_growth, 1.0);
        assert_eq!(summary.buys + summary.sells, 0);
        assert_eq!(summary.market_daily_mean, 0.0);
    }
}
