use chrono::NaiveDate;

use crate::analysis::signals::{self, Transition};
use crate::analysis::{backtest, moving_average};
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::models::OhlcvTimeSeries;

// ============================================================================
// StrategyFrame: the close column plus every derived column, row-aligned
// ============================================================================

/// Row `i` of every column describes `dates[i]`. All derived columns are pure
/// functions of `close` and the two window sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyFrame {
    pub symbol: String,
    pub short_window: usize,
    pub long_window: usize,

    pub dates: Vec<NaiveDate>,
    pub close: Vec<f64>,

    // Indicators
    pub short_ma: Vec<f64>,
    pub long_ma: Vec<f64>,

    // Signal: 1 in market, 0 out. Position: signal[i] - signal[i-1]
    pub signal: Vec<u8>,
    pub position: Vec<Option<i8>>,

    // Backtest
    pub daily_return: Vec<Option<f64>>,
    pub strategy_return: Vec<Option<f64>>,
    pub cumulative_market: Vec<f64>,
    pub cumulative_strategy: Vec<f64>,
}

/// One crossover row, for reports and chart markers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRow {
    pub index: usize,
    pub date: NaiveDate,
    pub close: f64,
    pub transition: Transition,
}

impl StrategyFrame {
    pub fn build(series: &OhlcvTimeSeries, short_window: usize, long_window: usize) -> Self {
        let close = series.close_prices.clone();

        let short_ma = moving_average::trailing_mean(&close, short_window);
        let long_ma = moving_average::trailing_mean(&close, long_window);

        let signal = signals::crossover_signal(&short_ma, &long_ma);
        let position = signals::positions(&signal);

        let daily_return = backtest::pct_change(&close);
        let strategy_return = backtest::lagged_strategy_returns(&daily_return, &signal);
        let cumulative_market = backtest::cumulative_returns(&daily_return);
        let cumulative_strategy = backtest::cumulative_returns(&strategy_return);

        let frame = StrategyFrame {
            symbol: series.symbol.clone(),
            short_window,
            long_window,
            dates: series.dates.clone(),
            close,
            short_ma,
            long_ma,
            signal,
            position,
            daily_return,
            strategy_return,
            cumulative_market,
            cumulative_strategy,
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_crossovers {
            for row in frame.transitions() {
                log::info!(
                    "{} {} at {:.2} (row {})",
                    row.date,
                    row.transition,
                    row.close,
                    row.index
                );
            }
        }

        frame
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Rows where the position is defined and non-zero, in date order.
    pub fn transitions(&self) -> impl Iterator<Item = TransitionRow> + '_ {
        self.position.iter().enumerate().filter_map(|(index, p)| {
            Transition::from_position(*p).map(|transition| TransitionRow {
                index,
                date: self.dates[index],
                close: self.close[index],
                transition,
            })
        })
    }

    pub fn transitions_of(&self, wanted: Transition) -> impl Iterator<Item = TransitionRow> + '_ {
        self.transitions().filter(move |row| row.transition == wanted)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::{Candle, MarketRequest};

    /// Daily series starting 2020-01-01 with the given closes.
    pub(crate) fn series_from_closes(closes: &[f64]) -> OhlcvTimeSeries {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let request = MarketRequest {
            symbol: "TEST".to_string(),
            start,
            end: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
        };
        let candles = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let date = start + chrono::Days::new(i as u64);
                Candle::new(date, c, c, c, c, 1_000)
            })
            .collect();
        OhlcvTimeSeries::from_candles(&request, candles).unwrap()
    }

    #[test]
    fn test_columns_are_row_aligned() {
        let closes: Vec<f64> = (0..30).map(|i| 50.0 + (i % 7) as f64).collect();
        let frame = StrategyFrame::build(&series_from_closes(&closes), 3, 8);
        let n = closes.len();
        assert_eq!(frame.len(), n);
        for len in [
            frame.short_ma.len(),
            frame.long_ma.len(),
            frame.signal.len(),
            frame.position.len(),
            frame.daily_return.len(),
            frame.strategy_return.len(),
            frame.cumulative_market.len(),
            frame.cumulative_strategy.len(),
        ] {
            assert_eq!(len, n);
        }
        assert!(frame.dates.windows(2).all(|d| d[0] < d[1]));
    }

    #[test]
    fn test_value_domains() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + ((i as f64) / 5.0).sin() * 10.0).collect();
        let frame = StrategyFrame::build(&series_from_closes(&closes), 4, 12);
        assert!(frame.signal.iter().all(|s| *s <= 1));
        assert_eq!(frame.position[0], None);
        assert!(frame.position[1..].iter().all(|p| matches!(p, Some(-1 | 0 | 1))));
        assert_eq!(frame.daily_return[0], None);
        assert_eq!(frame.strategy_return[0], None);
        assert_eq!(frame.cumulative_market[0], 1.0);
        assert_eq!(frame.cumulative_strategy[0], 1.0);
        // A sine wave crosses its averages in both directions
        assert!(frame.transitions_of(Transition::Buy).count() > 0);
        assert!(frame.transitions_of(Transition::Sell).count() > 0);
    }

    #[test]
    fn test_cumulative_follows_compounding() {
        let closes = [100.0, 102.0, 99.0, 101.0, 105.0, 104.0, 108.0];
        let frame = StrategyFrame::build(&series_from_closes(&closes), 2, 3);
        for i in 1..frame.len() {
            let m = frame.cumulative_market[i - 1] * (1.0 + frame.daily_return[i].unwrap());
            let s = frame.cumulative_strategy[i - 1] * (1.0 + frame.strategy_return[i].unwrap());
            assert!((frame.cumulative_market[i] - m).abs() < 1e-12);
            assert!((frame.cumulative_strategy[i] - s).abs() < 1e-12);
        }
        // Buy and hold ends at last / first
        assert!((frame.cumulative_market[6] - 1.08).abs() < 1e-12);
    }

    #[test]
    fn test_constant_prices_earn_nothing() {
        let frame = StrategyFrame::build(&series_from_closes(&[100.0; 150]), 40, 100);
        assert!(frame.daily_return[1..].iter().all(|r| *r == Some(0.0)));
        assert!(frame.strategy_return[1..].iter().all(|r| *r == Some(0.0)));
        assert!(frame.cumulative_market.iter().all(|c| *c == 1.0));
        assert!(frame.cumulative_strategy.iter().all(|c| *c == 1.0));
        // Equal averages are a tie, which stays out of the market
        assert!(frame.signal.iter().all(|s| *s == 0));
        assert_eq!(frame.transitions().count(), 0);
    }

    #[test]
    fn test_rising_prices_track_market_once_in() {
        let closes: Vec<f64> = (0..200).map(|i| 100.0 + i as f64).collect();
        let frame = StrategyFrame::build(&series_from_closes(&closes), 40, 100);

        // Until 41 rows exist both windows cover the same rows, so the averages tie
        assert!(frame.signal[..40].iter().all(|s| *s == 0));
        assert!(frame.signal[40..].iter().all(|s| *s == 1));
        let buys: Vec<_> = frame.transitions().collect();
        assert_eq!(buys.len(), 1);
        assert_eq!(buys[0].index, 40);
        assert_eq!(buys[0].transition, Transition::Buy);

        // The crossover day is earned out of the market; afterwards the ratio never moves
        assert_eq!(frame.strategy_return[40], Some(0.0));
        let ratio = frame.cumulative_strategy[40] / frame.cumulative_market[40];
        for i in 41..frame.len() {
            assert_eq!(frame.strategy_return[i], frame.daily_return[i]);
            let r = frame.cumulative_strategy[i] / frame.cumulative_market[i];
            assert!((r - ratio).abs() < 1e-12);
        }
    }
}
