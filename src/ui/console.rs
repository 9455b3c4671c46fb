//! Plain-text report printed before the chart windows open.

use itertools::Itertools;

use crate::analysis::BacktestSummary;
use crate::models::{OhlcvTimeSeries, StrategyFrame};
use crate::utils::TimeUtils;

const RAW_HEADER: [&str; 5] = ["Open", "High", "Low", "Close", "Volume"];
const SIGNAL_HEADER: [&str; 5] = ["Close", "Short_MA", "Long_MA", "Signal", "Position"];

/// First `rows` rows of the fetched table.
pub fn format_raw_head(series: &OhlcvTimeSeries, rows: usize) -> String {
    let header = format!(
        "{:<10} {}",
        "Date",
        RAW_HEADER.iter().map(|h| format!("{:>12}", h)).join(" ")
    );

    let body = (0..rows.min(series.len()))
        .map(|idx| {
            let candle = series.get_candle(idx);
            format!(
                "{:<10} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>12}",
                TimeUtils::format_date(candle.date),
                candle.open_price,
                candle.high_price,
                candle.low_price,
                candle.close_price,
                candle.volume,
            )
        })
        .join("\n");

    format!("{}\n{}", header, body)
}

/// Rows where the position is defined and non-zero, at most `rows` of them.
pub fn format_signal_rows(frame: &StrategyFrame, rows: usize) -> String {
    let header = format!(
        "{:<10} {}",
        "Date",
        SIGNAL_HEADER.iter().map(|h| format!("{:>12}", h)).join(" ")
    );

    let body = frame
        .transitions()
        .take(rows)
        .map(|row| {
            format!(
                "{:<10} {:>12.6} {:>12.6} {:>12.6} {:>12} {:>12.1}",
                TimeUtils::format_date(row.date),
                row.close,
                frame.short_ma[row.index],
                frame.long_ma[row.index],
                frame.signal[row.index],
                f64::from(row.transition.position()),
            )
        })
        .join("\n");

    if body.is_empty() {
        format!("{}\n(no crossovers in range)", header)
    } else {
        format!("{}\n{}", header, body)
    }
}

pub fn format_summary(frame: &StrategyFrame, summary: &BacktestSummary) -> String {
    [
        format!(
            "Strategy:          {}-day / {}-day SMA crossover on {}",
            frame.short_window, frame.long_window, frame.symbol
        ),
        format!("Trading days:      {}", summary.trading_days),
        format!(
            "Market growth:     {:.4}x ({:+.2}%)",
            summary.final_market_growth,
            summary.market_total_return_pct()
        ),
        format!(
            "Strategy growth:   {:.4}x ({:+.2}%)",
            summary.final_strategy_growth,
            summary.strategy_total_return_pct()
        ),
        format!("Buys / sells:      {} / {}", summary.buys, summary.sells),
        format!("Days in market:    {:.1}%", summary.days_in_market_pct),
        format!(
            "Market daily:      mean {:+.5}  std {:.5}",
            summary.market_daily_mean, summary.market_daily_std_dev
        ),
        format!(
            "Strategy daily:    mean {:+.5}  std {:.5}",
            summary.strategy_daily_mean, summary.strategy_daily_std_dev
        ),
    ]
    .join("\n")
}

pub fn print_report(
    series: &OhlcvTimeSeries,
    frame: &StrategyFrame,
    summary: &BacktestSummary,
    rows: usize,
) {
    println!("Historical Data:");
    println!("{}", format_raw_head(series, rows));
    println!();
    println!("Trading Signals:");
    println!("{}", format_signal_rows(frame, rows));
    println!();
    println!("Summary:");
    println!("{}", format_summary(frame, summary));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::strategy_frame::tests::series_from_closes;

    fn crossing_series() -> OhlcvTimeSeries {
        // Falls, then rallies hard enough for the short average to cross up
        let closes: Vec<f64> = (0..60)
            .map(|i| if i < 30 { 100.0 - i as f64 } else { 70.0 + 3.0 * (i - 30) as f64 })
            .collect();
        series_from_closes(&closes)
    }

    #[test]
    fn test_raw_head_is_limited() {
        let series = crossing_series();
        let text = format_raw_head(&series, 5);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Date"));
        assert!(lines[1].starts_with("2020-01-01"));
        assert!(lines[1].contains("100.000000"));

        let everything = format_raw_head(&series, 1_000);
        assert_eq!(everything.lines().count(), series.len() + 1);
    }

    #[test]
    fn test_signal_rows_only_show_transitions() {
        let series = crossing_series();
        let frame = StrategyFrame::build(&series, 5, 20);
        let text = format_signal_rows(&frame, 10);
        let expected = frame.transitions().count().min(10);

        assert!(expected > 0);
        assert_eq!(text.lines().count(), expected + 1);
        for line in text.lines().skip(1) {
            assert!(line.ends_with("1.0"));
        }
    }

    #[test]
    fn test_signal_rows_without_crossovers() {
        let frame = StrategyFrame::build(&series_from_closes(&[10.0; 12]), 2, 4);
        let text = format_signal_rows(&frame, 5);
        assert!(text.ends_with("(no crossovers in range)"));
    }

    #[test]
    fn test_summary_mentions_windows() {
        let frame = StrategyFrame::build(&crossing_series(), 5, 20);
        let summary = BacktestSummary::from_frame(&frame);
        let text = format_summary(&frame, &summary);
        assert!(text.contains("5-day / 20-day SMA crossover on TEST"));
        assert!(text.contains("Buys / sells:"));
    }
}
