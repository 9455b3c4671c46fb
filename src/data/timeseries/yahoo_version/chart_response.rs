//! Wire format of the Yahoo Finance v8 chart endpoint, and its conversion into candles.

use serde::Deserialize;

use crate::data::timeseries::FetchError;
use crate::domain::{Candle, MarketRequest};
use crate::utils::time_utils;

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub result: Option<Vec<ChartData>>,
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartData {
    pub meta: ChartMeta,
    // Absent when the range holds no sessions
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct ChartMeta {
    pub symbol: String,
    #[serde(default)]
    pub gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteColumns>,
    pub adjclose: Option<Vec<AdjCloseColumn>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuoteColumns {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct AdjCloseColumn {
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}

/// Pull the candles out of a decoded response.
///
/// Rows with any missing price are dropped: the endpoint reports holidays and
/// halted sessions as all-null rows. A missing volume is read as zero.
/// Only bars whose exchange date falls in `request` are kept.
pub fn into_candles(
    response: ChartResponse,
    request: &MarketRequest,
    adjust_prices: bool,
) -> Result<Vec<Candle>, FetchError> {
    if let Some(error) = response.chart.error {
        return Err(FetchError::Provider {
            code: error.code,
            description: error.description,
        });
    }

    let data = response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| FetchError::NoData(request.to_string()))?;

    let ChartData {
        meta,
        timestamp,
        indicators,
    } = data;
    let quote = indicators.quote.into_iter().next().unwrap_or_default();
    let adjclose = indicators
        .adjclose
        .and_then(|columns| columns.into_iter().next())
        .map(|column| column.adjclose)
        .unwrap_or_default();

    let mut candles = Vec::with_capacity(timestamp.len());
    for (i, ts) in timestamp.iter().enumerate() {
        let Some(date) = time_utils::epoch_sec_to_exchange_date(*ts, meta.gmtoffset) else {
            log::warn!("{}: skipping out-of-range timestamp {}", meta.symbol, ts);
            continue;
        };
        if !request.contains(date) {
            continue;
        }
        let (Some(open), Some(high), Some(low), Some(close)) = (
            column(&quote.open, i),
            column(&quote.high, i),
            column(&quote.low, i),
            column(&quote.close, i),
        ) else {
            continue;
        };
        let volume = column(&quote.volume, i).unwrap_or(0.0).max(0.0) as u64;
        let candle = Candle::new(date, open, high, low, close, volume);

        match column(&adjclose, i) {
            Some(adjusted) if adjust_prices => candles.push(candle.adjusted_to(adjusted)),
            _ => candles.push(candle),
        }
    }

    if candles.is_empty() {
        return Err(FetchError::NoData(request.to_string()));
    }
    Ok(candles)
}

fn column(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten()
}
