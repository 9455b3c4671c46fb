//! Local CSV in the layout of Yahoo's "Download" button:
//! `Date,Open,High,Low,Close,Adj Close,Volume`. `Adj Close` is optional.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tokio::fs;

use crate::data::timeseries::{CreateTimeSeriesData, FetchError};
use crate::domain::{Candle, MarketRequest};
use crate::models::OhlcvTimeSeries;
use crate::utils::TimeUtils;

pub struct CsvVersion {
    pub path: PathBuf,
    pub request: MarketRequest,
    pub adjust_prices: bool,
}

#[async_trait]
impl CreateTimeSeriesData for CsvVersion {
    fn signature(&self) -> &'static str {
        "CSV file"
    }

    async fn create_timeseries_data(&self) -> Result<OhlcvTimeSeries> {
        let text = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let candles = parse_csv(&text, &self.request, self.adjust_prices)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        log::info!(
            "{} rows for {} loaded from {}",
            candles.len(),
            self.request.symbol,
            self.path.display()
        );
        Ok(OhlcvTimeSeries::from_candles(&self.request, candles)?)
    }
}

// Cells are kept as text: Yahoo writes "null" for missing values
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Open")]
    open: String,
    #[serde(rename = "High")]
    high: String,
    #[serde(rename = "Low")]
    low: String,
    #[serde(rename = "Close")]
    close: String,
    #[serde(rename = "Adj Close", default)]
    adj_close: Option<String>,
    #[serde(rename = "Volume", default)]
    volume: Option<String>,
}

fn parse_cell(cell: &str) -> Option<f64> {
    match cell.trim() {
        "" | "null" | "NaN" | "nan" => None,
        text => text.parse::<f64>().ok(),
    }
}

/// Rows outside the requested range are skipped, as are rows with a missing price.
pub fn parse_csv(
    text: &str,
    request: &MarketRequest,
    adjust_prices: bool,
) -> Result<Vec<Candle>, FetchError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut candles = Vec::new();
    for (index, record) in reader.deserialize::<CsvRow>().enumerate() {
        let row = record?;
        // Header is line 1
        let line = index as u64 + 2;
        let date = TimeUtils::parse_date(&row.date).map_err(|e| FetchError::CsvRow {
            line,
            reason: format!("bad date '{}': {}", row.date, e),
        })?;
        if !request.contains(date) {
            continue;
        }
        let (Some(open), Some(high), Some(low), Some(close)) = (
            parse_cell(&row.open),
            parse_cell(&row.high),
            parse_cell(&row.low),
            parse_cell(&row.close),
        ) else {
            continue;
        };
        let volume = row
            .volume
            .as_deref()
            .and_then(parse_cell)
            .unwrap_or(0.0)
            .max(0.0) as u64;
        let candle = Candle::new(date, open, high, low, close, volume);
        match row.adj_close.as_deref().and_then(parse_cell) {
            Some(adjusted) if adjust_prices => candles.push(candle.adjusted_to(adjusted)),
            _ => candles.push(candle),
        }
    }

    if candles.is_empty() {
        return Err(FetchError::NoData(request.to_string()));
    }
    Ok(candles)
}
