use chrono::NaiveDate;

use crate::data::timeseries::FetchError;
use crate::domain::{Candle, MarketRequest};

// ============================================================================
// OhlcvTimeSeries: raw daily bars for one ticker, one column per field
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct OhlcvTimeSeries {
    pub symbol: String,

    /// Strictly ascending, unique
    pub dates: Vec<NaiveDate>,

    // Prices
    pub open_prices: Vec<f64>,
    pub high_prices: Vec<f64>,
    pub low_prices: Vec<f64>,
    pub close_prices: Vec<f64>,

    pub volumes: Vec<u64>,
}

impl OhlcvTimeSeries {
    /// Build the columnar table from bars in any order.
    ///
    /// Bars are sorted by date; an empty input or a repeated date is an error,
    /// so every table that exists has at least one row and unique dates.
    pub fn from_candles(
        request: &MarketRequest,
        mut candles: Vec<Candle>,
    ) -> Result<Self, FetchError> {
        if candles.is_empty() {
            return Err(FetchError::NoData(request.to_string()));
        }
        candles.sort_by_key(|c| c.date);
        if let Some(pair) = candles.windows(2).find(|pair| pair[0].date == pair[1].date) {
            return Err(FetchError::DuplicateDate(pair[1].date));
        }

        let n = candles.len();
        let mut series = OhlcvTimeSeries {
            symbol: request.symbol.clone(),
            dates: Vec::with_capacity(n),
            open_prices: Vec::with_capacity(n),
            high_prices: Vec::with_capacity(n),
            low_prices: Vec::with_capacity(n),
            close_prices: Vec::with_capacity(n),
            volumes: Vec::with_capacity(n),
        };
        for candle in candles {
            series.dates.push(candle.date);
            series.open_prices.push(candle.open_price);
            series.high_prices.push(candle.high_price);
            series.low_prices.push(candle.low_price);
            series.close_prices.push(candle.close_price);
            series.volumes.push(candle.volume);
        }
        Ok(series)
    }

    pub fn get_candle(&self, idx: usize) -> Candle {
        Candle::new(
            self.dates[idx],
            self.open_prices[idx],
            self.high_prices[idx],
            self.low_prices[idx],
            self.close_prices[idx],
            self.volumes[idx],
        )
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }
}
