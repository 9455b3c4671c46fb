use chrono::NaiveDate;

/// One daily OHLCV bar
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub date: NaiveDate,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
    pub volume: u64,
}

impl Candle {
    // A constructor for convenience
    pub fn new(
        date: NaiveDate,
        open_price: f64,
        high_price: f64,
        low_price: f64,
        close_price: f64,
        volume: u64,
    ) -> Self {
        Candle {
            date,
            open_price,
            high_price,
            low_price,
            close_price,
            volume,
        }
    }

    /// Rescale all four prices so the close becomes `adjusted_close`.
    /// Dividend and split adjustment is a single multiplicative factor per day.
    pub fn adjusted_to(self, adjusted_close: f64) -> Self {
        if self.close_price == 0.0 || !adjusted_close.is_finite() {
            return self;
        }
        let ratio = adjusted_close / self.close_price;
        Candle {
            open_price: self.open_price * ratio,
            high_price: self.high_price * ratio,
            low_price: self.low_price * ratio,
            close_price: adjusted_close,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjusted_to_scales_ohlc() {
        let date = NaiveDate::from_ymd_opt(2020, 8, 31).unwrap();
        let candle = Candle::new(date, 100.0, 110.0, 90.0, 105.0, 1_000);
        let adjusted = candle.adjusted_to(52.5);
        assert!((adjusted.open_price - 50.0).abs() < 1e-9);
        assert!((adjusted.high_price - 55.0).abs() < 1e-9);
        assert!((adjusted.low_price - 45.0).abs() < 1e-9);
        assert_eq!(adjusted.close_price, 52.5);
        assert_eq!(adjusted.volume, 1_000);
    }

    #[test]
    fn test_adjusted_to_ignores_zero_close() {
        let date = NaiveDate::from_ymd_opt(2020, 8, 31).unwrap();
        let candle = Candle::new(date, 1.0, 1.0, 1.0, 0.0, 0);
        assert_eq!(candle.clone().adjusted_to(5.0), candle);
    }
}
