pub mod csv_version;
pub mod fetch_error;
pub mod yahoo_version;

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use crate::models::OhlcvTimeSeries;
pub use csv_version::CsvVersion;
pub use fetch_error::FetchError;
pub use yahoo_version::YahooVersion;

#[async_trait]
pub trait CreateTimeSeriesData {
    // Either create a time-series OR return an anyhow::error
    async fn create_timeseries_data(&self) -> Result<OhlcvTimeSeries>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Try each provider in order and return the first table that loads, with the provider's signature.
/// When every provider fails, the error lists each one's reason.
pub async fn get_timeseries_data_async(
    implementations: &[Box<dyn CreateTimeSeriesData>],
) -> Result<(OhlcvTimeSeries, &'static str)> {
    let mut failures = Vec::new();
    for imp in implementations {
        match imp.create_timeseries_data().await {
            Ok(data) => {
                let signature = imp.signature();
                return Ok((data, signature));
            }
            Err(e) => {
                log::warn!("{} failed: {:#}", imp.signature(), e);
                failures.push(format!("{}: {:#}", imp.signature(), e));
                // Continue to the next implementation
            }
        }
    }
    if failures.is_empty() {
        return Err(anyhow!("No data providers configured"));
    }
    Err(anyhow!(
        "All data providers failed to create data ({})",
        failures.join("; ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Candle, MarketRequest};
    use chrono::NaiveDate;

    struct Failing;
    struct Fixed;

    fn request() -> MarketRequest {
        MarketRequest {
            symbol: "TEST".to_string(),
            start: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2020, 2, 1).unwrap(),
        }
    }

    #[async_trait]
    impl CreateTimeSeriesData for Failing {
        async fn create_timeseries_data(&self) -> Result<OhlcvTimeSeries> {
            Err(FetchError::NoData(request().to_string()).into())
        }
        fn signature(&self) -> &'static str {
            "Failing"
        }
    }

    #[async_trait]
    impl CreateTimeSeriesData for Fixed {
        async fn create_timeseries_data(&self) -> Result<OhlcvTimeSeries> {
            let date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
            let candles = vec![Candle::new(date, 1.0, 1.0, 1.0, 1.0, 10)];
            Ok(OhlcvTimeSeries::from_candles(&request(), candles)?)
        }
        fn signature(&self) -> &'static str {
            "Fixed"
        }
    }

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Runtime::new().unwrap().block_on(future)
    }

    #[test]
    fn test_falls_back_to_next_provider() {
        let providers: Vec<Box<dyn CreateTimeSeriesData>> =
            vec![Box::new(Failing), Box::new(Fixed)];
        let (data, signature) = block_on(get_timeseries_data_async(&providers)).unwrap();
        assert_eq!(signature, "Fixed");
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_all_failing_reports_each_reason() {
        let providers: Vec<Box<dyn CreateTimeSeriesData>> =
            vec![Box::new(Failing), Box::new(Failing)];
        let err = block_on(get_timeseries_data_async(&providers)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Failing: no price rows returned for TEST"));
        assert_eq!(msg.matches("Failing:").count(), 2);
    }

    #[test]
    fn test_no_providers_is_an_error() {
        assert!(block_on(get_timeseries_data_async(&[])).is_err());
    }
}
