use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::MarketRequest;
use crate::utils::TimeUtils;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("ticker symbol must not be empty")]
    EmptyTicker,
    #[error("invalid {field} date '{value}', expected YYYY-MM-DD")]
    InvalidDate {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("start date {start} must be before end date {end}")]
    EmptyRange { start: NaiveDate, end: NaiveDate },
    #[error("{0} window must be at least 1 day")]
    ZeroWindow(&'static str),
}

/// Everything the pipeline needs, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyParams {
    pub request: MarketRequest,
    pub short_window: usize,
    pub long_window: usize,
    /// Use dividend/split adjusted prices when the source provides them
    pub adjust_prices: bool,
}

impl StrategyParams {
    pub fn new(
        ticker: &str,
        start_date: &str,
        end_date: &str,
        short_window: usize,
        long_window: usize,
        adjust_prices: bool,
    ) -> Result<Self, ParamsError> {
        let symbol = ticker.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(ParamsError::EmptyTicker);
        }
        let start = parse_field("start", start_date)?;
        let end = parse_field("end", end_date)?;
        if start >= end {
            return Err(ParamsError::EmptyRange { start, end });
        }
        if short_window == 0 {
            return Err(ParamsError::ZeroWindow("short"));
        }
        if long_window == 0 {
            return Err(ParamsError::ZeroWindow("long"));
        }
        if short_window >= long_window {
            log::warn!(
                "Short window ({}) is not shorter than long window ({}); the crossover is inverted.",
                short_window,
                long_window
            );
        }

        Ok(Self {
            request: MarketRequest { symbol, start, end },
            short_window,
            long_window,
            adjust_prices,
        })
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<NaiveDate, ParamsError> {
    TimeUtils::parse_date(value).map_err(|source| ParamsError::InvalidDate {
        field,
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_params() {
        let params = StrategyParams::new(" aapl ", "2018-01-01", "2023-01-01", 40, 100, true).unwrap();
        assert_eq!(params.request.symbol, "AAPL");
        assert_eq!(params.request.start, NaiveDate::from_ymd_opt(2018, 1, 1).unwrap());
        assert_eq!(params.short_window, 40);
        assert_eq!(params.long_window, 100);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            StrategyParams::new("", "2018-01-01", "2023-01-01", 40, 100, true),
            Err(ParamsError::EmptyTicker)
        ));
        assert!(matches!(
            StrategyParams::new("AAPL", "2018/01/01", "2023-01-01", 40, 100, true),
            Err(ParamsError::InvalidDate { field: "start", .. })
        ));
        assert!(matches!(
            StrategyParams::new("AAPL", "2023-01-01", "2023-01-01", 40, 100, true),
            Err(ParamsError::EmptyRange { .. })
        ));
        assert!(matches!(
            StrategyParams::new("AAPL", "2018-01-01", "2023-01-01", 0, 100, true),
            Err(ParamsError::ZeroWindow("short"))
        ));
        assert!(matches!(
            StrategyParams::new("AAPL", "2018-01-01", "2023-01-01", 40, 0, true),
            Err(ParamsError::ZeroWindow("long"))
        ));
    }

    #[test]
    fn test_request_display_and_contains() {
        let params = StrategyParams::new("msft", "2020-01-01", "2020-02-01", 5, 20, false).unwrap();
        assert_eq!(params.request.to_string(), "MSFT [2020-01-01, 2020-02-01)");
        assert!(params.request.contains(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()));
        assert!(!params.request.contains(NaiveDate::from_ymd_opt(2020, 2, 1).unwrap()));
    }
}
