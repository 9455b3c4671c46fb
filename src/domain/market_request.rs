use chrono::NaiveDate;

use crate::utils::TimeUtils;

/// One ticker over a half-open date range `[start, end)`.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct MarketRequest {
    pub symbol: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MarketRequest {
    // The name we pass into the chart API (not necessarily display name)
    pub fn api_symbol(&self) -> &str {
        &self.symbol
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

impl std::fmt::Display for MarketRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} [{}, {})",
            self.symbol,
            TimeUtils::format_date(self.start),
            TimeUtils::format_date(self.end)
        )
    }
}
