pub mod chart_response;

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Days;
use tokio::time::Instant;

use crate::config::{YAHOO, YahooApiConfig};
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::timeseries::{CreateTimeSeriesData, FetchError};
use crate::domain::MarketRequest;
use crate::models::OhlcvTimeSeries;
use crate::utils::time_utils;
pub use chart_response::ChartResponse;

/// Daily bars from the Yahoo Finance chart API.
pub struct YahooVersion {
    pub request: MarketRequest,
    pub adjust_prices: bool,
}

#[async_trait]
impl CreateTimeSeriesData for YahooVersion {
    fn signature(&self) -> &'static str {
        "Yahoo Finance API"
    }

    async fn create_timeseries_data(&self) -> Result<OhlcvTimeSeries> {
        let start_time = Instant::now();
        log::info!("Requesting daily bars for {} ...", self.request);

        let client = configure_http_client()?;
        let response = fetch_chart(&client, &self.request)
            .await
            .with_context(|| format!("Chart request failed for {}", self.request))?;
        let candles =
            chart_response::into_candles(response, &self.request, self.adjust_prices)?;
        let series = OhlcvTimeSeries::from_candles(&self.request, candles)?;

        log::info!(
            "{} rows for {} received in {:?}",
            series.len(),
            self.request.symbol,
            start_time.elapsed()
        );
        Ok(series)
    }
}

fn configure_http_client() -> Result<reqwest::Client> {
    let config = YahooApiConfig::default();
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .user_agent(config.user_agent)
        .build()
        .context("Failed to build HTTP client")?;
    Ok(client)
}

/// One GET against the chart endpoint.
///
/// The endpoint answers unknown symbols with a 404 whose body is still a chart
/// envelope carrying the error, so the body is decoded before the status is judged.
async fn fetch_chart(
    client: &reqwest::Client,
    request: &MarketRequest,
) -> Result<ChartResponse, FetchError> {
    let url = format!("{}/{}", YAHOO.chart.base_url, request.api_symbol());
    // One spare day each side: bars are stamped in UTC, not on the exchange's calendar.
    // `into_candles` trims back to the request.
    let period1 = time_utils::date_to_epoch_sec(request.start - Days::new(1)).to_string();
    let period2 = time_utils::date_to_epoch_sec(request.end + Days::new(1)).to_string();

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_fetch_details {
        log::info!("GET {} period1={} period2={}", url, period1, period2);
    }

    let response = client
        .get(&url)
        .query(&[
            ("period1", period1.as_str()),
            ("period2", period2.as_str()),
            ("interval", YAHOO.chart.interval),
            ("events", YAHOO.chart.events),
            ("includeAdjustedClose", "true"),
        ])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    match serde_json::from_str::<ChartResponse>(&body) {
        Ok(parsed) => Ok(parsed),
        Err(e) if status.is_success() => Err(FetchError::Decode(e)),
        Err(_) => Err(FetchError::HttpStatus {
            status: status.as_u16(),
            body: body.chars().take(200).collect(),
        }),
    }
}
