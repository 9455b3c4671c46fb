// Async code to run in main before egui starts up

use std::path::Path;

use anyhow::{Context, Result};

use crate::Cli;
use crate::data::timeseries::{
    CreateTimeSeriesData, CsvVersion, YahooVersion, get_timeseries_data_async,
};
use crate::domain::StrategyParams;
use crate::models::OhlcvTimeSeries;

/// Load the price table before the GUI starts, trying providers in the order the CLI asks for.
pub async fn fetch_ticker_data(
    params: &StrategyParams,
    args: &Cli,
) -> Result<(OhlcvTimeSeries, &'static str)> {
    let providers = build_providers(params, args.csv.as_deref(), args.prefer_api);

    let (series, signature) = get_timeseries_data_async(&providers)
        .await
        .with_context(|| format!("Failed to retrieve price data for {}", params.request))?;

    if let (Some(first), Some(last)) = (series.first_date(), series.last_date()) {
        log::info!(
            "Retrieved {} rows for {} ({} to {}) using: {}",
            series.len(),
            series.symbol,
            first,
            last,
            signature
        );
    }
    Ok((series, signature))
}

// A local file, when given, is read first unless the API is preferred; the other is the fallback.
fn build_providers(
    params: &StrategyParams,
    csv_path: Option<&Path>,
    prefer_api: bool,
) -> Vec<Box<dyn CreateTimeSeriesData>> {
    let api: Box<dyn CreateTimeSeriesData> = Box::new(YahooVersion {
        request: params.request.clone(),
        adjust_prices: params.adjust_prices,
    });
    let Some(path) = csv_path else {
        return vec![api];
    };
    let local: Box<dyn CreateTimeSeriesData> = Box::new(CsvVersion {
        path: path.to_path_buf(),
        request: params.request.clone(),
        adjust_prices: params.adjust_prices,
    });
    if prefer_api {
        vec![api, local] // API first
    } else {
        vec![local, api] // local first
    }
}
