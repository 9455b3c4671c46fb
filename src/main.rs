use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::NativeOptions;
use eframe::egui::ViewportBuilder;
use tokio::runtime::Runtime;

use sma_crossover::config::PLOT_CONFIG;
use sma_crossover::ui::config::UI_TEXT;
use sma_crossover::ui::console::print_report;
use sma_crossover::{BacktestSummary, Cli, StrategyFrame, fetch_ticker_data, log_env, run_app};

fn main() -> Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_env(log_env(env_logger::DEFAULT_FILTER_ENV)).init();

    // B. Parse and validate args (before any network traffic)
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);
    let params = args.to_params().context("Invalid arguments")?;

    // C. Data Loading (Blocking)
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    let (series, data_source) = rt.block_on(fetch_ticker_data(&params, &args))?;

    // D. Backtest
    let frame = StrategyFrame::build(&series, params.short_window, params.long_window);
    let summary = BacktestSummary::from_frame(&frame);
    print_report(&series, &frame, &summary, args.show_rows);

    if args.no_plot {
        return Ok(());
    }

    // E. Run Native App
    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(UI_TEXT.returns_window_title)
            .with_inner_size(PLOT_CONFIG.window_size),
        ..Default::default()
    };

    let request = params.request;
    eframe::run_native(
        UI_TEXT.returns_window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, frame, summary, request, data_source))),
    )
    .map_err(|e| anyhow!("Failed to run chart window: {}", e))
}
