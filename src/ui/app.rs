use eframe::{Frame, egui};

use crate::analysis::BacktestSummary;
use crate::domain::MarketRequest;
use crate::models::StrategyFrame;
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Native window hosting the returns chart, with the price chart as a second viewport.
pub struct BacktestApp {
    pub(super) frame: StrategyFrame,
    pub(super) summary: BacktestSummary,
    pub(super) request: MarketRequest,
    pub(super) data_source: &'static str,
    pub(super) plot_view: PlotView,
    pub(super) show_price_window: bool,
}

impl BacktestApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        frame: StrategyFrame,
        summary: BacktestSummary,
        request: MarketRequest,
        data_source: &'static str,
    ) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        let plot_view = PlotView::new(&frame);

        Self {
            frame,
            summary,
            request,
            data_source,
            plot_view,
            show_price_window: true,
        }
    }

    pub(super) fn set_price_window_open(&mut self, open: bool) {
        if self.show_price_window == open {
            return;
        }
        self.show_price_window = open;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!(
                "Price window {}",
                if open { "opened" } else { "closed" }
            );
        }
    }
}

impl eframe::App for BacktestApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // Bottom panel first so the central panel gets the remaining space
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
        if self.show_price_window {
            self.render_price_viewport(ctx);
        }
    }
}
