use eframe::egui::{
    CentralPanel, Context, Frame, Margin, RichText, TopBottomPanel, ViewportBuilder, ViewportId,
};

use crate::config::PLOT_CONFIG;
use crate::ui::app::BacktestApp;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::format_growth;
use crate::utils::TimeUtils;

impl BacktestApp {
    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.heading(
                    RichText::new(UI_TEXT.returns_window_title).color(UI_CONFIG.colors.heading),
                );
                self.plot_view.show_returns_plot(ui, &self.frame);
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.status_panel)
            .inner_margin(Margin::symmetric(8, 4));
        let mut reopen_price_window = false;

        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let label = UI_CONFIG.colors.label;
                    let summary = &self.summary;

                    ui.metric("Ticker", &self.request.symbol, UI_CONFIG.colors.heading);
                    ui.separator();
                    ui.metric(
                        "Range",
                        &format!(
                            "{} → {}",
                            TimeUtils::format_date(self.request.start),
                            TimeUtils::format_date(self.request.end)
                        ),
                        label,
                    );
                    ui.separator();
                    ui.metric(
                        "MA",
                        &format!("{}/{}", self.frame.short_window, self.frame.long_window),
                        label,
                    );
                    ui.separator();
                    ui.metric("Source", self.data_source, label);
                    ui.separator();
                    ui.metric(
                        UI_TEXT.label_market_returns,
                        &format_growth(summary.final_market_growth),
                        PLOT_CONFIG.market_return_color,
                    );
                    ui.metric_return("Total", summary.market_total_return_pct());
                    ui.separator();
                    ui.metric(
                        UI_TEXT.label_strategy_returns,
                        &format_growth(summary.final_strategy_growth),
                        PLOT_CONFIG.strategy_return_color,
                    );
                    ui.metric_return("Total", summary.strategy_total_return_pct());
                    ui.separator();
                    ui.label_subdued(format!("{} buys / {} sells", summary.buys, summary.sells));

                    if !self.show_price_window {
                        ui.separator();
                        reopen_price_window = ui.button(UI_TEXT.button_show_price_chart).clicked();
                    }
                });
            });

        if reopen_price_window {
            self.set_price_window_open(true);
        }
    }

    /// Price chart in its own native window. Closing it leaves the returns window running.
    pub(super) fn render_price_viewport(&mut self, ctx: &Context) {
        let title = UI_TEXT.price_window_title(&self.frame.symbol);
        let builder = ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size(PLOT_CONFIG.window_size);

        let plot_view = &self.plot_view;
        let frame = &self.frame;
        let close_requested = ctx.show_viewport_immediate(
            ViewportId::from_hash_of("price_chart"),
            builder,
            |ctx, _class| {
                CentralPanel::default()
                    .frame(Frame::new().fill(UI_CONFIG.colors.central_panel))
                    .show(ctx, |ui| {
                        ui.heading(RichText::new(&title).color(UI_CONFIG.colors.heading));
                        plot_view.show_price_plot(ui, frame);
                    });
                ctx.input(|i| i.viewport().close_requested())
            },
        );

        if close_requested {
            self.set_price_window_open(false);
        }
    }
}
