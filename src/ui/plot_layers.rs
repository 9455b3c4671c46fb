use egui_plot::{Line, LineStyle, MarkerShape, PlotPoints, PlotUi, Points};
use strum::IntoEnumIterator;

use crate::analysis::Transition;
use crate::config::PLOT_CONFIG;
use crate::models::StrategyFrame;
use crate::ui::ui_text::UI_TEXT;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub frame: &'a StrategyFrame,
    /// Plot x coordinate of every row, aligned with the frame's columns
    pub xs: &'a [f64],
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

fn series_points(xs: &[f64], ys: &[f64]) -> Vec<[f64; 2]> {
    xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect()
}

// ============================================================================
// 1. CUMULATIVE RETURNS (market vs. strategy)
// ============================================================================
pub struct CumulativeReturnLayer;

impl PlotLayer for CumulativeReturnLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let market = Line::new(
            UI_TEXT.label_market_returns,
            PlotPoints::new(series_points(ctx.xs, &ctx.frame.cumulative_market)),
        )
        .color(PLOT_CONFIG.market_return_color)
        .width(PLOT_CONFIG.line_width);

        let strategy = Line::new(
            UI_TEXT.label_strategy_returns,
            PlotPoints::new(series_points(ctx.xs, &ctx.frame.cumulative_strategy)),
        )
        .color(PLOT_CONFIG.strategy_return_color)
        .width(PLOT_CONFIG.line_width);

        plot_ui.line(market);
        plot_ui.line(strategy);
    }
}

// ============================================================================
// 2. CLOSE PRICE
// ============================================================================
pub struct ClosePriceLayer;

impl PlotLayer for ClosePriceLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let line = Line::new(
            UI_TEXT.label_close_price,
            PlotPoints::new(series_points(ctx.xs, &ctx.frame.close)),
        )
        .color(PLOT_CONFIG.close_price_color)
        .width(PLOT_CONFIG.line_width);
        plot_ui.line(line);
    }
}

// ============================================================================
// 3. MOVING AVERAGES (dashed)
// ============================================================================
pub struct MovingAverageLayer;

impl PlotLayer for MovingAverageLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let frame = ctx.frame;
        let averages = [
            (frame.short_window, &frame.short_ma, PLOT_CONFIG.short_ma_color),
            (frame.long_window, &frame.long_ma, PLOT_CONFIG.long_ma_color),
        ];

        for (window, values, color) in averages {
            let line = Line::new(
                UI_TEXT.moving_average_label(window),
                PlotPoints::new(series_points(ctx.xs, values)),
            )
            .color(color)
            .width(PLOT_CONFIG.line_width)
            .style(LineStyle::dashed_loose());
            plot_ui.line(line);
        }
    }
}

// ============================================================================
// 4. BUY / SELL MARKERS
// ============================================================================
pub struct SignalMarkerLayer;

impl PlotLayer for SignalMarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for transition in Transition::iter() {
            let (name, shape, color) = match transition {
                Transition::Buy => (
                    UI_TEXT.label_buy_signal,
                    MarkerShape::Up,
                    PLOT_CONFIG.buy_marker_color,
                ),
                Transition::Sell => (
                    UI_TEXT.label_sell_signal,
                    MarkerShape::Down,
                    PLOT_CONFIG.sell_marker_color,
                ),
            };

            let markers: Vec<[f64; 2]> = ctx
                .frame
                .transitions_of(transition)
                .map(|row| [ctx.xs[row.index], row.close])
                .collect();

            // Keep the legend entry even when the range has no such transition
            let points = Points::new(name, PlotPoints::new(markers))
                .shape(shape)
                .filled(true)
                .radius(PLOT_CONFIG.marker_radius)
                .color(color);
            plot_ui.points(points);
        }
    }
}
