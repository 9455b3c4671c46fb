use eframe::egui;
use egui_plot::{AxisHints, Corner, GridInput, GridMark, HPlacement, Legend, Plot};

use crate::config::PLOT_CONFIG;
use crate::models::StrategyFrame;
use crate::ui::plot_layers::{
    ClosePriceLayer, CumulativeReturnLayer, LayerContext, MovingAverageLayer, PlotLayer,
    SignalMarkerLayer,
};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::{format_growth, format_price};
use crate::utils::maths_utils;
use crate::utils::time_utils::{date_to_plot_x, plot_x_to_date_string};

/// Candidate x grid steps in days, from daily up to five years.
const DAY_STEPS: [f64; 12] = [
    1.0, 2.0, 5.0, 7.0, 14.0, 30.0, 61.0, 91.0, 182.0, 365.0, 730.0, 1826.0,
];

/// Everything the plots need that does not change frame to frame.
#[derive(Clone, Debug)]
pub struct PlotCache {
    pub xs: Vec<f64>,
    pub returns_y: (f64, f64),
    pub price_y: (f64, f64),
}

impl PlotCache {
    fn from_frame(frame: &StrategyFrame) -> Self {
        let pad = PLOT_CONFIG.y_padding_pct;
        let returns_y = maths_utils::get_min_max_across(&[
            &frame.cumulative_market,
            &frame.cumulative_strategy,
        ])
        .map(|(lo, hi)| maths_utils::pad_range(lo, hi, pad))
        .unwrap_or((0.0, 2.0));
        let price_y =
            maths_utils::get_min_max_across(&[&frame.close, &frame.short_ma, &frame.long_ma])
                .map(|(lo, hi)| maths_utils::pad_range(lo, hi, pad))
                .unwrap_or((0.0, 1.0));

        Self {
            xs: frame.dates.iter().copied().map(date_to_plot_x).collect(),
            returns_y,
            price_y,
        }
    }
}

pub struct PlotView {
    cache: PlotCache,
}

impl PlotView {
    pub fn new(frame: &StrategyFrame) -> Self {
        Self {
            cache: PlotCache::from_frame(frame),
        }
    }

    /// Cumulative market vs. strategy growth.
    pub fn show_returns_plot(&self, ui: &mut egui::Ui, frame: &StrategyFrame) {
        let layers: Vec<Box<dyn PlotLayer>> = vec![Box::new(CumulativeReturnLayer)];
        self.show_layers(
            ui,
            "returns_plot",
            create_y_axis(UI_TEXT.returns_y_axis, format_growth),
            self.cache.returns_y,
            frame,
            layers,
        );
    }

    /// Close price with both averages and the transition markers.
    pub fn show_price_plot(&self, ui: &mut egui::Ui, frame: &StrategyFrame) {
        // Back to front
        let layers: Vec<Box<dyn PlotLayer>> = vec![
            Box::new(ClosePriceLayer),
            Box::new(MovingAverageLayer),
            Box::new(SignalMarkerLayer),
        ];
        self.show_layers(
            ui,
            "price_plot",
            create_y_axis(UI_TEXT.price_y_axis, format_price),
            self.cache.price_y,
            frame,
            layers,
        );
    }

    fn show_layers(
        &self,
        ui: &mut egui::Ui,
        id: &str,
        y_axis: AxisHints<'static>,
        (y_min, y_max): (f64, f64),
        frame: &StrategyFrame,
        layers: Vec<Box<dyn PlotLayer>>,
    ) {
        Plot::new(id)
            .legend(Legend::default().position(Corner::LeftTop))
            .custom_x_axes(vec![create_x_axis()])
            .custom_y_axes(vec![y_axis])
            .label_formatter(|name, value| {
                let date = plot_x_to_date_string(value.x);
                if name.is_empty() {
                    date
                } else {
                    format!("{}\n{}: {:.2}", date, name, value.y)
                }
            })
            .x_grid_spacer(date_grid_marks)
            .include_y(y_min)
            .include_y(y_max)
            .show(ui, |plot_ui| {
                let ctx = LayerContext {
                    frame,
                    xs: &self.cache.xs,
                };
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }
}

/// Smallest day step that keeps the axis at or under the configured label count.
fn day_step_for(span_days: f64) -> f64 {
    let target = span_days / PLOT_CONFIG.x_axis_divisions.max(1) as f64;
    DAY_STEPS
        .iter()
        .copied()
        .find(|&step| step >= target)
        .unwrap_or(DAY_STEPS[DAY_STEPS.len() - 1])
}

fn date_grid_marks(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let step_size = day_step_for(max - min);
    let start = (min / step_size).ceil() as i64;
    let end = (max / step_size).floor() as i64;
    (start..=end)
        .map(|i| GridMark {
            value: i as f64 * step_size,
            step_size,
        })
        .collect()
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(|grid_mark, _range| plot_x_to_date_string(grid_mark.value))
}

fn create_y_axis(label: &str, format: fn(f64) -> String) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label.to_string())
        .formatter(move |grid_mark, _range| format(grid_mark.value))
        .placement(HPlacement::Left)
}
