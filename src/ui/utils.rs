use eframe::egui::{Context, Visuals};

use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Format a price with two decimals and a dollar sign, as on the price axis.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Format a growth factor as on the returns axis, e.g. `1.85x`.
pub fn format_growth(growth: f64) -> String {
    format!("{:.2}x", growth)
}
