//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub market_return_color: Color32,
    pub strategy_return_color: Color32,
    /// Close price is drawn half-transparent so the averages read on top of it
    pub close_price_color: Color32,
    pub short_ma_color: Color32,
    pub long_ma_color: Color32,
    pub buy_marker_color: Color32,
    pub sell_marker_color: Color32,
    /// Width of every line series
    pub line_width: f32,
    /// Radius of buy/sell triangles
    pub marker_radius: f32,
    /// Native window size (width, height) for both chart windows
    pub window_size: [f32; 2],
    /// Fraction of the y span added above and below the data
    pub y_padding_pct: f64,
    /// Number of x-axis date labels to aim for
    pub x_axis_divisions: u32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    market_return_color: Color32::from_rgb(31, 119, 180), // Blue
    strategy_return_color: Color32::from_rgb(255, 127, 14), // Orange
    close_price_color: Color32::from_rgba_premultiplied(16, 60, 90, 128),
    short_ma_color: Color32::from_rgb(255, 127, 14),
    long_ma_color: Color32::from_rgb(44, 160, 44),
    buy_marker_color: Color32::from_rgb(0, 200, 0), // Green
    sell_marker_color: Color32::from_rgb(200, 0, 0), // Red
    line_width: 1.5,
    marker_radius: 7.0,
    window_size: [1200.0, 600.0],
    y_padding_pct: 0.05,
    x_axis_divisions: 8,
};
