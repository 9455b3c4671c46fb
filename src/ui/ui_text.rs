//! User-facing strings for the chart windows.

pub struct UiText {
    pub returns_window_title: &'static str,
    pub price_window_suffix: &'static str,
    pub plot_x_axis: &'static str,
    pub returns_y_axis: &'static str,
    pub price_y_axis: &'static str,
    pub label_market_returns: &'static str,
    pub label_strategy_returns: &'static str,
    pub label_close_price: &'static str,
    pub label_buy_signal: &'static str,
    pub label_sell_signal: &'static str,
    pub button_show_price_chart: &'static str,
}

impl UiText {
    pub fn price_window_title(&self, symbol: &str) -> String {
        format!("{} {}", symbol, self.price_window_suffix)
    }

    pub fn moving_average_label(&self, window: usize) -> String {
        format!("{}-Day MA", window)
    }
}

pub const UI_TEXT: UiText = UiText {
    returns_window_title: "Market Returns vs. Strategy Returns",
    price_window_suffix: "Price with Buy/Sell Signals",
    plot_x_axis: "Date",
    returns_y_axis: "Cumulative Returns",
    price_y_axis: "Price ($)",
    label_market_returns: "Market Returns",
    label_strategy_returns: "Strategy Returns",
    label_close_price: "Close Price",
    label_buy_signal: "Buy Signal",
    label_sell_signal: "Sell Signal",
    button_show_price_chart: "📈 Price chart",
};
