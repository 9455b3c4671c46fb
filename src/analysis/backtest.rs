/// Simple daily return `close[i] / close[i-1] - 1`; undefined on the first row.
pub fn pct_change(close: &[f64]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(close.len());
    if close.is_empty() {
        return out;
    }
    out.push(None);
    out.extend(close.windows(2).map(|pair| Some(pair[1] / pair[0] - 1.0)));
    out
}

/// Strategy return for each day: that day's market return times the signal
/// as of the previous close. Lagging by one row keeps the decision free of
/// look-ahead: a crossover seen at today's close only earns tomorrow's return.
pub fn lagged_strategy_returns(daily_returns: &[Option<f64>], signal: &[u8]) -> Vec<Option<f64>> {
    debug_assert_eq!(daily_returns.len(), signal.len());
    daily_returns
        .iter()
        .enumerate()
        .map(|(i, ret)| {
            let previous = i.checked_sub(1).and_then(|j| signal.get(j))?;
            ret.map(|r| r * f64::from(*previous))
        })
        .collect()
}

/// Running product of `1 + r`, seeded at 1. Undefined returns count as zero.
pub fn cumulative_returns(returns: &[Option<f64>]) -> Vec<f64> {
    returns
        .iter()
        .scan(1.0, |growth, ret| {
            *growth *= 1.0 + ret.unwrap_or(0.0);
            Some(*growth)
        })
        .collect()
}
