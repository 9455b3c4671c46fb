/// Trailing simple moving average with a partial leading window.
///
/// `out[i]` is the mean of `values[i + 1 - window ..= i]`, or of every value so
/// far while fewer than `window` exist, so no row is left undefined.
/// Each window is summed afresh with compensation, and a window of identical
/// values averages to exactly that value, so equal averages stay equal.
pub fn trailing_mean(values: &[f64], window: usize) -> Vec<f64> {
    debug_assert!(window >= 1, "window must be at least 1");
    let window = window.max(1);

    let mut out = Vec::with_capacity(values.len());
    // Length of the run of identical values ending at `i`
    let mut run = 0usize;
    for (i, &value) in values.iter().enumerate() {
        run = if i > 0 && values[i - 1] == value { run + 1 } else { 1 };
        let slice = &values[(i + 1).saturating_sub(window)..=i];
        if run >= slice.len() {
            out.push(value);
        } else {
            out.push(compensated_sum(slice) / slice.len() as f64);
        }
    }
    out
}

/// Neumaier summation.
fn compensated_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for &value in values {
        let t = sum + value;
        if sum.abs() >= value.abs() {
            compensation += (sum - t) + value;
        } else {
            compensation += (value - t) + sum;
        }
        sum = t;
    }
    sum + compensation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_mean(values: &[f64], window: usize, i: usize) -> f64 {
        let start = (i + 1).saturating_sub(window);
        let slice = &values[start..=i];
        slice.iter().sum::<f64>() / slice.len() as f64
    }

    #[test]
    fn test_partial_windows_at_start() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let means = trailing_mean(&values, 3);
        assert_eq!(means.len(), values.len());
        assert!((means[0] - 1.0).abs() < 1e-12);
        assert!((means[1] - 1.5).abs() < 1e-12);
        assert!((means[2] - 2.0).abs() < 1e-12);
        assert!((means[3] - 3.0).abs() < 1e-12);
        assert!((means[4] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_matches_direct_mean_everywhere() {
        let values: Vec<f64> = (0..250)
            .map(|i| 100.0 + (i as f64 * 0.37).sin() * 12.0 + i as f64 * 0.05)
            .collect();
        for window in [1, 2, 40, 100, 300] {
            let means = trailing_mean(&values, window);
            for i in 0..values.len() {
                let expected = naive_mean(&values, window, i);
                assert!(
                    (means[i] - expected).abs() < 1e-9,
                    "window {} row {}: {} vs {}",
                    window,
                    i,
                    means[i],
                    expected
                );
            }
        }
    }

    #[test]
    fn test_flat_prices_never_cross() {
        use crate::analysis::signals::{crossover_signal, positions};

        for price in [172.26, 0.1, 150.07, 101.37] {
            let closes = vec![price; 1250];
            let short = trailing_mean(&closes, 40);
            let long = trailing_mean(&closes, 100);
            assert!(short.iter().chain(&long).all(|&m| m == price), "price {}", price);

            let signal = crossover_signal(&short, &long);
            assert!(signal.iter().all(|&s| s == 0), "price {}", price);
            assert!(positions(&signal).iter().flatten().all(|&p| p == 0));
        }
    }

    #[test]
    fn test_flat_stretch_after_moves_is_exact() {
        let mut closes: Vec<f64> = (0..60).map(|i| 90.0 + i as f64 * 0.37).collect();
        closes.extend(std::iter::repeat_n(150.07, 120));
        let short = trailing_mean(&closes, 40);
        let long = trailing_mean(&closes, 100);
        let last = closes.len() - 1;
        assert_eq!(short[last], 150.07);
        assert_eq!(long[last], 150.07);
    }

    #[test]
    fn test_window_one_is_identity() {
        let values = [3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(trailing_mean(&values, 1), values.to_vec());
    }

    #[test]
    fn test_empty_input() {
        assert!(trailing_mean(&[], 5).is_empty());
    }
}
