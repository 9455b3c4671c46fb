use argminmax::ArgMinMax;

pub fn get_max(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let max_index: usize = vec.argmax();
    Some(vec[max_index])
}

pub fn get_min(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let min_index: usize = vec.argmin();
    Some(vec[min_index])
}

/// Smallest and largest value across several series (e.g. price plus both averages).
pub fn get_min_max_across(series: &[&[f64]]) -> Option<(f64, f64)> {
    series
        .iter()
        .filter_map(|s| Some((get_min(s)?, get_max(s)?)))
        .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)))
}

/// Widen `(min, max)` by `pct` of its span on both sides so lines don't sit on the frame.
/// A flat range is widened by `pct` of its magnitude instead.
pub fn pad_range(min: f64, max: f64, pct: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span > 0.0 {
        span * pct
    } else {
        (max.abs() * pct).max(f64::EPSILON)
    };
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_across_series() {
        let close = [10.0, 12.0, 11.0];
        let ma = [9.5, 12.5];
        assert_eq!(get_min_max_across(&[&close, &ma]), Some((9.5, 12.5)));
        assert_eq!(get_min_max_across(&[]), None);
        assert_eq!(get_max(&[]), None);
    }

    #[test]
    fn test_pad_range() {
        let (lo, hi) = pad_range(100.0, 200.0, 0.05);
        assert!((lo - 95.0).abs() < 1e-9);
        assert!((hi - 205.0).abs() < 1e-9);

        let (lo, hi) = pad_range(1.0, 1.0, 0.05);
        assert!(lo < 1.0 && hi > 1.0);
    }
}
