use strum_macros::{Display, EnumIter};

/// Entry or exit marked by a change in the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Transition {
    Buy,
    Sell,
}

impl Transition {
    pub fn from_position(position: Option<i8>) -> Option<Self> {
        match position {
            Some(1) => Some(Transition::Buy),
            Some(-1) => Some(Transition::Sell),
            _ => None,
        }
    }

    pub fn position(&self) -> i8 {
        match self {
            Transition::Buy => 1,
            Transition::Sell => -1,
        }
    }
}

/// 1 while the short average is strictly above the long one, else 0. Ties stay out of the market.
pub fn crossover_signal(short_ma: &[f64], long_ma: &[f64]) -> Vec<u8> {
    debug_assert_eq!(short_ma.len(), long_ma.len());
    short_ma
        .iter()
        .zip(long_ma)
        .map(|(short, long)| u8::from(short > long))
        .collect()
}

/// Day-over-day change in the signal; undefined on the first row.
pub fn positions(signal: &[u8]) -> Vec<Option<i8>> {
    let mut out = Vec::with_capacity(signal.len());
    if signal.is_empty() {
        return out;
    }
    out.push(None);
    out.extend(
        signal
            .windows(2)
            .map(|pair| Some(pair[1] as i8 - pair[0] as i8)),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_signal_is_strict() {
        let short = [1.0, 2.0, 3.0, 3.0];
        let long = [2.0, 2.0, 2.0, 3.5];
        assert_eq!(crossover_signal(&short, &long), vec![0, 0, 1, 0]);
    }

    #[test]
    fn test_positions_mark_transitions() {
        let signal = [0, 1, 1, 0, 0, 1];
        let pos = positions(&signal);
        assert_eq!(
            pos,
            vec![None, Some(1), Some(0), Some(-1), Some(0), Some(1)]
        );
        for p in pos.iter().skip(1) {
            assert!(matches!(p, Some(-1 | 0 | 1)));
        }
    }

    #[test]
    fn test_positions_edge_lengths() {
        assert!(positions(&[]).is_empty());
        assert_eq!(positions(&[1]), vec![None]);
    }

    #[test]
    fn test_transition_round_trip() {
        for transition in Transition::iter() {
            assert_eq!(
                Transition::from_position(Some(transition.position())),
                Some(transition)
            );
        }
        assert_eq!(Transition::from_position(Some(0)), None);
        assert_eq!(Transition::from_position(None), None);
        assert_eq!(Transition::Buy.to_string(), "Buy");
    }
}
