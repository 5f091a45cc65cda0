use rand::{Rng, RngCore};

/// Source of uniform draws in `[0, 1)` consumed by the mock classifier.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around when exhausted.
///
/// Values are clamped into `[0, 1)` so a sequence can never push the
/// confidence score out of range.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
    consumed: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            position: 0,
            consumed: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        self.consumed += 1;
        let Some(value) = self.values.get(self.position).copied() else {
            return 0.0;
        };
        self.position = (self.position + 1) % self.values.len();
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_wraps_and_counts() {
        let mut source = SequenceSource::new(vec![0.1, 0.9]);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.next_unit(), 0.9);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.consumed(), 3);
    }

    #[test]
    fn sequence_clamps_out_of_range_values() {
        let mut source = SequenceSource::new(vec![1.5, -0.2]);
        assert!(source.next_unit() < 1.0);
        assert_eq!(source.next_unit(), 0.0);
    }

    #[test]
    fn empty_sequence_yields_zero() {
        let mut source = SequenceSource::new(Vec::new());
        assert_eq!(source.next_unit(), 0.0);
        assert_eq!(source.consumed(), 1);
    }
}
