/// Weight reported by edges of unweighted graphs.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Binary operator used to merge the weights of parallel edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightCombiner {
    Sum,
    Mult,
    Min,
    Max,
    First,
    Second,
}

impl WeightCombiner {
    pub fn combine(&self, a: f64, b: f64) -> f64 {
        match self {
            WeightCombiner::Sum => a + b,
            WeightCombiner::Mult => a * b,
            WeightCombiner::Min => a.min(b),
            WeightCombiner::Max => a.max(b),
            WeightCombiner::First => a,
            WeightCombiner::Second => b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combiners() {
        assert_eq!(WeightCombiner::Sum.combine(2.0, 3.0), 5.0);
        assert_eq!(WeightCombiner::Mult.combine(2.0, 3.0), 6.0);
        assert_eq!(WeightCombiner::Min.combine(2.0, 3.0), 2.0);
        assert_eq!(WeightCombiner::Max.combine(2.0, 3.0), 3.0);
        assert_eq!(WeightCombiner::First.combine(2.0, 3.0), 2.0);
        assert_eq!(WeightCombiner::Second.combine(2.0, 3.0), 3.0);
    }
}
