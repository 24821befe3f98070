use std::fmt::Display;

use rust_libs::tree::RootedTree;
use serde::Serialize;

use crate::independent_set::Selection;

/// Full-price total minus half of the best independent-set weight.
/// Exact whenever every weight is even.
pub fn aggregate(weights: &[i64], best: i64) -> i64 {
    weights.iter().sum::<i64>() - best / 2
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripPlan {
    /// Sum over all trips without any halving.
    pub full_price: i64,
    pub saving: i64,
    pub total: i64,
    pub halved_nodes: Vec<usize>,
    pub paths: Vec<Vec<usize>>,
}

impl TripPlan {
    pub fn assemble(
        weights: &[i64],
        selection: &Selection,
        rooted: &RootedTree,
        paths: Vec<Vec<usize>>,
    ) -> TripPlan {
        let best = selection.best();
        let full_price = weights.iter().sum();
        TripPlan {
            full_price,
            saving: best / 2,
            total: aggregate(weights, best),
            halved_nodes: selection.chosen(rooted),
            paths,
        }
    }
}

impl Display for TripPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "total: {}", self.total)?;
        writeln!(f, "full price: {}, saving: {}", self.full_price, self.saving)?;
        writeln!(f, "halved nodes: {:?}", self.halved_nodes)?;
        for (i, path) in self.paths.iter().enumerate() {
            if let (Some(start), Some(end)) = (path.first(), path.last()) {
                writeln!(f, "trip {i} ({start} -> {end}): {path:?}")?;
            }
        }
        Ok(())
    }
}
