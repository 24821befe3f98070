use rust_libs::tree::Tree;
use rust_libs::tree_error::TreeError;

use crate::aggregate::{aggregate, TripPlan};
use crate::independent_set::{max_independent_weight, Selection};
use crate::problem::Problem;
use crate::trip_path::{counts_from_paths, trip_paths, trip_weights, weigh};

/// Minimum total price of all trips after halving a set of pairwise
/// non-adjacent nodes.
pub fn minimum_total_price(problem: &Problem) -> Result<i64, TreeError> {
    problem.validate()?;
    let tree = Tree::from_edges(problem.n, &problem.edge_pairs())?;
    let rooted = tree.root_at(0)?;

    let weights = trip_weights(&rooted, &problem.price, &problem.trip_pairs())?;
    let best = max_independent_weight(&rooted, &weights)?;
    let total = aggregate(&weights, best);
    log::debug!("n = {}, best halvable weight = {best}, total = {total}", problem.n);
    return Ok(total);
}

/// Same answer as [`minimum_total_price`], plus the halved nodes and every
/// trip's path.
pub fn plan_trips(problem: &Problem) -> Result<TripPlan, TreeError> {
    problem.validate()?;
    let tree = Tree::from_edges(problem.n, &problem.edge_pairs())?;
    let rooted = tree.root_at(0)?;

    let paths = trip_paths(&rooted, &problem.trip_pairs())?;
    let weights = weigh(&counts_from_paths(problem.n, &paths), &problem.price)?;
    let selection = Selection::solve(&rooted, &weights)?;
    let plan = TripPlan::assemble(&weights, &selection, &rooted, paths);
    log::debug!("halving {:?} saves {}", plan.halved_nodes, plan.saving);
    return Ok(plan);
}

pub struct Solution {}

impl Solution {
    /// 2646
    ///
    /// Panics on input that breaks the problem's preconditions.
    pub fn minimum_total_price(
        n: i32,
        edges: Vec<Vec<i32>>,
        price: Vec<i32>,
        trips: Vec<Vec<i32>>,
    ) -> i32 {
        let total = Problem::from_rows(n, &edges, &price, &trips)
            .and_then(|p| minimum_total_price(&p));
        match total {
            Ok(total) => total as i32,
            Err(e) => panic!("minimum_total_price: {e}"),
        }
    }
}
