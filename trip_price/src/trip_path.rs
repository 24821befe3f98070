use rust_libs::tree::RootedTree;
use rust_libs::tree_error::TreeError;

/// `(start, end)` node ids. `start == end` is a one-node trip.
pub type Trip = (usize, usize);

/// Path of every trip, in trip order.
pub fn trip_paths(rooted: &RootedTree, trips: &[Trip]) -> Result<Vec<Vec<usize>>, TreeError> {
    trips
        .iter()
        .map(|&(start, end)| rooted.path(start, end))
        .collect()
}

/// How many trips pass through each node, endpoints included.
pub fn visit_counts(rooted: &RootedTree, trips: &[Trip]) -> Result<Vec<i64>, TreeError> {
    let mut counts = vec![0; rooted.len()];
    for &(start, end) in trips {
        let path = rooted.path(start, end)?;
        log::trace!("trip {start} -> {end}: {path:?}");
        for v in path {
            counts[v] += 1;
        }
    }
    Ok(counts)
}

pub fn counts_from_paths(n: usize, paths: &[Vec<usize>]) -> Vec<i64> {
    let mut counts = vec![0; n];
    for v in paths.iter().flatten() {
        counts[*v] += 1;
    }
    counts
}

pub fn weigh(counts: &[i64], prices: &[i64]) -> Result<Vec<i64>, TreeError> {
    if counts.len() != prices.len() {
        return Err(TreeError::InvalidInput(format!(
            "{} prices for {} nodes",
            prices.len(),
            counts.len()
        )));
    }
    Ok(counts.iter().zip(prices).map(|(c, p)| c * p).collect())
}

/// `weight[v] = price[v] * (number of trips through v)`.
pub fn trip_weights(
    rooted: &RootedTree,
    prices: &[i64],
    trips: &[Trip],
) -> Result<Vec<i64>, TreeError> {
    let counts = visit_counts(rooted, trips)?;
    weigh(&counts, prices)
}
