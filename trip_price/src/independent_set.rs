use rust_libs::tree::RootedTree;
use rust_libs::tree_error::TreeError;

/// Bottom-up tables of the maximum-weight independent set DP.
///
/// `include[v]` is the best value of `v`'s subtree with `v` taken,
/// `exclude[v]` the best with `v` left out.
#[derive(Debug, Clone)]
pub struct Selection {
    include: Vec<i64>,
    exclude: Vec<i64>,
    root: usize,
}

impl Selection {
    pub fn solve(rooted: &RootedTree, weights: &[i64]) -> Result<Selection, TreeError> {
        let n = rooted.len();
        if weights.len() != n {
            return Err(TreeError::InvalidInput(format!(
                "{} weights for {n} nodes",
                weights.len()
            )));
        }

        let mut include = vec![0; n];
        let mut exclude = vec![0; n];
        // reverse preorder visits every child before its parent
        for &v in rooted.order().iter().rev() {
            let mut take = weights[v];
            let mut skip = 0;
            for c in rooted.children(v) {
                take += exclude[c];
                skip += include[c].max(exclude[c]);
            }
            include[v] = take;
            exclude[v] = skip;
        }

        Ok(Selection {
            include,
            exclude,
            root: rooted.root(),
        })
    }

    pub fn best(&self) -> i64 {
        self.include[self.root].max(self.exclude[self.root])
    }

    pub fn include(&self, v: usize) -> i64 {
        self.include[v]
    }

    pub fn exclude(&self, v: usize) -> i64 {
        self.exclude[v]
    }

    /// One optimal member set, sorted. Ties go to leaving the node out, so
    /// zero-weight nodes are never reported.
    pub fn chosen(&self, rooted: &RootedTree) -> Vec<usize> {
        let mut taken = vec![false; self.include.len()];
        for &v in rooted.order() {
            let parent_taken = rooted.parent(v).is_some_and(|p| taken[p]);
            if !parent_taken && self.include[v] > self.exclude[v] {
                taken[v] = true;
            }
        }
        (0..taken.len()).filter(|&v| taken[v]).collect()
    }
}

pub fn max_independent_weight(rooted: &RootedTree, weights: &[i64]) -> Result<i64, TreeError> {
    Ok(Selection::solve(rooted, weights)?.best())
}
