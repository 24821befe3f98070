use crate::tree_error::TreeError;

/// Undirected tree over `0..n` stored as adjacency lists.
#[derive(Debug, Clone)]
pub struct Tree {
    adj: Vec<Vec<usize>>,
}

impl Tree {
    /// Neighbor order follows edge order. Rejects anything that is not a
    /// connected graph with exactly `n - 1` edges.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Tree, TreeError> {
        if n == 0 {
            return TreeError::invalid("tree needs at least one node");
        }
        if edges.len() != n - 1 {
            return Err(TreeError::InvalidInput(format!(
                "expected {} edges for {n} nodes, got {}",
                n - 1,
                edges.len()
            )));
        }

        let mut adj = vec![Vec::new(); n];
        for &(a, b) in edges {
            if a >= n || b >= n {
                return Err(TreeError::InvalidInput(format!(
                    "edge ({a}, {b}) out of range for {n} nodes"
                )));
            }
            if a == b {
                return Err(TreeError::InvalidInput(format!("self loop on node {a}")));
            }
            adj[a].push(b);
            adj[b].push(a);
        }

        let tree = Tree { adj };
        // n - 1 edges plus connected means acyclic
        let reached = tree.root_at(0)?.order().len();
        if reached != n {
            return Err(TreeError::InvalidInput(format!(
                "graph is not connected, {reached} of {n} nodes reachable from 0"
            )));
        }
        log::debug!("built tree with {n} nodes");
        Ok(tree)
    }

    pub fn len(&self) -> usize {
        self.adj.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// One iterative traversal from `root` recording parent, depth and a
    /// preorder in which every parent precedes its children.
    pub fn root_at(&self, root: usize) -> Result<RootedTree<'_>, TreeError> {
        let n = self.len();
        if root >= n {
            return Err(TreeError::InvalidInput(format!(
                "root {root} out of range for {n} nodes"
            )));
        }

        let mut parent = vec![None; n];
        let mut depth = vec![0; n];
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);

        let mut stack = vec![root];
        visited[root] = true;
        while let Some(v) = stack.pop() {
            order.push(v);
            for &c in self.adj[v].iter().rev() {
                if !visited[c] {
                    visited[c] = true;
                    parent[c] = Some(v);
                    depth[c] = depth[v] + 1;
                    stack.push(c);
                }
            }
        }

        Ok(RootedTree {
            tree: self,
            root,
            parent,
            depth,
            order,
        })
    }
}

#[derive(Debug, Clone)]
pub struct RootedTree<'a> {
    tree: &'a Tree,
    root: usize,
    parent: Vec<Option<usize>>,
    depth: Vec<usize>,
    order: Vec<usize>,
}

impl RootedTree<'_> {
    pub fn root(&self) -> usize {
        self.root
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn parent(&self, v: usize) -> Option<usize> {
        self.parent[v]
    }

    pub fn depth(&self, v: usize) -> usize {
        self.depth[v]
    }

    /// Preorder. Iterate it reversed for a bottom-up pass.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn children(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        let up = self.parent[v];
        self.tree.adj[v]
            .iter()
            .copied()
            .filter(move |&c| Some(c) != up)
    }

    /// Lowest common ancestor of `a` and `b`.
    pub fn lca(&self, a: usize, b: usize) -> Result<usize, TreeError> {
        self.check_node(a)?;
        self.check_node(b)?;
        let fail = || TreeError::PathNotFound { start: a, end: b };

        let (mut x, mut y) = (a, b);
        while self.depth[x] > self.depth[y] {
            x = self.parent[x].ok_or_else(fail)?;
        }
        while self.depth[y] > self.depth[x] {
            y = self.parent[y].ok_or_else(fail)?;
        }
        while x != y {
            x = self.parent[x].ok_or_else(fail)?;
            y = self.parent[y].ok_or_else(fail)?;
        }
        return Ok(x);
    }

    /// Inclusive simple path `start -> .. -> lca -> .. -> end`.
    pub fn path(&self, start: usize, end: usize) -> Result<Vec<usize>, TreeError> {
        let meet = self.lca(start, end)?;

        let mut path = self.climb(start, meet)?;
        path.push(meet);
        let mut tail = self.climb(end, meet)?;
        tail.reverse();
        path.append(&mut tail);
        return Ok(path);
    }

    /// Nodes from `from` up to, but excluding, its ancestor `to`.
    fn climb(&self, from: usize, to: usize) -> Result<Vec<usize>, TreeError> {
        let mut out = Vec::with_capacity(self.depth[from].saturating_sub(self.depth[to]));
        let mut v = from;
        while v != to {
            out.push(v);
            v = self.parent[v].ok_or(TreeError::PathNotFound {
                start: from,
                end: to,
            })?;
        }
        Ok(out)
    }

    fn check_node(&self, v: usize) -> Result<(), TreeError> {
        if v >= self.len() {
            return Err(TreeError::InvalidInput(format!(
                "node {v} out of range for {} nodes",
                self.len()
            )));
        }
        Ok(())
    }
}
