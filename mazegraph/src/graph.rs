use std::fmt::Display;

use log::trace;

/// Identifies a node in a graph, always in `[0, size)` for valid nodes
pub type NodeId = usize;

/// The common contract of the two graph realizations.
///
/// Node arguments outside `[0, size)` are ignored: mutators do nothing and queries answer
/// "no edge" or an empty neighbor sequence. Nothing is reported to the caller.
pub trait Graph {
    /// Create a graph with `size` nodes and no edges
    fn with_size(size: usize) -> Self
    where
        Self: Sized;

    /// The number of nodes in the graph
    fn size(&self) -> usize;

    /// Check if the provided node id refers to a node in this graph
    fn is_valid(&self, node: NodeId) -> bool {
        node < self.size()
    }

    /// Insert an edge from `from` to `to`. Whether the reverse edge is implied depends on the
    /// realization.
    fn add_edge(&mut self, from: NodeId, to: NodeId);

    /// Check if an edge from `from` to `to` exists
    fn has_edge(&self, from: NodeId, to: NodeId) -> bool;

    /// Return an iterator over the neighbors of the provided node
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_;
}

/// Dense realization backed by a `size * size` matrix of flags.
///
/// Edges are directed: `add_edge(u, v)` does not imply `v -> u`. Neighbors are enumerated in
/// ascending order and are never duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGraph {
    size: usize,
    cells: Vec<bool>,
}

impl MatrixGraph {
    /// Number of set cells in the matrix
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    fn index(&self, from: NodeId, to: NodeId) -> usize {
        from * self.size + to
    }
}

impl Graph for MatrixGraph {
    fn with_size(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    fn size(&self) -> usize {
        self.size
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId) {
        if !self.is_valid(from) || !self.is_valid(to) {
            trace!("ignoring edge {} -> {} on a graph of {} nodes", from, to, self.size);
            return;
        }
        let index = self.index(from, to);
        self.cells[index] = true;
    }

    fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.is_valid(from) && self.is_valid(to) && self.cells[self.index(from, to)]
    }

    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let candidates = if self.is_valid(node) { 0..self.size } else { 0..0 };
        candidates.filter(move |to| self.cells[self.index(node, *to)])
    }
}

impl Display for MatrixGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                write!(f, "{}", if *cell { 1 } else { 0 })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Sparse realization that keeps an ordered neighbor list per node.
///
/// `add_edge(u, v)` is undirected: it appends `v` to the list of `u` and `u` to the list of `v`.
/// Lists keep insertion order and repeated insertions are kept as duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListGraph {
    adjacency: Vec<Vec<NodeId>>,
}

impl ListGraph {
    /// Number of stored neighbor entries, duplicates included
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

impl Graph for ListGraph {
    fn with_size(size: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); size],
        }
    }

    fn size(&self) -> usize {
        self.adjacency.len()
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId) {
        if !self.is_valid(from) || !self.is_valid(to) {
            trace!(
                "ignoring edge {} -- {} on a graph of {} nodes",
                from,
                to,
                self.size()
            );
            return;
        }
        self.adjacency[from].push(to);
        self.adjacency[to].push(from);
    }

    fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.is_valid(to)
            && self
                .adjacency
                .get(from)
                .is_some_and(|neighbors| neighbors.contains(&to))
    }

    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.get(node).into_iter().flatten().copied()
    }
}

impl Display for ListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (node, neighbors) in self.adjacency.iter().enumerate() {
            write!(f, "{}:", node)?;
            for neighbor in neighbors {
                write!(f, " {}", neighbor)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
