use std::{
    collections::VecDeque,
    fmt::Display,
    ops::{Deref, DerefMut},
};

use log::debug;
use serde::Serialize;

use crate::{
    build::SearchInput,
    graph::{Graph, NodeId},
};

/// The nodes that have been discovered but not expanded yet.
/// The order in which they are handed back decides the kind of search.
pub trait Frontier: Default {
    fn push(&mut self, node: NodeId);
    fn pop(&mut self) -> Option<NodeId>;
}

/// Last in, first out: depth-first search
#[derive(Debug, Default)]
pub struct Stack(Vec<NodeId>);

impl Frontier for Stack {
    fn push(&mut self, node: NodeId) {
        self.0.push(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop()
    }
}

/// First in, first out: breadth-first search
#[derive(Debug, Default)]
pub struct Queue(VecDeque<NodeId>);

impl Frontier for Queue {
    fn push(&mut self, node: NodeId) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop_front()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisitedItem {
    /// Number of edges between the start and this node along the discovering parents
    pub depth: usize,
    /// The node that discovered this one, `None` for the start
    pub from: Option<NodeId>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Visited(Option<VisitedItem>);

impl Deref for Visited {
    type Target = Option<VisitedItem>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for Visited {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Debug, PartialEq, Clone, Eq)]
pub struct PathResult {
    pub path: Vec<NodeId>,
    pub start: NodeId,
    pub goal: NodeId,
    /// Size of the component explored from the start
    pub visited_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathFinderState {
    Computing,
    /// The goal is outside the component of the start, which had `visited_count` nodes
    NoPathFound { visited_count: usize },
    PathFound(PathResult),
}

impl PathFinderState {
    pub fn is_done(&self) -> bool {
        !matches!(self, PathFinderState::Computing)
    }

    /// Number of nodes the finished search explored, `None` while it is still running
    pub fn visited_count(&self) -> Option<usize> {
        match self {
            PathFinderState::Computing => None,
            PathFinderState::NoPathFound { visited_count } => Some(*visited_count),
            PathFinderState::PathFound(result) => Some(result.visited_count),
        }
    }

    /// The found path, or an empty one
    pub fn into_path(self) -> Vec<NodeId> {
        match self {
            PathFinderState::PathFound(result) => result.path,
            _ => Vec::new(),
        }
    }
}

/// An uninformed search from `start` that explores the whole component of the start before
/// reconstructing the path to `goal`.
///
/// Each node gets its parent exactly once, when it is first discovered, and is pushed onto the
/// frontier at most once. The frontier type decides between depth-first ([`Stack`]) and
/// breadth-first ([`Queue`]) order.
#[derive(Debug)]
pub struct PathFinder<F: Frontier> {
    start: NodeId,
    goal: NodeId,
    visited: Vec<Visited>,
    visited_count: usize,
    frontier: F,
    state: PathFinderState,
}

impl<F: Frontier> PathFinder<F> {
    /// Prepare a search over a graph with `size` nodes
    pub fn new(start: NodeId, goal: NodeId, size: usize) -> Self {
        let mut finder = Self {
            start,
            goal,
            visited: vec![Visited::default(); size],
            visited_count: 0,
            frontier: F::default(),
            state: PathFinderState::Computing,
        };
        finder.discover(start, None);
        finder
    }

    /// Run the search to completion
    pub fn finish<G: Graph>(mut self, graph: &G) -> (PathFinderState, Vec<Visited>) {
        loop {
            match self.step(graph) {
                PathFinderState::Computing => {}
                s => return (s, self.visited),
            }
        }
    }

    /// Expand one node from the frontier, or settle the result once it is empty
    pub fn step<G: Graph>(&mut self, graph: &G) -> PathFinderState {
        if self.state.is_done() {
            return self.state.clone();
        }

        if let Some(node) = self.frontier.pop() {
            for neighbor in graph.neighbors(node) {
                self.discover(neighbor, Some(node));
            }
        } else {
            self.state = self.backtrack();
        }

        self.state.clone()
    }

    /// Mark a node as visited and queue it, unless it already was or is not a node at all
    fn discover(&mut self, node: NodeId, from: Option<NodeId>) {
        let depth = match from {
            Some(from) => match *self.visited[from] {
                Some(item) => item.depth + 1,
                None => return,
            },
            None => 0,
        };

        match self.visited.get_mut(node) {
            Some(entry) if entry.is_none() => {
                **entry = Some(VisitedItem { depth, from });
                self.visited_count += 1;
                self.frontier.push(node);
            }
            _ => {}
        }
    }

    /// Walk the parents from the goal back to the start
    fn backtrack(&self) -> PathFinderState {
        if !self.visited.get(self.goal).is_some_and(|v| v.is_some()) {
            return PathFinderState::NoPathFound {
                visited_count: self.visited_count,
            };
        }

        let mut current = self.goal;
        let mut path = vec![current];
        while let Some(VisitedItem {
            from: Some(from), ..
        }) = *self.visited[current]
        {
            path.push(from);
            current = from;
        }
        path.reverse();

        PathFinderState::PathFound(PathResult {
            path,
            start: self.start,
            goal: self.goal,
            visited_count: self.visited_count,
        })
    }

    pub fn state(&self) -> &PathFinderState {
        &self.state
    }

    pub fn get_visited(&self) -> &[Visited] {
        &self.visited
    }

    /// Number of nodes discovered so far
    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn goal(&self) -> NodeId {
        self.goal
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Dfs,
    Bfs,
}

impl Strategy {
    pub fn run<G: Graph>(&self, input: &SearchInput<G>) -> PathFinderState {
        let (state, _) = match self {
            Strategy::Dfs => {
                PathFinder::<Stack>::new(input.start, input.goal, input.graph.size())
                    .finish(&input.graph)
            }
            Strategy::Bfs => {
                PathFinder::<Queue>::new(input.start, input.goal, input.graph.size())
                    .finish(&input.graph)
            }
        };

        match &state {
            PathFinderState::PathFound(result) => debug!(
                "{}: reached {} from {} in {} nodes, explored {}",
                self,
                input.goal,
                input.start,
                result.path.len(),
                result.visited_count
            ),
            PathFinderState::NoPathFound { visited_count } => debug!(
                "{}: {} unreachable from {}, explored {}",
                self, input.goal, input.start, visited_count
            ),
            PathFinderState::Computing => {}
        }

        state
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Strategy::Dfs => "DFS",
                Strategy::Bfs => "BFS",
            }
        )
    }
}

/// Depth-first search from the start to the goal of `input`. Returns an empty path when the goal
/// can't be reached.
pub fn dfs<G: Graph>(input: &SearchInput<G>) -> Vec<NodeId> {
    Strategy::Dfs.run(input).into_path()
}

/// Breadth-first search from the start to the goal of `input`. The path has the fewest edges of
/// all paths; it is empty when the goal can't be reached.
pub fn bfs<G: Graph>(input: &SearchInput<G>) -> Vec<NodeId> {
    Strategy::Bfs.run(input).into_path()
}
