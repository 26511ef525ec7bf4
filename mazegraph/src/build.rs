use std::collections::HashMap;

use log::debug;

use crate::{
    graph::{Graph, ListGraph, NodeId},
    maze::{Maze, Position},
};

/// A graph together with the two nodes a search connects
#[derive(Debug, Clone)]
pub struct SearchInput<G: Graph = ListGraph> {
    pub graph: G,
    pub start: NodeId,
    pub goal: NodeId,
}

impl<G: Graph> SearchInput<G> {
    pub fn new(graph: G, start: NodeId, goal: NodeId) -> Self {
        Self { graph, start, goal }
    }
}

/// Returns the positions orthogonally adjacent to the given one: up, down, left, right.
/// Only positions with non-negative coordinates are returned.
fn neighbors_four(position: Position) -> impl Iterator<Item = Position> {
    let mut points = Vec::with_capacity(4);

    if position.row > 0 {
        points.push(Position {
            row: position.row - 1,
            col: position.col,
        });
    }
    points.push(Position {
        row: position.row + 1,
        col: position.col,
    });
    if position.col > 0 {
        points.push(Position {
            row: position.row,
            col: position.col - 1,
        });
    }
    points.push(Position {
        row: position.row,
        col: position.col + 1,
    });

    points.into_iter()
}

impl Maze {
    /// Build the graph of this maze: one node per open cell and an edge between every pair of
    /// open cells that share a side.
    ///
    /// Every adjacency is inserted once from each of its two endpoints. With [`ListGraph`] this
    /// stores each neighbor twice in both lists; with a directed graph it produces both
    /// directions.
    pub fn to_graph<G: Graph>(&self) -> SearchInput<G> {
        let index: HashMap<Position, NodeId> = self
            .open_cells()
            .iter()
            .enumerate()
            .map(|(id, position)| (*position, id))
            .collect();

        let mut graph = G::with_size(self.node_count());

        for (id, position) in self.open_cells().iter().enumerate() {
            for neighbor in neighbors_four(*position) {
                if let Some(neighbor_id) = index.get(&neighbor) {
                    graph.add_edge(id, *neighbor_id);
                }
            }
        }

        debug!(
            "built graph with {} nodes, start {} goal {}",
            graph.size(),
            self.start_id(),
            self.goal_id()
        );

        SearchInput::new(graph, self.start_id(), self.goal_id())
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::graph::MatrixGraph;

    fn corridor_maze() -> Maze {
        "XXXXXXX\nXS    X\nXXX   X\nX   X X\nX   X X\nX X  GX\nXXXXXXX"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_linear_maze() {
        let maze: Maze = "XXXXX\nXS GX\nXXXXX".parse().unwrap();
        let input: SearchInput = maze.to_graph();

        assert_eq!(input.graph.size(), 3);
        assert_eq!(input.start, 0);
        assert_eq!(input.goal, 2);
        assert!(input.graph.has_edge(0, 1));
        assert!(input.graph.has_edge(1, 2));
        assert!(!input.graph.has_edge(0, 2));
    }

    #[test]
    fn test_list_graph_records_each_adjacency_twice() {
        let maze: Maze = "XXXX\nXSGX\nXXXX".parse().unwrap();
        let input: SearchInput<ListGraph> = maze.to_graph();

        assert_eq!(input.graph.neighbors(0).collect::<Vec<_>>(), vec![1, 1]);
        assert_eq!(input.graph.neighbors(1).collect::<Vec<_>>(), vec![0, 0]);
    }

    #[test]
    fn test_matrix_graph_is_symmetric_without_duplicates() {
        let maze = corridor_maze();
        let input: SearchInput<MatrixGraph> = maze.to_graph();

        assert_eq!(input.graph.size(), 20);
        for u in 0..input.graph.size() {
            for v in 0..input.graph.size() {
                assert_eq!(input.graph.has_edge(u, v), input.graph.has_edge(v, u));
            }
        }
        // (1, 3) touches (1, 2), (1, 4) and (2, 3)
        assert_eq!(input.graph.neighbors(2).collect::<Vec<_>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_list_and_matrix_agree() {
        let maze = corridor_maze();
        let list: SearchInput<ListGraph> = maze.to_graph();
        let matrix: SearchInput<MatrixGraph> = maze.to_graph();

        assert_eq!(list.graph.edge_count(), 2 * matrix.graph.edge_count());
        for u in 0..maze.node_count() {
            for v in 0..maze.node_count() {
                assert_eq!(list.graph.has_edge(u, v), matrix.graph.has_edge(u, v));
            }
        }
    }

    #[test]
    fn test_cells_on_the_border_are_connected() {
        let maze = Maze::parse(&["S GX", " X X"]).unwrap();
        let input: SearchInput<MatrixGraph> = maze.to_graph();

        // 0=(0,0) 1=(0,1) 2=(0,2) 3=(1,0) 4=(1,2)
        assert_eq!(input.graph.neighbors(0).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(input.graph.neighbors(2).collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(input.graph.edge_count(), 8);
    }
}
