//! Turns text mazes into graphs and finds a way from the start cell to the goal cell with
//! depth-first and breadth-first search.

pub mod build;
pub mod error;
pub mod graph;
pub mod maze;
pub mod render;
pub mod search;
pub mod util;

pub use build::SearchInput;
pub use error::{Marker, MazeError};
pub use graph::{Graph, ListGraph, MatrixGraph, NodeId};
pub use maze::{CellKind, Maze, MazeGrid, Position};
pub use render::NodeMarked;
pub use search::{bfs, dfs, PathFinder, PathFinderState, PathResult, Queue, Stack, Strategy};
