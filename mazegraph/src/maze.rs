use std::{fmt::Display, str::FromStr};

use log::debug;
use serde::Serialize;

use crate::{
    error::{Marker, MazeError},
    graph::NodeId,
};

/// The rows of a maze as read from its text form, one string per row
pub type MazeGrid = Vec<String>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CellKind {
    Wall,
    Open,
    Start,
    Goal,
}

impl CellKind {
    /// Classify a maze character, ignoring case
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(CellKind::Wall),
            ' ' => Some(CellKind::Open),
            'S' => Some(CellKind::Start),
            'G' => Some(CellKind::Goal),
            _ => None,
        }
    }

    /// Start and goal cells can be walked through like any open cell
    pub fn is_open(&self) -> bool {
        !matches!(self, CellKind::Wall)
    }
}

impl Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CellKind::Wall => "X",
                CellKind::Open => " ",
                CellKind::Start => "S",
                CellKind::Goal => "G",
            }
        )
    }
}

/// The traversable part of a maze.
///
/// Every open cell is listed once, in row-major order, and its index in that list is its node
/// id. Start and goal are stored as node ids, so they always refer to listed cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    open_cells: Vec<Position>,
    start: NodeId,
    goal: NodeId,
}

impl Maze {
    /// Collect the open cells of a grid of rows.
    ///
    /// Trailing whitespace of each row is dropped before it is scanned. When a marker occurs
    /// more than once the last occurrence is used.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, MazeError> {
        let mut open_cells = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (row, line) in rows.iter().enumerate() {
            for (col, c) in line.as_ref().trim_end().chars().enumerate() {
                let position = Position { row, col };
                let kind = CellKind::from_char(c)
                    .ok_or(MazeError::MalformedCharacter { position, found: c })?;

                if !kind.is_open() {
                    continue;
                }

                match kind {
                    CellKind::Start => start = Some(open_cells.len()),
                    CellKind::Goal => goal = Some(open_cells.len()),
                    _ => {}
                }
                open_cells.push(position);
            }
        }

        let (start, goal) = match (start, goal) {
            (Some(start), Some(goal)) => (start, goal),
            (start, goal) => {
                let mut missing = Vec::new();
                if start.is_none() {
                    missing.push(Marker::Start);
                }
                if goal.is_none() {
                    missing.push(Marker::Goal);
                }
                return Err(MazeError::MissingMarkers(missing));
            }
        };

        debug!(
            "parsed maze with {} open cells, start {} goal {}",
            open_cells.len(),
            open_cells[start],
            open_cells[goal]
        );

        Ok(Self {
            open_cells,
            start,
            goal,
        })
    }

    /// Assemble a maze from an already collected open cell list.
    ///
    /// Both markers must be listed among the open cells; if a position is listed more than
    /// once the last entry is used. Start and goal may be the same cell.
    pub fn from_parts(
        open_cells: Vec<Position>,
        start: Position,
        goal: Position,
    ) -> Result<Self, MazeError> {
        let start_id = open_cells.iter().rposition(|p| *p == start);
        let goal_id = open_cells.iter().rposition(|p| *p == goal);

        match (start_id, goal_id) {
            (Some(start), Some(goal)) => Ok(Self {
                open_cells,
                start,
                goal,
            }),
            (start, goal) => Err(MazeError::MissingMarkers(
                [(start, Marker::Start), (goal, Marker::Goal)]
                    .into_iter()
                    .filter(|(id, _)| id.is_none())
                    .map(|(_, marker)| marker)
                    .collect(),
            )),
        }
    }

    pub fn open_cells(&self) -> &[Position] {
        &self.open_cells
    }

    /// Number of open cells, i.e. the number of nodes of the maze graph
    pub fn node_count(&self) -> usize {
        self.open_cells.len()
    }

    pub fn start(&self) -> Position {
        self.open_cells[self.start]
    }

    pub fn goal(&self) -> Position {
        self.open_cells[self.goal]
    }

    pub fn start_id(&self) -> NodeId {
        self.start
    }

    pub fn goal_id(&self) -> NodeId {
        self.goal
    }

    /// The node id of an open cell, by linear search over the open cells
    pub fn node_id(&self, position: Position) -> Option<NodeId> {
        self.open_cells.iter().rposition(|p| *p == position)
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().collect();
        Maze::parse(&rows)
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(CellKind::from_char('X'), Some(CellKind::Wall));
        assert_eq!(CellKind::from_char('x'), Some(CellKind::Wall));
        assert_eq!(CellKind::from_char(' '), Some(CellKind::Open));
        assert_eq!(CellKind::from_char('s'), Some(CellKind::Start));
        assert_eq!(CellKind::from_char('g'), Some(CellKind::Goal));
        assert_eq!(CellKind::from_char('#'), None);
        assert_eq!(CellKind::from_char('\t'), None);
        assert!(CellKind::Start.is_open());
        assert!(CellKind::Goal.is_open());
        assert!(!CellKind::Wall.is_open());
    }

    #[test]
    fn test_parse_linear() {
        let maze: Maze = "XXXXX\nXS GX\nXXXXX".parse().unwrap();

        assert_eq!(
            maze.open_cells(),
            &[
                Position { row: 1, col: 1 },
                Position { row: 1, col: 2 },
                Position { row: 1, col: 3 },
            ]
        );
        assert_eq!(maze.start_id(), 0);
        assert_eq!(maze.goal_id(), 2);
        assert_eq!(maze.start(), Position { row: 1, col: 1 });
        assert_eq!(maze.goal(), Position { row: 1, col: 3 });
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let maze: Maze = "xxxxx\nxs gx\nxxxxx".parse().unwrap();

        assert_eq!(maze.node_count(), 3);
        assert_eq!(maze.start_id(), 0);
        assert_eq!(maze.goal_id(), 2);
    }

    #[test]
    fn test_parse_last_marker_wins() {
        let maze: Maze = "XXXXXX\nXSGSGX\nXXXXXX".parse().unwrap();

        assert_eq!(maze.node_count(), 4);
        assert_eq!(maze.start_id(), 2);
        assert_eq!(maze.goal_id(), 3);
    }

    #[test]
    fn test_parse_trims_trailing_whitespace() {
        let maze = Maze::parse(&["XXXX   ", "XSGX \t", "XXXX"]).unwrap();

        assert_eq!(maze.node_count(), 2);
    }

    #[test]
    fn test_parse_ragged_rows() {
        let maze = Maze::parse(&["XXXXXX", "XS  GX", "X X", "XXXXXX"]).unwrap();

        assert_eq!(maze.node_count(), 5);
        assert_eq!(maze.node_id(Position { row: 2, col: 1 }), Some(4));
        assert_eq!(maze.node_id(Position { row: 2, col: 4 }), None);
    }

    #[test]
    fn test_parse_malformed_character() {
        let err = Maze::parse(&["XXXX", "XS.X", "XGXX"]).unwrap_err();

        assert!(matches!(
            err,
            MazeError::MalformedCharacter {
                position: Position { row: 1, col: 2 },
                found: '.'
            }
        ));
    }

    #[test]
    fn test_parse_missing_markers() {
        let err = Maze::parse(&["XXXX", "XS X", "XXXX"]).unwrap_err();
        assert!(matches!(err, MazeError::MissingMarkers(ref m) if m == &[Marker::Goal]));

        let err = Maze::parse(&["XXXX", "X GX", "XXXX"]).unwrap_err();
        assert!(matches!(err, MazeError::MissingMarkers(ref m) if m == &[Marker::Start]));

        let err = Maze::parse::<&str>(&[]).unwrap_err();
        assert!(
            matches!(err, MazeError::MissingMarkers(ref m) if m == &[Marker::Start, Marker::Goal])
        );
    }

    #[test]
    fn test_from_parts() {
        let cell = Position { row: 3, col: 4 };
        let maze = Maze::from_parts(vec![cell], cell, cell).unwrap();

        assert_eq!(maze.start_id(), 0);
        assert_eq!(maze.goal_id(), 0);

        let err = Maze::from_parts(vec![cell], cell, Position { row: 0, col: 0 }).unwrap_err();
        assert!(matches!(err, MazeError::MissingMarkers(ref m) if m == &[Marker::Goal]));
    }
}
