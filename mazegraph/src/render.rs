use std::fmt::Display;

use crate::maze::{CellKind, Maze};

/// A copy of a maze where every open cell shows the last digit of its node id.
///
/// The start and goal cells show `S` and `G`. Each row is followed by the largest node id on it
/// (`-1` for rows without open cells) and by notes for the start and goal ids when they are on
/// that row.
pub struct NodeMarked<'a, S: AsRef<str>> {
    grid: &'a [S],
    maze: &'a Maze,
}

impl<'a, S: AsRef<str>> NodeMarked<'a, S> {
    /// `maze` must have been parsed from `grid`
    pub fn new(grid: &'a [S], maze: &'a Maze) -> Self {
        Self { grid, maze }
    }

    pub fn rows(&self) -> Vec<String> {
        let mut next_id = 0;
        let mut rows = Vec::with_capacity(self.grid.len());

        for line in self.grid {
            let mut row = String::new();
            let mut last_id = None;
            let mut start_found = None;
            let mut goal_found = None;

            for c in line.as_ref().trim_end().chars() {
                if !CellKind::from_char(c).is_some_and(|kind| kind.is_open()) {
                    row.push('X');
                    continue;
                }

                let id = next_id;
                next_id += 1;
                last_id = Some(id);

                if id == self.maze.start_id() {
                    row.push('S');
                } else if id == self.maze.goal_id() {
                    row.push('G');
                } else {
                    row.push_str(&(id % 10).to_string());
                }

                // start and goal may share a cell
                if id == self.maze.start_id() {
                    start_found = Some(id);
                }
                if id == self.maze.goal_id() {
                    goal_found = Some(id);
                }
            }

            match last_id {
                Some(id) => row.push_str(&format!("     {}", id)),
                None => row.push_str("     -1"),
            }
            if let Some(id) = start_found {
                row.push_str(&format!("    Start at {}", id));
            }
            if let Some(id) = goal_found {
                row.push_str(&format!("    Goal at {}", id));
            }

            rows.push(row);
        }

        rows
    }
}

impl<'a, S: AsRef<str>> Display for NodeMarked<'a, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::maze::Position;

    #[test]
    fn test_corridor_maze() {
        let grid = [
            "XXXXXXX", "XS    X", "XXX   X", "X   X X", "X   X X", "X X  GX", "XXXXXXX",
        ];
        let maze = Maze::parse(&grid).unwrap();

        assert_eq!(
            NodeMarked::new(&grid, &maze).rows(),
            vec![
                "XXXXXXX     -1",
                "XS1234X     4    Start at 0",
                "XXX567X     7",
                "X890X1X     11",
                "X234X5X     15",
                "X6X78GX     19    Goal at 19",
                "XXXXXXX     -1",
            ]
        );
    }

    #[test]
    fn test_lowercase_and_duplicate_markers() {
        let grid = ["xxxxxx", "xs  gx", "xsx gx", "xxxxxx"];
        let maze = Maze::parse(&grid).unwrap();

        // the last s and the last g win, the earlier ones get their digit
        assert_eq!(
            NodeMarked::new(&grid, &maze).to_string(),
            "XXXXXX     -1\n\
             X0123X     3\n\
             XSX5GX     6    Start at 4    Goal at 6\n\
             XXXXXX     -1\n"
        );
    }

    #[test]
    fn test_start_and_goal_on_one_cell() {
        let grid = ["XXX", "XSX"];
        let cell = Position { row: 1, col: 1 };
        let maze = Maze::from_parts(vec![cell], cell, cell).unwrap();

        assert_eq!(
            NodeMarked::new(&grid, &maze).rows(),
            vec!["XXX     -1", "XSX     0    Start at 0    Goal at 0"]
        );
    }
}
