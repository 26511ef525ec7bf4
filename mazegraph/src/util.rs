use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use log::debug;

use crate::{
    error::MazeError,
    maze::{Maze, MazeGrid},
};

/// Read the rows of a maze, one per line.
///
/// Trailing whitespace is dropped from every row and blank lines at the end of the input are
/// ignored.
pub fn read_grid<R: Read>(reader: R) -> Result<MazeGrid, MazeError> {
    let mut grid = BufReader::new(reader)
        .lines()
        .map(|line| line.map(|l| l.trim_end().to_string()))
        .collect::<Result<MazeGrid, _>>()?;

    while grid.last().is_some_and(|row| row.is_empty()) {
        grid.pop();
    }

    Ok(grid)
}

/// Read a maze file and collect its open cells
pub fn load_maze<P: AsRef<Path>>(path: P) -> Result<(MazeGrid, Maze), MazeError> {
    let path = path.as_ref();
    let grid = read_grid(File::open(path)?)?;
    debug!("read {} rows from {}", grid.len(), path.display());

    let maze = Maze::parse(&grid)?;
    Ok((grid, maze))
}
