use std::{error, fmt::Display, io};

use crate::maze::Position;

/// Which of the two required markers a maze is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Start,
    Goal,
}

impl Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Marker::Start => "start (S)",
                Marker::Goal => "goal (G)",
            }
        )
    }
}

#[derive(Debug)]
pub enum MazeError {
    Io(io::Error),
    MalformedCharacter { position: Position, found: char },
    MissingMarkers(Vec<Marker>),
}

impl Display for MazeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MazeError::Io(e) => write!(f, "Failed to read maze: {}", e),
            MazeError::MalformedCharacter { position, found } => write!(
                f,
                "Unexpected character {:?} at row {}, column {}",
                found, position.row, position.col
            ),
            MazeError::MissingMarkers(markers) => {
                write!(f, "Maze can't be searched, it has no ")?;
                for (i, marker) in markers.iter().enumerate() {
                    if i > 0 {
                        write!(f, " and no ")?;
                    }
                    write!(f, "{}", marker)?;
                }
                Ok(())
            }
        }
    }
}

impl error::Error for MazeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            MazeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MazeError {
    fn from(value: io::Error) -> Self {
        MazeError::Io(value)
    }
}
