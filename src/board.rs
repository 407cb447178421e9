use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

use crate::error::GamePlayError;
use crate::rules::RulesError;
use crate::square::{Square, SquareType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The next coordinate along `direction`.
    pub fn step(self, direction: Direction) -> Self {
        self.step_by(direction, 1)
    }

    pub fn step_by(self, direction: Direction, offset: usize) -> Self {
        match direction {
            Direction::Horizontal => Self::new(self.row, self.col + offset),
            Direction::Vertical => Self::new(self.row + offset, self.col),
        }
    }

    /// The previous coordinate along `direction`, or None at the board edge.
    pub fn step_back(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Horizontal => self.col.checked_sub(1).map(|col| Self::new(self.row, col)),
            Direction::Vertical => self.row.checked_sub(1).map(|row| Self::new(row, self.col)),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum Direction {
    #[strum(serialize = "h", serialize = "horizontal")]
    Horizontal,
    #[strum(serialize = "v", serialize = "vertical")]
    Vertical,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }
}

/// A fixed-size grid of squares. Dimensions never change after construction
/// and every access is bounds-checked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    squares: Vec<Vec<Square>>,
    start_squares: Vec<Coordinate>,
}

impl Board {
    /// Builds a board from a layout template of two-character square-type
    /// codes. The template must be rectangular and contain a start square.
    pub fn from_layout(layout: &[Vec<String>]) -> Result<Self, RulesError> {
        let cols = layout.first().map(|row| row.len()).unwrap_or_default();
        if cols == 0 || layout.iter().any(|row| row.len() != cols) {
            return Err(RulesError::RaggedLayout);
        }

        let mut squares = Vec::with_capacity(layout.len());
        let mut start_squares = Vec::new();
        for (row, codes) in layout.iter().enumerate() {
            let mut board_row = Vec::with_capacity(cols);
            for (col, code) in codes.iter().enumerate() {
                let square_type = SquareType::from_str(code).map_err(|_| {
                    RulesError::UnknownSquareCode {
                        code: code.clone(),
                        row,
                        col,
                    }
                })?;
                if square_type == SquareType::Start {
                    start_squares.push(Coordinate::new(row, col));
                }
                board_row.push(Square::new(square_type));
            }
            squares.push(board_row);
        }

        if start_squares.is_empty() {
            return Err(RulesError::MissingStartSquare);
        }

        Ok(Self {
            squares,
            start_squares,
        })
    }

    pub fn rows(&self) -> usize {
        self.squares.len()
    }

    pub fn cols(&self) -> usize {
        self.squares[0].len()
    }

    pub fn start_squares(&self) -> &[Coordinate] {
        &self.start_squares
    }

    pub fn get(&self, position: Coordinate) -> Result<&Square, GamePlayError> {
        self.squares
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .ok_or(GamePlayError::OutOfBounds { position })
    }

    pub fn get_mut(&mut self, position: Coordinate) -> Result<&mut Square, GamePlayError> {
        self.squares
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.col))
            .ok_or(GamePlayError::OutOfBounds { position })
    }

    /// Whether the square at `position` holds a tile. Out-of-bounds
    /// coordinates are simply unoccupied.
    pub fn is_occupied(&self, position: Coordinate) -> bool {
        self.get(position)
            .map(|square| square.is_occupied())
            .unwrap_or(false)
    }

    /// Checks that every letter of a word starting at `origin` lands on the
    /// board. Geometry only: occupancy and word legality are checked by the
    /// move pipeline.
    pub fn validate_placement(
        &self,
        origin: Coordinate,
        word_len: usize,
        direction: Direction,
    ) -> Result<(), GamePlayError> {
        for offset in 0..word_len.max(1) {
            self.get(origin.step_by(direction, offset))?;
        }
        Ok(())
    }

    /// The number of tiles currently sitting on the board.
    pub fn tile_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|square| square.is_occupied())
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let border = format!("   {}+", "+--".repeat(self.cols()));

        write!(f, "   ")?;
        for col in 0..self.cols() {
            write!(f, "{col:2} ")?;
        }
        writeln!(f)?;
        writeln!(f, "{border}")?;

        for (row, squares) in self.squares.iter().enumerate() {
            write!(f, "{row:2} |")?;
            for square in squares {
                let mut cell = square.to_string();
                if cell.len() == 1 {
                    cell.push(' ');
                }
                write!(f, "{cell}|")?;
            }
            writeln!(f)?;
            writeln!(f, "{border}")?;
        }
        Ok(())
    }
}
