//! Plain text patterns used to seed a board.
//!
//! Each line is one row. `#`, `O` & `*` are alive cells, `.` & spaces are dead cells. Lines starting with `!` are
//! comments.

use std::str::FromStr;

use crate::{CellState, Grid, GridPosition};

/// The errors that can occur when parsing or placing a [`Pattern`].
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[cfg_attr(test, derive(kinded::Kinded))]
pub enum PatternError {
    /// The pattern contains a character that is not a cell.
    #[error("Unknown symbol {symbol:?} at line {line}, column {column}")]
    UnknownSymbol {
        /// The line of the symbol, starting at 1.
        line: usize,
        /// The column of the symbol, starting at 1.
        column: usize,
        symbol: char,
    },
    /// The pattern would place a cell outside of the grid.
    #[error("Pattern cell {position} is outside of the grid")]
    OutOfBounds { position: GridPosition },
}

/// A rectangle of cell states, parsed from text.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Pattern {
    rows: Vec<Box<[CellState]>>,
}

impl Pattern {
    /// Gets the rows of the pattern, rows may have differing lengths.
    pub fn rows(&self) -> &[Box<[CellState]>] {
        &self.rows
    }

    /// The amount of alive cells in the pattern.
    pub fn population(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|state| state.is_alive())
            .count()
    }

    /// Writes this pattern onto the grid with its top left at the given position.
    ///
    /// Every cell covered by the pattern is overwritten, including dead ones. If any cell would be outside the grid,
    /// the grid is left untouched.
    ///
    /// Returns the amount of alive cells written.
    pub fn place(&self, grid: &mut Grid, origin: GridPosition) -> Result<usize, PatternError> {
        let dimensions = grid.dimensions();

        let mut placements = Vec::new();
        for (row_offset, row) in self.rows.iter().enumerate() {
            for (column_offset, state) in row.iter().enumerate() {
                let position = GridPosition::new(
                    origin.row.saturating_add(row_offset),
                    origin.column.saturating_add(column_offset),
                );
                if !dimensions.contains(position) {
                    return Err(PatternError::OutOfBounds { position });
                }

                placements.push((position, *state));
            }
        }

        for (position, state) in placements {
            if let Some(cell) = grid.get_mut(position) {
                cell.set(state);
            }
        }

        Ok(self.population())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();

        for (line_index, line) in text.lines().enumerate() {
            if line.starts_with('!') {
                continue;
            }

            let row = line
                .trim_end_matches('\r')
                .chars()
                .enumerate()
                .map(|(column_index, symbol)| match symbol {
                    '#' | 'O' | '*' => Ok(CellState::Alive),
                    '.' | ' ' => Ok(CellState::Dead),
                    _ => Err(PatternError::UnknownSymbol {
                        line: line_index + 1,
                        column: column_index + 1,
                        symbol,
                    }),
                })
                .collect::<Result<Box<[CellState]>, PatternError>>()?;

            rows.push(row);
        }

        Ok(Self { rows })
    }
}
