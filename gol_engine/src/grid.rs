//! Contains [`Grid`].
//! See its documentation for more information.

use std::fmt;

use crate::{Cell, CellState, GridDimensions, GridPosition, cell::GridReader};

/// A fixed size collection of [`Cell`]s stored in row-major order.
///
/// The dimensions never change after construction & the cell at each index is always at the matching position.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Grid {
    dimensions: GridDimensions,
    cells: Box<[Cell]>,
}

impl Grid {
    /// Constructs a grid of dead cells with the given dimensions.
    pub fn new(dimensions: GridDimensions) -> Self {
        let cells = dimensions
            .positions()
            .map(|position| Cell::new(dimensions, position))
            .collect();

        Self { dimensions, cells }
    }

    /// Gets the dimensions of this grid.
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Gets the cell at the given position.
    pub fn get(&self, position: impl Into<GridPosition>) -> Option<&Cell> {
        self.dimensions
            .index_of(position.into())
            .and_then(|index| self.cells.get(index))
    }

    /// Gets a mutable reference to the cell at the given position.
    pub fn get_mut(&mut self, position: impl Into<GridPosition>) -> Option<&mut Cell> {
        self.dimensions
            .index_of(position.into())
            .and_then(|index| self.cells.get_mut(index))
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The amount of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells
            .iter_mut()
            .for_each(|cell| cell.set(CellState::Dead));
    }

    /// Stages the next state of every cell.
    ///
    /// Only the staged state is written, so every cell reads the neighbours of the same generation.
    pub fn compute_next_states(&mut self) {
        let dimensions = self.dimensions;

        for index in 0..self.cells.len() {
            let (before, rest) = self.cells.split_at_mut(index);
            let Some((cell, after)) = rest.split_first_mut() else {
                break;
            };

            let others = SplitCells {
                dimensions,
                before,
                after,
            };
            cell.compute_next_state(&others);
        }
    }

    /// Commits the staged state of every cell.
    ///
    /// Must only be called once [`Grid::compute_next_states`] has finished.
    pub fn commit_all(&mut self) {
        self.cells.iter_mut().for_each(Cell::commit);
    }
}

impl GridReader for Grid {
    fn state_at(&self, position: GridPosition) -> CellState {
        self.get(position).map(Cell::state).unwrap_or_default()
    }
}

/// Every cell of a grid apart from the one being computed, which sits between `before` & `after`.
///
/// A cell is never its own neighbour, so the missing cell reads as dead.
struct SplitCells<'a> {
    dimensions: GridDimensions,
    before: &'a [Cell],
    after: &'a [Cell],
}

impl GridReader for SplitCells<'_> {
    fn state_at(&self, position: GridPosition) -> CellState {
        let Some(index) = self.dimensions.index_of(position) else {
            return CellState::Dead;
        };

        let cell = match index.checked_sub(self.before.len()) {
            None => self.before.get(index),
            Some(0) => None,
            Some(offset) => self.after.get(offset - 1),
        };
        cell.map(Cell::state).unwrap_or_default()
    }
}

impl fmt::Display for Grid {
    /// Writes one line per row, with `#` for alive cells & `.` for dead cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.dimensions.columns().max(1)) {
            for cell in row {
                let symbol = match cell.state() {
                    CellState::Alive => '#',
                    CellState::Dead => '.',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Every cell is stored at the index matching its position.
    fn cells_match_positions() {
        let dimensions = GridDimensions::new(3, 4);
        let grid = Grid::new(dimensions);

        assert_eq!(grid.cells().count(), 12);
        for (cell, position) in grid.cells().zip(dimensions.positions()) {
            assert_eq!(cell.position(), position);
            assert_eq!(grid.get(position).map(Cell::position), Some(position));
        }
    }

    #[test]
    /// Positions outside the grid have no cell & read as dead.
    fn out_of_bounds() {
        let grid = Grid::new(GridDimensions::new(2, 2));

        assert!(grid.get((2, 0)).is_none());
        assert!(grid.get((0, 2)).is_none());
        assert_eq!(grid.state_at((5, 5).into()), CellState::Dead);
    }

    #[test]
    /// Computing never changes the visible state, only commit does.
    fn compute_then_commit() {
        let mut grid = Grid::new(GridDimensions::new(3, 3));
        for column in 0..3 {
            grid.get_mut((1, column)).unwrap().set(CellState::Alive);
        }

        grid.compute_next_states();
        assert_eq!(grid.to_string(), "...\n###\n...\n");

        grid.commit_all();
        assert_eq!(grid.to_string(), ".#.\n.#.\n.#.\n");
    }

    #[test]
    /// The view used whilst computing reads the same states as the grid, apart from the cell being computed.
    fn split_cells_match_grid() {
        let mut grid = Grid::new(GridDimensions::new(3, 3));
        for position in [(0, 0), (0, 2), (1, 1), (2, 1)] {
            grid.get_mut(position).unwrap().toggle();
        }

        let dimensions = grid.dimensions();
        for gap in 0..grid.cells.len() {
            let others = SplitCells {
                dimensions,
                before: &grid.cells[..gap],
                after: &grid.cells[gap + 1..],
            };

            for (index, position) in dimensions.positions().enumerate() {
                let expected = if index == gap {
                    CellState::Dead
                } else {
                    grid.state_at(position)
                };
                assert_eq!(others.state_at(position), expected, "gap {gap} at {position}");
            }
            assert_eq!(others.state_at((3, 0).into()), CellState::Dead);
        }
    }

    #[test]
    /// A fully alive block keeps only its corners, each of which sees three neighbours.
    fn crowded_cells_die() {
        let mut grid = Grid::new(GridDimensions::new(3, 3));
        for position in grid.dimensions().positions() {
            grid.get_mut(position).unwrap().set(CellState::Alive);
        }

        grid.compute_next_states();
        grid.commit_all();
        assert_eq!(grid.to_string(), "#.#\n...\n#.#\n");
    }

    #[test]
    /// Clearing kills every cell.
    fn clear() {
        let mut grid = Grid::new(GridDimensions::new(2, 3));
        grid.get_mut((0, 0)).unwrap().toggle();
        grid.get_mut((1, 2)).unwrap().toggle();
        assert_eq!(grid.population(), 2);

        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    /// A grid without cells still advances & displays.
    fn empty_grid() {
        let mut grid = Grid::new(GridDimensions::new(0, 0));

        grid.compute_next_states();
        grid.commit_all();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.to_string(), "");
    }
}
