//! Contains [`Cell`] & [`CellState`].
//! See their documentation for more information.

use crate::{GridDimensions, GridPosition};

/// The amount of alive neighbours that will bring a dead cell to life.
const BIRTH_NEIGHBOURS: u8 = 3;
/// The minimum amount of alive neighbours an alive cell needs to survive.
const MIN_SURVIVAL_NEIGHBOURS: u8 = 2;
/// The maximum amount of alive neighbours an alive cell can have & survive.
const MAX_SURVIVAL_NEIGHBOURS: u8 = 3;

/// Represents the state of a cell within the Conways game of life simulation.
///
/// An alive cell is represented as `true`.
/// A dead cell is represented as `false`.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl From<CellState> for bool {
    fn from(value: CellState) -> Self {
        match value {
            CellState::Alive => true,
            CellState::Dead => false,
        }
    }
}

impl From<bool> for CellState {
    fn from(value: bool) -> Self {
        match value {
            true => CellState::Alive,
            false => CellState::Dead,
        }
    }
}

impl CellState {
    /// Returns the opposite of the current state.
    pub fn invert(self) -> CellState {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }

    /// Returns true if the state is [`CellState::Alive`].
    pub fn is_alive(self) -> bool {
        self.into()
    }
}

/// Computes the state of a cell for the next generation from its current state & its amount of alive neighbours.
///
/// ```
/// # use gol_engine::{CellState, next_state};
/// assert_eq!(next_state(CellState::Dead, 3), CellState::Alive);
/// assert_eq!(next_state(CellState::Alive, 2), CellState::Alive);
/// assert_eq!(next_state(CellState::Alive, 4), CellState::Dead);
/// ```
pub fn next_state(current: CellState, alive_neighbours: u8) -> CellState {
    match (current, alive_neighbours) {
        (CellState::Dead, BIRTH_NEIGHBOURS) => CellState::Alive,
        (CellState::Alive, MIN_SURVIVAL_NEIGHBOURS..=MAX_SURVIVAL_NEIGHBOURS) => CellState::Alive,
        _ => CellState::Dead,
    }
}

/// Read only access to the current state of the cells within a grid.
///
/// A [`Cell`] resolves the state of its neighbours through this, rather than holding a reference to the grid.
pub trait GridReader {
    /// Gets the current state of the cell at the given position.
    ///
    /// Positions outside the grid are [`CellState::Dead`].
    fn state_at(&self, position: GridPosition) -> CellState;
}

/// A single unit of the board.
///
/// The visible state of a cell is only changed by [`Cell::toggle`] & [`Cell::commit`].
/// The state for the next generation is staged separately by [`Cell::compute_next_state`], so that every cell in a
/// generation can be computed before any of them change.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Cell {
    position: GridPosition,
    current: CellState,
    next: CellState,
    /// Every in-bounds position surrounding this cell.
    neighbours: Box<[GridPosition]>,
}

impl Cell {
    /// Creates a dead cell at the given position within a grid of the given dimensions.
    ///
    /// The position is expected to be within the dimensions.
    pub fn new(dimensions: GridDimensions, position: impl Into<GridPosition>) -> Self {
        let position = position.into();

        let mut neighbours = Vec::with_capacity(8);
        for row_offset in -1..=1 {
            for column_offset in -1..=1 {
                if row_offset == 0 && column_offset == 0 {
                    continue;
                }

                if let Some(neighbour) = position.offset(row_offset, column_offset, dimensions) {
                    neighbours.push(neighbour);
                }
            }
        }

        Self {
            position,
            current: CellState::Dead,
            next: CellState::Dead,
            neighbours: neighbours.into(),
        }
    }

    /// Gets the position of this cell.
    pub fn position(&self) -> GridPosition {
        self.position
    }

    /// Gets the visible state of this cell.
    pub fn state(&self) -> CellState {
        self.current
    }

    /// Gets the state staged for the next generation.
    pub fn next(&self) -> CellState {
        self.next
    }

    /// Returns true if this cell is currently alive.
    pub fn is_alive(&self) -> bool {
        self.current.is_alive()
    }

    /// Gets the positions surrounding this cell.
    pub fn neighbours(&self) -> &[GridPosition] {
        &self.neighbours
    }

    /// Sets the visible state of this cell.
    pub fn set(&mut self, state: CellState) {
        self.current = state;
    }

    /// Flips the visible state of this cell.
    pub fn toggle(&mut self) {
        self.current = self.current.invert();
    }

    /// Counts how many of this cell's neighbours are currently alive.
    pub fn alive_neighbours(&self, grid: &impl GridReader) -> u8 {
        self.neighbours
            .iter()
            .filter(|neighbour| grid.state_at(**neighbour).is_alive())
            .count() as u8
    }

    /// Stages the state for the next generation given the amount of alive neighbours.
    ///
    /// The visible state is unchanged until [`Cell::commit`] is called.
    pub fn stage_next_state(&mut self, alive_neighbours: u8) -> CellState {
        self.next = next_state(self.current, alive_neighbours);
        self.next
    }

    /// Reads the neighbours from the given grid & stages the state for the next generation.
    ///
    /// The grid must reflect the current generation, it must not contain any committed cells of the next.
    pub fn compute_next_state(&mut self, grid: &impl GridReader) -> CellState {
        let alive_neighbours = self.alive_neighbours(grid);
        self.stage_next_state(alive_neighbours)
    }

    /// Replaces the visible state with the staged state.
    pub fn commit(&mut self) {
        self.current = self.next;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// A grid reader where only the given positions are alive.
    struct AliveSet(HashSet<GridPosition>);

    impl GridReader for AliveSet {
        fn state_at(&self, position: GridPosition) -> CellState {
            self.0.contains(&position).into()
        }
    }

    #[test]
    /// Every combination of state & neighbour count follows the birth on 3, survive on 2 or 3 rule.
    fn rule_table() {
        for alive_neighbours in 0..=8 {
            let born = next_state(CellState::Dead, alive_neighbours);
            let survives = next_state(CellState::Alive, alive_neighbours);

            assert_eq!(born.is_alive(), alive_neighbours == 3, "dead with {alive_neighbours}");
            assert_eq!(
                survives.is_alive(),
                alive_neighbours == 2 || alive_neighbours == 3,
                "alive with {alive_neighbours}"
            );
        }
    }

    #[test]
    /// The staged state is computed from the neighbours read through the grid reader.
    fn compute_reads_neighbours() {
        let dimensions = GridDimensions::new(3, 3);
        let neighbours = Cell::new(dimensions, (1, 1)).neighbours().to_vec();

        for alive_count in 0..=8 {
            for current in [CellState::Dead, CellState::Alive] {
                let alive = AliveSet(neighbours.iter().take(alive_count).copied().collect());
                let mut cell = Cell::new(dimensions, (1, 1));
                cell.set(current);

                let staged = cell.compute_next_state(&alive);
                assert_eq!(staged, next_state(current, alive_count as u8));
                assert_eq!(cell.next(), staged);
                // The visible state must not change until commit.
                assert_eq!(cell.state(), current);

                cell.commit();
                assert_eq!(cell.state(), staged);
            }
        }
    }

    #[test]
    /// A new cell is dead & has nothing staged.
    fn dead_by_default() {
        let cell = Cell::new(GridDimensions::new(2, 2), (0, 0));

        assert_eq!(cell.state(), CellState::Dead);
        assert_eq!(cell.next(), CellState::Dead);
    }

    #[test]
    /// Toggling twice returns a cell to its original state.
    fn toggle_is_self_inverse() {
        let mut cell = Cell::new(GridDimensions::new(2, 2), (1, 1));

        cell.toggle();
        assert!(cell.is_alive());
        cell.toggle();
        assert!(!cell.is_alive());
    }

    #[test]
    /// Corner cells have 3 neighbours, edge cells 5 & interior cells 8.
    fn neighbour_counts() {
        let dimensions = GridDimensions::new(4, 5);

        for position in dimensions.positions() {
            let on_row_edge = position.row() == 0 || position.row() == 3;
            let on_column_edge = position.column() == 0 || position.column() == 4;

            let expected = match (on_row_edge, on_column_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 5,
                (false, false) => 8,
            };

            assert_eq!(
                Cell::new(dimensions, position).neighbours().len(),
                expected,
                "cell at {position}"
            );
        }
    }

    #[test]
    /// The neighbours are exactly the in-bounds positions of the surrounding 3x3 block.
    fn neighbour_sets() {
        let dimensions = GridDimensions::new(4, 5);

        for position in dimensions.positions() {
            let neighbours: HashSet<_> = Cell::new(dimensions, position)
                .neighbours()
                .iter()
                .copied()
                .collect();

            let expected: HashSet<_> = dimensions
                .positions()
                .filter(|other| {
                    *other != position
                        && other.row().abs_diff(position.row()) <= 1
                        && other.column().abs_diff(position.column()) <= 1
                })
                .collect();

            assert_eq!(neighbours, expected, "cell at {position}");
        }
    }

    #[test]
    /// A single row or column still has neighbours along its length.
    fn single_row_grid() {
        let dimensions = GridDimensions::new(1, 3);

        assert_eq!(Cell::new(dimensions, (0, 0)).neighbours(), &[GridPosition::new(0, 1)]);
        assert_eq!(Cell::new(dimensions, (0, 1)).neighbours().len(), 2);
    }
}
