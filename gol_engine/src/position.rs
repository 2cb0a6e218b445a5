/// The row & column of a [`Cell`] within the grid.
///
/// To move "down" the grid the row must be increased.
/// To move "right" the column must be increased.
///
/// [`Cell`]: crate::Cell
#[derive(
    Eq,
    Hash,
    PartialEq,
    Clone,
    Copy,
    Debug,
    derive_more::Display,
    derive_more::From,
    serde::Serialize,
    serde::Deserialize,
)]
#[display("({row}, {column})")]
pub struct GridPosition {
    pub(crate) row: usize,
    pub(crate) column: usize,
}

impl GridPosition {
    /// Creates a new [`GridPosition`] at the given row & column.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Gets the represented row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Gets the represented column.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Moves the position by the given row & column offsets.
    ///
    /// Returns [`None`] if the resulting position is not within the given dimensions.
    pub fn offset(
        self,
        row_offset: isize,
        column_offset: isize,
        dimensions: GridDimensions,
    ) -> Option<GridPosition> {
        let row = self.row.checked_add_signed(row_offset)?;
        let column = self.column.checked_add_signed(column_offset)?;

        let position = GridPosition::new(row, column);
        dimensions.contains(position).then_some(position)
    }
}

/// The number of rows & columns of a grid.
///
/// Either value may be zero, in which case the grid holds no cells.
#[derive(Eq, PartialEq, Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct GridDimensions {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
}

impl GridDimensions {
    /// Creates new [`GridDimensions`] with the given amount of rows & columns.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Gets the amount of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Gets the amount of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The total amount of cells within these dimensions.
    ///
    /// Saturates at [`usize::MAX`] rather than overflowing.
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// Returns true if there are no cells within these dimensions.
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Returns true if the given position lies within these dimensions.
    pub fn contains(&self, position: GridPosition) -> bool {
        position.row < self.rows && position.column < self.columns
    }

    /// Gets the row-major index of the given position.
    ///
    /// Returns [`None`] if the position lies outside these dimensions.
    pub fn index_of(&self, position: GridPosition) -> Option<usize> {
        self.contains(position)
            .then(|| position.row * self.columns + position.column)
    }

    /// Gets the position at the given row-major index.
    ///
    /// Returns [`None`] if the index is past the last cell.
    pub fn position_of(&self, index: usize) -> Option<GridPosition> {
        (index < self.cell_count())
            .then(|| GridPosition::new(index / self.columns, index % self.columns))
    }

    /// Returns an iterator over every position within these dimensions in row-major order.
    ///
    /// # Examples
    /// ```rust
    /// # use gol_engine::GridDimensions;
    /// let dimensions = GridDimensions::new(2, 2);
    /// let mut positions = dimensions.positions();
    ///
    /// // A (usize, usize) can be converted into a GridPosition with .into()
    /// assert_eq!(positions.next().unwrap(), (0, 0).into());
    /// assert_eq!(positions.next().unwrap(), (0, 1).into());
    /// assert_eq!(positions.next().unwrap(), (1, 0).into());
    /// assert_eq!(positions.next().unwrap(), (1, 1).into());
    /// assert!(positions.next().is_none());
    /// ```
    pub fn positions(&self) -> impl Iterator<Item = GridPosition> + use<> {
        let columns = self.columns;
        (0..self.rows)
            .flat_map(move |row| (0..columns).map(move |column| GridPosition::new(row, column)))
    }
}
