//! Contains [`Board`], which owns the grid & drives the simulation.

use std::{
    fmt,
    num::NonZeroU32,
    time::{Duration, Instant},
};

use crate::{
    BoardLayout, Cell, CellState, Grid, GridDimensions, GridPosition, Palette, Pattern,
    PatternError, RenderSurface, render_cell,
};

/// The default time between generations whilst the board is running.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Whether the board is advancing generations on its own.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum RunMode {
    #[default]
    Idle,
    /// The board will advance whenever the timer is due.
    Running(GenerationTimer),
}

/// The schedule of the next generation whilst a board is running.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct GenerationTimer {
    next_tick: Instant,
}

impl GenerationTimer {
    /// Starts a timer which is first due one period after `now`.
    fn start(now: Instant, period: Duration) -> Self {
        Self {
            next_tick: now + period,
        }
    }

    /// Gets the time the timer is next due.
    pub fn next_tick(&self) -> Instant {
        self.next_tick
    }

    fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    /// Schedules the following tick one period on.
    ///
    /// If ticks have been missed they are skipped, the timer is never due more than once for a single `now`.
    fn rearm(&mut self, now: Instant, period: Duration) {
        self.next_tick += period;
        if self.next_tick <= now {
            self.next_tick = now + period;
        }
    }
}

/// Represents a board of cells fitted onto a drawing surface.
///
/// The board is constructed once for a surface size & never changes dimensions.
#[derive(Debug, Clone)]
pub struct Board {
    /// How the grid is placed on the surface.
    layout: BoardLayout,
    /// The cells of the board.
    grid: Grid,
    /// The colours used to render the board.
    palette: Palette,

    /// The generation that this simulation is on.
    generation: u64,
    /// The time between generations whilst running.
    tick_period: Duration,
    run_mode: RunMode,
}

impl Board {
    /// Creates a board of dead cells that fits on a surface of the given size.
    ///
    /// A surface too small for a single cell, or invalid sizes, produce a board with no cells.
    ///
    /// ```
    /// # use gol_engine::Board;
    /// let board = Board::new(800.0, 600.0, 50.0);
    ///
    /// assert_eq!(board.dimensions().rows(), 12);
    /// assert_eq!(board.dimensions().columns(), 16);
    /// assert!(!board.is_running());
    /// ```
    pub fn new(surface_width: f32, surface_height: f32, cell_size: f32) -> Self {
        let layout = BoardLayout::new(surface_width, surface_height, cell_size);
        let grid = Grid::new(layout.dimensions());

        log::debug!(
            "Created {}x{} board for {surface_width}x{surface_height} surface",
            layout.dimensions().rows(),
            layout.dimensions().columns(),
        );

        Self {
            layout,
            grid,
            palette: Palette::default(),
            generation: 0,
            tick_period: DEFAULT_TICK_PERIOD,
            run_mode: RunMode::Idle,
        }
    }

    /// Sets the time between generations whilst running.
    pub fn with_tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period;
        self
    }

    /// Sets the colours used to render the board.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Gets how the grid is placed on the surface.
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Gets the cells of the board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Gets the amount of rows & columns.
    pub fn dimensions(&self) -> GridDimensions {
        self.grid.dimensions()
    }

    /// Gets the colours used to render the board.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Sets the colours used to render the board.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Gets the current generation of simulation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The amount of alive cells.
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, position: impl Into<GridPosition>) -> Option<&Cell> {
        self.grid.get(position)
    }

    /// Sets the state of the cell at the given position.
    ///
    /// Returns false if there is no cell at the position.
    pub fn set(&mut self, position: impl Into<GridPosition>, state: CellState) -> bool {
        match self.grid.get_mut(position) {
            Some(cell) => {
                cell.set(state);
                true
            }
            None => false,
        }
    }

    /// Gets the cell under the given point of the surface.
    ///
    /// Points in the margins around the grid have no cell.
    pub fn locate_cell(&self, x: f32, y: f32) -> Option<&Cell> {
        self.layout
            .locate(x, y)
            .and_then(|position| self.grid.get(position))
    }

    /// Gets a mutable reference to the cell under the given point of the surface.
    pub fn locate_cell_mut(&mut self, x: f32, y: f32) -> Option<&mut Cell> {
        self.layout
            .locate(x, y)
            .and_then(|position| self.grid.get_mut(position))
    }

    /// Toggles the cell under the given point of the surface.
    ///
    /// Returns the position of the toggled cell, or [`None`] if the point is not over a cell.
    pub fn toggle_at(&mut self, x: f32, y: f32) -> Option<GridPosition> {
        let cell = self.locate_cell_mut(x, y)?;
        cell.toggle();

        log::debug!("Toggled cell {} to {:?}", cell.position(), cell.state());
        Some(cell.position())
    }

    /// Advances every cell by one generation.
    ///
    /// The next state of every cell is computed before any cell is committed, so all cells see the same generation.
    pub fn advance_generation(&mut self) {
        self.grid.compute_next_states();
        self.grid.commit_all();
        self.generation += 1;

        log::trace!(
            "Advanced to generation {} with {} alive cells",
            self.generation,
            self.grid.population()
        );
    }

    /// Sets all cells to dead & sets the generation to 0.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Writes the pattern onto the board with its top left at the given position.
    ///
    /// See [`Pattern::place`].
    pub fn load_pattern(
        &mut self,
        origin: impl Into<GridPosition>,
        pattern: &Pattern,
    ) -> Result<usize, PatternError> {
        pattern.place(&mut self.grid, origin.into())
    }

    /// Gets whether the board is idle or running.
    pub fn run_mode(&self) -> RunMode {
        self.run_mode
    }

    /// Returns true if the board is advancing generations on its own.
    pub fn is_running(&self) -> bool {
        matches!(self.run_mode, RunMode::Running(_))
    }

    /// Gets the time between generations whilst running.
    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    /// Sets the time between generations.
    ///
    /// A running board keeps its next scheduled generation, the new period applies after it.
    pub fn set_tick_period(&mut self, tick_period: Duration) {
        self.tick_period = tick_period;
    }

    /// Sets the amount of generations per second whilst running.
    pub fn set_ticks_per_second(&mut self, ticks_per_second: NonZeroU32) {
        self.set_tick_period(Duration::from_secs(1) / ticks_per_second.get());
    }

    /// Starts advancing generations periodically.
    ///
    /// See [`Board::play_at`].
    pub fn play(&mut self) -> bool {
        self.play_at(Instant::now())
    }

    /// Starts advancing generations periodically, with the first generation one period after `now`.
    ///
    /// Playing an already running board does nothing, there is only ever one timer.
    /// Returns true if the board was started.
    pub fn play_at(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }

        self.run_mode = RunMode::Running(GenerationTimer::start(now, self.tick_period));
        log::debug!("Board started at generation {}", self.generation);
        true
    }

    /// Stops advancing generations.
    ///
    /// Stopping an idle board does nothing.
    /// Returns true if the board was stopped.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        self.run_mode = RunMode::Idle;
        log::debug!("Board stopped at generation {}", self.generation);
        true
    }

    /// Advances a generation if the board is running & the timer is due.
    ///
    /// See [`Board::poll_at`].
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// Advances a generation if the board is running & the timer is due at `now`.
    ///
    /// At most one generation is advanced per call, missed ticks are skipped.
    /// Returns true if a generation was advanced.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        let RunMode::Running(timer) = &mut self.run_mode else {
            return false;
        };

        if !timer.is_due(now) {
            return false;
        }

        timer.rearm(now, self.tick_period);
        self.advance_generation();
        true
    }

    /// Gets the time from `now` until the next generation.
    ///
    /// Returns [`None`] if the board is not running.
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        match self.run_mode {
            RunMode::Running(timer) => Some(timer.next_tick().saturating_duration_since(now)),
            RunMode::Idle => None,
        }
    }

    /// Draws every cell onto the surface.
    pub fn render(&self, surface: &mut impl RenderSurface) {
        for cell in self.grid.cells() {
            for command in render_cell(cell, &self.layout, &self.palette) {
                surface.draw(command);
            }
        }
    }

    /// Draws a single cell onto the surface.
    ///
    /// Returns false if there is no cell at the position.
    pub fn render_cell(&self, position: impl Into<GridPosition>, surface: &mut impl RenderSurface) -> bool {
        let Some(cell) = self.grid.get(position) else {
            return false;
        };

        for command in render_cell(cell, &self.layout, &self.palette) {
            surface.draw(command);
        }
        true
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
