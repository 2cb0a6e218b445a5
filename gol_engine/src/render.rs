//! Converts cells into drawing commands for a [`RenderSurface`].
//!
//! Nothing in here knows about a particular graphics library, the host implements [`RenderSurface`] for whatever it
//! draws with.

use crate::{BoardLayout, Cell, CellState, PixelRect};

/// An opaque RGB colour.
#[derive(PartialEq, Eq, Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const WHITE: Colour = Colour::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Colour = Colour::rgb(0x00, 0x00, 0x00);
    pub const GREY: Colour = Colour::rgb(0x50, 0x50, 0x50);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The colours used to draw the board.
#[derive(PartialEq, Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    /// The fill of alive cells.
    pub alive: Colour,
    /// The fill of dead cells.
    pub dead: Colour,
    /// The outline drawn around every cell.
    pub grid_line: Colour,
    /// The width of the outline.
    pub grid_line_width: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Colour::WHITE,
            dead: Colour::BLACK,
            grid_line: Colour::GREY,
            grid_line_width: 2.0,
        }
    }
}

impl Palette {
    /// Gets the fill colour for a cell in the given state.
    pub fn fill(&self, state: CellState) -> Colour {
        match state {
            CellState::Alive => self.alive,
            CellState::Dead => self.dead,
        }
    }
}

/// A single primitive for a [`RenderSurface`] to draw.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum DrawCommand {
    /// Fill the rectangle with the colour.
    Fill { rect: PixelRect, colour: Colour },
    /// Outline the rectangle with a line of the given colour & width.
    Stroke {
        rect: PixelRect,
        colour: Colour,
        width: f32,
    },
}

/// Something that can draw rectangles, addressed in the same pixel space as the [`BoardLayout`].
pub trait RenderSurface {
    fn fill_rect(&mut self, rect: PixelRect, colour: Colour);

    fn stroke_rect(&mut self, rect: PixelRect, colour: Colour, width: f32);

    /// Executes the given command.
    fn draw(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Fill { rect, colour } => self.fill_rect(rect, colour),
            DrawCommand::Stroke {
                rect,
                colour,
                width,
            } => self.stroke_rect(rect, colour, width),
        }
    }
}

/// Gets the commands that draw the given cell.
///
/// The fill always comes before the outline, so the outline stays visible.
pub fn render_cell(cell: &Cell, layout: &BoardLayout, palette: &Palette) -> [DrawCommand; 2] {
    let rect = layout.cell_rect(cell.position());

    [
        DrawCommand::Fill {
            rect,
            colour: palette.fill(cell.state()),
        },
        DrawCommand::Stroke {
            rect,
            colour: palette.grid_line,
            width: palette.grid_line_width,
        },
    ]
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::GridDimensions;

    /// Records every command it is given.
    #[derive(Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) commands: Vec<DrawCommand>,
    }

    impl RenderSurface for RecordingSurface {
        fn fill_rect(&mut self, rect: PixelRect, colour: Colour) {
            self.commands.push(DrawCommand::Fill { rect, colour });
        }

        fn stroke_rect(&mut self, rect: PixelRect, colour: Colour, width: f32) {
            self.commands.push(DrawCommand::Stroke {
                rect,
                colour,
                width,
            });
        }
    }

    #[test]
    /// Alive & dead cells are filled differently, both are outlined the same.
    fn cell_colours() {
        let layout = BoardLayout::new(100.0, 100.0, 50.0);
        let palette = Palette::default();
        let mut cell = Cell::new(layout.dimensions(), (1, 0));
        let rect = PixelRect::new(0.0, 50.0, 50.0, 50.0);
        let outline = DrawCommand::Stroke {
            rect,
            colour: Colour::GREY,
            width: 2.0,
        };

        assert_eq!(
            render_cell(&cell, &layout, &palette),
            [
                DrawCommand::Fill {
                    rect,
                    colour: Colour::BLACK
                },
                outline
            ]
        );

        cell.toggle();
        assert_eq!(
            render_cell(&cell, &layout, &palette),
            [
                DrawCommand::Fill {
                    rect,
                    colour: Colour::WHITE
                },
                outline
            ]
        );
    }

    #[test]
    /// Drawing a command calls the matching primitive.
    fn draw_dispatches() {
        let mut surface = RecordingSurface::default();
        let cell = Cell::new(GridDimensions::new(1, 1), (0, 0));
        let layout = BoardLayout::new(50.0, 50.0, 50.0);

        for command in render_cell(&cell, &layout, &Palette::default()) {
            surface.draw(command);
        }

        assert_eq!(
            surface.commands,
            render_cell(&cell, &layout, &Palette::default()).to_vec()
        );
    }
}
