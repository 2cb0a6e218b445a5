//! Draws engine commands with an egui [`Painter`].

use egui::{Color32, Painter, Pos2, Rect, Rounding, Stroke, vec2};
use gol_engine::{Colour, PixelRect, RenderSurface};

/// A [`RenderSurface`] that paints onto an area of the screen.
///
/// The engine works in coordinates relative to the top left of the board area, so every rectangle is offset by the
/// origin of that area.
pub(crate) struct EguiSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> EguiSurface<'a> {
    pub(crate) fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, rect: PixelRect) -> Rect {
        Rect::from_min_size(
            self.origin + vec2(rect.x, rect.y),
            vec2(rect.width, rect.height),
        )
    }
}

pub(crate) fn to_color32(colour: Colour) -> Color32 {
    Color32::from_rgb(colour.r, colour.g, colour.b)
}

impl RenderSurface for EguiSurface<'_> {
    fn fill_rect(&mut self, rect: PixelRect, colour: Colour) {
        self.painter
            .rect_filled(self.to_screen(rect), Rounding::ZERO, to_color32(colour));
    }

    fn stroke_rect(&mut self, rect: PixelRect, colour: Colour, width: f32) {
        self.painter.rect_stroke(
            self.to_screen(rect),
            Rounding::ZERO,
            Stroke::new(width, to_color32(colour)),
        );
    }
}

/// Converts a screen position into a position relative to the given origin.
pub(crate) fn to_surface(origin: Pos2, screen: Pos2) -> (f32, f32) {
    let relative = screen - origin;
    (relative.x, relative.y)
}

#[cfg(test)]
mod tests {
    use egui::pos2;

    use super::*;

    #[test]
    fn screen_offsets() {
        let origin = pos2(30.0, 40.0);

        assert_eq!(to_surface(origin, pos2(35.0, 60.0)), (5.0, 20.0));
        assert_eq!(to_color32(Colour::GREY), Color32::from_rgb(0x50, 0x50, 0x50));
    }
}
