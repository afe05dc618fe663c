// render.rs - Path-to-color-assignment rendering

use crate::color::Color;
use crate::coord::Coord;
use crate::error_handling::Result;

/// One background-color write for a sink to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPaint {
    pub coord: Coord,
    pub color: Color,
}

/// Applies paint assignments to the external grid, one cell per call, in
/// the order handed over. Pacing between writes is the implementation's
/// concern, not the renderer's.
pub trait PaintSink {
    fn apply(&mut self, paint: CellPaint) -> Result<()>;
}

/// Render a path as an ordered assignment list, one entry per path cell,
/// all in the given highlight color. Pure function; an empty path yields
/// an empty list.
pub fn render(path: &[Coord], color: Color) -> Vec<CellPaint> {
    path.iter().map(|&coord| CellPaint { coord, color }).collect()
}

/// `render` with the default yellow highlight.
pub fn render_default(path: &[Coord]) -> Vec<CellPaint> {
    render(path, Color::YELLOW)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_assignment_per_cell_in_order() {
        let path = [Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)];
        let paints = render(&path, Color::YELLOW);

        assert_eq!(paints.len(), 3);
        for (paint, coord) in paints.iter().zip(path) {
            assert_eq!(paint.coord, coord);
            assert_eq!(paint.color, Color::YELLOW);
        }
    }

    #[test]
    fn test_empty_path_renders_nothing() {
        assert!(render(&[], Color::GREEN).is_empty());
    }

    #[test]
    fn test_default_highlight_is_yellow() {
        let paints = render_default(&[Coord::new(2, 2)]);
        assert_eq!(paints[0].color, Color::YELLOW);
    }

    #[test]
    fn test_caller_color_override() {
        let paints = render(&[Coord::new(0, 0)], Color::new(0.0, 0.0, 1.0));
        assert_eq!(paints[0].color, Color::new(0.0, 0.0, 1.0));
    }
}
