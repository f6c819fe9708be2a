use crossterm::style::Color;

use crate::grid::Cell;

pub const BACKGROUND_COLOR: Color = Color::Rgb { r: 0, g: 0, b: 0 };
pub const BORDER_COLOR: Color = Color::Rgb { r: 93, g: 216, b: 228 };
pub const FOOD_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };
pub const SNAKE_COLOR: Color = Color::Rgb { r: 0, g: 255, b: 0 };

/// Something the board can be painted onto, one cell at a time.
pub trait Surface {
    fn clear(&mut self, color: Color);

    /// Paints a single cell. `border` draws the one-unit accent outline when given.
    fn fill_cell(&mut self, cell: Cell, fill: Color, border: Option<Color>);

    fn set_title(&mut self, title: &str) -> anyhow::Result<()>;

    /// Pushes the frame drawn since the last `clear` to the screen.
    fn present(&mut self) -> anyhow::Result<()>;
}

pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface);
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// In-memory surface that records every call.
    #[derive(Default)]
    pub struct RecordingSurface {
        pub cells: Vec<(Cell, Color, Option<Color>)>,
        pub clears: Vec<Color>,
        pub titles: Vec<String>,
        pub frames: usize,
    }

    impl RecordingSurface {
        pub fn color_at(&self, cell: Cell) -> Option<Color> {
            self.cells.iter().rev().find(|(c, _, _)| *c == cell).map(|(_, fill, _)| *fill)
        }
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, color: Color) {
            self.cells.clear();
            self.clears.push(color);
        }

        fn fill_cell(&mut self, cell: Cell, fill: Color, border: Option<Color>) {
            self.cells.push((cell, fill, border));
        }

        fn set_title(&mut self, title: &str) -> anyhow::Result<()> {
            self.titles.push(title.to_string());
            Ok(())
        }

        fn present(&mut self) -> anyhow::Result<()> {
            self.frames += 1;
            Ok(())
        }
    }
}
