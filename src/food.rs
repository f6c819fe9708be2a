use crossterm::style::Color;
use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::render::{Drawable, Surface, BORDER_COLOR, FOOD_COLOR};

pub struct Food {
    position: Cell,
    color: Color,
}

impl Food {
    pub fn new<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        let mut food = Food { position: (0, 0), color: FOOD_COLOR };
        food.randomize_position(grid, rng);
        food
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the food to a uniformly random cell of the board. The snake's body is
    /// not taken into account, so the food can land underneath it.
    pub fn randomize_position<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        let size = grid.cell_size();
        self.position = (
            rng.gen_range(0..grid.cells_wide()) * size,
            rng.gen_range(0..grid.cells_high()) * size,
        );
    }
}

impl Drawable for Food {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_cell(self.position, self.color, Some(BORDER_COLOR));
    }
}

#[cfg(test)]
impl Food {
    pub fn at(position: Cell) -> Self {
        Food { position, color: FOOD_COLOR }
    }
}
