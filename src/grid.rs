use anyhow::{ensure, Result};
use Direction::*;

/// A grid-aligned position, in pixels.
pub type Cell = (i32, i32);

pub const DEFAULT_CELL_SIZE: i32 = 20;
pub const DEFAULT_WIDTH_PX: i32 = 640;
pub const DEFAULT_HEIGHT_PX: i32 = 480;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// Board dimensions. The board is a torus: leaving one edge re-enters at the opposite one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cell_size: i32,
    width_px: i32,
    height_px: i32,
}

impl Grid {
    pub fn new(cell_size: i32, width_px: i32, height_px: i32) -> Result<Self> {
        ensure!(cell_size > 0, "cell size must be positive, got {}", cell_size);
        ensure!(width_px > 0 && height_px > 0, "board must not be empty, got {}x{}", width_px, height_px);
        ensure!(
            width_px % cell_size == 0 && height_px % cell_size == 0,
            "board {}x{} is not a multiple of the cell size {}",
            width_px, height_px, cell_size
        );

        Ok(Grid { cell_size, width_px, height_px })
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn cells_wide(&self) -> i32 {
        self.width_px / self.cell_size
    }

    pub fn cells_high(&self) -> i32 {
        self.height_px / self.cell_size
    }

    pub fn center(&self) -> Cell {
        ((self.cells_wide() / 2) * self.cell_size, (self.cells_high() / 2) * self.cell_size)
    }

    /// The neighbouring cell in `direction`, wrapped around the board edges.
    pub fn step(&self, (x, y): Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        (
            (x + dx * self.cell_size).rem_euclid(self.width_px),
            (y + dy * self.cell_size).rem_euclid(self.height_px),
        )
    }

    pub fn contains(&self, (x, y): Cell) -> bool {
        (0..self.width_px).contains(&x) && (0..self.height_px).contains(&y)
    }

    /// Cell index as (column, row).
    pub fn column_row(&self, (x, y): Cell) -> (i32, i32) {
        (x / self.cell_size, y / self.cell_size)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid { cell_size: DEFAULT_CELL_SIZE, width_px: DEFAULT_WIDTH_PX, height_px: DEFAULT_HEIGHT_PX }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_is_32_by_24_cells() {
        let grid = Grid::default();
        assert_eq!(grid.cells_wide(), 32);
        assert_eq!(grid.cells_high(), 24);
        assert_eq!(grid.center(), (320, 240));
    }

    #[test]
    fn rejects_misaligned_board() {
        assert!(Grid::new(20, 650, 480).is_err());
        assert!(Grid::new(0, 640, 480).is_err());
        assert!(Grid::new(20, 0, 480).is_err());
        assert!(Grid::new(10, 30, 20).is_ok());
    }

    #[test]
    fn center_is_grid_aligned_on_odd_boards() {
        let grid = Grid::new(20, 100, 60).unwrap();
        assert_eq!(grid.center(), (40, 20));
    }

    #[test]
    fn step_wraps_on_every_edge() {
        let grid = Grid::default();
        assert_eq!(grid.step((620, 100), Right), (0, 100));
        assert_eq!(grid.step((0, 100), Left), (620, 100));
        assert_eq!(grid.step((100, 0), Up), (100, 460));
        assert_eq!(grid.step((100, 460), Down), (100, 0));
    }

    #[test]
    fn step_moves_one_cell_inside_the_board() {
        let grid = Grid::default();
        assert_eq!(grid.step((100, 100), Right), (120, 100));
        assert_eq!(grid.step((100, 100), Up), (100, 80));
    }

    #[test]
    fn opposites() {
        for dir in Direction::ALL.iter() {
            assert_eq!(dir.opposite().opposite(), *dir);
            let (dx, dy) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dx, -dy));
        }
    }

    #[test]
    fn column_row_and_contains() {
        let grid = Grid::default();
        assert_eq!(grid.column_row((620, 460)), (31, 23));
        assert!(grid.contains((620, 460)));
        assert!(!grid.contains((640, 0)));
        assert!(!grid.contains((0, -20)));
    }
}
