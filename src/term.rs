use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{bail, Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::event::{Event, poll, read};
use crossterm::style::Color;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle};

use crate::grid::{Cell, Grid};
use crate::render::{Surface, BACKGROUND_COLOR};

/// Terminal columns used by one board cell.
const CELL_COLUMNS: u16 = 2;
const FILLED_CELL: &str = "[]";
const EMPTY_CELL: &str = "  ";

#[derive(Copy, Clone, PartialEq)]
struct Tile {
    fill: Color,
    border: Option<Color>,
}

/// Draws the board into the terminal. Frames are composed in `back` and only the
/// cells that differ from what is already on screen (`front`) get printed.
pub struct TermScreen {
    grid: Grid,
    stdout: Stdout,
    back: Vec<Tile>,
    front: Vec<Option<Tile>>,
    active: bool,
}

impl TermScreen {
    pub fn open(grid: Grid) -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        let (need_w, need_h) = required_size(&grid)?;
        if width < need_w || height < need_h {
            bail!("terminal is {}x{}, the board needs at least {}x{}", width, height, need_w, need_h);
        }

        let tiles = (grid.cells_wide() * grid.cells_high()) as usize;
        let blank = Tile { fill: BACKGROUND_COLOR, border: None };
        let mut screen = TermScreen {
            grid,
            stdout: stdout(),
            back: vec![blank; tiles],
            front: vec![None; tiles],
            active: false,
        };

        screen.setup()?;
        Ok(screen)
    }

    fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        self.active = true;
        terminal::enable_raw_mode().context("Error setting raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(terminal::ClearType::All))
            .context("Error hiding cursor")?;
        Ok(())
    }

    /// Puts the terminal back the way it was. Safe to call more than once.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        terminal::disable_raw_mode().context("Error unsetting raw mode")?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
            .context("Error leaving alt screen")?;
        Ok(())
    }

    /// Drains every pending event without blocking.
    pub fn read_events_queue(&self) -> Result<Vec<Event>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0)).context("Error polling events")? {
            events.push(read().context("Error reading event")?);
        }

        Ok(events)
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if !self.grid.contains(cell) {
            return None;
        }
        let (col, row) = self.grid.column_row(cell);
        Some((row * self.grid.cells_wide() + col) as usize)
    }

    fn print_tile(&mut self, idx: usize, tile: Tile) -> Result<()> {
        let cols = self.grid.cells_wide() as usize;
        let (col, row) = ((idx % cols) as u16, (idx / cols) as u16);
        let (text, fg) = match tile.border {
            Some(border) => (FILLED_CELL, border),
            None => (EMPTY_CELL, tile.fill),
        };

        queue!(
            self.stdout,
            cursor::MoveTo(col * CELL_COLUMNS, row),
            style::SetBackgroundColor(tile.fill),
            style::SetForegroundColor(fg),
            style::Print(text)
        )?;
        Ok(())
    }
}

impl Surface for TermScreen {
    fn clear(&mut self, color: Color) {
        let blank = Tile { fill: color, border: None };
        self.back.iter_mut().for_each(|tile| *tile = blank);
    }

    fn fill_cell(&mut self, cell: Cell, fill: Color, border: Option<Color>) {
        if let Some(idx) = self.index(cell) {
            self.back[idx] = Tile { fill, border };
        }
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(self.stdout, SetTitle(title)).context("Error setting title")?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        for idx in 0..self.back.len() {
            let tile = self.back[idx];
            if self.front[idx] != Some(tile) {
                self.print_tile(idx, tile)?;
                self.front[idx] = Some(tile);
            }
        }

        queue!(self.stdout, style::ResetColor)?;
        self.stdout.flush().context("Error flushing")?;
        Ok(())
    }
}

impl Drop for TermScreen {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Terminal (columns, rows) needed to show the whole board.
fn required_size(grid: &Grid) -> Result<(u16, u16)> {
    let columns = u16::try_from(grid.cells_wide())
        .ok()
        .and_then(|cells| cells.checked_mul(CELL_COLUMNS));
    let rows = u16::try_from(grid.cells_high()).ok();

    match (columns, rows) {
        (Some(columns), Some(rows)) => Ok((columns, rows)),
        _ => bail!("a {}x{} cell board cannot fit in any terminal", grid.cells_wide(), grid.cells_high()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_fits_a_standard_terminal() {
        assert_eq!(required_size(&Grid::default()).unwrap(), (64, 24));
    }

    #[test]
    fn size_scales_with_cells() {
        let grid = Grid::new(10, 100, 50).unwrap();
        assert_eq!(required_size(&grid).unwrap(), (20, 5));
    }

    #[test]
    fn oversized_board_is_an_error() {
        // 40000 cells is a valid u16 but not once doubled into columns
        let wide = Grid::new(1, 40_000, 10).unwrap();
        assert!(required_size(&wide).is_err());

        let tall = Grid::new(1, 10, 70_000).unwrap();
        assert!(required_size(&tall).is_err());

        let widest = Grid::new(1, 32_767, 10).unwrap();
        assert_eq!(required_size(&widest).unwrap(), (65_534, 10));
    }
}
