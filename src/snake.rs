use std::collections::VecDeque;

use rand::Rng;

use crate::grid::{Cell, Direction::{*, self}, Grid};
use crate::render::{Drawable, Surface, BACKGROUND_COLOR, BORDER_COLOR, SNAKE_COLOR};
use MoveResult::*;

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Cell, old_tail: Option<Cell> },
    /// The head ran into the body and the snake started over at the center.
    Reset,
}

pub struct Snake {
    body: VecDeque<Cell>, // head first
    length: usize,
    direction: Direction,
    pending_direction: Option<Direction>,
    last_tail: Option<Cell>,
}

impl Snake {
    pub fn new(grid: &Grid) -> Self {
        Snake {
            body: VecDeque::from(vec![grid.center()]),
            length: 1,
            direction: Right,
            pending_direction: None,
            last_tail: None,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Queues a turn for the next move. Turning straight back is ignored, it would
    /// run the head into the neck.
    pub fn steer(&mut self, new_direction: Direction) {
        if new_direction != self.direction.opposite() {
            self.pending_direction = Some(new_direction);
        }
    }

    pub fn update_direction(&mut self) {
        if let Some(dir) = self.pending_direction.take() {
            self.direction = dir;
        }
    }

    pub fn move_step<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) -> MoveResult {
        let new_head = grid.step(self.head(), self.direction);

        // The current head is skipped, a one-cell snake can never bite itself
        if self.body.iter().skip(1).any(|pos| *pos == new_head) {
            self.reset(grid, rng);
            return Reset;
        }

        self.body.push_front(new_head);

        self.last_tail = if self.body.len() > self.length {
            self.body.pop_back()
        } else {
            None
        };

        Moved { new_head, old_tail: self.last_tail }
    }

    fn reset<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        self.body.clear();
        self.body.push_back(grid.center());
        self.length = 1;
        self.direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        self.last_tail = None;
    }
}

impl Drawable for Snake {
    fn draw(&self, surface: &mut dyn Surface) {
        for pos in &self.body {
            surface.fill_cell(*pos, SNAKE_COLOR, Some(BORDER_COLOR));
        }

        if let Some(tail) = self.last_tail {
            surface.fill_cell(tail, BACKGROUND_COLOR, None);
        }
    }
}

#[cfg(test)]
impl Snake {
    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn last_tail(&self) -> Option<Cell> {
        self.last_tail
    }

    pub fn with_body(body: &[Cell], direction: Direction) -> Self {
        Snake {
            body: body.iter().copied().collect(),
            length: body.len(),
            direction,
            pending_direction: None,
            last_tail: None,
        }
    }
}
