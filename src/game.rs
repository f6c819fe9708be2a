use anyhow::Result;
use crossterm::event::Event;
use log::{debug, info};
use rand::rngs::StdRng;

use crate::clock::Clock;
use crate::food::Food;
use crate::grid::Grid;
use crate::input::{handle_events, Control};
use crate::render::{Drawable, Surface, BACKGROUND_COLOR};
use crate::score::ScoreStore;
use crate::snake::{MoveResult, Snake};
use crate::term::TermScreen;

pub const TITLE: &str = "Snake";

/// Everything the loop needs from the outside world.
pub struct GameContext<S> {
    pub grid: Grid,
    pub surface: S,
    pub clock: Clock,
    pub rng: StdRng,
}

pub struct SnakeGame<S> {
    ctx: GameContext<S>,
    store: ScoreStore,
    snake: Snake,
    food: Food,
    record: usize,
}

impl<S: Surface> SnakeGame<S> {
    pub fn new(mut ctx: GameContext<S>, store: ScoreStore) -> Result<Self> {
        let snake = Snake::new(&ctx.grid);
        let food = Food::new(&ctx.grid, &mut ctx.rng);
        let record = store.read_record();
        info!("Loaded record {} from {}", record, store.path().display());

        ctx.surface.set_title(&title(record))?;

        Ok(SnakeGame { ctx, store, snake, food, record })
    }

    pub fn record(&self) -> usize {
        self.record
    }

    /// One tick, without throttling: input, movement, eating, drawing.
    pub fn step(&mut self, events: &[Event]) -> Result<Control> {
        if handle_events(&mut self.snake, events) == Control::Quit {
            return Ok(Control::Quit);
        }

        self.snake.update_direction();

        let length = self.snake.body().len();
        if let MoveResult::Reset = self.snake.move_step(&self.ctx.grid, &mut self.ctx.rng) {
            info!("Snake bit itself at length {}, starting over", length);
        }

        if self.snake.head() == self.food.position() {
            self.eat()?;
        }

        self.render()?;
        Ok(Control::Continue)
    }

    fn eat(&mut self) -> Result<()> {
        self.snake.grow();
        self.food.randomize_position(&self.ctx.grid, &mut self.ctx.rng);
        debug!("Food eaten, length {}, next food at {:?}", self.snake.length(), self.food.position());

        if self.snake.length() > self.record {
            self.record = self.snake.length();
            self.store.save_record(self.record)?;
            self.ctx.surface.set_title(&title(self.record))?;
            info!("New record: {}", self.record);
        }

        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.ctx.surface.clear(BACKGROUND_COLOR);
        self.food.draw(&mut self.ctx.surface);
        self.snake.draw(&mut self.ctx.surface);
        self.ctx.surface.present()
    }
}

impl SnakeGame<TermScreen> {
    /// Runs until the player quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.ctx.clock.tick();

            let events = self.ctx.surface.read_events_queue()?;
            if self.step(&events)? == Control::Quit {
                info!("Quit requested, record stands at {}", self.record());
                return Ok(());
            }
        }
    }
}

fn title(record: usize) -> String {
    format!("{} | Record: {}", TITLE, record)
}
