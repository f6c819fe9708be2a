use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::grid::Direction::*;
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Applies one tick's worth of events to the snake. The last valid turn wins;
/// a quit request stops processing right away.
pub fn handle_events(snake: &mut Snake, events: &[Event]) -> Control {
    for ev in events {
        if let Event::Key(key_ev) = ev {
            if handle_key(snake, key_ev) == Control::Quit {
                return Control::Quit;
            }
        }
    }

    Control::Continue
}

fn handle_key(snake: &mut Snake, key_ev: &KeyEvent) -> Control {
    match key_ev.code {
        _ if is_ctrl_c(key_ev) => return Control::Quit,
        KeyCode::Esc => return Control::Quit,
        KeyCode::Up => snake.steer(Up),
        KeyCode::Down => snake.steer(Down),
        KeyCode::Left => snake.steer(Left),
        KeyCode::Right => snake.steer(Right),
        _ => {}
    }

    Control::Continue
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
