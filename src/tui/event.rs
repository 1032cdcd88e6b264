use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;
use crate::core::session::InputSource;

/// Translate a key press into a core action.
pub fn map_key(key_event: KeyEvent) -> Action {
    match (key_event.modifiers, key_event.code) {
        // Raw mode swallows SIGINT, so treat Ctrl+C like Esc
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Action::Quit,
        (_, KeyCode::Right) => Action::SelectNext,
        (_, KeyCode::Left) => Action::SelectPrevious,
        (_, KeyCode::Up) => Action::Increment,
        (_, KeyCode::Down) => Action::Decrement,
        (_, KeyCode::Esc) => Action::Quit,
        (_, KeyCode::Char('n' | 'N')) => Action::NewCounter,
        (_, KeyCode::Delete) => Action::DeleteCounter,
        (_, KeyCode::Char('r' | 'R')) => Action::Restart,
        _ => Action::Unrecognized,
    }
}

/// Blocking keyboard input from the terminal.
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn next_action(&mut self) -> std::io::Result<Action> {
        loop {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    log::debug!(
                        "Key event: {:?} with modifiers {:?}",
                        key_event.code,
                        key_event.modifiers
                    );
                    return Ok(map_key(key_event));
                }
                Event::Resize(..) => return Ok(Action::Redraw),
                // Key releases/repeats, focus, mouse, paste
                _ => continue,
            }
        }
    }
}
