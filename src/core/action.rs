//! # Actions
//!
//! Everything the user can do to the counters becomes an `Action`.
//! Right arrow? That's `Action::SelectNext`. Esc? That's `Action::Quit`.
//!
//! The `update()` function takes the store and an action, mutates the store,
//! and returns a `Signal` telling the session loop whether to keep going.
//! No I/O here. Deleting the save file on restart happens in the session.
//!
//! ```text
//! Store + Action  →  update()  →  Store' + Signal
//! ```

use log::debug;

use crate::core::store::CounterStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectNext,
    SelectPrevious,
    Increment,
    Decrement,
    Quit,
    NewCounter,
    DeleteCounter,
    Restart,
    /// Terminal geometry changed; nothing to do but draw again.
    Redraw,
    Unrecognized,
}

/// What the session loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Running,
    /// Leave the loop and persist if configured.
    Exit,
    /// The input meant nothing. Keep looping.
    Error,
    /// Leave the loop, discard the save file, skip persistence.
    Restart,
}

impl Signal {
    pub fn is_terminal(self) -> bool {
        matches!(self, Signal::Exit | Signal::Restart)
    }
}

pub fn update(store: &mut CounterStore, action: Action) -> Signal {
    debug!("update: {:?}", action);
    match action {
        Action::SelectNext => {
            store.select_next();
            Signal::Running
        }
        Action::SelectPrevious => {
            store.select_previous();
            Signal::Running
        }
        Action::Increment => {
            store.increment_selected();
            Signal::Running
        }
        Action::Decrement => {
            store.decrement_selected();
            Signal::Running
        }
        Action::Quit => Signal::Exit,
        Action::NewCounter => {
            store.add_counter();
            Signal::Running
        }
        Action::DeleteCounter => {
            store.remove_counter(store.selected_index());
            store.reset_selection();
            Signal::Running
        }
        Action::Restart => Signal::Restart,
        Action::Redraw => Signal::Running,
        Action::Unrecognized => Signal::Error,
    }
}
