//! # TUI Components
//!
//! Stateless, props-based display components:
//! - `CounterRow`: the counters on one line, selection highlighted
//! - `StatusBar`: one-shot notices (load warnings)
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into the session. That keeps them testable against a
//! `TestBackend` without a running loop.

mod counter_row;
mod status_bar;

pub use counter_row::CounterRow;
pub use status_bar::StatusBar;
