//! # Core Application Logic
//!
//! This module contains Tally's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • CounterStore (data)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • codec (save file)    │
//!                    └───────────┬─────────────┘
//!                                │
//!                    InputSource │ FrameSink
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`]: `CounterStore`, the counters and the selection
//! - [`action`]: the `Action` enum and `update()`
//! - [`codec`]: reading and writing the save file
//! - [`session`]: startup, the draw/read/dispatch loop, save on exit
//! - [`config`]: settings from file, env, and CLI
//! - [`error`]: typed failures

pub mod action;
pub mod codec;
pub mod config;
pub mod error;
pub mod session;
pub mod store;
