//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;

use tempfile::TempDir;

use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::session::{FrameSink, InputSource, Notice, View};

/// Replays a fixed list of actions, then fails like a closed stdin.
pub struct ScriptedInput {
    actions: VecDeque<Action>,
}

impl ScriptedInput {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_action(&mut self) -> io::Result<Action> {
        self.actions
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

/// Remembers what each frame showed.
#[derive(Default)]
pub struct RecordingSink {
    pub frames: Vec<Vec<i32>>,
    pub notices: Vec<Option<Notice>>,
}

impl FrameSink for RecordingSink {
    fn draw(&mut self, view: &View<'_>) -> io::Result<()> {
        self.frames.push(view.store.values());
        self.notices.push(view.notice.cloned());
        Ok(())
    }
}

/// A config whose save file lives in a fresh temp dir.
/// Keep the `TempDir` alive for as long as the path is used.
pub fn temp_config() -> (TempDir, ResolvedConfig) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = ResolvedConfig {
        storage_path: dir.path().join("save.out"),
        ..ResolvedConfig::default()
    };
    (dir, config)
}
