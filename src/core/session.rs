//! # Session Loop
//!
//! Owns the counter store for one run of the app.
//!
//! ```text
//! start()  ── load save file ──► Session { store, notice }
//!                                   │
//!      ┌────────────────────────────┘
//!      ▼
//!   draw(View) → next_action() → update() → Signal
//!      ▲                                       │
//!      └──────────── Running / Error ──────────┘
//!                                              │
//!                     Exit → save    Restart → discard
//! ```
//!
//! Input and output are traits so the loop can be driven by a terminal,
//! a script, or anything else that blocks until the next action arrives.

use std::io;

use log::{debug, error, info, warn};

use crate::core::action::{Action, Signal, update};
use crate::core::codec;
use crate::core::config::ResolvedConfig;
use crate::core::error::{SessionError, StorageError};
use crate::core::store::CounterStore;

/// Source of user actions. Blocks until one is available.
pub trait InputSource {
    fn next_action(&mut self) -> io::Result<Action>;
}

/// Everything a frame needs to draw.
pub struct View<'a> {
    pub store: &'a CounterStore,
    pub separator: &'a str,
    pub notice: Option<&'a Notice>,
}

/// Destination for rendered frames.
pub trait FrameSink {
    fn draw(&mut self, view: &View<'_>) -> io::Result<()>;
}

/// One-shot status messages shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Values in the save file that couldn't be read and came back as 0.
    ValuesLost(usize),
    /// The save file exists but couldn't be loaded; started empty.
    LoadFailed(String),
    Saved,
    Restarting,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::ValuesLost(1) => "1 value was lost due to save file issues.".to_string(),
            Notice::ValuesLost(n) => format!("{n} values were lost due to save file issues."),
            Notice::LoadFailed(reason) => format!("Could not load saved counters: {reason}"),
            Notice::Saved => "App saved successfully!".to_string(),
            Notice::Restarting => "Restarting app.".to_string(),
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Notice::ValuesLost(_) | Notice::LoadFailed(_))
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Esc with saving enabled; counters were written.
    Saved,
    /// Esc with saving disabled.
    Exited,
    /// The save file was discarded and the caller should start over.
    Restart,
}

impl Outcome {
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Saved => Some(Notice::Saved.message()),
            Outcome::Exited => None,
            Outcome::Restart => Some(Notice::Restarting.message()),
        }
    }
}

pub struct Session {
    pub store: CounterStore,
    /// Shown on the next frame, cleared by the next input.
    pub notice: Option<Notice>,
    config: ResolvedConfig,
}

impl Session {
    /// Load the save file named in `config` and build the starting store.
    ///
    /// A missing file is a first run and yields one zero counter. Any other
    /// load failure starts an empty store with a warning, unless
    /// `strict_load` is set, in which case the error is returned.
    pub fn start(config: ResolvedConfig) -> Result<Self, StorageError> {
        let (store, notice) = match codec::load(&config.storage_path) {
            Ok(decoded) => {
                let notice = (decoded.lost > 0).then_some(Notice::ValuesLost(decoded.lost));
                (CounterStore::from_values(decoded.values), notice)
            }
            Err(e) if e.is_not_found() => {
                info!("No save file, starting with a single counter");
                (CounterStore::with_default(), None)
            }
            Err(e) if config.strict_load => {
                error!("Refusing to start: {}", e);
                return Err(e);
            }
            Err(e) => {
                warn!("Starting with no counters: {}", e);
                (CounterStore::new(), Some(Notice::LoadFailed(e.to_string())))
            }
        };

        Ok(Self {
            store,
            notice,
            config,
        })
    }

    pub fn view(&self) -> View<'_> {
        View {
            store: &self.store,
            separator: &self.config.separator,
            notice: self.notice.as_ref(),
        }
    }

    /// Draw, read, dispatch until Esc or restart, then persist or discard.
    pub fn run(
        mut self,
        input: &mut impl InputSource,
        sink: &mut impl FrameSink,
    ) -> Result<Outcome, SessionError> {
        let signal = loop {
            sink.draw(&self.view()).map_err(SessionError::Render)?;

            let action = input.next_action().map_err(SessionError::Input)?;
            self.notice = None;

            let signal = update(&mut self.store, action);
            if signal == Signal::Error {
                debug!("Ignored unrecognized input");
            }
            if signal.is_terminal() {
                break signal;
            }
        };

        self.finish(signal)
    }

    fn finish(self, signal: Signal) -> Result<Outcome, SessionError> {
        let path = &self.config.storage_path;
        if signal == Signal::Restart {
            if let Err(e) = codec::discard(path) {
                error!("Restart could not discard save file: {}", e);
                return Err(e.into());
            }
            info!("Session ended for restart");
            return Ok(Outcome::Restart);
        }

        if !self.config.save_on_exit {
            info!("Session ended, saving disabled");
            return Ok(Outcome::Exited);
        }

        codec::save(path, &self.store.values())?;
        Ok(Outcome::Saved)
    }
}
