//! # API Facade
//!
//! [`RosterApi`] is the single entry point for roster operations. It owns the
//! [`RecordStore`] and the config directory and dispatches to the command
//! functions in `commands/*.rs`.
//!
//! The facade does no formatting and no terminal I/O: every method returns a
//! [`CmdResult`] and leaves presentation to the caller.

use crate::commands;
use crate::config::RosterConfig;
use crate::error::Result;
use crate::normalize::CaseMode;
use crate::store::RecordStore;
use std::path::{Path, PathBuf};

pub struct RosterApi {
    store: RecordStore,
    config_dir: PathBuf,
    config: RosterConfig,
}

impl RosterApi {
    /// Builds the facade around an existing store, loading config from `config_dir`.
    pub fn new(store: RecordStore, config_dir: PathBuf) -> Result<Self> {
        let config = RosterConfig::load(&config_dir)?;
        Ok(Self {
            store,
            config_dir,
            config,
        })
    }

    /// Loads roster files. Records are normalized with the configured casing
    /// when `normalize` is set or the config asks for it.
    pub fn import(&mut self, paths: &[PathBuf], normalize: bool) -> Result<CmdResult> {
        let mode = (normalize || self.config.normalize_on_load).then_some(self.config.casing);
        commands::import::run(&mut self.store, paths, mode)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn get(&self, id: i32) -> Result<CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn check(&self, id: i32) -> Result<CmdResult> {
        commands::check::run(&self.store, id)
    }

    pub fn search_last_name(&self, name: &str) -> Result<CmdResult> {
        commands::search::by_last_name(&self.store, name)
    }

    pub fn search_major(&self, major: &str) -> Result<CmdResult> {
        commands::search::by_major(&self.store, major)
    }

    /// Normalizes every stored record, using the configured casing unless
    /// `mode` overrides it.
    pub fn normalize(&mut self, mode: Option<CaseMode>) -> Result<CmdResult> {
        let mode = mode.unwrap_or(self.config.casing);
        commands::normalize::run(&mut self.store, mode)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn into_store(self) -> RecordStore {
        self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
