#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use mindset_app::{execute, AppContext, Command};
use mindset_core::FixedClock;
use mindset_domain::{Config, StorageBackend};

/// 2024-03-06 09:00 UTC, a Wednesday
pub const START_MILLIS: i64 = 1_709_715_600_000;

pub fn clock() -> Arc<FixedClock> {
    let local = NaiveDate::from_ymd_opt(2024, 3, 6)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid timestamp");
    Arc::new(FixedClock::new(START_MILLIS, local))
}

pub fn memory_config() -> Config {
    let mut config = Config::default();
    config.storage.backend = StorageBackend::Memory;
    config
}

pub fn sqlite_config(dir: &Path) -> Config {
    let mut config = Config::default();
    config.storage.path = dir.join("mindset.db").to_string_lossy().into_owned();
    config.storage.pool_size = 2;
    config
}

/// Test harness: a context on a fixed clock that moves one second per command.
pub struct Harness {
    pub ctx: AppContext,
    pub clock: Arc<FixedClock>,
}

impl Harness {
    pub async fn new(config: Config) -> Self {
        let clock = clock();
        let ctx = AppContext::with_clock(config, clock.clone())
            .await
            .expect("context should build");
        Self { ctx, clock }
    }

    pub async fn run(&mut self, args: &[&str]) -> mindset_domain::Result<String> {
        let command = parse(args);
        let output = execute(&mut self.ctx, command).await;
        self.clock.advance(1_000);
        output
    }
}

pub fn parse(args: &[&str]) -> Command {
    use clap::Parser;

    let argv = std::iter::once("mindset").chain(args.iter().copied());
    mindset_app::Cli::try_parse_from(argv).expect("arguments should parse").command
}
