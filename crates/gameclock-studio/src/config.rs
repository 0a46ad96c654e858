use std::time::Duration;

use anyhow::{Context, Result};
use gameclock_ui::clock::{ClockProps, Side};
use gameclock_ui::prelude::ClockTime;

/// Demo settings, read from `GAMECLOCK_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioConfig {
    /// `GAMECLOCK_TIME`, starting value for both clocks.
    pub time_format: String,
    /// `GAMECLOCK_WHITE` / `GAMECLOCK_BLACK`.
    pub white: String,
    pub black: String,
    /// `GAMECLOCK_FIRST`, side to move first.
    pub first: Side,
    /// `GAMECLOCK_PLAIN=1` appends frames instead of redrawing in place.
    pub plain: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            time_format: "0:20".to_string(),
            white: "White".to_string(),
            black: "Black".to_string(),
            first: Side::White,
            plain: false,
        }
    }
}

impl StudioConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = get("GAMECLOCK_TIME") {
            // Passed through as is; the clock renders a placeholder.
            if let Err(err) = v.parse::<ClockTime>() {
                log::warn!("GAMECLOCK_TIME={v:?}: {err}");
            }
            config.time_format = v;
        }
        if let Some(v) = get("GAMECLOCK_WHITE") {
            config.white = v;
        }
        if let Some(v) = get("GAMECLOCK_BLACK") {
            config.black = v;
        }
        if let Some(v) = get("GAMECLOCK_FIRST") {
            config.first = v.parse().context("invalid GAMECLOCK_FIRST")?;
        }
        if let Some(v) = get("GAMECLOCK_PLAIN") {
            config.plain = matches!(v.as_str(), "1" | "true" | "yes");
        }
        Ok(config)
    }

    /// Initial props for the scripted match. Not running until the host starts.
    pub fn props(&self) -> ClockProps {
        ClockProps::new(self.time_format.clone())
            .white(self.white.clone())
            .black(self.black.clone())
            .current_turn(self.first)
            .tick_period(Duration::from_secs(1))
    }
}
