use std::str::FromStr;

use chrono::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("unsupported mode {0}, expected Daily, Monthly, or All")]
pub(crate) struct ParseModeError(String);

/// Time window selected on the command line.
///
/// The window bounds are kept compatible with existing exports: `Daily`
/// selects everything since the first instant of the current month, while
/// `Monthly` selects everything since the first instant of the current day.
/// `All` reaches back to 2000-01-01 local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Daily,
    Monthly,
    All,
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Daily" => Ok(Mode::Daily),
            "Monthly" => Ok(Mode::Monthly),
            "All" => Ok(Mode::All),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

impl Mode {
    /// Epoch seconds of the earliest instant the upstream query should
    /// include, relative to local wall-clock `now`.
    pub(crate) fn window_start(&self, now: DateTime<Local>) -> i64 {
        let start = match self {
            Mode::Daily => Local.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0),
            Mode::Monthly => {
                Local.with_ymd_and_hms(now.year(), now.month(), now.day(), 0, 0, 0)
            }
            Mode::All => Local.with_ymd_and_hms(2000, 1, 1, 0, 0, 0),
        };

        start
            .earliest()
            .expect("window start resolves to a local timestamp")
            .timestamp()
    }
}
