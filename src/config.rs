use crate::consts;
use crate::game::{Board, BoardError, Settings, SpeedError, SpeedRamp};
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Size of the playing field
    #[serde(default)]
    pub(crate) board: BoardConfig,

    /// Tick interval & how it shrinks as the snake eats
    #[serde(default)]
    pub(crate) speed: SpeedConfig,

    /// Where & how much to log
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Validate the board & speed settings and convert them to game settings
    pub(crate) fn settings(&self) -> Result<Settings, ConfigError> {
        let board = Board::from_pixels(self.board.width, self.board.height, self.board.cell_size)?;
        let speed = SpeedRamp::new(
            Duration::from_millis(self.speed.initial_ms),
            Duration::from_millis(self.speed.decrement_ms),
            Duration::from_millis(self.speed.floor_ms),
        )?;
        Ok(Settings { board, speed })
    }
}

/// Board dimensions, in pixels
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct BoardConfig {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) cell_size: u16,
}

impl Default for BoardConfig {
    fn default() -> BoardConfig {
        BoardConfig {
            width: consts::BOARD_PIXEL_WIDTH,
            height: consts::BOARD_PIXEL_HEIGHT,
            cell_size: consts::CELL_SIZE,
        }
    }
}

/// Tick interval settings, in milliseconds
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct SpeedConfig {
    pub(crate) initial_ms: u64,
    pub(crate) decrement_ms: u64,
    pub(crate) floor_ms: u64,
}

impl Default for SpeedConfig {
    fn default() -> SpeedConfig {
        SpeedConfig {
            initial_ms: millis(consts::INITIAL_TICK_INTERVAL),
            decrement_ms: millis(consts::TICK_DECREMENT),
            floor_ms: millis(consts::TICK_FLOOR),
        }
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct LogConfig {
    /// File to write log messages to.  If not set, nothing is logged.
    pub(crate) file: Option<PathBuf>,

    /// Most verbose level to log at
    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid board configuration")]
    Board(#[from] BoardError),
    #[error("invalid speed configuration")]
    Speed(#[from] SpeedError),
}
