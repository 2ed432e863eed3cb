use std::num::ParseIntError;

use clap::ValueEnum;
use sapper_core::{GameConfig, GameError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub(crate) enum SettingsError {
    #[error("Invalid input. Please enter numbers only.")]
    NotANumber(#[from] ParseIntError),
    #[error("Invalid settings. Please ensure positive dimensions and a valid number of mines. ({0})")]
    Invalid(#[from] GameError),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Preset {
    #[default]
    Classic,
    Beginner,
    Intermediate,
    Expert,
}

impl Preset {
    pub(crate) fn config(self) -> GameConfig {
        match self {
            Self::Classic => GameConfig::classic(),
            Self::Beginner => GameConfig::beginner(),
            Self::Intermediate => GameConfig::intermediate(),
            Self::Expert => GameConfig::expert(),
        }
    }
}

/// Validates the three settings fields as typed by the player.
pub(crate) fn parse_settings(rows: &str, cols: &str, mines: &str) -> Result<GameConfig, SettingsError> {
    let rows = rows.trim().parse()?;
    let cols = cols.trim().parse()?;
    let mines = mines.trim().parse()?;
    Ok(GameConfig::from_signed(rows, cols, mines)?)
}

/// Starts from `preset` and replaces whichever fields were given explicitly.
pub(crate) fn with_overrides(
    preset: Preset,
    rows: Option<i64>,
    cols: Option<i64>,
    mines: Option<i64>,
) -> Result<GameConfig, SettingsError> {
    let base = preset.config();
    Ok(GameConfig::from_signed(
        rows.unwrap_or(base.rows().into()),
        cols.unwrap_or(base.cols().into()),
        mines.unwrap_or(base.mines().into()),
    )?)
}
