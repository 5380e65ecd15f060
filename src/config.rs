//! Start-up configuration and the user-editable board options.
//!
//! A page can override the defaults by embedding
//! `<script type="application/json" id="game-config">{ "grid_size": 4 }</script>`.

use serde::Deserialize;
use web_sys::Document;

use crate::error::GameError;
use crate::model;
use crate::state::board::MIN_DIMENSION;

pub const CONFIG_ELEMENT_ID: &str = "game-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_size: usize,
    pub width: f64,
    pub height: f64,
    /// One of `error`, `warn`, `info`, `debug`, `trace`, `off`.
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 3,
            width: 350.0,
            height: 350.0,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self, GameError> {
        let cfg: GameConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_document(document: &Document) -> Result<Self, GameError> {
        let el = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .ok_or(GameError::MissingElement(CONFIG_ELEMENT_ID))?;
        let raw = el.text_content().unwrap_or_default();
        Self::from_json(&raw)
    }

    /// Reads the page config, falling back to defaults when it is absent or bad.
    pub fn load() -> Self {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Self::default();
        };
        match Self::from_document(&document) {
            Ok(cfg) => cfg,
            Err(GameError::MissingElement(_)) => Self::default(),
            Err(e) => {
                log::warn!("ignoring page config: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        model::cell_count(self.grid_size)?;
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if value < MIN_DIMENSION {
                return Err(GameError::DimensionTooSmall {
                    axis,
                    requested: value,
                    min: MIN_DIMENSION,
                });
            }
        }
        Ok(())
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Values typed into the options form. Blank or non-numeric fields are `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoardOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub grid_size: Option<usize>,
}

impl BoardOptions {
    pub fn parse(width: &str, height: &str, grid_size: &str) -> Self {
        Self {
            width: leading_int(width).map(|v| v as f64),
            height: leading_int(height).map(|v| v as f64),
            // negative sizes are ignored, huge ones saturate and fail validation later
            grid_size: leading_int(grid_size)
                .filter(|v| *v >= 0)
                .map(|v| usize::try_from(v).unwrap_or(usize::MAX)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none() && self.grid_size.is_none()
    }
}

/// Lenient decimal parse in the spirit of a browser's `parseInt`: leading
/// whitespace, an optional sign, then as many digits as there are.
/// Digit runs too long for `i64` saturate instead of failing. Only base 10
/// is read, so `0x10` yields `0` where `parseInt` would give 16.
fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse::<i64>().unwrap_or(i64::MAX) * sign)
}
