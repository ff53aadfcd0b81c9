//! Game configuration.
//!
//! A game is configured once at construction:
//! - `Variant`: which rule set, deal strategy and layout to wire in
//! - `GameConfig`: variant plus seed and container sizes
//!
//! Both types are serde-serializable so front ends can load them from
//! whatever settings format they use.

use serde::{Deserialize, Serialize};

/// Default number of temporary holding slots.
pub const DEFAULT_TEMP_SLOTS: usize = 4;

/// Number of tableau columns a Klondike deal requires.
pub const KLONDIKE_COLUMNS: usize = 7;

/// Number of tableau columns in a Classic layout.
pub const CLASSIC_COLUMNS: usize = 8;

/// Game variant selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Every card dealt face up, round-robin over eight columns.
    #[default]
    Classic,
    /// Seven columns in a 1..7 triangle, stock and waste pile.
    Klondike,
}

impl Variant {
    /// All supported variants.
    pub const ALL: [Variant; 2] = [Variant::Classic, Variant::Klondike];

    /// Column count the variant uses by default.
    #[must_use]
    pub const fn default_column_count(self) -> usize {
        match self {
            Variant::Classic => CLASSIC_COLUMNS,
            Variant::Klondike => KLONDIKE_COLUMNS,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Klondike => "klondike",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Invalid configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A game needs at least one column.
    NoColumns,
    /// Klondike deals exactly seven columns.
    KlondikeColumnCount(usize),
    /// A temp bucket needs at least one slot.
    NoTempSlots,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoColumns => write!(f, "column count must be at least 1"),
            ConfigError::KlondikeColumnCount(n) => {
                write!(f, "klondike requires {KLONDIKE_COLUMNS} columns, got {n}")
            }
            ConfigError::NoTempSlots => write!(f, "temp slot count must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Complete game configuration.
///
/// ```
/// use rust_solitaire::core::{GameConfig, Variant};
///
/// let config = GameConfig::new(Variant::Klondike).with_seed(42);
/// assert_eq!(config.column_count(), 7);
/// assert_eq!(config.seed, Some(42));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rule variant.
    pub variant: Variant,

    /// Shuffle seed. `None` draws a fresh seed at game creation.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Number of temporary holding slots.
    #[serde(default = "default_temp_slots")]
    pub temp_slot_count: usize,

    /// Column override. `None` uses the variant's default.
    #[serde(default)]
    pub columns: Option<usize>,

    /// Shuffle the cards a deck restart brings back. When false the deck
    /// replays the previous draw order.
    #[serde(default = "default_reshuffle")]
    pub reshuffle_on_restart: bool,
}

fn default_temp_slots() -> usize {
    DEFAULT_TEMP_SLOTS
}

fn default_reshuffle() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl GameConfig {
    /// Create a configuration with the variant's defaults.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            seed: None,
            temp_slot_count: DEFAULT_TEMP_SLOTS,
            columns: None,
            reshuffle_on_restart: true,
        }
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of temp slots.
    #[must_use]
    pub fn with_temp_slots(mut self, count: usize) -> Self {
        self.temp_slot_count = count;
        self
    }

    /// Override the column count.
    #[must_use]
    pub fn with_columns(mut self, count: usize) -> Self {
        self.columns = Some(count);
        self
    }

    /// Keep or skip the shuffle after a deck restart.
    #[must_use]
    pub fn with_reshuffle_on_restart(mut self, reshuffle: bool) -> Self {
        self.reshuffle_on_restart = reshuffle;
        self
    }

    /// Effective column count.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns
            .unwrap_or_else(|| self.variant.default_column_count())
    }

    /// Check the configuration can produce a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let columns = self.column_count();
        if columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        if self.variant == Variant::Klondike && columns != KLONDIKE_COLUMNS {
            return Err(ConfigError::KlondikeColumnCount(columns));
        }
        if self.temp_slot_count == 0 {
            return Err(ConfigError::NoTempSlots);
        }
        Ok(())
    }
}
