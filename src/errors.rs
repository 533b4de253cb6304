use crate::battle::minimax::MAX_SEARCH_DEPTH;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the pokeminmax battle engine
#[derive(Debug, Error)]
pub enum PokeminmaxError {
    /// Error related to creature data lookup or loading
    #[error("Creature data error: {0}")]
    Pokedex(#[from] PokedexError),
    /// Error related to building a combatant
    #[error("Creature error: {0}")]
    Creature(#[from] CreatureError),
    /// Error related to search configuration
    #[error("Search error: {0}")]
    Search(#[from] SearchError),
    /// Error related to loading or validating configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to the creature data table
#[derive(Debug, Error)]
pub enum PokedexError {
    /// The requested creature is not in the table
    #[error("Creature '{name}' not found. Available: {}", .available.join(", "))]
    UnknownCreature { name: String, available: Vec<String> },
    /// A template breaks one of the roster rules
    #[error("Malformed creature data: {0}")]
    MalformedData(String),
    #[error("Failed to read creature data from {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse creature data")]
    Parse(#[from] ron::error::SpannedError),
    /// The compiled roster could not be decoded
    #[error("Failed to decode compiled roster")]
    Decode(#[from] postcard::Error),
}

/// Errors raised when a combatant is built from invalid parts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreatureError {
    #[error("a creature needs one or two types, got {0}")]
    InvalidTypeCount(usize),
    #[error("a creature needs one to four attacks, got {0}")]
    InvalidAttackCount(usize),
    #[error("a creature needs a positive max HP")]
    ZeroMaxHp,
}

/// Errors related to search configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search depth {0} is outside 1..={max}", max = MAX_SEARCH_DEPTH)]
    InvalidDepth(i64),
}

/// Errors related to the battle configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config from {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Invalid search depth in config: {0}")]
    InvalidSearchDepth(#[source] SearchError),
}

/// Type alias for Results using PokeminmaxError
pub type PokeminmaxResult<T> = Result<T, PokeminmaxError>;

/// Type alias for Results using PokedexError
pub type PokedexResult<T> = Result<T, PokedexError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
