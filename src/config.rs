//! Battle configuration, read from a RON file.
//!
//! ```ron
//! (
//!     search_depth: 3,
//!     ai_strategy: Greedy,
//!     data_path: Some("data/creatures.ron"),
//! )
//! ```
//! Every field is optional.

use crate::battle::minimax::{SearchDepth, DEFAULT_SEARCH_DEPTH};
use crate::errors::{ConfigError, ConfigResult, PokedexResult};
use crate::participant::Participant;
use crate::pokedex::Pokedex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    #[default]
    Minimax,
    Greedy,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BattleConfig {
    /// Plies searched by the minimax AI. Kept as a raw number so a bad value
    /// can be reported or clamped instead of failing the parse.
    pub search_depth: i64,
    pub ai_strategy: StrategyKind,
    /// Roster file; the bundled roster is used when unset.
    pub data_path: Option<PathBuf>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            search_depth: i64::from(DEFAULT_SEARCH_DEPTH),
            ai_strategy: StrategyKind::default(),
            data_path: None,
        }
    }
}

impl BattleConfig {
    pub fn from_ron_str(content: &str) -> ConfigResult<Self> {
        Ok(ron::from_str(content)?)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content)
    }

    /// Reject a search depth outside the supported range.
    pub fn validate(&self) -> ConfigResult<()> {
        SearchDepth::try_from(self.search_depth)
            .map(|_| ())
            .map_err(ConfigError::InvalidSearchDepth)
    }

    /// The configured AI. A bad depth is clamped rather than trusted.
    pub fn ai_participant(&self) -> Participant {
        match self.ai_strategy {
            StrategyKind::Greedy => Participant::Greedy,
            StrategyKind::Minimax => Participant::Minimax(SearchDepth::clamped(self.search_depth)),
        }
    }

    /// The configured roster, or the bundled one.
    pub fn pokedex(&self) -> PokedexResult<Pokedex> {
        match &self.data_path {
            Some(path) => Pokedex::load_or_builtin(path),
            None => Pokedex::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_uses_defaults() {
        let config = BattleConfig::from_ron_str("()").unwrap();
        assert_eq!(config, BattleConfig::default());
        assert_eq!(
            config.ai_participant(),
            Participant::Minimax(SearchDepth::default())
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn fields_override_defaults() {
        let config = BattleConfig::from_ron_str(
            r#"(search_depth: 3, ai_strategy: Greedy, data_path: Some("roster.ron"))"#,
        )
        .unwrap();
        assert_eq!(
            config,
            BattleConfig {
                search_depth: 3,
                ai_strategy: StrategyKind::Greedy,
                data_path: Some(PathBuf::from("roster.ron")),
            }
        );
        assert_eq!(config.ai_participant(), Participant::Greedy);
    }

    #[test]
    fn bad_depth_fails_validation_but_is_clamped_for_play() {
        let config = BattleConfig::from_ron_str("(search_depth: 0)").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSearchDepth(_))
        ));
        assert_eq!(
            config.ai_participant(),
            Participant::Minimax(SearchDepth::clamped(1))
        );

        let deep = BattleConfig::from_ron_str("(search_depth: 40)").unwrap();
        assert!(deep.validate().is_err());
        assert_eq!(
            deep.ai_participant(),
            Participant::Minimax(SearchDepth::clamped(6))
        );
    }

    #[test]
    fn unknown_strategy_is_a_parse_error() {
        assert!(matches!(
            BattleConfig::from_ron_str("(ai_strategy: Random)"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_config_file_is_io_error() {
        assert!(matches!(
            BattleConfig::load(Path::new("no/such/config.ron")),
            Err(ConfigError::Io { .. })
        ));
    }
}
