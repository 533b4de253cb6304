//! pokeminmax battle engine
//!
//! Two creatures trade attacks in strict turns under a type-effectiveness
//! damage model. The non-human side picks its attacks with a minimax search
//! (alpha-beta pruning) or a one-ply greedy policy.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod creature;
pub mod errors;
pub mod participant;
pub mod pokedex;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{Attack, CreatureTemplate, ElementType};

// --- From this crate's modules (`src/`) ---

// Battle engine and search.
pub use battle::damage::{compute_damage, type_effectiveness};
pub use battle::minimax::{minimax_decision, Decision, SearchDepth, SearchStats};
pub use battle::runner::{AttackChoice, BattleRunner};
pub use battle::state::{BattleSnapshot, BattleState, GameState, MoveRecord, Side};

// Runtime types for a battle.
pub use config::{BattleConfig, StrategyKind};
pub use creature::{Combatant, CombatantSnapshot};
pub use participant::{Behavior, GreedyAi, MinimaxAi, Participant};
pub use pokedex::Pokedex;

// Crate-specific error and result types.
pub use errors::{
    ConfigError, ConfigResult, CreatureError, PokedexError, PokedexResult, PokeminmaxError,
    PokeminmaxResult, SearchError,
};

/// Start a battle between two already-instantiated combatants.
pub fn new_battle(player: Combatant, ai: Combatant) -> BattleState {
    BattleState::new(player, ai)
}
