use crate::battle::damage::{compute_damage, effectiveness_message, type_effectiveness};
use crate::creature::{Combatant, CombatantSnapshot};
use schema::Attack;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, trace};

/// The two participants of a battle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Ai => write!(f, "ai"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    PlayerTurn,
    AiTurn,
    Terminal { winner: Side },
}

impl GameState {
    fn turn_of(side: Side) -> GameState {
        match side {
            Side::Player => GameState::PlayerTurn,
            Side::Ai => GameState::AiTurn,
        }
    }
}

/// What happened on the last applied attack. Display only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MoveRecord {
    pub side: Side,
    pub attacker: String,
    pub attack: String,
    pub damage: u32,
    pub effectiveness: f64,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} used {} ({} damage)",
            self.attacker, self.attack, self.damage
        )?;
        if let Some(message) = effectiveness_message(self.effectiveness) {
            write!(f, " {}", message)?;
        }
        Ok(())
    }
}

/// A two-creature battle: the live combatants plus whose turn it is.
///
/// The only mutation is [`BattleState::apply_attack`], which resolves exactly one
/// attack and either hands the turn to the other side or ends the battle.
#[derive(Debug, Clone)]
pub struct BattleState {
    player: Combatant,
    ai: Combatant,
    game_state: GameState,
    last_move: Option<MoveRecord>,
}

/// Serializable read-only view of a battle for front ends.
#[derive(Debug, Clone, Serialize)]
pub struct BattleSnapshot {
    pub player: CombatantSnapshot,
    pub ai: CombatantSnapshot,
    pub active_side: Option<Side>,
    pub terminal: bool,
    pub winner: Option<Side>,
    pub last_move: Option<String>,
}

impl BattleState {
    /// Start a battle. The player always moves first.
    pub fn new(player: Combatant, ai: Combatant) -> Self {
        Self {
            player,
            ai,
            game_state: GameState::PlayerTurn,
            last_move: None,
        }
    }

    /// Resolve one attack by `side` using the attack at `attack_index`.
    ///
    /// Returns whether the battle is over. Calls are ignored (state unchanged)
    /// when the battle has already ended, when it is not `side`'s turn, or when
    /// the index is out of range.
    pub fn apply_attack(&mut self, side: Side, attack_index: usize) -> bool {
        let active = match self.game_state {
            GameState::Terminal { .. } => return true,
            GameState::PlayerTurn => Side::Player,
            GameState::AiTurn => Side::Ai,
        };
        if side != active {
            trace!(%side, %active, "ignoring attack out of turn");
            return false;
        }

        let (attacker, defender) = match side {
            Side::Player => (&self.player, &mut self.ai),
            Side::Ai => (&self.ai, &mut self.player),
        };
        let Some(attack) = attacker.attack(attack_index) else {
            trace!(%side, attack_index, "ignoring out-of-range attack index");
            return false;
        };

        let damage = compute_damage(attack, defender);
        let record = MoveRecord {
            side,
            attacker: attacker.name().to_string(),
            attack: attack.name.clone(),
            damage,
            effectiveness: type_effectiveness(attack.attack_type, defender.types()),
        };
        let fainted = defender.take_damage(damage);

        debug!(
            %side,
            attack = %record.attack,
            damage,
            defender_hp = defender.current_hp(),
            "attack applied"
        );
        self.last_move = Some(record);

        if fainted {
            self.game_state = GameState::Terminal { winner: side };
            info!(winner = %side, "battle ended");
        } else {
            self.game_state = GameState::turn_of(side.opponent());
        }
        self.is_terminal()
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    /// The attacks `side` can choose from, in selection order.
    pub fn available_attacks(&self, side: Side) -> &[Attack] {
        self.combatant(side).attacks()
    }

    pub fn current_hp(&self, side: Side) -> i32 {
        self.combatant(side).current_hp()
    }

    pub fn max_hp(&self, side: Side) -> u32 {
        self.combatant(side).max_hp()
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    /// The side to move, or None once the battle is over.
    pub fn active_side(&self) -> Option<Side> {
        match self.game_state {
            GameState::PlayerTurn => Some(Side::Player),
            GameState::AiTurn => Some(Side::Ai),
            GameState::Terminal { .. } => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.game_state, GameState::Terminal { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.game_state {
            GameState::Terminal { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    pub fn last_move_description(&self) -> Option<String> {
        self.last_move.as_ref().map(|record| record.to_string())
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            player: self.player.snapshot(),
            ai: self.ai.snapshot(),
            active_side: self.active_side(),
            terminal: self.is_terminal(),
            winner: self.winner(),
            last_move: self.last_move_description(),
        }
    }
}

impl fmt::Display for BattleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player: {}", self.player)?;
        write!(f, "AI:     {}", self.ai)?;
        match self.game_state {
            GameState::PlayerTurn => write!(f, "\nPlayer to move"),
            GameState::AiTurn => write!(f, "\nAI to move"),
            GameState::Terminal { winner } => write!(f, "\nWinner: {}", winner),
        }
    }
}
