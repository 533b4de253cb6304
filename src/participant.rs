//! Who picks the attacks for each side of a battle.

use crate::battle::damage::compute_damage;
use crate::battle::minimax::{minimax_decision, SearchDepth};
use crate::creature::Combatant;
use schema::Attack;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A trait for any system that can pick an attack on its own.
/// This provides a common interface for different AI strategies.
pub trait Behavior {
    /// Index into `me`'s attack list of the attack to use against `opponent`.
    fn decide_attack(&self, me: &Combatant, opponent: &Combatant) -> usize;
}

/// Picks whatever hits hardest right now, ignoring the reply.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAi;

impl Behavior for GreedyAi {
    fn decide_attack(&self, me: &Combatant, opponent: &Combatant) -> usize {
        let mut best_index = 0;
        let mut best_damage = None;
        for (index, attack) in me.attacks().iter().enumerate() {
            let damage = compute_damage(attack, opponent);
            // Strictly greater keeps the earliest of equal attacks.
            if best_damage.map_or(true, |best| damage > best) {
                best_index = index;
                best_damage = Some(damage);
            }
        }
        best_index
    }
}

/// Searches ahead with minimax and alpha-beta pruning.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxAi {
    pub depth: SearchDepth,
}

impl MinimaxAi {
    pub fn new(depth: SearchDepth) -> Self {
        Self { depth }
    }
}

impl Behavior for MinimaxAi {
    fn decide_attack(&self, me: &Combatant, opponent: &Combatant) -> usize {
        minimax_decision(me, opponent, self.depth).index
    }
}

/// Controller of one side of a battle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participant {
    /// Choices come from outside the engine as attack indices.
    Human,
    Greedy,
    Minimax(SearchDepth),
}

impl Participant {
    /// Index of the attack this participant wants to use, or None for a human,
    /// whose choice has to be supplied by the front end.
    pub fn choose_attack_index(&self, me: &Combatant, opponent: &Combatant) -> Option<usize> {
        match self {
            Participant::Human => None,
            Participant::Greedy => Some(GreedyAi.decide_attack(me, opponent)),
            Participant::Minimax(depth) => Some(MinimaxAi::new(*depth).decide_attack(me, opponent)),
        }
    }

    pub fn choose_attack<'a>(&self, me: &'a Combatant, opponent: &Combatant) -> Option<&'a Attack> {
        self.choose_attack_index(me, opponent)
            .and_then(|index| me.attack(index))
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Participant::Human)
    }
}

impl Default for Participant {
    fn default() -> Self {
        Participant::Minimax(SearchDepth::default())
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::Human => write!(f, "Human"),
            Participant::Greedy => write!(f, "Greedy AI"),
            Participant::Minimax(depth) => write!(f, "Minimax AI (depth {})", depth),
        }
    }
}
