//! Minimax search with alpha-beta pruning for choosing the AI's attack.
//!
//! The search never touches the live battle. Each ply works on a [`Position`],
//! a pair of small `Copy` values holding the simulated HP plus a reference to
//! the combatant's immutable types and attacks.

use crate::battle::damage::compute_damage;
use crate::creature::Combatant;
use crate::errors::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

pub const DEFAULT_SEARCH_DEPTH: u8 = 2;
pub const MAX_SEARCH_DEPTH: u8 = 6;

/// Score of a position where the opponent has fainted.
pub const WIN_SCORE: i32 = 9_999;
/// Score of a position where the AI has fainted.
pub const LOSS_SCORE: i32 = -9_999;

// Initial alpha/beta window. Far outside any reachable score.
const LOWER_BOUND: i32 = i32::MIN;
const UPPER_BOUND: i32 = i32::MAX;

/// Number of plies to search, always within 1..=MAX_SEARCH_DEPTH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SearchDepth(u8);

impl SearchDepth {
    /// Force any configured value into the supported range.
    pub fn clamped(depth: i64) -> Self {
        let clamped = depth.clamp(1, i64::from(MAX_SEARCH_DEPTH));
        if clamped != depth {
            warn!(requested = depth, used = clamped, "search depth clamped");
        }
        SearchDepth(clamped as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for SearchDepth {
    fn default() -> Self {
        SearchDepth(DEFAULT_SEARCH_DEPTH)
    }
}

impl TryFrom<i64> for SearchDepth {
    type Error = SearchError;

    fn try_from(depth: i64) -> Result<Self, Self::Error> {
        if (1..=i64::from(MAX_SEARCH_DEPTH)).contains(&depth) {
            Ok(SearchDepth(depth as u8))
        } else {
            Err(SearchError::InvalidDepth(depth))
        }
    }
}

impl From<SearchDepth> for i64 {
    fn from(depth: SearchDepth) -> Self {
        i64::from(depth.0)
    }
}

impl fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One side of a simulated position.
#[derive(Debug, Clone, Copy)]
struct Node<'a> {
    hp: i32,
    combatant: &'a Combatant,
}

impl<'a> Node<'a> {
    fn from_live(combatant: &'a Combatant) -> Self {
        Node {
            hp: combatant.current_hp(),
            combatant,
        }
    }

    fn hit_by(self, damage: u32) -> Self {
        let damage = i32::try_from(damage).unwrap_or(i32::MAX);
        Node {
            hp: self.hp.saturating_sub(damage),
            ..self
        }
    }

    fn is_fainted(&self) -> bool {
        self.hp <= 0
    }
}

#[derive(Debug, Clone, Copy)]
struct Position<'a> {
    ai: Node<'a>,
    opponent: Node<'a>,
}

impl<'a> Position<'a> {
    /// The AI uses its attack `index` on the opponent.
    fn after_ai_attack(self, index: usize) -> Self {
        let attack = &self.ai.combatant.attacks()[index];
        let damage = compute_damage(attack, self.opponent.combatant);
        Position {
            opponent: self.opponent.hit_by(damage),
            ..self
        }
    }

    /// The opponent uses its attack `index` on the AI.
    fn after_opponent_attack(self, index: usize) -> Self {
        let attack = &self.opponent.combatant.attacks()[index];
        let damage = compute_damage(attack, self.ai.combatant);
        Position {
            ai: self.ai.hit_by(damage),
            ..self
        }
    }

    fn is_over(&self) -> bool {
        self.ai.is_fainted() || self.opponent.is_fainted()
    }

    fn evaluate(&self) -> i32 {
        if self.opponent.is_fainted() && !self.ai.is_fainted() {
            WIN_SCORE
        } else if self.ai.is_fainted() {
            LOSS_SCORE
        } else {
            self.ai.hp.saturating_sub(self.opponent.hp)
        }
    }
}

/// Counters collected during one decision, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub cutoffs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Index into the AI's attack list.
    pub index: usize,
    pub score: i32,
    pub stats: SearchStats,
}

/// Pick the AI's attack by searching `depth` plies ahead.
///
/// Every candidate is scored with its own full window, and only a strictly
/// better score replaces the current choice, so ties go to the lowest index.
pub fn minimax_decision(ai: &Combatant, opponent: &Combatant, depth: SearchDepth) -> Decision {
    let root = Position {
        ai: Node::from_live(ai),
        opponent: Node::from_live(opponent),
    };
    let mut stats = SearchStats::default();
    let mut best = Decision {
        index: 0,
        score: LOWER_BOUND,
        stats,
    };

    for index in 0..ai.attacks().len() {
        let position = root.after_ai_attack(index);
        stats.nodes_visited += 1;
        let score = minimax(
            position,
            depth.get() - 1,
            false,
            LOWER_BOUND,
            UPPER_BOUND,
            &mut stats,
        );
        if score > best.score {
            best.index = index;
            best.score = score;
        }
    }
    best.stats = stats;

    debug!(
        ai = ai.name(),
        opponent = opponent.name(),
        depth = depth.get(),
        index = best.index,
        score = best.score,
        nodes = stats.nodes_visited,
        cutoffs = stats.cutoffs,
        "minimax decision"
    );
    best
}

fn minimax(
    position: Position<'_>,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> i32 {
    if depth == 0 || position.is_over() {
        return position.evaluate();
    }

    if maximizing {
        let mut max_eval = LOWER_BOUND;
        for index in 0..position.ai.combatant.attacks().len() {
            stats.nodes_visited += 1;
            let eval = minimax(
                position.after_ai_attack(index),
                depth - 1,
                false,
                alpha,
                beta,
                stats,
            );
            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = UPPER_BOUND;
        for index in 0..position.opponent.combatant.attacks().len() {
            stats.nodes_visited += 1;
            let eval = minimax(
                position.after_opponent_attack(index),
                depth - 1,
                true,
                alpha,
                beta,
                stats,
            );
            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        min_eval
    }
}

#[cfg(test)]
pub(crate) mod reference {
    //! Unpruned minimax used to check the pruned search.

    use super::*;

    pub fn exhaustive_decision(ai: &Combatant, opponent: &Combatant, depth: u8) -> (usize, i32) {
        let root = Position {
            ai: Node::from_live(ai),
            opponent: Node::from_live(opponent),
        };
        let mut best = (0, LOWER_BOUND);
        for index in 0..ai.attacks().len() {
            let score = exhaustive(root.after_ai_attack(index), depth - 1, false);
            if score > best.1 {
                best = (index, score);
            }
        }
        best
    }

    fn exhaustive(position: Position<'_>, depth: u8, maximizing: bool) -> i32 {
        if depth == 0 || position.is_over() {
            return position.evaluate();
        }
        if maximizing {
            (0..position.ai.combatant.attacks().len())
                .map(|i| exhaustive(position.after_ai_attack(i), depth - 1, false))
                .max()
                .unwrap_or(LOWER_BOUND)
        } else {
            (0..position.opponent.combatant.attacks().len())
                .map(|i| exhaustive(position.after_opponent_attack(i), depth - 1, true))
                .min()
                .unwrap_or(UPPER_BOUND)
        }
    }
}
