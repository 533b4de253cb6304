use crate::battle::damage::compute_damage;
use crate::battle::state::{BattleSnapshot, BattleState, Side};
use crate::creature::Combatant;
use crate::errors::PokedexResult;
use crate::participant::Participant;
use crate::pokedex::Pokedex;
use schema::Attack;
use tracing::{info, trace};

/// Applied attacks in a row that leave both HP totals unchanged before the
/// battle is considered stalled.
pub const STALL_LIMIT: u32 = 20;

/// What the front end passes for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackChoice {
    /// A specific entry of the active side's attack list.
    Index(usize),
    /// Let the active side's participant strategy pick.
    Strategy,
}

/// High-level battle interface used by front ends.
/// Pairs the battle state with the participant controlling each side.
#[derive(Debug, Clone)]
pub struct BattleRunner {
    battle_state: BattleState,
    player: Participant,
    ai: Participant,
    // applied attacks since either HP total last changed
    idle_attacks: u32,
}

impl BattleRunner {
    pub fn new(
        player_combatant: Combatant,
        ai_combatant: Combatant,
        player: Participant,
        ai: Participant,
    ) -> Self {
        Self {
            battle_state: BattleState::new(player_combatant, ai_combatant),
            player,
            ai,
            idle_attacks: 0,
        }
    }

    /// A human-controlled player against the given AI participant.
    pub fn against_ai(
        player_combatant: Combatant,
        ai_combatant: Combatant,
        ai: Participant,
    ) -> Self {
        Self::new(player_combatant, ai_combatant, Participant::Human, ai)
    }

    /// Instantiate both creatures by name from `pokedex`, each at full HP.
    pub fn from_pokedex(
        pokedex: &Pokedex,
        player_name: &str,
        ai_name: &str,
        player: Participant,
        ai: Participant,
    ) -> PokedexResult<Self> {
        let player_combatant = pokedex.instantiate(player_name)?;
        let ai_combatant = pokedex.instantiate(ai_name)?;
        Ok(Self::new(player_combatant, ai_combatant, player, ai))
    }

    /// Apply one attack for the side to move. Returns whether the battle is over.
    ///
    /// `AttackChoice::Strategy` on a human's turn is ignored, like an
    /// out-of-range index.
    pub fn apply_attack(&mut self, choice: AttackChoice) -> bool {
        let Some(side) = self.battle_state.active_side() else {
            return true;
        };

        let index = match choice {
            AttackChoice::Index(index) => index,
            AttackChoice::Strategy => match self.choose_for(side) {
                Some(index) => index,
                None => {
                    trace!(%side, "no strategy for a human participant");
                    return false;
                }
            },
        };

        let hp_before = self.hp_totals();
        let over = self.battle_state.apply_attack(side, index);

        // An ignored input leaves the same side to move.
        if self.battle_state.active_side() != Some(side) {
            if self.hp_totals() == hp_before {
                self.idle_attacks += 1;
                if self.idle_attacks == STALL_LIMIT {
                    info!(attacks = STALL_LIMIT, "battle stalled");
                }
            } else {
                self.idle_attacks = 0;
            }
        }
        over
    }

    /// True once `STALL_LIMIT` applied attacks in a row have changed nothing,
    /// e.g. two searchers that keep picking harmless attacks.
    pub fn is_stalled(&self) -> bool {
        !self.battle_state.is_terminal() && self.idle_attacks >= STALL_LIMIT
    }

    fn hp_totals(&self) -> (i32, i32) {
        (self.current_hp(Side::Player), self.current_hp(Side::Ai))
    }

    /// The attack index `side`'s participant would pick right now.
    pub fn choose_for(&self, side: Side) -> Option<usize> {
        let me = self.battle_state.combatant(side);
        let opponent = self.battle_state.combatant(side.opponent());
        self.participant(side).choose_attack_index(me, opponent)
    }

    /// True when neither side has an attack that does any damage to the other,
    /// so the battle can never end.
    pub fn is_stalemate(&self) -> bool {
        if self.battle_state.is_terminal() {
            return false;
        }
        let player = self.battle_state.combatant(Side::Player);
        let ai = self.battle_state.combatant(Side::Ai);
        let harmless = |attacker: &Combatant, defender: &Combatant| {
            attacker
                .attacks()
                .iter()
                .all(|attack| compute_damage(attack, defender) == 0)
        };
        harmless(player, ai) && harmless(ai, player)
    }

    pub fn participant(&self, side: Side) -> Participant {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }

    pub fn state(&self) -> &BattleState {
        &self.battle_state
    }

    pub fn available_attacks(&self, side: Side) -> &[Attack] {
        self.battle_state.available_attacks(side)
    }

    pub fn current_hp(&self, side: Side) -> i32 {
        self.battle_state.current_hp(side)
    }

    pub fn max_hp(&self, side: Side) -> u32 {
        self.battle_state.max_hp(side)
    }

    pub fn active_side(&self) -> Option<Side> {
        self.battle_state.active_side()
    }

    pub fn is_terminal(&self) -> bool {
        self.battle_state.is_terminal()
    }

    pub fn winner(&self) -> Option<Side> {
        self.battle_state.winner()
    }

    pub fn last_move_description(&self) -> Option<String> {
        self.battle_state.last_move_description()
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        self.battle_state.snapshot()
    }
}
