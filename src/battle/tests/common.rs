use crate::battle::state::BattleState;
use crate::creature::Combatant;
use schema::{Attack, ElementType};

/// A builder for creating test combatants with common defaults.
///
/// # Example
/// ```ignore
/// let pikachu = TestCombatantBuilder::new("Pikachu")
///     .with_types(vec![ElementType::Electric])
///     .with_attack("Thunder Shock", ElementType::Electric, 40)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    name: String,
    types: Vec<ElementType>,
    max_hp: u32,
    attacks: Vec<Attack>,
}

impl TestCombatantBuilder {
    /// A normal-type creature with 100 HP and no attacks yet.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            types: vec![ElementType::Normal],
            max_hp: 100,
            attacks: Vec::new(),
        }
    }

    pub fn with_types(mut self, types: Vec<ElementType>) -> Self {
        self.types = types;
        self
    }

    pub fn with_hp(mut self, max_hp: u32) -> Self {
        self.max_hp = max_hp;
        self
    }

    pub fn with_attack(mut self, name: &str, attack_type: ElementType, power: u16) -> Self {
        self.attacks.push(Attack::new(name, attack_type, power));
        self
    }

    /// Builds the `Combatant`. Falls back to a single Tackle if no attack was added.
    pub fn build(self) -> Combatant {
        let attacks = if self.attacks.is_empty() {
            vec![Attack::new("Tackle", ElementType::Normal, 40)]
        } else {
            self.attacks
        };
        match Combatant::new(self.name.clone(), self.types, self.max_hp, attacks) {
            Ok(combatant) => combatant,
            Err(err) => panic!("Failed to build test combatant {}: {}", self.name, err),
        }
    }
}

pub fn pikachu() -> Combatant {
    TestCombatantBuilder::new("Pikachu")
        .with_types(vec![ElementType::Electric])
        .with_hp(100)
        .with_attack("Thunder Shock", ElementType::Electric, 40)
        .with_attack("Swift", ElementType::Normal, 30)
        .build()
}

pub fn squirtle() -> Combatant {
    TestCombatantBuilder::new("Squirtle")
        .with_types(vec![ElementType::Water])
        .with_hp(120)
        .with_attack("Water Gun", ElementType::Water, 40)
        .with_attack("Tackle", ElementType::Normal, 40)
        .build()
}

/// Creates a standard battle: `player` moves first.
pub fn create_test_battle(player: Combatant, ai: Combatant) -> BattleState {
    BattleState::new(player, ai)
}
