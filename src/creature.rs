use crate::errors::CreatureError;
use schema::{Attack, CreatureTemplate, ElementType};
use serde::Serialize;
use std::fmt;

pub const MAX_TYPES: usize = 2;
pub const MAX_ATTACKS: usize = 4;

/// A creature taking part in a battle.
///
/// A combatant owns its own copy of its attack list, so it is always detached
/// from the template it was created from. Current HP only ever goes down and
/// may dip below zero on the hit that makes it faint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    name: String,
    types: Vec<ElementType>,
    max_hp: u32,
    current_hp: i32,
    attacks: Vec<Attack>,
}

/// Serializable read-only view of a combatant for front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatantSnapshot {
    pub name: String,
    pub types: Vec<ElementType>,
    pub current_hp: i32,
    pub max_hp: u32,
    pub attacks: Vec<Attack>,
}

impl Combatant {
    /// Build a combatant at full HP, checking the roster rules.
    pub fn new(
        name: impl Into<String>,
        types: Vec<ElementType>,
        max_hp: u32,
        attacks: Vec<Attack>,
    ) -> Result<Self, CreatureError> {
        validate_parts(&types, max_hp, &attacks)?;

        Ok(Combatant {
            name: name.into(),
            types,
            max_hp,
            current_hp: hp_as_i32(max_hp),
            attacks,
        })
    }

    /// Instantiate a fresh combatant from a data-table template.
    pub fn from_template(template: &CreatureTemplate) -> Result<Self, CreatureError> {
        Self::new(
            template.name.clone(),
            template.types.clone(),
            template.max_hp,
            template.attacks.clone(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn types(&self) -> &[ElementType] {
        &self.types
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    /// The attack list in selection order.
    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }

    pub fn attack(&self, index: usize) -> Option<&Attack> {
        self.attacks.get(index)
    }

    /// Subtract `damage` from current HP. Returns true if this hit made the combatant faint.
    pub fn take_damage(&mut self, damage: u32) -> bool {
        let damage = i32::try_from(damage).unwrap_or(i32::MAX);
        self.current_hp = self.current_hp.saturating_sub(damage);
        self.is_fainted()
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp <= 0
    }

    pub fn snapshot(&self) -> CombatantSnapshot {
        CombatantSnapshot {
            name: self.name.clone(),
            types: self.types.clone(),
            current_hp: self.current_hp,
            max_hp: self.max_hp,
            attacks: self.attacks.clone(),
        }
    }
}

/// Check the roster rules shared by combatants and data-table templates.
pub fn validate_parts(
    types: &[ElementType],
    max_hp: u32,
    attacks: &[Attack],
) -> Result<(), CreatureError> {
    if types.is_empty() || types.len() > MAX_TYPES {
        return Err(CreatureError::InvalidTypeCount(types.len()));
    }
    if attacks.is_empty() || attacks.len() > MAX_ATTACKS {
        return Err(CreatureError::InvalidAttackCount(attacks.len()));
    }
    if max_hp == 0 {
        return Err(CreatureError::ZeroMaxHp);
    }
    Ok(())
}

fn hp_as_i32(hp: u32) -> i32 {
    i32::try_from(hp).unwrap_or(i32::MAX)
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_names: Vec<&str> = self.types.iter().map(|t| t.tag()).collect();
        write!(
            f,
            "{} [{}] (HP: {}/{})",
            self.name,
            type_names.join(" / "),
            self.current_hp.max(0),
            self.max_hp
        )?;

        // The alternate flag lists the attacks as well.
        if f.alternate() {
            for (i, attack) in self.attacks.iter().enumerate() {
                write!(f, "\n  {}. {}", i + 1, attack)?;
            }
        }
        Ok(())
    }
}
