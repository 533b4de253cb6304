use crate::creature::Combatant;
use schema::{Attack, ElementType};

/// Combined multiplier of an attack type against every type the defender has.
///
/// Each defending type contributes one factor from the effectiveness table,
/// so a single immunity zeroes the whole product.
pub fn type_effectiveness(attack_type: ElementType, defender_types: &[ElementType]) -> f64 {
    defender_types
        .iter()
        .fold(1.0, |acc, &defending| {
            acc * ElementType::effectiveness(attack_type, defending)
        })
}

/// Damage dealt by `attack` to `defender`: floor(power x effectiveness).
///
/// Always hits and never varies. Immunity yields exactly 0.
pub fn compute_damage(attack: &Attack, defender: &Combatant) -> u32 {
    damage_against_types(attack, defender.types())
}

pub fn damage_against_types(attack: &Attack, defender_types: &[ElementType]) -> u32 {
    if is_immune(attack.attack_type, defender_types) {
        return 0;
    }
    let effectiveness = type_effectiveness(attack.attack_type, defender_types);
    (f64::from(attack.power) * effectiveness).floor() as u32
}

/// True when any of the defender's types cancels the attack type outright.
pub fn is_immune(attack_type: ElementType, defender_types: &[ElementType]) -> bool {
    defender_types
        .iter()
        .any(|&defending| ElementType::is_immune(attack_type, defending))
}

/// Battle text for a multiplier, None when the hit was neutral.
pub fn effectiveness_message(multiplier: f64) -> Option<&'static str> {
    match multiplier {
        m if m == 0.0 => Some("It had no effect!"),
        m if m > 1.0 => Some("It's super effective!"),
        m if m < 1.0 => Some("It's not very effective..."),
        _ => None,
    }
}
