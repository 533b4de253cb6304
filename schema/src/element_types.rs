use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// The closed set of elemental tags an attack or a creature can carry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ElementType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
}

impl ElementType {
    /// Multiplier applied when an attack of type `attacking` hits a creature of type `defending`.
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective, 0.0 = No Effect
    ///
    /// Pairs that are not listed fall through to 1.0.
    pub fn effectiveness(attacking: ElementType, defending: ElementType) -> f64 {
        use ElementType::*;

        match (attacking, defending) {
            // Normal
            (Normal, Ghost) => 0.0,
            (Normal, Rock) => 0.5,

            // Fire
            (Fire, Fire) | (Fire, Water) | (Fire, Rock) => 0.5,
            (Fire, Grass) | (Fire, Ice) | (Fire, Bug) => 2.0,

            // Water
            (Water, Water) | (Water, Grass) => 0.5,
            (Water, Fire) | (Water, Ground) | (Water, Rock) => 2.0,

            // Electric
            (Electric, Electric) | (Electric, Grass) => 0.5,
            (Electric, Ground) => 0.0,
            (Electric, Water) | (Electric, Flying) => 2.0,

            // Grass
            (Grass, Fire)
            | (Grass, Grass)
            | (Grass, Poison)
            | (Grass, Flying)
            | (Grass, Bug) => 0.5,
            (Grass, Water) | (Grass, Ground) => 2.0,

            // Ice
            (Ice, Water) | (Ice, Ice) => 0.5,
            (Ice, Grass) | (Ice, Ground) | (Ice, Flying) => 2.0,

            // Fighting
            (Fighting, Poison) | (Fighting, Flying) | (Fighting, Psychic) | (Fighting, Bug) => 0.5,
            (Fighting, Ghost) => 0.0,
            (Fighting, Normal) | (Fighting, Ice) | (Fighting, Rock) => 2.0,

            // Poison
            (Poison, Poison) | (Poison, Ground) => 0.5,
            (Poison, Grass) | (Poison, Bug) => 2.0,

            // Ground
            (Ground, Grass) | (Ground, Bug) => 0.5,
            (Ground, Flying) => 0.0,
            (Ground, Fire) | (Ground, Electric) | (Ground, Poison) | (Ground, Rock) => 2.0,

            // Flying
            (Flying, Electric) | (Flying, Rock) => 0.5,
            (Flying, Grass) | (Flying, Fighting) | (Flying, Bug) => 2.0,

            // Psychic
            (Psychic, Psychic) => 0.5,
            (Psychic, Fighting) | (Psychic, Poison) => 2.0,

            // Bug
            (Bug, Fire) | (Bug, Fighting) | (Bug, Flying) => 0.5,
            (Bug, Grass) | (Bug, Poison) | (Bug, Psychic) => 2.0,

            // Rock
            (Rock, Fighting) | (Rock, Ground) => 0.5,
            (Rock, Fire) | (Rock, Ice) | (Rock, Flying) => 2.0,

            // Ghost
            (Ghost, Normal) | (Ghost, Psychic) => 0.0,
            (Ghost, Ghost) => 2.0,

            // Dragon
            (Dragon, Dragon) => 2.0,

            // Dark
            (Dark, Fighting) | (Dark, Dark) => 0.5,
            (Dark, Psychic) | (Dark, Ghost) => 2.0,

            _ => 1.0,
        }
    }

    /// True when `attacking` has no effect at all on `defending`.
    pub fn is_immune(attacking: ElementType, defending: ElementType) -> bool {
        Self::effectiveness(attacking, defending) == 0.0
    }

    /// Lowercase tag as used in data files and on the console.
    pub fn tag(self) -> &'static str {
        self.into()
    }
}
