use crate::ElementType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single attack: display name, elemental type and base power (10-100 in the bundled data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    pub attack_type: ElementType,
    pub power: u16,
}

/// A named creature as it appears in the data table.
///
/// Templates are never fought with directly; the battle engine instantiates
/// a fresh combatant from one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureTemplate {
    pub name: String,
    pub types: Vec<ElementType>,
    pub max_hp: u32,
    pub attacks: Vec<Attack>,
}

impl Attack {
    pub fn new(name: impl Into<String>, attack_type: ElementType, power: u16) -> Self {
        Self {
            name: name.into(),
            attack_type,
            power,
        }
    }
}

impl fmt::Display for Attack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, Power: {})", self.name, self.attack_type, self.power)
    }
}

impl fmt::Display for CreatureTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_names: Vec<&str> = self.types.iter().map(|t| t.tag()).collect();
        write!(
            f,
            "{} [{}] HP {}",
            self.name,
            type_names.join(" / "),
            self.max_hp
        )
    }
}
