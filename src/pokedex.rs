//! The creature data table.
//!
//! A `Pokedex` is built explicitly (from the bundled roster, a RON string or a
//! RON file) and handed to whoever assembles a battle. Lookups are
//! case-insensitive and every instantiation yields a fresh, full-HP combatant.

use crate::creature::{validate_parts, Combatant};
use crate::errors::{PokedexError, PokedexResult};
use schema::CreatureTemplate;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

// Roster compiled from data/creatures.ron by build.rs.
static COMPILED_ROSTER: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/creatures.bin"));

#[derive(Debug, Clone)]
pub struct Pokedex {
    templates: Vec<CreatureTemplate>,
    // lowercase name -> position in `templates`
    index: HashMap<String, usize>,
}

impl Pokedex {
    /// Build a table from templates, rejecting any that break the roster rules.
    pub fn from_templates(templates: Vec<CreatureTemplate>) -> PokedexResult<Self> {
        let mut index = HashMap::with_capacity(templates.len());

        for (position, template) in templates.iter().enumerate() {
            validate_parts(&template.types, template.max_hp, &template.attacks).map_err(|e| {
                PokedexError::MalformedData(format!("{}: {}", template.name, e))
            })?;

            let key = template.name.to_lowercase();
            if index.insert(key, position).is_some() {
                return Err(PokedexError::MalformedData(format!(
                    "duplicate creature name '{}'",
                    template.name
                )));
            }
        }

        Ok(Pokedex { templates, index })
    }

    /// The roster bundled with the crate.
    pub fn builtin() -> PokedexResult<Self> {
        let templates: Vec<CreatureTemplate> = postcard::from_bytes(COMPILED_ROSTER)?;
        Self::from_templates(templates)
    }

    /// Parse a RON list of creature templates.
    pub fn from_ron_str(content: &str) -> PokedexResult<Self> {
        let templates: Vec<CreatureTemplate> = ron::from_str(content)?;
        Self::from_templates(templates)
    }

    /// Load a RON roster file.
    pub fn load(path: &Path) -> PokedexResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| PokedexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let pokedex = Self::from_ron_str(&content)?;
        debug!(path = %path.display(), creatures = pokedex.len(), "loaded creature data");
        Ok(pokedex)
    }

    /// Load a RON roster file, falling back to the bundled roster if it can't be used.
    pub fn load_or_builtin(path: &Path) -> PokedexResult<Self> {
        match Self::load(path) {
            Ok(pokedex) => Ok(pokedex),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "falling back to the bundled roster");
                Self::builtin()
            }
        }
    }

    /// Case-insensitive template lookup.
    pub fn get(&self, name: &str) -> PokedexResult<&CreatureTemplate> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&position| &self.templates[position])
            .ok_or_else(|| PokedexError::UnknownCreature {
                name: name.to_string(),
                available: self.names().map(str::to_string).collect(),
            })
    }

    /// A fresh combatant at full HP with its own copy of the attack list.
    pub fn instantiate(&self, name: &str) -> PokedexResult<Combatant> {
        let template = self.get(name)?;
        Combatant::from_template(template)
            .map_err(|e| PokedexError::MalformedData(format!("{}: {}", template.name, e)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.trim().to_lowercase())
    }

    /// Display names in roster order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CreatureTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
