//! Item and archetype data records
//!
//! Plain immutable value types. Identity (name, slot, rarity, theme) is
//! externally assigned; the stat block and ability grant come from the
//! generator and never change afterwards.

use crate::stat_block::StatBlock;
use crate::types::{GrantedAbility, Rarity, Slot, Theme};
use serde::{Deserialize, Serialize};

/// A piece of equippable gear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name
    pub name: String,
    /// Equipment position this item occupies
    pub slot: Slot,
    pub rarity: Rarity,
    pub theme: Theme,
    /// Generated stat bonuses
    pub stats: StatBlock,
    /// Special ability grant, if one was rolled
    #[serde(default)]
    pub ability: Option<GrantedAbility>,
}

/// Base combat statistics for a minion archetype
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    pub name: String,
    pub base_health: u32,
    pub base_attack: u32,
}

impl Archetype {
    pub fn new(name: impl Into<String>, base_health: u32, base_attack: u32) -> Self {
        Archetype {
            name: name.into(),
            base_health,
            base_attack,
        }
    }
}
