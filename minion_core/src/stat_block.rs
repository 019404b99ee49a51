//! StatBlock - the fixed record of numeric bonuses carried by an item

use crate::types::StatDimension;
use serde::{Deserialize, Serialize};

/// Numeric bonuses for the closed set of stat dimensions.
///
/// Owned by the item it was generated for and immutable afterwards, except
/// through [`upgrade_legacy`]. The two `*_mult_pct` fields are
/// percentage-multiplier dimensions carried for forward compatibility; the
/// generator never populates them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    #[serde(default)]
    pub health: u32,
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub crit_chance: u32,
    #[serde(default)]
    pub crit_damage: u32,
    #[serde(default)]
    pub armor_pen: u32,
    #[serde(default)]
    pub damage_mult_pct: u32,
    #[serde(default)]
    pub speed_mult_pct: u32,
}

impl StatBlock {
    /// Value on a generated dimension
    pub fn get(&self, dim: StatDimension) -> u32 {
        match dim {
            StatDimension::Health => self.health,
            StatDimension::Attack => self.attack,
            StatDimension::Defense => self.defense,
            StatDimension::CritChance => self.crit_chance,
            StatDimension::CritDamage => self.crit_damage,
            StatDimension::ArmorPen => self.armor_pen,
        }
    }

    /// Add units to a dimension
    pub fn add(&mut self, dim: StatDimension, amount: u32) {
        let field = match dim {
            StatDimension::Health => &mut self.health,
            StatDimension::Attack => &mut self.attack,
            StatDimension::Defense => &mut self.defense,
            StatDimension::CritChance => &mut self.crit_chance,
            StatDimension::CritDamage => &mut self.crit_damage,
            StatDimension::ArmorPen => &mut self.armor_pen,
        };
        *field = field.saturating_add(amount);
    }

    /// Remove units from a dimension, clamping at zero
    pub fn remove(&mut self, dim: StatDimension, amount: u32) {
        let field = match dim {
            StatDimension::Health => &mut self.health,
            StatDimension::Attack => &mut self.attack,
            StatDimension::Defense => &mut self.defense,
            StatDimension::CritChance => &mut self.crit_chance,
            StatDimension::CritDamage => &mut self.crit_damage,
            StatDimension::ArmorPen => &mut self.armor_pen,
        };
        *field = field.saturating_sub(amount);
    }

    /// Zero a dimension entirely
    pub fn clear(&mut self, dim: StatDimension) {
        let current = self.get(dim);
        self.remove(dim, current);
    }

    /// Number of generated dimensions with a non-zero value
    pub fn nonzero_count(&self) -> usize {
        StatDimension::ALL
            .iter()
            .filter(|d| self.get(**d) > 0)
            .count()
    }

    /// Total budget cost of the block (generated dimensions only)
    pub fn total_cost(&self) -> u32 {
        StatDimension::ALL
            .iter()
            .map(|d| self.get(*d) * d.unit_cost())
            .sum()
    }

    /// Whether every generated dimension is zero
    pub fn is_empty(&self) -> bool {
        self.nonzero_count() == 0
    }

    /// Add another block's generated dimensions into this one
    pub fn add_block(&mut self, other: &StatBlock) {
        for dim in StatDimension::ALL {
            self.add(dim, other.get(dim));
        }
    }
}

/// Upgrade a block from the legacy on-disk layout.
///
/// Early content stored crit chance and crit damage in the two multiplier
/// fields. The upgrade moves each value into its dedicated field when that
/// field is still zero, then clears the multiplier slot. Pure and
/// idempotent: running it on an already-upgraded block is a no-op. Invoked
/// once by the content pipeline, never implicitly on read.
pub fn upgrade_legacy(mut block: StatBlock) -> StatBlock {
    if block.crit_chance == 0 && block.damage_mult_pct > 0 {
        block.crit_chance = block.damage_mult_pct;
        block.damage_mult_pct = 0;
    }
    if block.crit_damage == 0 && block.speed_mult_pct > 0 {
        block.crit_damage = block.speed_mult_pct;
        block.speed_mult_pct = 0;
    }
    block
}
