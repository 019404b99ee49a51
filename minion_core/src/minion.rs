//! Minion - runtime character state and the stat aggregation pipeline
//!
//! Derived fields (totals, active abilities) are never patched in place;
//! every equip, unequip, or level-up triggers a full recompute from the
//! archetype, current level, and equipped items.

use crate::config::LevelingConstants;
use crate::item::{Archetype, Item};
use crate::stat_block::StatBlock;
use crate::types::{Ability, Slot};
use serde::{Deserialize, Serialize};

// Innate bonuses applied on top of the archetype base
const INNATE_HEALTH_BONUS: u32 = 10;
const INNATE_ATTACK_BONUS: u32 = 2;
const INNATE_DEFENSE: u32 = 5;

// Per-level growth
const HEALTH_PER_LEVEL: u32 = 2;
const ATTACK_PER_LEVEL: u32 = 1;
const DEFENSE_PER_LEVEL: u32 = 1;

// Soft growth tiers: tertiary stats unlock at these levels-gained counts
const CRIT_CHANCE_UNLOCK: u32 = 5;
const CRIT_CHANCE_PER_LEVEL: u32 = 2;
const CRIT_DAMAGE_UNLOCK: u32 = 8;
const CRIT_DAMAGE_PER_LEVEL: u32 = 5;
const ARMOR_PEN_UNLOCK: u32 = 12;
const ARMOR_PEN_PER_LEVEL: u32 = 1;

/// Active ability levels, indexed by [`Ability`]. Zero means inactive;
/// otherwise the highest level granted by any equipped item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityLevels([u8; Ability::COUNT]);

impl Default for AbilityLevels {
    fn default() -> Self {
        AbilityLevels([0; Ability::COUNT])
    }
}

impl AbilityLevels {
    /// Level of an ability, 0 if inactive
    pub fn get(&self, ability: Ability) -> u8 {
        self.0[ability.index()]
    }

    /// Record a grant, keeping the maximum level seen
    pub fn record(&mut self, ability: Ability, level: u8) {
        let slot = &mut self.0[ability.index()];
        *slot = (*slot).max(level);
    }

    /// Distinct active abilities with their levels
    pub fn iter_active(&self) -> impl Iterator<Item = (Ability, u8)> + '_ {
        Ability::ALL
            .iter()
            .filter_map(|a| {
                let level = self.get(*a);
                (level > 0).then_some((*a, level))
            })
    }

    pub fn active_count(&self) -> usize {
        self.iter_active().count()
    }
}

/// A runtime character: archetype, equipment, level progression, and the
/// derived stat snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Minion {
    archetype: Archetype,
    slots: [Option<Item>; 4],
    level: u32,
    experience: u32,
    xp_to_next: u32,
    leveling: LevelingConstants,
    // Derived; rebuilt on every equipment or level change
    totals: StatBlock,
    abilities: AbilityLevels,
}

impl Minion {
    /// Create a level-1 minion bound to an archetype
    pub fn new(archetype: Archetype) -> Self {
        Self::with_leveling(archetype, LevelingConstants::default())
    }

    pub fn with_leveling(archetype: Archetype, leveling: LevelingConstants) -> Self {
        let mut minion = Minion {
            archetype,
            slots: [None, None, None, None],
            level: 1,
            experience: 0,
            xp_to_next: leveling.base_threshold,
            leveling,
            totals: StatBlock::default(),
            abilities: AbilityLevels::default(),
        };
        minion.recompute();
        minion
    }

    // === Equipment ===

    /// Equip an item into its slot, returning the displaced item if any
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        let previous = self.slots[item.slot.index()].replace(item);
        self.recompute();
        previous
    }

    /// Remove the item in a slot, if present
    pub fn unequip(&mut self, slot: Slot) -> Option<Item> {
        let removed = self.slots[slot.index()].take();
        if removed.is_some() {
            self.recompute();
        }
        removed
    }

    /// Item currently equipped in a slot
    pub fn equipped(&self, slot: Slot) -> Option<&Item> {
        self.slots[slot.index()].as_ref()
    }

    // === Leveling ===

    /// Add experience. Returns whether at least one level was gained.
    /// Non-positive amounts are a no-op.
    pub fn gain_experience(&mut self, amount: i32) -> bool {
        if amount <= 0 {
            return false;
        }
        self.experience = self.experience.saturating_add(amount as u32);

        let mut leveled = false;
        while self.level < self.leveling.level_cap && self.experience >= self.xp_to_next {
            self.experience -= self.xp_to_next;
            self.level += 1;
            self.xp_to_next =
                (self.xp_to_next as f64 * self.leveling.threshold_growth).round() as u32;
            leveled = true;
        }
        // At the cap, surplus experience accumulates but is never consumed.

        if leveled {
            self.recompute();
        }
        leveled
    }

    // === Aggregation ===

    /// Rebuild the derived snapshot from scratch: archetype base and innate
    /// bonuses, level growth, equipped item blocks, then deduplicated
    /// ability passives.
    pub fn recompute(&mut self) {
        let mut totals = StatBlock {
            health: self.archetype.base_health + INNATE_HEALTH_BONUS,
            attack: self.archetype.base_attack + INNATE_ATTACK_BONUS,
            defense: INNATE_DEFENSE,
            ..Default::default()
        };

        let levels_gained = self.level.saturating_sub(1);
        totals.health += HEALTH_PER_LEVEL * levels_gained;
        totals.attack += ATTACK_PER_LEVEL * levels_gained;
        totals.defense += DEFENSE_PER_LEVEL * levels_gained;
        if levels_gained >= CRIT_CHANCE_UNLOCK {
            totals.crit_chance += CRIT_CHANCE_PER_LEVEL * (levels_gained - CRIT_CHANCE_UNLOCK + 1);
        }
        if levels_gained >= CRIT_DAMAGE_UNLOCK {
            totals.crit_damage += CRIT_DAMAGE_PER_LEVEL * (levels_gained - CRIT_DAMAGE_UNLOCK + 1);
        }
        if levels_gained >= ARMOR_PEN_UNLOCK {
            totals.armor_pen += ARMOR_PEN_PER_LEVEL * (levels_gained - ARMOR_PEN_UNLOCK + 1);
        }

        let mut abilities = AbilityLevels::default();
        for item in self.slots.iter().flatten() {
            totals.add_block(&item.stats);
            if let Some(grant) = item.ability {
                abilities.record(grant.ability, grant.level);
            }
        }

        for (ability, level) in abilities.iter_active() {
            apply_passive(&mut totals, ability, level);
        }

        self.totals = totals;
        self.abilities = abilities;
    }

    // === Queries ===

    pub fn archetype(&self) -> &Archetype {
        &self.archetype
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn experience_to_next(&self) -> u32 {
        self.xp_to_next
    }

    /// Current derived stat totals
    pub fn totals(&self) -> &StatBlock {
        &self.totals
    }

    /// Level of an active ability, 0 if inactive
    pub fn ability_level(&self, ability: Ability) -> u8 {
        self.abilities.get(ability)
    }

    pub fn has_ability(&self, ability: Ability) -> bool {
        self.abilities.get(ability) > 0
    }

    /// Distinct active abilities with their effective levels
    pub fn active_abilities(&self) -> impl Iterator<Item = (Ability, u8)> + '_ {
        self.abilities.iter_active()
    }
}

/// Passive numeric effects of active abilities. Most abilities act only in
/// combat; this match is the extension point for new passives.
fn apply_passive(totals: &mut StatBlock, ability: Ability, level: u8) {
    match ability {
        Ability::Frenzy => totals.attack += level as u32,
        _ => {}
    }
}
