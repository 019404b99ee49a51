//! Item stat and ability generation
//!
//! Runs once per item at content-generation time. The pipeline is:
//! ability roll and budget reservation, reserved pre-allocation,
//! randomized budget allocation over the slot's pools, then stat-count
//! normalization. Every abnormal path degrades to a valid,
//! budget-respecting block.

mod ability;
mod allocator;
mod normalizer;
mod pools;

pub use allocator::allocate;
pub use normalizer::normalize;
pub use pools::{pools_for, SlotPools};

use crate::config::GenerationConstants;
use crate::item::Item;
use crate::stat_block::StatBlock;
use crate::types::{GrantedAbility, Rarity, Slot, StatDimension, Theme};
use rand::Rng;
use tracing::{debug, warn};

// Budget handed to the emergency fallback when a block somehow ends up
// with no stats at all.
const EMERGENCY_BUDGET: u32 = 4;

/// Stat/ability generator for equippable items
#[derive(Debug, Clone, Default)]
pub struct Generator {
    constants: GenerationConstants,
}

impl Generator {
    pub fn new(constants: GenerationConstants) -> Self {
        Generator { constants }
    }

    /// Generate a stat block without rolling an ability. The theme is part
    /// of the item's identity but does not influence stat allocation.
    pub fn generate_stats(
        &self,
        theme: Theme,
        rarity: Rarity,
        slot: Slot,
        rng: &mut impl Rng,
    ) -> StatBlock {
        self.generate(theme, rarity, slot, false, rng).0
    }

    /// Generate a stat block plus an optional themed ability. The ability
    /// consumes budget before stats are allocated; an unaffordable roll
    /// downgrades to no ability and the full budget goes to stats.
    pub fn generate_with_ability(
        &self,
        theme: Theme,
        rarity: Rarity,
        slot: Slot,
        rng: &mut impl Rng,
    ) -> (StatBlock, Option<GrantedAbility>) {
        self.generate(theme, rarity, slot, true, rng)
    }

    /// Convenience wrapper for the content pipeline: a complete item
    pub fn generate_item(
        &self,
        name: impl Into<String>,
        theme: Theme,
        rarity: Rarity,
        slot: Slot,
        rng: &mut impl Rng,
    ) -> Item {
        let (stats, ability) = self.generate_with_ability(theme, rarity, slot, rng);
        Item {
            name: name.into(),
            slot,
            rarity,
            theme,
            stats,
            ability,
        }
    }

    fn generate(
        &self,
        theme: Theme,
        rarity: Rarity,
        slot: Slot,
        roll_ability: bool,
        rng: &mut impl Rng,
    ) -> (StatBlock, Option<GrantedAbility>) {
        let total_budget = rarity.budget();
        let mut block = StatBlock::default();
        let mut stat_budget = total_budget;
        let mut grant = None;

        if roll_ability {
            if let Some(candidate) = ability::roll_ability(theme, slot, rarity, rng) {
                let cost = candidate.ability.cost(candidate.level);
                let reserve = ability::reserved_stat_budget(candidate, total_budget);

                if cost + reserve > total_budget {
                    // Hard gate: an ability never appears on an item too
                    // budget-poor to also carry meaningful stats.
                    debug!(
                        ability = ?candidate.ability,
                        level = candidate.level,
                        cost,
                        reserve,
                        total_budget,
                        "ability unaffordable, downgrading to no ability"
                    );
                } else {
                    stat_budget = total_budget - cost;
                    if let Some(role) = candidate.ability.role() {
                        let unspent = ability::spend_reserve(&mut block, role, reserve, rng);
                        stat_budget = stat_budget - reserve + unspent;
                    }
                    grant = Some(candidate);
                }
            }
        }

        let pools = pools_for(slot);
        if pools.primary.is_empty() && pools.secondary.is_empty() {
            warn!(?slot, "no stat pools configured, falling back to even split");
            even_split(&mut block, stat_budget);
            return (block, grant);
        }

        // Hold back enough to fund min-count padding so the normalizer
        // never has to invent units the budget cannot pay for.
        let pad_reserve = (rarity.min_stats() as u32 - 1)
            .saturating_mul(StatDimension::Health.unit_cost())
            .min(stat_budget);
        let alloc_budget = stat_budget - pad_reserve;

        let primary_budget = (alloc_budget as f64 * pools.primary_share).round() as u32;
        let secondary_budget = alloc_budget - primary_budget;

        let mut leftover = allocate(
            &mut block,
            pools.primary,
            primary_budget,
            &self.constants,
            rng,
        );
        leftover += allocate(
            &mut block,
            pools.secondary,
            secondary_budget,
            &self.constants,
            rng,
        );
        leftover += pad_reserve;

        normalize(&mut block, rarity, &mut leftover, rng);

        if leftover > 0 {
            warn!(leftover, ?rarity, ?slot, "unspent budget discarded");
        }

        if block.is_empty() {
            // Should be prevented by the normalizer; checked as a
            // defensive invariant.
            warn!(?rarity, ?slot, "generated block has no stats, applying emergency split");
            even_split(&mut block, total_budget.min(EMERGENCY_BUDGET));
        }

        (block, grant)
    }
}

/// Even HP/attack split of a budget, used by the misconfigured-pool and
/// empty-block fallbacks.
fn even_split(block: &mut StatBlock, budget: u32) {
    let half = budget / 2;
    let health_units = (half / StatDimension::Health.unit_cost())
        .min(StatDimension::Health.cap().saturating_sub(block.health));
    block.add(StatDimension::Health, health_units);
    let attack_units = ((budget - half) / StatDimension::Attack.unit_cost())
        .min(StatDimension::Attack.cap().saturating_sub(block.attack));
    block.add(StatDimension::Attack, attack_units);
}
