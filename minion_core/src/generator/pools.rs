//! Stat-dimension pools per equipment slot

use crate::types::{Slot, StatDimension};

/// The ordered dimension pools eligible for a slot plus the share of the
/// stat budget routed to the primary pool.
#[derive(Debug, Clone, Copy)]
pub struct SlotPools {
    pub primary: &'static [StatDimension],
    pub secondary: &'static [StatDimension],
    pub primary_share: f64,
}

/// Pools for a slot. Pool order is load-bearing: leftover spending breaks
/// cost ties by it.
pub fn pools_for(slot: Slot) -> SlotPools {
    match slot {
        Slot::Head => SlotPools {
            primary: &[StatDimension::Defense, StatDimension::CritChance],
            secondary: &[StatDimension::Health, StatDimension::Attack],
            primary_share: 0.70,
        },
        Slot::Torso => SlotPools {
            primary: &[
                StatDimension::Health,
                StatDimension::Defense,
                StatDimension::Attack,
            ],
            secondary: &[StatDimension::CritDamage, StatDimension::ArmorPen],
            primary_share: 0.75,
        },
        Slot::Hands => SlotPools {
            primary: &[StatDimension::Attack, StatDimension::CritChance],
            secondary: &[StatDimension::CritDamage, StatDimension::ArmorPen],
            primary_share: 0.70,
        },
        Slot::Trinket => SlotPools {
            primary: &[
                StatDimension::CritChance,
                StatDimension::CritDamage,
                StatDimension::ArmorPen,
            ],
            secondary: &[StatDimension::Health, StatDimension::Attack],
            primary_share: 0.60,
        },
    }
}
