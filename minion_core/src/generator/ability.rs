//! Themed ability rolls and budget reservation

use crate::stat_block::StatBlock;
use crate::types::{
    affinity_weight, slot_abilities, Ability, GrantedAbility, Rarity, Role, Slot, Theme,
};
use rand::Rng;

/// Roll whether an item carries an ability and, if so, which one at what
/// power level. Affordability is not checked here; the generator gates on
/// it afterwards.
pub fn roll_ability(
    theme: Theme,
    slot: Slot,
    rarity: Rarity,
    rng: &mut impl Rng,
) -> Option<GrantedAbility> {
    if !rng.gen_bool(rarity.ability_chance()) {
        return None;
    }
    let ability = pick_weighted(theme, slot, rng)?;
    let level = roll_level(rarity, rng);
    Some(GrantedAbility { ability, level })
}

/// Cumulative-weight roulette over the slot's eligible abilities, weighted
/// by the theme's affinity for each ability's role. Zero-weight and
/// role-less entries are excluded.
fn pick_weighted(theme: Theme, slot: Slot, rng: &mut impl Rng) -> Option<Ability> {
    let candidates: Vec<(Ability, f64)> = slot_abilities(slot)
        .iter()
        .filter_map(|ability| {
            let role = ability.role()?;
            let weight = affinity_weight(theme, role);
            (weight > 0.0).then_some((*ability, weight))
        })
        .collect();

    let total: f64 = candidates.iter().map(|(_, w)| w).sum();
    if total <= 0.0 {
        return None;
    }

    let mut roll = rng.gen::<f64>() * total;
    for (ability, weight) in &candidates {
        if roll < *weight {
            return Some(*ability);
        }
        roll -= weight;
    }
    // Floating-point slack lands on the final candidate
    candidates.last().map(|(ability, _)| *ability)
}

/// Power level 1..=3 via the rarity's nested thresholds
fn roll_level(rarity: Rarity, rng: &mut impl Rng) -> u8 {
    let (p3, p2) = rarity.ability_level_odds();
    if rng.gen_bool(p3) {
        3
    } else if rng.gen_bool(p2) {
        2
    } else {
        1
    }
}

/// Stat budget that must stay available alongside this grant
pub fn reserved_stat_budget(grant: GrantedAbility, total_budget: u32) -> u32 {
    let fraction = grant
        .ability
        .role()
        .map(|role| role.reserved_stat_fraction())
        .unwrap_or(0.0);
    (total_budget as f64 * fraction).round() as u32
}

/// Pre-allocate the reserved stat budget into the role's focus dimensions,
/// one unit at a time into a uniformly random focus entry. Returns the
/// unspendable remainder, which flows back into the general budget.
pub fn spend_reserve(
    block: &mut StatBlock,
    role: Role,
    reserve: u32,
    rng: &mut impl Rng,
) -> u32 {
    let mut working: Vec<_> = role.focus_dimensions().to_vec();
    let mut remaining = reserve;

    while remaining > 0 && !working.is_empty() {
        let idx = rng.gen_range(0..working.len());
        let dim = working[idx];
        if dim.unit_cost() <= remaining && block.get(dim) < dim.cap() {
            block.add(dim, 1);
            remaining -= dim.unit_cost();
        } else {
            working.remove(idx);
        }
    }

    remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatDimension;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_legendary_always_rolls_presence() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..50 {
            let grant = roll_ability(Theme::Savage, Slot::Torso, Rarity::Legendary, &mut rng);
            let grant = grant.expect("legendary presence chance is 1.0");
            assert!((1..=3).contains(&grant.level));
        }
    }

    #[test]
    fn test_roulette_only_picks_slot_eligible_abilities() {
        let mut rng = StdRng::seed_from_u64(22);
        for _ in 0..200 {
            if let Some(ability) = pick_weighted(Theme::Cunning, Slot::Hands, &mut rng) {
                assert!(slot_abilities(Slot::Hands).contains(&ability));
            }
        }
    }

    #[test]
    fn test_roulette_respects_zero_weight_exclusion() {
        let mut rng = StdRng::seed_from_u64(23);
        // Mystic has zero affinity for Marksman; Deadeye and Longshot must
        // never come up on Hands.
        for _ in 0..500 {
            if let Some(ability) = pick_weighted(Theme::Mystic, Slot::Hands, &mut rng) {
                assert_ne!(ability.role(), Some(Role::Marksman));
            }
        }
    }

    #[test]
    fn test_reserved_budget_follows_role_fraction() {
        let grant = GrantedAbility {
            ability: Ability::Frenzy,
            level: 1,
        };
        // Assault reserves 25%
        assert_eq!(reserved_stat_budget(grant, 8), 2);
        assert_eq!(reserved_stat_budget(grant, 30), 8);

        let grant = GrantedAbility {
            ability: Ability::Mend,
            level: 1,
        };
        // Support reserves nothing
        assert_eq!(reserved_stat_budget(grant, 30), 0);
    }

    #[test]
    fn test_spend_reserve_stays_in_focus_dimensions() {
        let mut rng = StdRng::seed_from_u64(24);
        let mut block = StatBlock::default();
        let remainder = spend_reserve(&mut block, Role::Guardian, 6, &mut rng);
        assert_eq!(block.total_cost() + remainder, 6);
        for dim in StatDimension::ALL {
            if !Role::Guardian.focus_dimensions().contains(&dim) {
                assert_eq!(block.get(dim), 0);
            }
        }
    }

    #[test]
    fn test_spend_reserve_returns_everything_for_unfocused_roles() {
        let mut rng = StdRng::seed_from_u64(25);
        let mut block = StatBlock::default();
        let remainder = spend_reserve(&mut block, Role::Trickster, 5, &mut rng);
        assert_eq!(remainder, 5);
        assert!(block.is_empty());
    }
}
