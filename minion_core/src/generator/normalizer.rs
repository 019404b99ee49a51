//! Enforces the rarity's non-zero stat-count policy

use crate::stat_block::StatBlock;
use crate::types::{Rarity, StatDimension};
use rand::Rng;
use tracing::debug;

// Guard for the padding loop; the policy tables keep min_stats within the
// basic dimensions so this is never reached in practice.
const MAX_PAD_STEPS: usize = 16;

/// Adjust `block` so that
/// `min_stats(rarity) <= nonzero_count <= max_stats(rarity) + 1`.
///
/// Padding is funded from the pipeline's unspent budget in `leftover`. When
/// the leftover cannot cover one unit of the padding target, units are
/// transferred off the currently-largest dimension instead, so the block's
/// total cost never grows past the rarity budget.
pub fn normalize(
    block: &mut StatBlock,
    rarity: Rarity,
    leftover: &mut u32,
    rng: &mut impl Rng,
) {
    pad_to_minimum(block, rarity, leftover, rng);
    trim_to_maximum(block, rarity);
}

fn pad_to_minimum(
    block: &mut StatBlock,
    rarity: Rarity,
    leftover: &mut u32,
    rng: &mut impl Rng,
) {
    let min = rarity.min_stats();
    let mut steps = 0;

    while block.nonzero_count() < min && steps < MAX_PAD_STEPS {
        steps += 1;

        // Prefer an un-rolled basic dimension in priority order; if every
        // basic is already present, top up a random one.
        let target = StatDimension::BASIC
            .iter()
            .copied()
            .find(|d| block.get(*d) == 0)
            .unwrap_or_else(|| {
                StatDimension::BASIC[rng.gen_range(0..StatDimension::BASIC.len())]
            });
        let cost = target.unit_cost();

        // Fund the padding: leftover first, then transfer off the largest
        // dimension one unit at a time.
        while *leftover < cost {
            let Some(donor) = largest_dimension(block, target) else {
                break;
            };
            block.remove(donor, 1);
            *leftover += donor.unit_cost();
        }
        if *leftover < cost {
            // Nothing left to transfer; the generator's defensive
            // zero-stat check picks this up.
            break;
        }

        let affordable = (*leftover / cost).min(3);
        let amount = if affordable <= 1 {
            1
        } else {
            rng.gen_range(1..=affordable)
        };
        block.add(target, amount);
        *leftover -= amount * cost;
    }
}

fn trim_to_maximum(block: &mut StatBlock, rarity: Rarity) {
    // One dimension above the nominal maximum is designed headroom.
    let allowed = rarity.max_stats() + 1;

    while block.nonzero_count() > allowed {
        let Some(dim) = smallest_nonzero(block) else {
            break;
        };
        debug!(?dim, value = block.get(dim), "trimming weakest stat");
        block.clear(dim);
    }
}

/// Largest non-zero dimension other than `exclude`; strict comparison keeps
/// ties on the earliest dimension in priority order.
fn largest_dimension(block: &StatBlock, exclude: StatDimension) -> Option<StatDimension> {
    let mut best: Option<StatDimension> = None;
    for dim in StatDimension::ALL {
        if dim == exclude || block.get(dim) == 0 {
            continue;
        }
        match best {
            Some(b) if block.get(dim) <= block.get(b) => {}
            _ => best = Some(dim),
        }
    }
    best
}

/// Smallest non-zero dimension, ties broken by priority order
fn smallest_nonzero(block: &StatBlock) -> Option<StatDimension> {
    let mut best: Option<StatDimension> = None;
    for dim in StatDimension::ALL {
        if block.get(dim) == 0 {
            continue;
        }
        match best {
            Some(b) if block.get(dim) >= block.get(b) => {}
            _ => best = Some(dim),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pad_uses_leftover_first() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut block = StatBlock::default();
        block.add(StatDimension::CritChance, 3);
        let mut leftover = 5;
        normalize(&mut block, Rarity::Uncommon, &mut leftover, &mut rng);
        assert!(block.nonzero_count() >= Rarity::Uncommon.min_stats());
        // Padding went to an un-rolled basic dimension
        assert!(block.health > 0);
        assert!(leftover < 5);
    }

    #[test]
    fn test_pad_transfers_when_leftover_is_empty() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut block = StatBlock::default();
        block.add(StatDimension::Health, 16);
        let before_cost = block.total_cost();
        let mut leftover = 0;
        normalize(&mut block, Rarity::Uncommon, &mut leftover, &mut rng);
        assert!(block.nonzero_count() >= 2);
        assert!(block.total_cost() + leftover <= before_cost);
    }

    #[test]
    fn test_trim_removes_smallest_first() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut block = StatBlock::default();
        block.add(StatDimension::Health, 10);
        block.add(StatDimension::Attack, 4);
        block.add(StatDimension::Defense, 3);
        block.add(StatDimension::CritChance, 2);
        block.add(StatDimension::CritDamage, 5);
        block.add(StatDimension::ArmorPen, 1);
        let mut leftover = 0;
        // Common allows at most max_stats + 1 = 3 dimensions
        normalize(&mut block, Rarity::Common, &mut leftover, &mut rng);
        assert_eq!(block.nonzero_count(), 3);
        // The largest survived, the smallest went first
        assert_eq!(block.health, 10);
        assert_eq!(block.armor_pen, 0);
        assert_eq!(block.crit_chance, 0);
    }

    #[test]
    fn test_trim_tie_break_uses_priority_order() {
        let mut block = StatBlock::default();
        block.add(StatDimension::Attack, 2);
        block.add(StatDimension::Defense, 2);
        // Attack comes first in priority order, so it is the tie loser
        let dim = smallest_nonzero(&block).unwrap();
        assert_eq!(dim, StatDimension::Attack);
    }

    #[test]
    fn test_normalize_within_bounds_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut block = StatBlock::default();
        block.add(StatDimension::Health, 4);
        block.add(StatDimension::Attack, 2);
        let snapshot = block;
        let mut leftover = 0;
        normalize(&mut block, Rarity::Uncommon, &mut leftover, &mut rng);
        assert_eq!(block, snapshot);
    }
}
