//! Randomized, cap-respecting, cost-aware budget spending

use crate::config::GenerationConstants;
use crate::stat_block::StatBlock;
use crate::types::StatDimension;
use rand::Rng;
use tracing::debug;

/// Spend `budget` across `pool`, adding units to `block`. Returns the
/// unspent leftover.
///
/// Each step picks a uniformly random dimension from a shrinking working
/// pool and invests a random affordable amount, bounded by the dimension
/// cap and the per-step ceiling. Dimensions that are capped or unaffordable
/// are removed from the working pool for the rest of the call. After the
/// loop a deterministic pass spends exactly one unit on the cheapest
/// still-affordable dimension of the original pool (ties broken by pool
/// order) so the budget is not silently wasted when the randomness stalls.
pub fn allocate(
    block: &mut StatBlock,
    pool: &[StatDimension],
    budget: u32,
    constants: &GenerationConstants,
    rng: &mut impl Rng,
) -> u32 {
    let mut remaining = budget;
    let mut working: Vec<StatDimension> = pool.to_vec();
    let mut iterations = 0;

    while remaining > 0 && !working.is_empty() && iterations < constants.max_iterations {
        iterations += 1;

        let idx = rng.gen_range(0..working.len());
        let dim = working[idx];
        let cost = dim.unit_cost();
        let affordable = remaining / cost;
        let headroom = dim.cap().saturating_sub(block.get(dim));
        let max_units = affordable.min(headroom).min(constants.step_ceiling);

        if max_units == 0 {
            // Capped or unaffordable for the rest of this call
            working.remove(idx);
            continue;
        }

        let amount = rng.gen_range(1..=max_units);
        block.add(dim, amount);
        remaining -= amount * cost;
    }

    if iterations >= constants.max_iterations && remaining > 0 {
        debug!(remaining, "allocation hit iteration cap with budget unspent");
    }

    // Deterministic leftover spend: one unit on the cheapest affordable,
    // un-capped dimension. First strictly-cheaper wins, so ties fall to
    // pool order.
    if remaining > 0 {
        let mut pick: Option<StatDimension> = None;
        for dim in pool {
            if dim.unit_cost() > remaining || block.get(*dim) >= dim.cap() {
                continue;
            }
            match pick {
                Some(best) if dim.unit_cost() >= best.unit_cost() => {}
                _ => pick = Some(*dim),
            }
        }
        if let Some(dim) = pick {
            block.add(dim, 1);
            remaining -= dim.unit_cost();
        }
    }

    remaining
}
