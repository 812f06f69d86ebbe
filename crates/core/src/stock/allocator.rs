//! Denomination allocation.
//!
//! Two related operations over a cassette (a set of denominations with
//! bounded per-denomination stock):
//!
//! - [`can_cover`]: can a target amount be expressed exactly as a bounded
//!   combination of the available denominations? This is bounded subset-sum,
//!   solved with an iterative reachable-sums table; the per-denomination cap
//!   is what rules out plain greedy or unbounded coin-change reasoning.
//! - [`allocate`]: the concrete payout breakdown, greedy from the largest
//!   denomination down. Greedy is not equivalent to the feasibility check for
//!   arbitrary denomination sets, so a greedy pass that leaves a remainder
//!   fails explicitly instead of under-delivering.

use super::stock_errors::StockError;
use super::stock_model::{AllocationLine, DenominationStock};

/// Returns the available denominations largest-first, dropping empty and
/// nonsensical entries.
fn usable_descending(available: &[DenominationStock]) -> Vec<&DenominationStock> {
    let mut usable: Vec<&DenominationStock> = available
        .iter()
        .filter(|d| d.face_value > 0 && d.quantity > 0)
        .collect();
    usable.sort_by(|a, b| b.face_value.cmp(&a.face_value));
    usable
}

/// Whether `target` can be expressed as `sum(n_i * face_i)` with
/// `0 <= n_i <= quantity_i`.
///
/// Iterative dynamic programming over the set of reachable partial sums:
/// denominations are processed largest-first, and for each one every multiple
/// up to its cap (bounded by the remaining headroom) is added to every sum
/// reachable before that denomination was considered. Terminates as soon as
/// the target is reached.
pub fn can_cover(target: i64, available: &[DenominationStock]) -> bool {
    if target < 0 {
        return false;
    }
    if target == 0 {
        return true;
    }

    let target_idx = target as usize;
    let mut reachable = vec![false; target_idx + 1];
    reachable[0] = true;

    for denomination in usable_descending(available) {
        let face = denomination.face_value as usize;
        if face > target_idx {
            continue;
        }
        let cap = denomination.quantity.min(target / denomination.face_value) as usize;
        if cap == 0 {
            continue;
        }

        // Sums reachable before this denomination; extending from the
        // snapshot keeps the per-denomination cap honest.
        let base_sums: Vec<usize> = (0..=target_idx).filter(|&s| reachable[s]).collect();
        for base in base_sums {
            for multiple in 1..=cap {
                let sum = base + multiple * face;
                if sum > target_idx {
                    break;
                }
                if sum == target_idx {
                    return true;
                }
                reachable[sum] = true;
            }
        }
    }

    reachable[target_idx]
}

/// Produces the payout breakdown for `target`, greedy from the largest
/// denomination down, taking `min(remaining / face, quantity)` at each step.
///
/// Fails with `InsufficientStock` if the greedy pass cannot cover the target
/// exactly; a partial breakdown is never returned.
pub fn allocate(
    target: i64,
    available: &[DenominationStock],
) -> Result<Vec<AllocationLine>, StockError> {
    if target < 0 {
        return Err(StockError::InvalidAmount(format!(
            "Payout amount cannot be negative: {}",
            target
        )));
    }

    let mut remaining = target;
    let mut lines = Vec::new();

    for denomination in usable_descending(available) {
        if remaining == 0 {
            break;
        }
        let take = (remaining / denomination.face_value).min(denomination.quantity);
        if take > 0 {
            lines.push(AllocationLine {
                denomination_id: denomination.denomination_id.clone(),
                face_value: denomination.face_value,
                quantity: take,
            });
            remaining -= take * denomination.face_value;
        }
    }

    if remaining > 0 {
        return Err(StockError::InsufficientStock(format!(
            "Cannot cover {} exactly; {} left after allocating available denominations",
            target, remaining
        )));
    }

    Ok(lines)
}
