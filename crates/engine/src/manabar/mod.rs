//! Regenerating resource pool ("manabar") state
//!
//! Mana regenerates linearly from empty to full over [`REGEN_PERIOD_SECONDS`].
//! Amounts are integer strings that routinely exceed 2^53, so all arithmetic
//! runs on `u128` and results are handed back as decimal strings.

use crate::value::{max_downvote_mana, max_voting_mana};
use hivekit_core::{AccountManaFields, ManabarResult, ManabarSnapshot, REGEN_PERIOD_SECONDS};
use tracing::debug;

const PERIOD: u128 = REGEN_PERIOD_SECONDS as u128;

/// Current manabar state as of now
pub fn compute_manabar(current: &str, max: &str, last_update_time: i64) -> ManabarResult {
    compute_manabar_at(current, max, last_update_time, chrono::Utc::now().timestamp())
}

/// Manabar state at `now` (unix seconds)
///
/// A `last_update_time` in the future counts as zero elapsed time.
/// Unparseable `current`/`max` count as 0.
pub fn compute_manabar_at(
    current: &str,
    max: &str,
    last_update_time: i64,
    now: i64,
) -> ManabarResult {
    let current = parse_mana(current);
    let max = parse_mana(max);
    let elapsed = now.saturating_sub(last_update_time).max(0) as u128;

    let new_current = current.saturating_add(regenerated(max, elapsed)).min(max);

    let percentage = if max == 0 {
        0.0
    } else {
        let basis_points = mul_div_floor(new_current, 10_000, max);
        (basis_points as f64 / 100.0).clamp(0.0, 100.0)
    };

    let cooldown_seconds = if new_current < max {
        mul_div_floor(max - new_current, REGEN_PERIOD_SECONDS, max) as u64
    } else {
        0
    };

    ManabarResult {
        current: new_current.to_string(),
        max: max.to_string(),
        percentage,
        cooldown_seconds,
    }
}

/// `floor(max * elapsed / PERIOD)`, split on the period so it cannot overflow
fn regenerated(max: u128, elapsed: u128) -> u128 {
    if elapsed >= PERIOD {
        return max;
    }
    max / PERIOD * elapsed + (max % PERIOD) * elapsed / PERIOD
}

/// `floor(a * b / c)` for `a <= c`, `c > 0`, exact at any width
///
/// The quotient is at most `b`, so it is found by bisection on `k * c <= a * b`,
/// comparing the products as 256-bit values.
fn mul_div_floor(a: u128, b: u64, c: u128) -> u128 {
    if let Some(product) = a.checked_mul(u128::from(b)) {
        return product / c;
    }

    let target = widening_mul(a, b);
    let (mut low, mut high) = (0u64, b);
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if widening_mul(c, mid) <= target {
            low = mid;
        } else {
            high = mid - 1;
        }
    }
    u128::from(low)
}

/// `x * y` as a `(high, low)` pair of 128-bit limbs
fn widening_mul(x: u128, y: u64) -> (u128, u128) {
    let y = u128::from(y);
    let low_part = (x & u128::from(u64::MAX)) * y;
    let high_part = (x >> 64) * y;

    let (low, carry) = low_part.overflowing_add(high_part << 64);
    let high = (high_part >> 64) + u128::from(carry);
    (high, low)
}

/// Run [`compute_manabar_at`] on a stored snapshot
pub fn compute_snapshot_at(snapshot: &ManabarSnapshot, now: i64) -> ManabarResult {
    compute_manabar_at(&snapshot.current, &snapshot.max, snapshot.last_update_time, now)
}

/// Upvote manabar of an account, ceiling derived from its effective vesting shares
pub fn voting_manabar(account: &AccountManaFields, now: i64) -> ManabarResult {
    let snapshot = ManabarSnapshot {
        current: account.voting_manabar.current_mana.clone(),
        max: max_voting_mana(account).to_string(),
        last_update_time: account.voting_manabar.last_update_time,
    };
    compute_snapshot_at(&snapshot, now)
}

/// Downvote manabar of an account, `None` when the node omits it
pub fn downvote_manabar(account: &AccountManaFields, now: i64) -> Option<ManabarResult> {
    let bar = account.downvote_manabar.as_ref()?;
    let snapshot = ManabarSnapshot {
        current: bar.current_mana.clone(),
        max: max_downvote_mana(account).to_string(),
        last_update_time: bar.last_update_time,
    };
    Some(compute_snapshot_at(&snapshot, now))
}

fn parse_mana(raw: &str) -> u128 {
    match raw.trim().parse::<u128>() {
        Ok(value) => value,
        Err(e) => {
            debug!("Unparseable mana amount {:?} ({}), treating as 0", raw, e);
            0
        }
    }
}
