//! Asset decoding and staked-share valuation

use hivekit_core::{
    AccountManaFields, AssetField, DecodedAsset, DynamicGlobalProperties, RawAsset, Symbol,
    DOWNVOTE_POOL_DIVISOR, VESTS_PRECISION,
};
use tracing::debug;

/// Decode a NAI asset into a plain number and its symbol
///
/// A malformed `amount` yields `NaN`; validating it is the caller's job.
pub fn decode_asset(asset: &RawAsset) -> DecodedAsset {
    let raw = asset.amount.trim().parse::<f64>().unwrap_or(f64::NAN);
    DecodedAsset {
        amount: raw / 10f64.powi(asset.precision as i32),
        symbol: asset.symbol(),
    }
}

/// Value of `owned_shares` in the backing unit, e.g. VESTS to HIVE power
///
/// `owned / total_shares * total_backing_value`. A zero or NaN share
/// total returns 0 instead of dividing.
pub fn shares_to_value(
    owned_shares: &RawAsset,
    total_shares: &RawAsset,
    total_backing_value: &RawAsset,
) -> f64 {
    let owned = decode_asset(owned_shares).amount;
    let total = decode_asset(total_shares).amount;
    let backing = decode_asset(total_backing_value).amount;

    if total == 0.0 || total.is_nan() {
        debug!("Share total is {}, valuing {} shares at 0", total, owned_shares.amount);
        return 0.0;
    }

    owned / total * backing
}

/// Value of staked shares in the liquid unit, using fetched network totals
///
/// Returns 0 when either total cannot be read.
pub fn vests_to_hive(owned_shares: &RawAsset, props: &DynamicGlobalProperties) -> f64 {
    match (props.total_vesting_shares.to_raw(), props.total_vesting_fund_hive.to_raw()) {
        (Ok(total_shares), Ok(total_fund)) => {
            shares_to_value(owned_shares, &total_shares, &total_fund)
        }
        (Err(e), _) | (_, Err(e)) => {
            debug!("Unreadable global totals: {}", e);
            0.0
        }
    }
}

/// Render a decoded asset the way the condenser API does, e.g. `"1.234 HIVE"`
pub fn format_asset(asset: &DecodedAsset, decimals: usize) -> String {
    format!("{:.*} {}", decimals, asset.amount, asset.symbol)
}

/// Effective vesting shares backing an account's voting power, in raw VESTS units
///
/// Own shares plus received delegations, minus outgoing delegations and the
/// pending power-down installment. Saturates at zero.
pub fn effective_vesting_shares(account: &AccountManaFields) -> u128 {
    let vesting = vests_units(&account.vesting_shares);
    let received = vests_units(&account.received_vesting_shares);
    let delegated = vests_units(&account.delegated_vesting_shares);
    let withdraw_rate = account
        .vesting_withdraw_rate
        .as_ref()
        .map(vests_units)
        .unwrap_or(0);

    let own = vesting.saturating_sub(delegated);
    let withdrawing = withdraw_rate.min(own);

    own.saturating_add(received).saturating_sub(withdrawing)
}

/// Ceiling of the voting manabar
pub fn max_voting_mana(account: &AccountManaFields) -> u128 {
    effective_vesting_shares(account)
}

/// Ceiling of the downvote manabar, a quarter of the voting pool
pub fn max_downvote_mana(account: &AccountManaFields) -> u128 {
    max_voting_mana(account) / DOWNVOTE_POOL_DIVISOR
}

/// A VESTS field rescaled to 6-decimal raw units; anything unreadable counts as 0
fn vests_units(field: &AssetField) -> u128 {
    let asset = match field.to_raw() {
        Ok(asset) => asset,
        Err(e) => {
            debug!("Ignoring unreadable vesting field: {}", e);
            return 0;
        }
    };

    if asset.symbol() != Symbol::Vests {
        debug!("Expected VESTS, got tag {}", asset.nai);
    }

    rescale(&asset.amount, asset.precision, VESTS_PRECISION).unwrap_or(0)
}

/// Move an integer amount from one fixed-point precision to another
fn rescale(amount: &str, from: u32, to: u32) -> Option<u128> {
    let units = amount.trim().parse::<u128>().ok()?;
    if to >= from {
        units.checked_mul(10u128.checked_pow(to - from)?)
    } else {
        Some(units / 10u128.checked_pow(from - to)?)
    }
}
