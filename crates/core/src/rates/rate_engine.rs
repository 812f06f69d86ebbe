//! Pure rate calculation.
//!
//! Computes the per-unit rate a client receives and the resulting converted
//! amount. All arithmetic stays in `Decimal`; the only rounding happens in
//! the `round_rate`/`round_amount` helpers applied to the final presented
//! figures, never to intermediate values.
//!
//! House perspective:
//! - house buys foreign (client sells):
//!   `rate = price * (1 - method_pct/100) - commission * (1 - discount_pct/100)`
//! - house sells foreign (client buys):
//!   `rate = price * (1 + method_pct/100) + commission * (1 - discount_pct/100)`

use rust_decimal::{Decimal, RoundingStrategy};

use super::rates_errors::RateError;
use crate::constants::{AMOUNT_DISPLAY_PRECISION, RATE_DISPLAY_PRECISION};

fn pct(value: Decimal) -> Decimal {
    value / Decimal::ONE_HUNDRED
}

/// Per-unit rate at which the house buys foreign currency from a client.
pub fn house_buy_rate(
    price: Decimal,
    commission_base: Decimal,
    method_commission_pct: Decimal,
    discount_pct: Decimal,
) -> Result<Decimal, RateError> {
    let rate = price * (Decimal::ONE - pct(method_commission_pct))
        - commission_base * (Decimal::ONE - pct(discount_pct));
    ensure_positive(rate)
}

/// Per-unit rate at which the house sells foreign currency to a client.
pub fn house_sell_rate(
    price: Decimal,
    commission_base: Decimal,
    method_commission_pct: Decimal,
    discount_pct: Decimal,
) -> Result<Decimal, RateError> {
    let rate = price * (Decimal::ONE + pct(method_commission_pct))
        + commission_base * (Decimal::ONE - pct(discount_pct));
    ensure_positive(rate)
}

/// Public (no client scope) variant of [`house_buy_rate`].
pub fn public_house_buy_rate(
    price: Decimal,
    commission_base: Decimal,
    method_commission_pct: Decimal,
) -> Result<Decimal, RateError> {
    house_buy_rate(price, commission_base, method_commission_pct, Decimal::ZERO)
}

/// Public (no client scope) variant of [`house_sell_rate`].
pub fn public_house_sell_rate(
    price: Decimal,
    commission_base: Decimal,
    method_commission_pct: Decimal,
) -> Result<Decimal, RateError> {
    house_sell_rate(price, commission_base, method_commission_pct, Decimal::ZERO)
}

/// Converted amount when the house buys: the client delivers foreign cash and
/// receives base currency.
pub fn convert_for_house_buy(origin_amount: Decimal, applied_rate: Decimal) -> Decimal {
    origin_amount * applied_rate
}

/// Converted amount when the house sells: the client pays base currency and
/// receives foreign cash. The rate has already been checked positive, but a
/// caller-supplied rate is re-checked rather than letting the division blow up.
pub fn convert_for_house_sell(
    origin_amount: Decimal,
    applied_rate: Decimal,
) -> Result<Decimal, RateError> {
    ensure_positive(applied_rate)?;
    Ok(origin_amount / applied_rate)
}

/// Rounds a rate for presentation.
pub fn round_rate(rate: Decimal) -> Decimal {
    rate.round_dp_with_strategy(RATE_DISPLAY_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a monetary amount for presentation.
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        AMOUNT_DISPLAY_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

fn ensure_positive(rate: Decimal) -> Result<Decimal, RateError> {
    if rate <= Decimal::ZERO {
        return Err(RateError::InvalidRate(format!(
            "Computed rate is not positive: {}",
            rate
        )));
    }
    Ok(rate)
}
