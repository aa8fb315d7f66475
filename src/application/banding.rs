//! Marketable-limit price banding.
//!
//! A marketable limit crosses the touch by a small offset so it fills like a
//! market order, but is capped at a maximum slippage from mid so a thin or
//! gapping book cannot fill it anywhere.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{DomainError, Side};

/// Default offset through the touch, in basis points.
pub const DEFAULT_OFFSET_BPS: Decimal = dec!(8);
/// Default slippage cap from mid, in basis points.
pub const DEFAULT_MAX_SLIP_BPS: Decimal = dec!(40);

const BPS: Decimal = dec!(10000);

fn positive(value: Decimal) -> bool {
    value > Decimal::ZERO
}

/// Reference mid for `side`.
///
/// Uses the two-sided mid when both sides are quoted, otherwise the side
/// the order would trade against.
fn reference_mid(side: Side, bid: Decimal, ask: Decimal) -> Result<Decimal, DomainError> {
    if positive(bid) && positive(ask) {
        if bid > ask {
            return Err(DomainError::CrossedQuote { bid, ask });
        }
        return Ok((bid + ask) / dec!(2));
    }
    let touch = match side {
        Side::Buy => ask,
        Side::Sell => bid,
    };
    if positive(touch) {
        Ok(touch)
    } else {
        Err(DomainError::EmptyQuote { bid, ask })
    }
}

/// Marketable limit price for `side`, rounded to 4 dp.
///
/// BUY is `ask + band` capped at `mid * (1 + slip)`; SELL is `bid - band`
/// floored at `mid * (1 - slip)`, where `band = mid * offset_bps / 10000`.
pub fn marketable_limit(
    side: Side,
    bid: Decimal,
    ask: Decimal,
    offset_bps: Decimal,
    max_slip_bps: Decimal,
) -> Result<Decimal, DomainError> {
    let mid = reference_mid(side, bid, ask)?;
    let band = mid * offset_bps / BPS;
    let slip = max_slip_bps / BPS;
    let price = match side {
        Side::Buy => (ask + band).min(mid * (Decimal::ONE + slip)),
        Side::Sell => (bid - band).max(mid * (Decimal::ONE - slip)),
    };
    if !positive(price) {
        return Err(DomainError::NonPositivePrice { price });
    }
    Ok(price.round_dp(4))
}

/// One-line description of a banded order.
///
/// `SYM SIDE @ PX (mid=MID, band=+OFFSETbps, cap=CAPbps)`; the printed mid
/// is zero when either side is missing.
pub fn format_price_band(
    symbol: &str,
    side: Side,
    bid: Decimal,
    ask: Decimal,
    offset_bps: Decimal,
    max_slip_bps: Decimal,
) -> Result<String, DomainError> {
    let price = marketable_limit(side, bid, ask, offset_bps, max_slip_bps)?;
    let mid = if positive(bid) && positive(ask) {
        (bid + ask) / dec!(2)
    } else {
        Decimal::ZERO
    };
    Ok(format!(
        "{symbol} {side} @ {:.2} (mid={:.2}, band=+{offset_bps}bps, cap={max_slip_bps}bps)",
        price.round_dp(2),
        mid.round_dp(2),
    ))
}
