//! Best-first ordering of quoted trades.

use std::cmp::Ordering;

use alloy_primitives::U512;

use super::trade::Trade;

/// Order trades so the first element is the best for the caller.
///
/// Sorting is descending by execution price (output per unit input). For
/// exact-input quotes that maximises output; for exact-output quotes the
/// output is pinned, so it minimises the effective cost. The sort is stable:
/// equally priced trades keep their input order.
///
/// Prices are compared exactly on the raw amounts, so quotes of any
/// magnitude rank correctly regardless of [`Trade::execution_price`]
/// precision.
#[must_use]
pub fn sort_trades_by_execution_price(mut trades: Vec<Trade>) -> Vec<Trade> {
    trades.sort_by(|a, b| compare_execution_price(b, a));
    trades
}

/// Compare `a.out / a.in` with `b.out / b.in` in whole units by
/// cross-multiplying raw amounts.
///
/// A side whose decimals shift overflows 512 bits counts as larger.
fn compare_execution_price(a: &Trade, b: &Trade) -> Ordering {
    let decimals = |trade: &Trade| {
        (
            i32::from(trade.input_amount().currency().decimals()),
            i32::from(trade.output_amount().currency().decimals()),
        )
    };
    let (a_in_decimals, a_out_decimals) = decimals(a);
    let (b_in_decimals, b_out_decimals) = decimals(b);

    let left = U512::from(a.output_amount().raw()).checked_mul(U512::from(b.input_amount().raw()));
    let right = U512::from(b.output_amount().raw()).checked_mul(U512::from(a.input_amount().raw()));

    // a.out * b.in * 10^(a.in_dec + b.out_dec) vs b.out * a.in * 10^(b.in_dec + a.out_dec)
    let shift = (a_in_decimals + b_out_decimals) - (b_in_decimals + a_out_decimals);
    let scale = U512::from(10u8).checked_pow(U512::from(shift.unsigned_abs()));
    let scaled = |value: Option<U512>| value.zip(scale).and_then(|(value, scale)| value.checked_mul(scale));
    let (left, right) = match shift.cmp(&0) {
        Ordering::Greater => (scaled(left), right),
        Ordering::Less => (left, scaled(right)),
        Ordering::Equal => (left, right),
    };

    match (left, right) {
        (Some(left), Some(right)) => left.cmp(&right),
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
